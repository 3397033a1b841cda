//! Batch orchestrator - windowed fan-out over the domain list
//!
//! Domains are split into consecutive windows in input order. All domains
//! of a window are launched together and the whole window is joined before
//! the next one starts, which caps the number of simultaneous outbound
//! connections. Within a window, lines are written in completion order.
//!
//! Per-domain failures never escape: they become an empty URL field.

use crate::fetch::{Fetcher, SiteResolver};
use crate::html::extract_image_tags;
use crate::logo::pick_logo;
use crate::output::{BatchSummary, CsvWriter, Outcome, OutputRecord};
use crate::url::to_absolute;
use crate::LogoError;
use std::io::Write;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;

/// Runs the full pipeline for one domain
///
/// Resolve the homepage, extract image tags, pick the logo and make its
/// source absolute. Never fails; errors are folded into
/// [`Outcome::Failed`].
pub async fn process_domain(resolver: &SiteResolver, domain: &str) -> OutputRecord {
    let outcome = match find_logo(resolver, domain).await {
        Ok(Some(url)) => Outcome::Found(url),
        Ok(None) => Outcome::NotFound,
        Err(e) => {
            tracing::debug!("No logo for {:?}: {}", domain, e);
            Outcome::Failed(e.to_string())
        }
    };

    OutputRecord::new(domain, outcome)
}

async fn find_logo(resolver: &SiteResolver, domain: &str) -> Result<Option<String>, LogoError> {
    let page = resolver.resolve(domain).await?;
    let tags = extract_image_tags(&page.body);
    tracing::debug!(
        "{}: {} image tags on {}",
        domain,
        tags.len(),
        page.base_url
    );

    match pick_logo(&tags) {
        Some(src) => Ok(Some(to_absolute(&page.base_url, src)?)),
        None => Ok(None),
    }
}

/// Drives domains through fixed-size concurrent windows
pub struct Orchestrator {
    resolver: SiteResolver,
    window_size: usize,
}

impl Orchestrator {
    /// Creates an orchestrator; a window size of zero is treated as one
    pub fn new(resolver: SiteResolver, window_size: usize) -> Self {
        Self {
            resolver,
            window_size: window_size.max(1),
        }
    }

    /// Processes every domain, writing exactly one record per domain
    ///
    /// # Returns
    ///
    /// * `Ok(BatchSummary)` - Outcome counts for the run
    /// * `Err(LogoError::Io)` - The output sink failed
    pub async fn run<W: Write>(
        &self,
        domains: &[String],
        writer: &mut CsvWriter<W>,
    ) -> Result<BatchSummary, LogoError> {
        let start_time = Instant::now();
        let mut summary = BatchSummary::default();

        for (index, window) in domains.chunks(self.window_size).enumerate() {
            tracing::debug!("Starting window {} ({} domains)", index + 1, window.len());
            self.run_window(window, writer, &mut summary).await?;
            summary.windows += 1;

            tracing::info!(
                "Progress: {}/{} domains, {} logos found",
                summary.total,
                domains.len(),
                summary.found
            );
        }

        summary.log(start_time.elapsed());
        Ok(summary)
    }

    async fn run_window<W: Write>(
        &self,
        window: &[String],
        writer: &mut CsvWriter<W>,
        summary: &mut BatchSummary,
    ) -> Result<(), LogoError> {
        let mut tasks = JoinSet::new();
        for (slot, domain) in window.iter().enumerate() {
            let resolver = self.resolver.clone();
            let domain = domain.clone();
            tasks.spawn(async move { (slot, process_domain(&resolver, &domain).await) });
        }

        let mut emitted = vec![false; window.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((slot, record)) => {
                    emitted[slot] = true;
                    writer.write_record(&record)?;
                    summary.record(&record);
                }
                Err(e) => tracing::error!("Domain task did not complete: {}", e),
            }
        }

        // Tasks that panicked still owe their domain a line
        for (domain, _) in window.iter().zip(&emitted).filter(|(_, done)| !**done) {
            let record = OutputRecord::new(
                domain.as_str(),
                Outcome::Failed("task aborted".to_string()),
            );
            writer.write_record(&record)?;
            summary.record(&record);
        }

        Ok(())
    }
}

/// Processes `domains` with `fetcher`, writing CSV lines to `sink`
///
/// # Example
///
/// ```no_run
/// use logo_scout::config::FetcherConfig;
/// use logo_scout::{run_batch, HttpFetcher};
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = Arc::new(HttpFetcher::new(&FetcherConfig::default())?);
/// let domains = vec!["example.com".to_string()];
/// run_batch(fetcher, &domains, 20, std::io::stdout()).await?;
/// # Ok(())
/// # }
/// ```
pub async fn run_batch<W: Write>(
    fetcher: Arc<dyn Fetcher>,
    domains: &[String],
    window_size: usize,
    sink: W,
) -> Result<BatchSummary, LogoError> {
    let orchestrator = Orchestrator::new(SiteResolver::new(fetcher), window_size);
    let mut writer = CsvWriter::new(sink);
    orchestrator.run(domains, &mut writer).await
}

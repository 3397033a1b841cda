/// How processing a single domain ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A logo was found; holds its absolute URL
    Found(String),

    /// The homepage was fetched but no image tag yielded a usable source
    NotFound,

    /// The homepage could not be fetched or the source could not be resolved
    Failed(String),
}

/// Result line for one input domain
///
/// Exactly one record is emitted per input line, whatever the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    /// The input line, verbatim
    pub domain: String,

    /// What happened while processing it
    pub outcome: Outcome,
}

impl OutputRecord {
    pub fn new(domain: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            domain: domain.into(),
            outcome,
        }
    }

    /// Returns the absolute logo URL, if one was found
    pub fn logo_url(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Found(url) => Some(url.as_str()),
            Outcome::NotFound | Outcome::Failed(_) => None,
        }
    }

    /// Renders the record as `domain,url` (empty second field when absent)
    ///
    /// Fields are written verbatim, without CSV quoting.
    pub fn to_csv_line(&self) -> String {
        format!("{},{}", self.domain, self.logo_url().unwrap_or_default())
    }
}

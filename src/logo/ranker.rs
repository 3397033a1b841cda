use crate::html::{extract_attribute, has_attribute};

/// Substring that marks a tag as logo-like
const LOGO_MARKER: &str = "logo";

/// An image tag together with its heuristic score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedTag<'a> {
    /// The raw tag markup
    pub tag: &'a str,

    /// Score in `0..=2`; higher is more logo-like
    pub rank: u32,
}

/// Scores a single image tag
///
/// One point if the tag text contains `logo`, one point if it carries an
/// `alt=` attribute. Both signals are case-sensitive.
pub fn score_tag(tag: &str) -> u32 {
    let mut rank = 0;
    if tag.contains(LOGO_MARKER) {
        rank += 1;
    }
    if has_attribute(tag, "alt") {
        rank += 1;
    }
    rank
}

/// Scores every tag, preserving document order
pub fn rank_tags<'a>(tags: &[&'a str]) -> Vec<RankedTag<'a>> {
    tags.iter()
        .map(|&tag| RankedTag {
            tag,
            rank: score_tag(tag),
        })
        .collect()
}

/// Returns the first tag achieving the maximum score
///
/// Only a strictly greater score replaces the current best, so ties go to
/// the tag that appears earliest in the document.
pub fn best_tag<'a>(tags: &[&'a str]) -> Option<&'a str> {
    let ranked = rank_tags(tags);
    tracing::trace!("Tag ranks: {:?}", ranked);

    let mut best: Option<RankedTag<'a>> = None;
    for candidate in ranked {
        if best.map_or(true, |current| candidate.rank > current.rank) {
            best = Some(candidate);
        }
    }

    best.map(|winner| {
        tracing::trace!("Best tag (rank {}): {}", winner.rank, winner.tag);
        winner.tag
    })
}

/// Picks the logo URL from a page's image tags
///
/// Returns the raw `src` value of the [`best_tag`], or `None` when there
/// are no tags or the winner has no `src`.
///
/// # Examples
///
/// ```
/// use logo_scout::logo::pick_logo;
///
/// let tags = [r#"<img src="/banner.jpg">"#, r#"<img src="/brand.svg" alt="Acme">"#];
/// assert_eq!(pick_logo(&tags), Some("/brand.svg"));
/// assert_eq!(pick_logo(&[]), None);
/// ```
pub fn pick_logo<'a>(tags: &[&'a str]) -> Option<&'a str> {
    best_tag(tags).and_then(|tag| extract_attribute(tag, "src"))
}

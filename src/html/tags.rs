/// Opening of an image element
const IMG_OPEN: &str = "<img";

/// Extracts every `<img ...>` substring from `html`, in document order
///
/// A tag runs from `<img` to the next `>`. Matches never overlap, and a
/// trailing `<img` with no closing `>` is not a tag. The tag name is matched
/// case-sensitively.
///
/// # Examples
///
/// ```
/// use logo_scout::html::extract_image_tags;
///
/// let tags = extract_image_tags(r#"<p><img src="a.png"><IMG src="b.png"></p>"#);
/// assert_eq!(tags, vec![r#"<img src="a.png">"#]);
/// ```
pub fn extract_image_tags(html: &str) -> Vec<&str> {
    let mut tags = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = html[cursor..].find(IMG_OPEN) {
        let start = cursor + offset;
        let Some(len) = html[start..].find('>') else {
            break;
        };
        let end = start + len + 1;
        tags.push(&html[start..end]);
        cursor = end;
    }

    tags
}

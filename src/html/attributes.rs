/// Extracts the value of a double-quoted attribute from an image tag
///
/// Looks for `name="value"` with the attribute name matched ASCII
/// case-insensitively and returns `value` verbatim (no entity decoding).
/// Empty values are skipped in favour of a later non-empty occurrence.
///
/// The match is lexical: `data-src="..."` also satisfies a lookup for `src`
/// when it appears first.
///
/// # Examples
///
/// ```
/// use logo_scout::html::extract_attribute;
///
/// let tag = r#"<img SRC="/logo.png?a=1&amp;b=2" alt="">"#;
/// assert_eq!(extract_attribute(tag, "src"), Some("/logo.png?a=1&amp;b=2"));
/// assert_eq!(extract_attribute(tag, "title"), None);
/// ```
pub fn extract_attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("{}=\"", name.to_ascii_lowercase());
    // ASCII lowercasing keeps byte offsets aligned with `tag`
    let haystack = tag.to_ascii_lowercase();
    let mut cursor = 0;

    while let Some(offset) = haystack[cursor..].find(&needle) {
        let value_start = cursor + offset + needle.len();
        match tag[value_start..].find('"') {
            Some(0) => cursor = value_start,
            Some(len) => return Some(&tag[value_start..value_start + len]),
            None => return None,
        }
    }

    None
}

/// Returns true if the tag contains a `name=` attribute marker
///
/// The marker is matched case-sensitively. The value and its quoting are
/// ignored, so `alt=""` and `alt=logo` both count as present.
pub fn has_attribute(tag: &str, name: &str) -> bool {
    tag.contains(&format!("{}=", name))
}

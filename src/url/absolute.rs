use crate::UrlError;

/// Converts a possibly-relative image source into an absolute URL
///
/// Rules, first match wins:
/// 1. `url` starts with `http://` or `https://` → returned unchanged.
/// 2. `url` starts with `//` → prefixed with the scheme of `base_url`
///    (the text before its first `://`).
/// 3. Anything else → `base_url + url`, plain concatenation.
///
/// Rule 3 performs no path normalization: `..` segments and doubled slashes
/// are kept as-is. Callers pass a base that ends in `/`.
///
/// # Errors
///
/// Returns [`UrlError::MalformedBase`] when rule 2 applies and `base_url`
/// has no `scheme://` prefix.
///
/// # Examples
///
/// ```
/// use logo_scout::url::to_absolute;
///
/// assert_eq!(
///     to_absolute("https://example.com/", "//cdn.example.com/x.png").unwrap(),
///     "https://cdn.example.com/x.png"
/// );
/// assert_eq!(
///     to_absolute("https://example.com/", "/img/logo.png").unwrap(),
///     "https://example.com//img/logo.png"
/// );
/// ```
pub fn to_absolute(base_url: &str, url: &str) -> Result<String, UrlError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        return Ok(url.to_string());
    }

    if url.starts_with("//") {
        let scheme = base_scheme(base_url)
            .ok_or_else(|| UrlError::MalformedBase(base_url.to_string()))?;
        return Ok(format!("{}:{}", scheme, url));
    }

    Ok(format!("{}{}", base_url, url))
}

/// Returns the non-empty, colon-free text preceding a leading `scheme://`
fn base_scheme(base_url: &str) -> Option<&str> {
    let colon = base_url.find(':')?;
    if colon == 0 || !base_url[colon..].starts_with("://") {
        return None;
    }
    Some(&base_url[..colon])
}

use url::{Position, Url};

/// Derives the base URL used to resolve relative image sources
///
/// The base is the `scheme://host[:port]/path` prefix of the final URL
/// reported by the transport. Query and fragment are dropped on purpose,
/// unlike a request-path base which would keep `?query` and glue relative
/// sources after it. When the
/// transport reports no final URL, or it does not parse, the requested URL
/// is used verbatim.
///
/// # Examples
///
/// ```
/// use logo_scout::url::effective_base_url;
///
/// assert_eq!(
///     effective_base_url("https://example.com/", Some("https://www.example.com/home?lang=en")),
///     "https://www.example.com/home"
/// );
/// assert_eq!(effective_base_url("http://example.com/", None), "http://example.com/");
/// ```
pub fn effective_base_url(requested: &str, final_url: Option<&str>) -> String {
    final_url
        .and_then(|raw| Url::parse(raw).ok())
        .map(|url| url[..Position::AfterPath].to_string())
        .unwrap_or_else(|| requested.to_string())
}

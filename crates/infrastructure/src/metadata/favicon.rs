/// Turns a `<link href>` into an absolute favicon URL relative to `page_url`.
///
/// - anything starting with `http` is kept as is (`httpfoo` included)
/// - `/path` is appended to the page URL cut at the first `/` at or after
///   byte 8, i.e. just past `https://`
/// - anything else is appended to the full page URL after a `/`
pub fn absolutize_favicon(href: &str, page_url: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else if href.starts_with('/') {
        format!("{}{}", base_url(page_url), href)
    } else {
        format!("{}/{}", page_url, href)
    }
}

/// Without a `/` past byte 8 the whole URL is the base.
fn base_url(page_url: &str) -> &str {
    match page_url.get(8..).and_then(|rest| rest.find('/')) {
        Some(idx) => &page_url[..8 + idx],
        None => page_url,
    }
}

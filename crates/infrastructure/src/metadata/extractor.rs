use super::favicon::absolutize_favicon;
use brighella_domain::PageMetadata;
use scraper::Html;

const ICON_RELS: [&str; 2] = ["icon", "shortcut icon"];

/// Recovers title and favicon from an HTML document fetched from `page_url`.
///
/// The tree is walked depth-first in document order. The first `<title>`
/// whose first child is text sets the title. Every `<link>` whose `rel` is
/// exactly `icon` or `shortcut icon` replaces the favicon candidate, so the
/// last one wins. Without any such link `default_favicon` is returned.
pub fn extract_metadata(html: &str, page_url: &str, default_favicon: &str) -> PageMetadata {
    let document = Html::parse_document(html);

    let mut title: Option<String> = None;
    let mut favicon: Option<String> = None;

    for node in document.tree.root().descendants() {
        let Some(element) = node.value().as_element() else {
            continue;
        };

        match element.name() {
            "title" if title.is_none() => {
                if let Some(text) = node.first_child().and_then(|c| c.value().as_text()) {
                    title = Some((&**text).to_owned());
                }
            }
            "link" => {
                let rel = element.attr("rel").unwrap_or_default();
                if ICON_RELS.contains(&rel) {
                    let href = element.attr("href").unwrap_or_default();
                    favicon = Some(absolutize_favicon(href, page_url));
                }
            }
            _ => {}
        }
    }

    PageMetadata {
        title: title.unwrap_or_default(),
        favicon: favicon.unwrap_or_else(|| default_favicon.to_string()),
    }
}

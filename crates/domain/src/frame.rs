use serde::Serialize;

/// Everything the renderer needs to build the masking page.
///
/// Title and favicon are never empty: the only constructor is
/// [`Metadata::into_frame`], which fills gaps from [`FrameDefaults`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub src: String,
    pub title: String,
    pub favicon: String,
}

/// Title and favicon recovered from the target page.
///
/// `title` may be empty when the page has no usable `<title>`. `favicon` is
/// always set, falling back to the extractor's own default glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub favicon: String,
}

/// Last-resort values for the metadata chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameDefaults {
    pub title: String,
    pub favicon: String,
}

/// Partially resolved metadata while walking the fallback tiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub title: Option<String>,
    pub favicon: Option<String>,
}

impl Metadata {
    pub fn is_complete(&self) -> bool {
        self.title.is_some() && self.favicon.is_some()
    }

    pub fn set_title_if_missing(&mut self, title: impl Into<String>) {
        if self.title.is_none() {
            self.title = non_empty(title.into());
        }
    }

    pub fn set_favicon_if_missing(&mut self, favicon: impl Into<String>) {
        if self.favicon.is_none() {
            self.favicon = non_empty(favicon.into());
        }
    }

    pub fn into_frame(self, src: impl Into<String>, defaults: &FrameDefaults) -> Frame {
        Frame {
            src: src.into(),
            title: self.title.unwrap_or_else(|| defaults.title.clone()),
            favicon: self.favicon.unwrap_or_else(|| defaults.favicon.clone()),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

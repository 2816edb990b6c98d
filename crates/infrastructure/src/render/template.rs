use async_trait::async_trait;
use brighella_application::ports::FrameRenderer;
use brighella_domain::{DomainError, Frame};
use minijinja::{AutoEscape, Environment};
use std::path::PathBuf;
use tracing::error;

/// Renders the masking page from a template file.
///
/// The file is read and compiled on every call, so edits show up without a
/// restart. The template sees `src`, `title` and `favicon`, HTML-escaped.
pub struct TemplateFrameRenderer {
    path: PathBuf,
}

impl TemplateFrameRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn render_source(&self, source: &str, frame: &Frame) -> Result<String, minijinja::Error> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);

        let name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("redirect.tmpl");

        let template = env.template_from_named_str(name, source)?;
        template.render(frame)
    }
}

#[async_trait]
impl FrameRenderer for TemplateFrameRenderer {
    async fn render(&self, frame: &Frame) -> Result<String, DomainError> {
        let source = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            error!(path = %self.path.display(), error = %e, "Failed to read template");
            DomainError::TemplateRender(format!("{}: {}", self.path.display(), e))
        })?;

        self.render_source(&source, frame).map_err(|e| {
            error!(path = %self.path.display(), error = %e, "Failed to render template");
            DomainError::TemplateRender(e.to_string())
        })
    }
}

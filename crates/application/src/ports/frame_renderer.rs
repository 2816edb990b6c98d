use async_trait::async_trait;
use brighella_domain::{DomainError, Frame};

#[async_trait]
pub trait FrameRenderer: Send + Sync {
    /// Produces the masking HTML document for `frame`.
    async fn render(&self, frame: &Frame) -> Result<String, DomainError>;
}

use super::{ResolveMetadataUseCase, ResolveRedirectTargetUseCase};
use brighella_domain::{DomainError, Frame};
use std::sync::Arc;

/// Full per-request pipeline: redirect target, then metadata.
pub struct BuildFrameUseCase {
    resolve_target: Arc<ResolveRedirectTargetUseCase>,
    resolve_metadata: Arc<ResolveMetadataUseCase>,
}

impl BuildFrameUseCase {
    pub fn new(
        resolve_target: Arc<ResolveRedirectTargetUseCase>,
        resolve_metadata: Arc<ResolveMetadataUseCase>,
    ) -> Self {
        Self {
            resolve_target,
            resolve_metadata,
        }
    }

    /// Fails only when the redirect target cannot be resolved.
    pub async fn execute(&self, host: &str) -> Result<Frame, DomainError> {
        let target = self.resolve_target.execute(host).await?;
        Ok(self.resolve_metadata.execute(host, &target).await)
    }
}

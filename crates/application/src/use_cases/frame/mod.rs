pub mod build_frame;
pub mod resolve_metadata;
pub mod resolve_target;

pub use build_frame::BuildFrameUseCase;
pub use resolve_metadata::ResolveMetadataUseCase;
pub use resolve_target::ResolveRedirectTargetUseCase;

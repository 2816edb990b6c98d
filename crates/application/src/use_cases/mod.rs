pub mod frame;

pub use frame::{BuildFrameUseCase, ResolveMetadataUseCase, ResolveRedirectTargetUseCase};

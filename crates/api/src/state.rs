use brighella_application::ports::FrameRenderer;
use brighella_application::use_cases::BuildFrameUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub build_frame: Arc<BuildFrameUseCase>,
    pub renderer: Arc<dyn FrameRenderer>,
}

use super::Adapters;
use brighella_application::use_cases::{
    BuildFrameUseCase, ResolveMetadataUseCase, ResolveRedirectTargetUseCase,
};
use brighella_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub build_frame: Arc<BuildFrameUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, adapters: &Adapters) -> Self {
        let dns = Arc::new(config.dns.clone());

        let resolve_target = Arc::new(ResolveRedirectTargetUseCase::new(
            adapters.txt_lookup.clone(),
            dns.clone(),
        ));
        let resolve_metadata = Arc::new(ResolveMetadataUseCase::new(
            adapters.txt_lookup.clone(),
            adapters.page_fetcher.clone(),
            dns,
            config.frame.defaults(),
        ));

        Self {
            build_frame: Arc::new(BuildFrameUseCase::new(resolve_target, resolve_metadata)),
        }
    }
}

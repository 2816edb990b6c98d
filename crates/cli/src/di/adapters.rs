use brighella_application::ports::{FrameRenderer, PageMetadataFetcher, TxtLookup};
use brighella_domain::Config;
use brighella_infrastructure::dns::HickoryTxtLookup;
use brighella_infrastructure::metadata::HttpPageMetadataFetcher;
use brighella_infrastructure::render::TemplateFrameRenderer;
use std::sync::Arc;

pub struct Adapters {
    pub txt_lookup: Arc<dyn TxtLookup>,
    pub page_fetcher: Arc<dyn PageMetadataFetcher>,
    pub renderer: Arc<dyn FrameRenderer>,
}

impl Adapters {
    pub fn new(config: &Config) -> Self {
        Self {
            txt_lookup: Arc::new(HickoryTxtLookup::from_millis(config.dns.timeout_ms)),
            page_fetcher: Arc::new(HttpPageMetadataFetcher::new(
                config.frame.scraped_favicon.clone(),
            )),
            renderer: Arc::new(TemplateFrameRenderer::new(&config.template.path)),
        }
    }
}

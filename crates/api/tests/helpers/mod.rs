#![allow(dead_code)]

use async_trait::async_trait;
use brighella_api::AppState;
use brighella_application::ports::{FrameRenderer, PageMetadataFetcher, TxtLookup};
use brighella_application::use_cases::{
    BuildFrameUseCase, ResolveMetadataUseCase, ResolveRedirectTargetUseCase,
};
use brighella_domain::config::{DnsConfig, FrameConfig};
use brighella_domain::{DomainError, Frame, PageMetadata, TxtRecordQuery};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// ============================================================================
// Mock ports
// ============================================================================

#[derive(Default)]
pub struct StaticTxtLookup {
    records: HashMap<String, String>,
    calls: AtomicUsize,
    seen: std::sync::Mutex<Vec<String>>,
}

impl StaticTxtLookup {
    pub fn with_records(records: &[(&str, &str)]) -> Self {
        Self {
            records: records
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl TxtLookup for StaticTxtLookup {
    async fn lookup_txt(&self, query: &TxtRecordQuery) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(query.record_name.to_string());

        self.records
            .get(query.record_name.as_ref())
            .cloned()
            .ok_or_else(|| DomainError::TxtRecordNotFound(query.record_name.to_string()))
    }
}

#[derive(Default)]
pub struct StaticPageFetcher {
    page: Option<PageMetadata>,
    calls: AtomicUsize,
}

impl StaticPageFetcher {
    pub fn serving(title: &str, favicon: &str) -> Self {
        Self {
            page: Some(PageMetadata {
                title: title.to_string(),
                favicon: favicon.to_string(),
            }),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn unreachable() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageMetadataFetcher for StaticPageFetcher {
    async fn fetch_metadata(&self, url: &str) -> Result<PageMetadata, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.page
            .clone()
            .ok_or_else(|| DomainError::PageFetch(format!("failed to fetch page: {url}")))
    }
}

/// Renders `title|favicon|src`, or fails like a missing template file.
pub struct PipeRenderer {
    pub fail: bool,
}

#[async_trait]
impl FrameRenderer for PipeRenderer {
    async fn render(&self, frame: &Frame) -> Result<String, DomainError> {
        if self.fail {
            return Err(DomainError::TemplateRender(
                "redirect.tmpl: No such file or directory".to_string(),
            ));
        }
        Ok(format!("{}|{}|{}", frame.title, frame.favicon, frame.src))
    }
}

// ============================================================================
// State builder
// ============================================================================

pub fn app_state(
    lookup: Arc<StaticTxtLookup>,
    fetcher: Arc<StaticPageFetcher>,
    renderer: PipeRenderer,
) -> AppState {
    let dns = Arc::new(DnsConfig::default());

    let resolve_target = Arc::new(ResolveRedirectTargetUseCase::new(
        lookup.clone(),
        dns.clone(),
    ));
    let resolve_metadata = Arc::new(ResolveMetadataUseCase::new(
        lookup,
        fetcher,
        dns,
        FrameConfig::default().defaults(),
    ));

    AppState {
        build_frame: Arc::new(BuildFrameUseCase::new(resolve_target, resolve_metadata)),
        renderer: Arc::new(renderer),
    }
}

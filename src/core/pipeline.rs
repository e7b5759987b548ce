use crate::config::Config;
use crate::core::{
    EncodedLink, ExtractorEngine, MediaKind, PipelineError, ResolvedItem, ResultSummary, Resolver,
    SelectionState,
};
use crate::extractors::{classify, AnchorLinkExtractor, HttpResolver, SizeProber};
use crate::utils::extract_title;
use anyhow::Result;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Search page → encoded links → resolved, classified, probed items → summary.
pub struct MediaPipeline {
    client: reqwest::Client,
    search_endpoint: String,
    default_title: String,
    concurrent_resolutions: usize,
    engine: ExtractorEngine,
    resolver: Arc<dyn Resolver>,
    prober: SizeProber,
}

impl MediaPipeline {
    pub fn new(config: &Config) -> Result<Self> {
        let client = config.http_client()?;

        let mut engine = ExtractorEngine::new();
        engine.register_extractor(Box::new(AnchorLinkExtractor));

        Ok(Self {
            resolver: Arc::new(HttpResolver::new(client.clone(), &config.decrypt_endpoint)),
            prober: SizeProber::new(client.clone()),
            client,
            search_endpoint: config.search_endpoint.clone(),
            default_title: config.default_title.clone(),
            concurrent_resolutions: config.concurrent_resolutions.max(1),
            engine,
        })
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn Resolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_engine(mut self, engine: ExtractorEngine) -> Self {
        self.engine = engine;
        self
    }

    pub async fn process(&self, video_url: &str) -> Result<ResultSummary, PipelineError> {
        let html = self.fetch_search_page(video_url).await?;
        let title = extract_title(&html).unwrap_or_else(|| self.default_title.clone());

        let links = self.engine.extract(&html);
        if links.is_empty() {
            info!("No download links found for {}", video_url);
            return Err(PipelineError::NoLinks);
        }

        // `buffered` yields in input order, so selection sees discovery order.
        let resolved: Vec<Option<ResolvedItem>> = stream::iter(links)
            .map(|link| self.resolve_link(link))
            .buffered(self.concurrent_resolutions)
            .collect()
            .await;

        let mut state = SelectionState::new();
        for item in resolved.into_iter().flatten() {
            state.observe(item);
        }

        let summary = state.into_summary(&title, video_url);
        info!("Resolved {} formats for {}", summary.formats, video_url);
        Ok(summary)
    }

    /// Resolves one already extracted token.
    pub async fn resolve_direct(&self, token: &str) -> Option<String> {
        self.resolver.resolve(token).await
    }

    async fn fetch_search_page(&self, video_url: &str) -> Result<String, PipelineError> {
        let response = self
            .client
            .get(&self.search_endpoint)
            .query(&[("url", video_url)])
            .send()
            .await?;

        if !response.status().is_success() {
            warn!("Search page returned HTTP {}", response.status());
        }

        Ok(response.text().await?)
    }

    async fn resolve_link(&self, link: EncodedLink) -> Option<ResolvedItem> {
        let url = self.resolver.resolve(&link.token).await?;
        let class = classify(&link.context);
        debug!("Token {} -> {:?} {}", link.token, class.kind, class.quality);

        let item = match class.kind {
            MediaKind::Audio => ResolvedItem::audio(url, class.quality),
            MediaKind::Video => {
                let size = self.prober.probe(&url).await;
                ResolvedItem {
                    watermark_free: class.watermark_free,
                    ..ResolvedItem::video(url, class.quality, size)
                }
            }
        };

        Some(item)
    }
}

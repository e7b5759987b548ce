use crate::core::Resolver;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Resolves tokens through the external decrypt endpoint.
pub struct HttpResolver {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpResolver {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    async fn fetch(&self, token: &str) -> reqwest::Result<String> {
        self.client
            .get(&self.endpoint)
            .query(&[("url", token)])
            .send()
            .await?
            .text()
            .await
    }
}

#[async_trait]
impl Resolver for HttpResolver {
    async fn resolve(&self, token: &str) -> Option<String> {
        let body = match self.fetch(token).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Decrypt request failed for {}: {}", token, e);
                return None;
            }
        };

        let candidate = body.trim();
        if candidate.starts_with("http") {
            Some(candidate.to_string())
        } else {
            debug!("Decrypt returned non-URL body for {}", token);
            None
        }
    }
}

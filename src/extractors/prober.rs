use reqwest::header::{HeaderMap, CONTENT_LENGTH};
use tracing::debug;

/// Best-effort byte size lookup through a `HEAD` request.
pub struct SizeProber {
    client: reqwest::Client,
}

impl SizeProber {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Content length of `url`, or 0 when it cannot be determined.
    pub async fn probe(&self, url: &str) -> u64 {
        match self.client.head(url).send().await {
            Ok(response) => content_length(response.headers()),
            Err(e) => {
                debug!("Size probe failed for {}: {}", url, e);
                0
            }
        }
    }
}

/// Parsed `Content-Length`; missing or malformed values count as 0.
pub fn content_length(headers: &HeaderMap) -> u64 {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers_with(length: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_LENGTH, HeaderValue::from_static(length));
        headers
    }

    #[test]
    fn test_content_length() {
        assert_eq!(content_length(&headers_with("2048")), 2048);
        assert_eq!(content_length(&headers_with(" 17 ")), 17);
        assert_eq!(content_length(&headers_with("abc")), 0);
        assert_eq!(content_length(&headers_with("-5")), 0);
        assert_eq!(content_length(&HeaderMap::new()), 0);
    }

    #[tokio::test]
    async fn unreachable_host_probes_as_zero() {
        let prober = SizeProber::new(reqwest::Client::new());
        assert_eq!(prober.probe("http://127.0.0.1:1/clip.mp4").await, 0);
    }
}

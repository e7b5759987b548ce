use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Fixed credit fields attached to every JSON response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attribution {
    pub credit: String,
    pub dev: String,
}

impl Default for Attribution {
    fn default() -> Self {
        Self {
            credit: "full credit".to_string(),
            dev: "t.me/anshapi".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bind_address: String,
    pub port: u16,
    pub user_agent: String,
    /// Per outbound call, in seconds.
    pub timeout: u64,
    pub search_endpoint: String,
    pub decrypt_endpoint: String,
    pub default_title: String,
    pub concurrent_resolutions: usize,
    pub attribution: Attribution,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            user_agent: "Mozilla/5.0".to_string(),
            timeout: 10,
            search_endpoint: "https://www.videofk.com/search".to_string(),
            decrypt_endpoint: "https://downloader.twdown.online/load_url".to_string(),
            default_title: "media_download".to_string(),
            concurrent_resolutions: 1,
            attribution: Attribution::default(),
        }
    }
}

impl Config {
    /// Loads `path` as TOML, or the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))?
            }
            None => Self::default(),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        Url::parse(&self.search_endpoint).context("invalid search_endpoint")?;
        Url::parse(&self.decrypt_endpoint).context("invalid decrypt_endpoint")?;
        if self.concurrent_resolutions == 0 {
            anyhow::bail!("concurrent_resolutions must be at least 1");
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Shared client for every outbound call.
    pub fn http_client(&self) -> anyhow::Result<reqwest::Client> {
        reqwest::Client::builder()
            .user_agent(&self.user_agent)
            .timeout(self.timeout())
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .context("building HTTP client")
    }
}

use crate::config::Config;
use crate::server;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mediafk")]
#[command(about = "HTTP API that resolves aggregator download links into direct media URLs")]
#[command(version)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Timeout for each outbound request, in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Number of links resolved concurrently per request
    #[arg(short = 'j', long)]
    pub concurrent: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// File config with command line overrides applied.
    pub fn config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;

        if let Some(bind) = &self.bind {
            config.bind_address = bind.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        if let Some(concurrent) = self.concurrent {
            config.concurrent_resolutions = concurrent;
        }

        config.validate()?;
        Ok(config)
    }

    pub async fn run(&self) -> Result<()> {
        let config = self.config()?;
        server::serve(&config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from(["mediafk", "--port", "9999", "-j", "4", "--bind", "127.0.0.1"]);
        let config = cli.config().unwrap();
        assert_eq!(config.port, 9999);
        assert_eq!(config.concurrent_resolutions, 4);
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.timeout, 10);
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        let cli = Cli::parse_from(["mediafk", "-j", "0"]);
        assert!(cli.config().is_err());
    }
}

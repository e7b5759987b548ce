pub mod cli;
pub mod config;
pub mod core;
pub mod extractors;
pub mod server;
pub mod utils;

pub use crate::config::{Attribution, Config};
pub use crate::core::{ExtractorEngine, InfoSummary, MediaPipeline, ResolvedItem, ResultSummary};
pub use crate::extractors::AnchorLinkExtractor;

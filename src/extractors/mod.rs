pub mod anchor;
pub mod classifier;
pub mod prober;
pub mod resolver;

pub use anchor::AnchorLinkExtractor;
pub use classifier::{classify, quality_label, Classification};
pub use prober::SizeProber;
pub use resolver::HttpResolver;

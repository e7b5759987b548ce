pub mod error;
pub mod extractor;
pub mod metadata;
pub mod pipeline;
pub mod selector;

pub use error::PipelineError;
pub use extractor::{ExtractorEngine, LinkExtractor, Resolver};
pub use metadata::{
    AudioChoice, EncodedLink, InfoSummary, MediaKind, ResolvedItem, ResultSummary, VideoChoice,
};
pub use pipeline::MediaPipeline;
pub use selector::SelectionState;

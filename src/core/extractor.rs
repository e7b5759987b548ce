use crate::core::EncodedLink;
use async_trait::async_trait;

/// Strategy that finds encoded media references in a scraped page.
pub trait LinkExtractor: Send + Sync {
    fn name(&self) -> &'static str;
    /// Returns links in document order.
    fn extract(&self, html: &str) -> Vec<EncodedLink>;
}

/// Turns an encoded token into a direct media URL.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// `None` when the token could not be resolved to an `http` URL.
    async fn resolve(&self, token: &str) -> Option<String>;
}

pub struct ExtractorEngine {
    pub extractors: Vec<Box<dyn LinkExtractor>>,
}

impl ExtractorEngine {
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    pub fn register_extractor(&mut self, extractor: Box<dyn LinkExtractor>) {
        self.extractors.push(extractor);
    }

    /// Runs strategies in registration order; the first one that finds
    /// anything wins.
    pub fn extract(&self, html: &str) -> Vec<EncodedLink> {
        for extractor in &self.extractors {
            let links = extractor.extract(html);
            if !links.is_empty() {
                tracing::debug!("{} found {} links", extractor.name(), links.len());
                return links;
            }
        }

        Vec::new()
    }
}

impl Default for ExtractorEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str, Vec<EncodedLink>);

    impl LinkExtractor for Fixed {
        fn name(&self) -> &'static str {
            self.0
        }

        fn extract(&self, _html: &str) -> Vec<EncodedLink> {
            self.1.clone()
        }
    }

    fn link(token: &str) -> EncodedLink {
        EncodedLink {
            token: token.to_string(),
            context: String::new(),
        }
    }

    #[test]
    fn first_non_empty_strategy_wins() {
        let mut engine = ExtractorEngine::new();
        engine.register_extractor(Box::new(Fixed("empty", vec![])));
        engine.register_extractor(Box::new(Fixed("a", vec![link("1")])));
        engine.register_extractor(Box::new(Fixed("b", vec![link("2")])));

        assert_eq!(engine.extract(""), vec![link("1")]);
    }

    #[test]
    fn empty_engine_finds_nothing() {
        assert!(ExtractorEngine::new().extract("<a href=\"#url=x\">").is_empty());
    }
}

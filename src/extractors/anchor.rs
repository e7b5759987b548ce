use crate::core::{EncodedLink, LinkExtractor};
use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static ANCHOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)href="([^"]*#url=([^"]+))""#).expect("anchor regex is valid")
});

/// Finds `href="...#url=<token>"` anchors on aggregator result pages.
pub struct AnchorLinkExtractor;

impl LinkExtractor for AnchorLinkExtractor {
    fn name(&self) -> &'static str {
        "anchor"
    }

    fn extract(&self, html: &str) -> Vec<EncodedLink> {
        ANCHOR_PATTERN
            .captures_iter(html)
            .filter_map(|captures| {
                let href = captures.get(1)?;
                let token = captures.get(2)?;
                Some(EncodedLink {
                    token: token.as_str().to_string(),
                    context: href.as_str().to_lowercase(),
                })
            })
            .collect()
    }
}

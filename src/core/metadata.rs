use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An obfuscated media reference scraped from an aggregator page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedLink {
    /// Opaque token handed to the decrypt service.
    pub token: String,
    /// Lowercased href the token was found in, used for classification.
    pub context: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Video,
}

/// A successfully resolved media link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedItem {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    pub quality: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>, // videos only
    #[serde(skip)]
    pub watermark_free: bool,
}

impl ResolvedItem {
    pub fn audio(url: impl Into<String>, quality: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Audio,
            url: url.into(),
            quality: quality.into(),
            size: None,
            watermark_free: false,
        }
    }

    pub fn video(url: impl Into<String>, quality: impl Into<String>, size: u64) -> Self {
        Self {
            kind: MediaKind::Video,
            url: url.into(),
            quality: quality.into(),
            size: Some(size),
            watermark_free: false,
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.size.unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoChoice {
    pub url: String,
    pub size: u64,
    pub quality: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioChoice {
    pub url: String,
    pub bitrate: String,
    pub title: String,
}

/// Full result of one `/download` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub success: bool,
    pub title: String,
    pub original_url: String,
    pub formats: usize,
    pub media: Vec<ResolvedItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_no_watermark: Option<VideoChoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_best: Option<VideoChoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_best: Option<AudioChoice>,
}

impl ResultSummary {
    /// True for any resolved video, including ones with an unknown size.
    pub fn has_video(&self) -> bool {
        self.has_kind(MediaKind::Video)
    }

    pub fn has_audio(&self) -> bool {
        self.has_kind(MediaKind::Audio)
    }

    fn has_kind(&self, kind: MediaKind) -> bool {
        self.media.iter().any(|item| item.kind == kind)
    }
}

/// Flag summary served by `/info`, derived from a [`ResultSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoSummary {
    pub success: bool,
    pub title: String,
    pub formats: usize,
    pub has_video: bool,
    pub has_audio: bool,
    pub qualities: BTreeSet<String>,
}

impl From<&ResultSummary> for InfoSummary {
    fn from(summary: &ResultSummary) -> Self {
        Self {
            success: true,
            title: summary.title.clone(),
            formats: summary.formats,
            has_video: summary.has_video(),
            has_audio: summary.has_audio(),
            qualities: summary.media.iter().map(|m| m.quality.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_items_serialize_without_size() {
        let value = serde_json::to_value(ResolvedItem::audio("https://a/x.mp3", "128kbps")).unwrap();
        assert_eq!(value["type"], "audio");
        assert!(value.get("size").is_none());
        assert!(value.get("watermark_free").is_none());

        let value = serde_json::to_value(ResolvedItem::video("https://a/x.mp4", "720p", 0)).unwrap();
        assert_eq!(value["type"], "video");
        assert_eq!(value["size"], 0);
    }

    #[test]
    fn info_flags_follow_media_kinds() {
        let summary = ResultSummary {
            success: true,
            title: "clip".to_string(),
            original_url: "https://src".to_string(),
            formats: 3,
            media: vec![
                ResolvedItem::video("https://a/x.mp4", "720p", 0),
                ResolvedItem::audio("https://a/x.m4a", "128kbps"),
                ResolvedItem::audio("https://a/y.m4a", "128kbps"),
            ],
            video_no_watermark: None,
            video_best: None,
            audio_best: None,
        };

        let info = InfoSummary::from(&summary);
        assert!(info.has_video);
        assert!(info.has_audio);
        assert_eq!(info.formats, 3);
        assert_eq!(
            info.qualities.into_iter().collect::<Vec<_>>(),
            vec!["128kbps".to_string(), "720p".to_string()]
        );
    }
}

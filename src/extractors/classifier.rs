use crate::core::MediaKind;
use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static AUDIO_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)mp3|m4a|aac|kbps|audio").expect("audio regex is valid"));

#[allow(clippy::expect_used)]
static QUALITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+p|\d+kbps)").expect("quality regex is valid"));

#[allow(clippy::expect_used)]
static NO_WATERMARK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)no watermark|without water").expect("watermark regex is valid")
});

pub const UNKNOWN_QUALITY: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: MediaKind,
    pub quality: String,
    pub watermark_free: bool,
}

/// Classifies a link from the text around it.
pub fn classify(context: &str) -> Classification {
    let kind = if AUDIO_PATTERN.is_match(context) {
        MediaKind::Audio
    } else {
        MediaKind::Video
    };

    Classification {
        kind,
        quality: quality_label(context),
        watermark_free: kind == MediaKind::Video && NO_WATERMARK_PATTERN.is_match(context),
    }
}

/// First resolution (`720p`) or bitrate (`128kbps`) token, else `unknown`.
pub fn quality_label(context: &str) -> String {
    QUALITY_PATTERN
        .find(context)
        .map_or_else(|| UNKNOWN_QUALITY.to_string(), |m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_label() {
        assert_eq!(quality_label("720p"), "720p");
        assert_eq!(quality_label("128kbps"), "128kbps");
        assert_eq!(quality_label("/dl/clip.mp4#url=x"), "unknown");
        assert_eq!(quality_label("hd_1080p_60fps"), "1080p");
    }

    #[test]
    fn audio_keywords() {
        for context in ["song.mp3", "track.m4a", "aac stream", "128kbps", "audio only"] {
            assert_eq!(classify(context).kind, MediaKind::Audio, "{context}");
        }
        assert_eq!(classify("/dl/video_720p.mp4").kind, MediaKind::Video);
    }

    #[test]
    fn watermark_flag_is_video_only() {
        let video = classify("/dl/720p no watermark#url=x");
        assert_eq!(video.kind, MediaKind::Video);
        assert!(video.watermark_free);
        assert!(classify("download without watermark").watermark_free);

        let audio = classify("audio no watermark");
        assert_eq!(audio.kind, MediaKind::Audio);
        assert!(!audio.watermark_free);

        assert!(!classify("/dl/720p.mp4").watermark_free);
    }
}

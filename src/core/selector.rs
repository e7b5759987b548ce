use crate::core::{AudioChoice, MediaKind, ResolvedItem, ResultSummary, VideoChoice};

/// Running accumulator over the resolved items of one request.
///
/// Items must be observed in discovery order: the first audio item and the
/// last watermark-free video are both order dependent.
#[derive(Debug, Default)]
pub struct SelectionState {
    best_video: Option<ResolvedItem>,
    best_audio: Option<ResolvedItem>,
    no_watermark: Option<ResolvedItem>,
    items: Vec<ResolvedItem>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, item: ResolvedItem) {
        match item.kind {
            MediaKind::Audio => {
                if self.best_audio.is_none() {
                    self.best_audio = Some(item.clone());
                }
            }
            MediaKind::Video => {
                // Overwritten on every match, so the last one wins.
                if item.watermark_free {
                    self.no_watermark = Some(item.clone());
                }

                let current = self.best_video.as_ref().map_or(0, ResolvedItem::size_bytes);
                if item.size_bytes() > current {
                    self.best_video = Some(item.clone());
                }
            }
        }

        self.items.push(item);
    }

    pub fn items(&self) -> &[ResolvedItem] {
        &self.items
    }

    pub fn best_video(&self) -> Option<&ResolvedItem> {
        self.best_video.as_ref()
    }

    pub fn best_audio(&self) -> Option<&ResolvedItem> {
        self.best_audio.as_ref()
    }

    pub fn no_watermark(&self) -> Option<&ResolvedItem> {
        self.no_watermark.as_ref()
    }

    /// Builds the response. A watermark-free video takes the place of the
    /// size-based pick.
    pub fn into_summary(self, title: &str, original_url: &str) -> ResultSummary {
        let video = |item: ResolvedItem| VideoChoice {
            size: item.size_bytes(),
            url: item.url,
            quality: item.quality,
            title: title.to_string(),
        };

        let (video_no_watermark, video_best) = match self.no_watermark {
            Some(item) => (Some(video(item)), None),
            None => (None, self.best_video.map(video)),
        };

        ResultSummary {
            success: true,
            title: title.to_string(),
            original_url: original_url.to_string(),
            formats: self.items.len(),
            media: self.items,
            video_no_watermark,
            video_best,
            audio_best: self.best_audio.map(|item| AudioChoice {
                url: item.url,
                bitrate: item.quality,
                title: title.to_string(),
            }),
        }
    }
}

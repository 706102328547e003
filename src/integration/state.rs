use std::sync::Arc;

use crate::integration::upload::VideoResult;

/// Snapshot of what the viewer currently shows.
///
/// Snapshots are never mutated in place; each transition returns a new one
/// that is handed to whoever renders the next event.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    video: Option<Arc<VideoResult>>,
    loading: bool,
}

impl ViewState {
    pub fn video(&self) -> Option<&Arc<VideoResult>> {
        self.video.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// An upload started; the current video stays on screen.
    pub fn begin_upload(&self) -> Self {
        Self {
            video: self.video.clone(),
            loading: true,
        }
    }

    /// An upload finished with a new video.
    pub fn loaded(&self, video: Arc<VideoResult>) -> Self {
        Self {
            video: Some(video),
            loading: false,
        }
    }

    /// An upload failed; keep whatever was shown before.
    pub fn failed(&self) -> Self {
        Self {
            video: self.video.clone(),
            loading: false,
        }
    }
}

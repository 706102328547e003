//! Trait for services that upload a video and return its annotations.

use crate::error::OverlayError;
use crate::integration::upload::VideoResult;

/// Trait for upload/annotation backends.
///
/// Implement this to connect any transcoding and face detection service to
/// the overlay. Retries and transport concerns stay inside the
/// implementation.
///
/// # Example
///
/// ```ignore
/// use faceoverlay::{AnnotationSource, VideoResult, OverlayError};
///
/// struct HttpSource {
///     // Your client here
/// }
///
/// impl AnnotationSource for HttpSource {
///     type Error = OverlayError;
///
///     fn upload(&mut self) -> Result<VideoResult, Self::Error> {
///         let (status, body) = self.post("/api/videos")?;
///         VideoResult::from_response(status, &body)
///     }
/// }
/// ```
pub trait AnnotationSource {
    /// Error type for upload failures.
    type Error;

    /// Upload a video and return the playable URL and face annotations.
    fn upload(&mut self) -> Result<VideoResult, Self::Error>;
}

impl<F, E> AnnotationSource for F
where
    F: FnMut() -> Result<VideoResult, E>,
{
    type Error = E;

    fn upload(&mut self) -> Result<VideoResult, E> {
        self()
    }
}

/// Source that replays a captured service response.
#[derive(Debug, Clone)]
pub struct RecordedResponse {
    pub status: u16,
    pub body: String,
}

impl RecordedResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

impl AnnotationSource for RecordedResponse {
    type Error = OverlayError;

    fn upload(&mut self) -> Result<VideoResult, OverlayError> {
        VideoResult::from_response(self.status, &self.body)
    }
}

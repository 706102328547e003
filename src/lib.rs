//! Time-synchronized face-tracking overlays for video playback.
//!
//! An [`AnnotationIndex`] answers which normalized boxes are visible at a
//! playback time; an [`OverlayRenderer`] clears its [`DrawSurface`] and strokes
//! those boxes in the pixel space of the rendered video on every time change.

pub mod annotation;
pub mod error;
pub mod integration;
pub mod overlay;

pub use annotation::{AnnotationIndex, FaceDetectionAnnotation, IndexConfig, NormalizedBox};
pub use error::{OverlayError, Result};
pub use integration::{
    AnnotationSource, OverlayPipeline, PlaybackControl, PlaybackHost, PlaybackState, VideoResult,
    ViewState,
};
pub use overlay::{
    Color, DrawSurface, OverlayConfig, OverlayRenderer, Rect, RecordingSurface, StrokeStyle,
};

#[cfg(feature = "raster")]
pub use overlay::RasterSurface;

//! Integration module for connecting the overlay to a player and an
//! annotation service.
//!
//! This module provides the host capability traits, the upload service
//! contract, and a pipeline that ties a source to the renderer.

mod host;
mod pipeline;
mod source;
mod state;
mod upload;

pub use host::{PlaybackControl, PlaybackHost, PlaybackState};
pub use pipeline::OverlayPipeline;
pub use source::{AnnotationSource, RecordedResponse};
pub use state::ViewState;
pub use upload::{UploadResult, VideoAnnotations, VideoResult};

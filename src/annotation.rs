mod index;
mod lenient;
mod model;
mod timestamp;

pub use index::{AnnotationIndex, IndexConfig};
pub use model::{
    FaceDetectionAnnotation, NormalizedBoundingBox, NormalizedBox, TimestampedObject, Track,
};
pub use timestamp::TimeOffset;

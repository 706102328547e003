//! Time-bucketed lookup of the boxes visible at a playback time.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::annotation::model::{FaceDetectionAnnotation, NormalizedBox};
use crate::annotation::timestamp::time_bucket;

/// Configuration for the AnnotationIndex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// A sample matches a query time when both round to the same value at
    /// this many decimal places. Capped at 9 (nanoseconds).
    pub decimal_places: u32,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self { decimal_places: 1 }
    }
}

/// Immutable set of face boxes for one video, keyed by quantized timestamp.
///
/// There is no interpolation between samples: a time that does not round to
/// a sampled timestamp has no active boxes, so gaps in the sampling show no
/// overlay.
#[derive(Debug, Clone, Default)]
pub struct AnnotationIndex {
    buckets: HashMap<i64, Vec<NormalizedBox>>,
    thumbnails: Vec<Option<String>>,
    samples: usize,
    config: IndexConfig,
}

impl AnnotationIndex {
    pub fn new(annotations: &[FaceDetectionAnnotation]) -> Self {
        Self::with_config(annotations, IndexConfig::default())
    }

    pub fn with_config(annotations: &[FaceDetectionAnnotation], config: IndexConfig) -> Self {
        let mut buckets: HashMap<i64, Vec<NormalizedBox>> = HashMap::new();
        let mut samples = 0;

        // Bucket contents keep track-group, track, sample order.
        for annotation in annotations {
            for track in &annotation.tracks {
                for object in &track.timestamped_objects {
                    let key = object.time_offset.bucket(config.decimal_places);
                    let bbox = object.normalized_box();
                    buckets.entry(key).or_default().push(bbox);
                    samples += 1;
                }
            }
        }

        let thumbnails = annotations.iter().map(|a| a.thumbnail.clone()).collect();

        debug!(
            "Indexed {} samples from {} faces into {} time buckets",
            samples,
            annotations.len(),
            buckets.len()
        );

        Self {
            buckets,
            thumbnails,
            samples,
            config,
        }
    }

    /// Boxes whose timestamp rounds to the same value as `time`.
    ///
    /// Returns an empty slice for unsampled or non-finite times.
    pub fn active_boxes(&self, time: f64) -> &[NormalizedBox] {
        time_bucket(time, self.config.decimal_places)
            .and_then(|key| self.buckets.get(&key))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn config(&self) -> IndexConfig {
        self.config
    }

    /// Total number of timestamped boxes across all tracks.
    pub fn len(&self) -> usize {
        self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.samples == 0
    }

    /// Number of detected faces (track groups).
    pub fn face_count(&self) -> usize {
        self.thumbnails.len()
    }

    /// Base64 thumbnails in detection order.
    pub fn thumbnails(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.thumbnails.iter().map(Option::as_deref)
    }

    /// Thumbnail of face `face` as an inline `data:` URI.
    pub fn thumbnail_data_uri(&self, face: usize) -> Option<String> {
        self.thumbnails
            .get(face)?
            .as_deref()
            .map(|encoded| format!("data:image/jpg;base64,{encoded}"))
    }
}

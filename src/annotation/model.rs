//! Face detection annotation data as returned by the annotation service.

use serde::{Deserialize, Serialize};

use crate::annotation::lenient;
use crate::annotation::timestamp::TimeOffset;

/// One detected face: its thumbnail and the tracks that follow it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceDetectionAnnotation {
    /// Base64-encoded JPEG thumbnail of the face.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

/// A face followed continuously across frames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Samples in non-decreasing timestamp order.
    #[serde(default)]
    pub timestamped_objects: Vec<TimestampedObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

/// A single sampled detection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimestampedObject {
    #[serde(default)]
    pub time_offset: TimeOffset,
    #[serde(default)]
    pub normalized_bounding_box: NormalizedBoundingBox,
}

/// Wire form of a normalized box; every edge is optional and may arrive
/// as a number or a numeric string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedBoundingBox {
    #[serde(
        default,
        deserialize_with = "lenient::edge",
        skip_serializing_if = "Option::is_none"
    )]
    pub left: Option<f32>,
    #[serde(
        default,
        deserialize_with = "lenient::edge",
        skip_serializing_if = "Option::is_none"
    )]
    pub top: Option<f32>,
    #[serde(
        default,
        deserialize_with = "lenient::edge",
        skip_serializing_if = "Option::is_none"
    )]
    pub right: Option<f32>,
    #[serde(
        default,
        deserialize_with = "lenient::edge",
        skip_serializing_if = "Option::is_none"
    )]
    pub bottom: Option<f32>,
}

/// Rectangle expressed as fractions of the frame width and height.
///
/// Inverted or zero extents are kept as-is; such boxes are never drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NormalizedBox {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl NormalizedBox {
    #[inline]
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

impl From<NormalizedBoundingBox> for NormalizedBox {
    fn from(raw: NormalizedBoundingBox) -> Self {
        Self {
            left: finite_or_zero(raw.left),
            top: finite_or_zero(raw.top),
            right: finite_or_zero(raw.right),
            bottom: finite_or_zero(raw.bottom),
        }
    }
}

fn finite_or_zero(edge: Option<f32>) -> f32 {
    edge.filter(|v| v.is_finite()).unwrap_or(0.0)
}

impl TimestampedObject {
    pub fn new(time_offset: TimeOffset, bbox: NormalizedBox) -> Self {
        Self {
            time_offset,
            normalized_bounding_box: NormalizedBoundingBox {
                left: Some(bbox.left),
                top: Some(bbox.top),
                right: Some(bbox.right),
                bottom: Some(bbox.bottom),
            },
        }
    }

    pub fn normalized_box(&self) -> NormalizedBox {
        self.normalized_bounding_box.into()
    }
}

//! Response contract of the upload/annotation service.

use serde::{Deserialize, Serialize};

use crate::annotation::{AnnotationIndex, FaceDetectionAnnotation, IndexConfig};
use crate::error::{OverlayError, Result};

/// Where the transcoded video can be played from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    pub secure_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoAnnotations {
    #[serde(default)]
    pub face_detection_annotations: Vec<FaceDetectionAnnotation>,
}

/// An uploaded video together with its face annotations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResult {
    pub upload_result: UploadResult,
    #[serde(default)]
    pub annotations: VideoAnnotations,
}

#[derive(Deserialize)]
struct Envelope {
    result: VideoResult,
}

impl VideoResult {
    /// Decode a service response. Any non-2xx status is a rejection, with the
    /// body kept for reporting.
    pub fn from_response(status: u16, body: &str) -> Result<Self> {
        if !(200..300).contains(&status) {
            return Err(OverlayError::UploadRejected {
                status,
                body: body.to_string(),
            });
        }
        let envelope: Envelope = serde_json::from_str(body)?;
        Ok(envelope.result)
    }

    /// Playable media URL, opaque to the overlay.
    pub fn media_url(&self) -> &str {
        &self.upload_result.secure_url
    }

    pub fn faces(&self) -> &[FaceDetectionAnnotation] {
        &self.annotations.face_detection_annotations
    }

    pub fn build_index(&self, config: IndexConfig) -> AnnotationIndex {
        AnnotationIndex::with_config(self.faces(), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "result": {
            "uploadResult": {"secure_url": "https://media.example.com/video.mp4", "bytes": 1024},
            "annotations": {
                "faceDetectionAnnotations": [{
                    "thumbnail": "AAAA",
                    "tracks": [{"timestampedObjects": [
                        {"timeOffset": {"nanos": 500000000}, "normalizedBoundingBox": {"left": 0.1}}
                    ]}]
                }]
            }
        }
    }"#;

    #[test]
    fn test_from_response() {
        let video = VideoResult::from_response(200, BODY).unwrap();
        assert_eq!(video.media_url(), "https://media.example.com/video.mp4");
        assert_eq!(video.faces().len(), 1);

        let index = video.build_index(IndexConfig::default());
        assert_eq!(index.active_boxes(0.5).len(), 1);
    }

    #[test]
    fn test_lenient_time_offsets() {
        for nanos in [r#""500000000""#, "5e8", "500000000.0"] {
            let body = format!(
                r#"{{"result": {{
                    "uploadResult": {{"secure_url": "u"}},
                    "annotations": {{"faceDetectionAnnotations": [{{"tracks": [{{
                        "timestampedObjects": [{{"timeOffset": {{"nanos": {nanos}}}}}]
                    }}]}}]}}
                }}}}"#
            );
            let video = VideoResult::from_response(200, &body).unwrap();
            let index = video.build_index(IndexConfig::default());
            assert_eq!(index.active_boxes(0.5).len(), 1, "nanos = {nanos}");
        }
    }

    #[test]
    fn test_missing_annotations() {
        let body = r#"{"result": {"uploadResult": {"secure_url": "u"}}}"#;
        let video = VideoResult::from_response(201, body).unwrap();
        assert!(video.faces().is_empty());
    }

    #[test]
    fn test_rejected_status() {
        let body = r#"{"message": "boom"}"#;
        let err = VideoResult::from_response(500, body).unwrap_err();
        let rejected = matches!(err, OverlayError::UploadRejected { status: 500, .. });
        assert!(rejected);
    }

    #[test]
    fn test_malformed_body() {
        let err = VideoResult::from_response(200, "not json").unwrap_err();
        assert!(matches!(err, OverlayError::Json(_)));
    }
}

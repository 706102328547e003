use thiserror::Error;

/// Errors surfaced at the edges of the overlay core.
///
/// Malformed annotation fields and unmatched query times are tolerated and
/// never reach this type.
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("failed to decode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("upload rejected with status {status}: {body}")]
    UploadRejected { status: u16, body: String },

    #[error("invalid color {0:?}, expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, OverlayError>;

use thiserror::Error;

/// Misuse reported at the controller boundary.
///
/// The per-tick logic itself cannot fail; these cover calls made with no
/// content loaded, unknown part names and malformed host descriptions.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("no content is loaded")]
    NoContent,
    #[error("no mesh named `{0}` in the loaded content")]
    UnknownPart(String),
    #[error("content has no meshes to frame")]
    EmptyContent,
    #[error("invalid content description: {0}")]
    InvalidContent(#[source] serde_json::Error),
    #[error("invalid viewer config: {0}")]
    InvalidConfig(#[source] serde_json::Error),
}

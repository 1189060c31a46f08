//! Scene-layer error types.

use engine_component::ComponentError;

/// Errors that can occur while saving or loading entities.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// Scene text is not valid JSON, or does not have the scene layout.
    #[error("invalid scene text: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to encode a snapshot to MessagePack.
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    /// Failed to decode a snapshot from MessagePack.
    #[error("failed to decode snapshot: {0}")]
    Decode(#[from] rmp_serde::decode::Error),

    /// A single component could not be converted.
    #[error(transparent)]
    Component(#[from] ComponentError),

    /// Reading or writing a scene file failed.
    #[error("scene file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

use thiserror::Error;

pub type WysiwygResult<T> = Result<T, WysiwygError>;

#[derive(Error, Debug)]
pub enum WysiwygError {
    #[error("placeholder token '{token}' does not occur exactly once in the serialized payload")]
    PlaceholderCollision { token: String },

    #[error("failed to encode initialization options: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid wysiwyg configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}

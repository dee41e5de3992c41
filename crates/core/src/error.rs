use thiserror::Error;

#[derive(Debug, Error)]
pub enum FluidError {
    #[error("malformed dimension token: {0:?}")]
    MalformedToken(String),

    #[error("unknown fluid utility: {0}")]
    UnknownUtility(String),

    #[error("unknown value `{value}` for utility `{utility}`")]
    UnknownValue { utility: String, value: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

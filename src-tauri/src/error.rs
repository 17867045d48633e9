use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Emit error: {0}")]
    Emit(String),
}

impl From<RelayError> for String {
    fn from(err: RelayError) -> Self {
        err.to_string()
    }
}

use crate::controls::ControlError;
use crate::index::IndexError;
use crate::model::ModelError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid session: {0}")]
    Invalid(String),

    #[error("session I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("session serialization failure: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("session YAML serialization failure: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),

    #[error("viewer rejected the session: {0}")]
    Control(#[from] ControlError),

    #[error("viewer rejected the session: {0}")]
    Index(#[from] IndexError),

    #[error("viewer rejected the session: {0}")]
    Model(#[from] ModelError),
}

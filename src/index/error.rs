use crate::model::ModelError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndexError {
    #[error("source `{0}` is not part of the viewer")]
    SourceNotFound(String),

    #[error("group `{0}` is not part of the viewer")]
    GroupNotFound(String),

    #[error("viewer model rejected the update: {0}")]
    Model(#[from] ModelError),
}

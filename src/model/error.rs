use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("source index {index} is out of bounds for {len} sources")]
    SourceIndexOutOfBounds { index: usize, len: usize },

    #[error("group index {index} is out of bounds for {len} groups")]
    GroupIndexOutOfBounds { index: usize, len: usize },

    #[error("source `{0}` is already part of the viewer")]
    SourceAlreadyPresent(String),

    #[error("group `{0}` is already part of the viewer")]
    GroupAlreadyPresent(String),
}

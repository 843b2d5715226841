use thiserror::Error;

pub type Result<T> = std::result::Result<T, NameError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("source `{0}` already has a registered name")]
    DuplicateSource(String),
}

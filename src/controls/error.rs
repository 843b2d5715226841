use crate::index::IndexError;
use crate::model::ModelError;
use crate::names::NameError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ControlError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControlError {
    #[error("group name must not be empty")]
    EmptyGroupName,

    #[error("group `{0}` already exists")]
    GroupAlreadyExists(String),

    #[error("group `{0}` cannot be removed")]
    ProtectedGroup(String),

    #[error("controls are disabled while a manual transformation is active")]
    Disabled,

    #[error("no group is selected")]
    NoCurrentGroup,

    #[error("no source is selected")]
    NoCurrentSource,

    #[error("index lookup failed: {0}")]
    Index(#[from] IndexError),

    #[error("viewer model error: {0}")]
    Model(#[from] ModelError),

    #[error("name registry error: {0}")]
    Name(#[from] NameError),
}

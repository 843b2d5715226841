use thiserror::Error;

pub type Result<T> = std::result::Result<T, RangeError>;

#[derive(Debug, Error, PartialEq)]
pub enum RangeError {
    #[error("degenerate range: lower and upper bound are both {0}")]
    InvalidRange(f64),

    #[error("slider span from {0} to {1} is too wide to represent")]
    UnboundedSpan(f64, f64),

    #[error("not a number: `{0}`")]
    MalformedInput(String),
}

//! Startup Errors
//!
//! Failures loading the bundled statement list or screen copy.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("statement list is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("statement list is empty")]
    Empty,
    #[error("statement at index {0} has a blank id")]
    BlankId(usize),
    #[error("duplicate statement id: {0}")]
    DuplicateId(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("screen config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

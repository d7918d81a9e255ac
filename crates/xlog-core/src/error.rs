//! Error types

use thiserror::Error;

/// Errors returned by logger and registry operations
///
/// Every variant is also reported through the warning sink before it is
/// returned, so callers may ignore the result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XLogError {
    #[error("The provided level ('{0}') is unknown!")]
    UnknownLevel(char),

    /// A level given by name (or other multi-character text) that is neither
    /// an id nor a level name
    #[error("The provided level ('{0}') is unknown!")]
    UnknownLevelName(String),
}

pub type XLogResult<T> = Result<T, XLogError>;

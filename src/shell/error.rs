use crate::core::error::BoardError;
use thiserror::Error;

/// A command line the shell could not act on
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("missing argument for {0}")]
    MissingArgument(&'static str),

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

//! Interactive text front end
//!
//! Reads one command per line, feeds clicks into the game state machine and
//! reports every event as a line of output.

pub mod error;
pub mod options;
pub mod protocol;

pub use error::ShellError;
pub use options::ShellOptions;
pub use protocol::{Command, Shell, render};

//! # Ward Console
//!
//! The operator-facing command loop for the ward system.
//!
//! A [`Console`] reads a numeric selector, prompts for the arguments of the chosen operation,
//! calls exactly one [`HospitalSystem`](ward_core::HospitalSystem) operation and prints the
//! outcome. Failures of the operation are reported and the session continues; only I/O errors
//! end it early. Input and output are injected, so the same loop drives stdin/stdout, a script
//! file, or an in-memory buffer in tests.

mod command;
mod session;

pub use command::{Command, MENU};
pub use session::Console;

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("failed to read or write console: {0}")]
    Io(#[from] std::io::Error),
    #[error("input ended before the session finished")]
    EndOfInput,
    #[error(transparent)]
    Hospital(#[from] ward_core::HospitalError),
}

pub type ConsoleResult<T> = std::result::Result<T, ConsoleError>;

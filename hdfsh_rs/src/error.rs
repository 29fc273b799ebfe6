//! Error taxonomy for the shell core.
//!
//! Four kinds of failure flow through the crate: invocation/parse errors,
//! session-management errors, command-execution errors, and errors coming
//! back from the WebHDFS client. `HdfsShell::submit` is the single boundary
//! that turns any of them into a user-facing `CommandResult`; nothing below
//! that boundary prints or swallows errors.

use thiserror::Error;

use crate::client::ClientError;

/// Errors raised by parsing, session management, and command execution.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The invocation did not start with an accepted command pair, or the
    /// sub-command is not in the allow-list.
    #[error("{0}")]
    CommandNotAllowed(String),

    /// Hard option-parsing failure: unknown flag, wrong arity, or an
    /// invalid chmod mode. The whole command is meaningless, so this is
    /// raised immediately instead of being collected in the descriptor.
    #[error("{0}")]
    OptionParsing(String),

    /// Session registry failure: unconfigured name service, or an explicit
    /// close for a session that does not exist.
    #[error("{0}")]
    Session(String),

    /// Command execution failure: missing source, wrong destination type,
    /// cross-name-service move, and similar.
    #[error("{0}")]
    Execute(String),

    /// Error reported by the WebHDFS client.
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl ShellError {
    /// Expected errors render as their own message; unexpected ones
    /// (transport/IO failures) are logged in full and shown to the user
    /// only as a generic internal-error notice.
    pub fn is_expected(&self) -> bool {
        match self {
            ShellError::Client(err) => {
                !matches!(err, ClientError::Transport(_) | ClientError::Io(_))
            }
            _ => true,
        }
    }
}

//! Submission boundary.
//!
//! [`HdfsShell::submit`] is the single entry point that takes one raw
//! line and always hands back a [`CommandResult`]; no error escapes it.
//! Expected failures (bad invocations, missing paths, remote rejections)
//! render their own message; unexpected ones (transport and IO faults)
//! are logged in full and surface only as a generic notice.

use std::sync::Arc;

use crate::cli::{parse_line, ShellCommand, HELP_TIPS};
use crate::config::Config;
use crate::error::ShellError;
use crate::exec::{dispatch, CommandContext};
use crate::session::SessionRegistry;
use crate::types::CommandResult;

pub const EXPECTED_ERROR_MSG: &str = "An error was encountered:\n";
pub const INTERNAL_ERROR_MSG: &str = "An internal error was encountered.\nError:\n";

pub struct HdfsShell {
    config: Arc<Config>,
    sessions: SessionRegistry,
}

impl HdfsShell {
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let sessions = SessionRegistry::new(Arc::clone(&config));
        HdfsShell { config, sessions }
    }

    /// Build a shell around a pre-configured registry. Tests use this to
    /// inject an in-memory file system.
    pub fn with_registry(config: Arc<Config>, sessions: SessionRegistry) -> Self {
        HdfsShell { config, sessions }
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    /// Execute one submitted line.
    pub fn submit(&self, code: &str) -> CommandResult {
        let descriptor = match parse_line(code, &self.config) {
            Ok(descriptor) => descriptor,
            Err(err) => return self.failure(err),
        };

        // -help never touches a session
        if descriptor.command == ShellCommand::Help {
            return CommandResult::message(HELP_TIPS);
        }

        if descriptor.has_errors() {
            return CommandResult::failure(format!(
                "{EXPECTED_ERROR_MSG}{}",
                descriptor.errors.join("\n")
            ));
        }

        let ctx = CommandContext {
            sessions: &self.sessions,
            config: &self.config,
        };
        match dispatch(&descriptor, &ctx) {
            Ok(result) => result,
            Err(err) => self.failure(err),
        }
    }

    fn failure(&self, err: ShellError) -> CommandResult {
        if err.is_expected() {
            CommandResult::failure(format!("{EXPECTED_ERROR_MSG}{err}"))
        } else {
            tracing::error!(error = %err, "command failed unexpectedly");
            CommandResult::failure(format!("{INTERNAL_ERROR_MSG}{err}"))
        }
    }
}

impl Drop for HdfsShell {
    fn drop(&mut self) {
        self.sessions.close_all();
    }
}

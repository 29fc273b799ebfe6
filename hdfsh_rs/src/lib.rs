//! Constrained HDFS shell core.
//!
//! Accepts `hdfs dfs` / `hadoop fs` invocations from an allow-list of
//! sub-commands, resolves paths across configured name services, executes
//! them against WebHDFS, and renders tabular or plain-text results.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod exec;
pub mod format;
pub mod paths;
pub mod session;
pub mod shell;
pub mod types;

pub use cli::{CommandDescriptor, ShellCommand, SubCommand, HELP_TIPS};
pub use client::{ClientError, HdfsFs, WebHdfsClient, CHUNK_SIZE};
pub use config::Config;
pub use error::ShellError;
pub use paths::HdfsPath;
pub use session::{ClientFactory, SessionRegistry, WebHdfsFactory};
pub use shell::HdfsShell;
pub use types::{CommandResult, ContentSummary, FileStatus, ResultData, Table};

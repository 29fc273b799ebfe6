//! Command enum and related types for the shell interface.
//!
//! [`SubCommand`] is the single source of truth for the sub-command
//! allow-list; [`ShellCommand`] pairs each command with its typed
//! arguments, so the parser, the dispatcher, and the help output cannot
//! drift apart.

use crate::paths::HdfsPath;

// ============================================================================
// Sub-command allow-list
// ============================================================================

/// Sub-command tokens accepted after `hdfs dfs` / `hadoop fs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubCommand {
    Ls,
    Du,
    Get,
    Put,
    CopyFromLocal,
    Mkdir,
    Cp,
    Mv,
    Rm,
    Chmod,
    Chown,
    Chgrp,
    Count,
    Help,
}

impl SubCommand {
    pub const ALL: [SubCommand; 14] = [
        SubCommand::Ls,
        SubCommand::Du,
        SubCommand::Get,
        SubCommand::Put,
        SubCommand::CopyFromLocal,
        SubCommand::Mkdir,
        SubCommand::Cp,
        SubCommand::Mv,
        SubCommand::Rm,
        SubCommand::Chmod,
        SubCommand::Chown,
        SubCommand::Chgrp,
        SubCommand::Count,
        SubCommand::Help,
    ];

    /// Token form as typed by the user.
    pub fn token(self) -> &'static str {
        match self {
            SubCommand::Ls => "-ls",
            SubCommand::Du => "-du",
            SubCommand::Get => "-get",
            SubCommand::Put => "-put",
            SubCommand::CopyFromLocal => "-copyFromLocal",
            SubCommand::Mkdir => "-mkdir",
            SubCommand::Cp => "-cp",
            SubCommand::Mv => "-mv",
            SubCommand::Rm => "-rm",
            SubCommand::Chmod => "-chmod",
            SubCommand::Chown => "-chown",
            SubCommand::Chgrp => "-chgrp",
            SubCommand::Count => "-count",
            SubCommand::Help => "-help",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.token() == token)
    }
}

// ============================================================================
// Positional arguments
// ============================================================================

/// A positional path argument: a resolved HDFS path, or raw local text
/// kept as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathArg {
    Hdfs(HdfsPath),
    Local(String),
}

impl PathArg {
    pub fn as_hdfs(&self) -> Option<&HdfsPath> {
        match self {
            PathArg::Hdfs(path) => Some(path),
            PathArg::Local(_) => None,
        }
    }

    /// Text form used when the argument names a local filesystem path.
    /// An HDFS argument degrades to its absolute path, matching how the
    /// original command line tools treat a qualified local destination.
    pub fn local_text(&self) -> &str {
        match self {
            PathArg::Hdfs(path) => path.path(),
            PathArg::Local(text) => text,
        }
    }

    pub fn source_text(&self) -> &str {
        match self {
            PathArg::Hdfs(path) => path.source_path(),
            PathArg::Local(text) => text,
        }
    }
}

// ============================================================================
// Per-command options
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LsOptions {
    /// `-h`: render lengths with unit suffixes.
    pub humanized: bool,
    /// `-C`: collapse each row to just its path.
    pub show_path_only: bool,
    /// `-t`: sort by modification time (ascending).
    pub sort_by_time: bool,
    /// `-S`: sort by size (ascending).
    pub sort_by_size: bool,
    /// `-r`: reverse the final order after any sort.
    pub reverse_sort: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DuOptions {
    pub humanized: bool,
    /// `-s`: one aggregated row per input path.
    pub summary: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MkdirOptions {
    /// `-p`: accepted for compatibility; the existence pre-check already
    /// makes existing paths non-fatal, so the flag has no effect.
    pub permit: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpOptions {
    /// `-f`: overwrite existing destination files.
    pub force: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RmOptions {
    /// `-f`: accepted for compatibility; removal is always a trash move.
    pub force: bool,
    /// `-r`: accepted for compatibility; the trash move covers directories.
    pub recursively: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountOptions {
    /// `-q`: include quota columns.
    pub quota: bool,
    pub humanized: bool,
}

// ============================================================================
// Parsed command
// ============================================================================

/// A fully parsed command with typed arguments, ready for dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Ls {
        paths: Vec<PathArg>,
        opts: LsOptions,
    },
    Du {
        paths: Vec<PathArg>,
        opts: DuOptions,
    },
    Get {
        src: PathArg,
        /// Defaults to the configured workspace when absent.
        dest: Option<PathArg>,
    },
    Put {
        src: PathArg,
        dest: PathArg,
    },
    Mkdir {
        paths: Vec<PathArg>,
        opts: MkdirOptions,
    },
    Cp {
        src: PathArg,
        dest: PathArg,
        opts: CpOptions,
    },
    Mv {
        src: PathArg,
        dest: PathArg,
    },
    Rm {
        paths: Vec<PathArg>,
        opts: RmOptions,
    },
    Chmod {
        mode: String,
        paths: Vec<PathArg>,
    },
    Chown {
        owner: String,
        group: Option<String>,
        paths: Vec<PathArg>,
    },
    Chgrp {
        group: String,
        paths: Vec<PathArg>,
    },
    Count {
        paths: Vec<PathArg>,
        opts: CountOptions,
    },
    Help,
}

impl ShellCommand {
    /// The sub-command this parse result belongs to.
    pub fn sub_command(&self) -> SubCommand {
        match self {
            ShellCommand::Ls { .. } => SubCommand::Ls,
            ShellCommand::Du { .. } => SubCommand::Du,
            ShellCommand::Get { .. } => SubCommand::Get,
            ShellCommand::Put { .. } => SubCommand::Put,
            ShellCommand::Mkdir { .. } => SubCommand::Mkdir,
            ShellCommand::Cp { .. } => SubCommand::Cp,
            ShellCommand::Mv { .. } => SubCommand::Mv,
            ShellCommand::Rm { .. } => SubCommand::Rm,
            ShellCommand::Chmod { .. } => SubCommand::Chmod,
            ShellCommand::Chown { .. } => SubCommand::Chown,
            ShellCommand::Chgrp { .. } => SubCommand::Chgrp,
            ShellCommand::Count { .. } => SubCommand::Count,
            ShellCommand::Help => SubCommand::Help,
        }
    }
}

/// Result of parsing one submitted line.
///
/// `errors` holds soft per-token failures (for example a positional that
/// looks like neither an HDFS nor a local path). A non-empty list means
/// execution must not proceed; hard failures are raised as
/// [`ShellError`](crate::error::ShellError) instead.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandDescriptor {
    pub command: ShellCommand,
    pub errors: Vec<String>,
}

impl CommandDescriptor {
    pub fn new(command: ShellCommand, errors: Vec<String>) -> Self {
        CommandDescriptor { command, errors }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

// ============================================================================
// Help text
// ============================================================================

/// Fixed usage text returned by `-help`, bypassing the dispatcher.
pub const HELP_TIPS: &str = "
Usage: hadoop fs [generic options]
\t[-chgrp GROUP PATH...]
\t[-chmod <MODE[,MODE]... | OCTALMODE> PATH...]
\t[-chown [OWNER][:[GROUP]] PATH...]
\t[-copyFromLocal [-f] [-p] [-l] <localsrc> ... <dst>]
\t[-count [-q] [-h] [-v] <path> ...]
\t[-cp [-f] [-p | -p[topax]] <src> ... <dst>]
\t[-du [-s] [-h] <path> ...]
\t[-get [-p] [-ignoreCrc] [-crc] <src> ... <localdst>]
\t[-help]
\t[-ls [-C] [-d] [-h] [-q] [-R] [-t] [-S] [-r] [-u] [<path> ...]]
\t[-mkdir [-p] <path> ...]
\t[-mv <src> ... <dst>]
\t[-put [-f] [-p] [-l] <localsrc> ... <dst>]
\t[-rm [-f] [-r|-R] <src> ...]
";

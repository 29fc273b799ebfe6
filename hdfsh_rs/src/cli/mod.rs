//! Shell line parsing: the sub-command allow-list, typed command
//! structures, and the tokenizing parser that produces them.

pub mod command;
pub mod parser;

pub use command::{
    CommandDescriptor, CountOptions, CpOptions, DuOptions, LsOptions, MkdirOptions, PathArg,
    RmOptions, ShellCommand, SubCommand, HELP_TIPS,
};
pub use parser::{parse_line, ALLOW_COMMANDS};

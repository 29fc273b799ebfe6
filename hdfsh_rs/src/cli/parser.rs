//! Command-line parser for submitted shell lines.
//!
//! A line is tokenized on whitespace (runs collapse to one separator, no
//! quoting support), validated against the two accepted invocation pairs
//! and the sub-command allow-list, then handed to the matching per-command
//! option parser. Each parser consumes its recognized flags, classifies
//! every bare positional as an HDFS path, a local path, or a soft error,
//! and enforces its positional arity.

use once_cell::sync::Lazy;
use regex::Regex;

use super::command::*;
use crate::config::Config;
use crate::error::ShellError;
use crate::paths::{is_hdfs_path, is_local_path, HdfsPath};

/// The only accepted leading token pairs.
pub const ALLOW_COMMANDS: [(&str, &str); 2] = [("hdfs", "dfs"), ("hadoop", "fs")];

/// Parse one submitted line into a [`CommandDescriptor`].
///
/// Hard failures (disallowed invocation, unknown sub-command, unknown flag,
/// wrong arity, invalid chmod mode) are returned as `Err`; soft per-token
/// failures are collected in the descriptor's error list.
pub fn parse_line(code: &str, config: &Config) -> Result<CommandDescriptor, ShellError> {
    let tokens: Vec<&str> = code.split_whitespace().collect();
    validate_command_pair(&tokens)?;

    let sub_token = tokens
        .get(2)
        .ok_or_else(|| ShellError::CommandNotAllowed("missing sub-command".to_string()))?;
    let sub = SubCommand::from_token(sub_token)
        .ok_or_else(|| ShellError::CommandNotAllowed(format!("{sub_token}: Unknown Command")))?;

    let rest = &tokens[3..];
    match sub {
        SubCommand::Ls => parse_ls_command(rest, config),
        SubCommand::Du => parse_du_command(rest, config),
        SubCommand::Get => parse_get_command(rest, config),
        SubCommand::Put | SubCommand::CopyFromLocal => parse_put_command(sub, rest, config),
        SubCommand::Mkdir => parse_mkdir_command(rest, config),
        SubCommand::Cp => parse_cp_command(rest, config),
        SubCommand::Mv => parse_mv_command(rest, config),
        SubCommand::Rm => parse_rm_command(rest, config),
        SubCommand::Chmod => parse_chmod_command(rest, config),
        SubCommand::Chown => parse_chown_command(rest, config),
        SubCommand::Chgrp => parse_chgrp_command(rest, config),
        SubCommand::Count => parse_count_command(rest, config),
        SubCommand::Help => Ok(CommandDescriptor::new(ShellCommand::Help, Vec::new())),
    }
}

fn validate_command_pair(tokens: &[&str]) -> Result<(), ShellError> {
    let allowed = tokens.len() >= 2
        && ALLOW_COMMANDS
            .iter()
            .any(|(a, b)| tokens[0] == *a && tokens[1] == *b);
    if !allowed {
        let tips = ALLOW_COMMANDS
            .iter()
            .map(|(a, b)| format!("{a} {b}"))
            .collect::<Vec<_>>()
            .join(",");
        return Err(ShellError::CommandNotAllowed(format!("Only Allow: {tips}")));
    }
    Ok(())
}

// ============================================================================
// Shared helpers
// ============================================================================

/// Classify bare positional tokens. HDFS-looking tokens are resolved,
/// plausible local paths kept as typed, anything else becomes a soft
/// "No such file or directory" error and is dropped.
fn classify_path_args(
    command: &str,
    args: &[&str],
    config: &Config,
    errors: &mut Vec<String>,
) -> Vec<PathArg> {
    let mut paths = Vec::new();
    for arg in args {
        if is_hdfs_path(arg) {
            paths.push(PathArg::Hdfs(HdfsPath::resolve(arg, config)));
        } else if is_local_path(arg) {
            paths.push(PathArg::Local((*arg).to_string()));
        } else {
            errors.push(format!("{command}: '{arg}': No such file or directory"));
        }
    }
    paths
}

fn unknown_option(command: &str, arg: &str) -> ShellError {
    ShellError::OptionParsing(format!("Unknown option '{arg}' for '{command}' command."))
}

/// Split tokens into recognized flags and positionals. `apply` returns
/// true when it consumed the flag; an unconsumed `-` token is a hard error.
fn split_tokens<'a>(
    command: &str,
    args: &[&'a str],
    mut apply: impl FnMut(&str) -> bool,
) -> Result<Vec<&'a str>, ShellError> {
    let mut positionals = Vec::new();
    for arg in args {
        if is_hdfs_path(arg) || !arg.starts_with('-') {
            positionals.push(*arg);
        } else if !apply(arg) {
            return Err(unknown_option(command, arg));
        }
    }
    Ok(positionals)
}

// ============================================================================
// Per-command parsers
// ============================================================================

fn parse_ls_command(args: &[&str], config: &Config) -> Result<CommandDescriptor, ShellError> {
    let mut opts = LsOptions::default();
    let positionals = split_tokens("-ls", args, |flag| {
        match flag {
            "-h" | "--humanized" => opts.humanized = true,
            "-C" | "--show_path_only" => opts.show_path_only = true,
            "-t" | "--sort_by_time" => opts.sort_by_time = true,
            "-S" | "--sort_by_size" => opts.sort_by_size = true,
            "-r" | "--reverse_sort" => opts.reverse_sort = true,
            _ => return false,
        }
        true
    })?;

    let mut errors = Vec::new();
    let paths = classify_path_args("-ls", &positionals, config, &mut errors);
    Ok(CommandDescriptor::new(
        ShellCommand::Ls { paths, opts },
        errors,
    ))
}

fn parse_du_command(args: &[&str], config: &Config) -> Result<CommandDescriptor, ShellError> {
    let mut opts = DuOptions::default();
    let positionals = split_tokens("-du", args, |flag| {
        match flag {
            "-h" | "--humanized" => opts.humanized = true,
            "-s" | "--summary" => opts.summary = true,
            _ => return false,
        }
        true
    })?;

    let mut errors = Vec::new();
    let paths = classify_path_args("-du", &positionals, config, &mut errors);
    Ok(CommandDescriptor::new(
        ShellCommand::Du { paths, opts },
        errors,
    ))
}

fn parse_get_command(args: &[&str], config: &Config) -> Result<CommandDescriptor, ShellError> {
    let positionals = split_tokens("-get", args, |_| false)?;

    let mut errors = Vec::new();
    let mut paths = classify_path_args("-get", &positionals, config, &mut errors);
    let (src, dest) = match paths.len() {
        1 => (paths.remove(0), None),
        2 => {
            let dest = paths.remove(1);
            (paths.remove(0), Some(dest))
        }
        _ => {
            return Err(ShellError::OptionParsing(
                "command should be: -get <src> <localdst>".to_string(),
            ));
        }
    };
    Ok(CommandDescriptor::new(
        ShellCommand::Get { src, dest },
        errors,
    ))
}

fn parse_put_command(
    sub: SubCommand,
    args: &[&str],
    config: &Config,
) -> Result<CommandDescriptor, ShellError> {
    let positionals = split_tokens(sub.token(), args, |_| false)?;

    let mut errors = Vec::new();
    let mut paths = classify_path_args(sub.token(), &positionals, config, &mut errors);
    if paths.len() != 2 {
        return Err(ShellError::OptionParsing(
            "command should be: -put <local path> <dest>".to_string(),
        ));
    }
    let dest = paths.remove(1);
    let src = paths.remove(0);
    Ok(CommandDescriptor::new(
        ShellCommand::Put { src, dest },
        errors,
    ))
}

fn parse_mkdir_command(args: &[&str], config: &Config) -> Result<CommandDescriptor, ShellError> {
    let mut opts = MkdirOptions::default();
    let positionals = split_tokens("-mkdir", args, |flag| {
        match flag {
            "-p" | "--permit" => opts.permit = true,
            _ => return false,
        }
        true
    })?;

    let mut errors = Vec::new();
    let paths = classify_path_args("-mkdir", &positionals, config, &mut errors);
    Ok(CommandDescriptor::new(
        ShellCommand::Mkdir { paths, opts },
        errors,
    ))
}

fn parse_cp_command(args: &[&str], config: &Config) -> Result<CommandDescriptor, ShellError> {
    let mut opts = CpOptions::default();
    let positionals = split_tokens("-cp", args, |flag| {
        match flag {
            "-f" | "--force" => opts.force = true,
            _ => return false,
        }
        true
    })?;

    let mut errors = Vec::new();
    let mut paths = classify_path_args("-cp", &positionals, config, &mut errors);
    if paths.len() != 2 {
        return Err(ShellError::OptionParsing(
            "command should be: -cp [-f] <src> <dest>".to_string(),
        ));
    }
    let dest = paths.remove(1);
    let src = paths.remove(0);
    Ok(CommandDescriptor::new(
        ShellCommand::Cp { src, dest, opts },
        errors,
    ))
}

fn parse_mv_command(args: &[&str], config: &Config) -> Result<CommandDescriptor, ShellError> {
    let positionals = split_tokens("-mv", args, |_| false)?;

    let mut errors = Vec::new();
    let mut paths = classify_path_args("-mv", &positionals, config, &mut errors);
    if paths.len() != 2 {
        return Err(ShellError::OptionParsing(
            "command should be: -mv <src> <dest>".to_string(),
        ));
    }
    let dest = paths.remove(1);
    let src = paths.remove(0);
    Ok(CommandDescriptor::new(
        ShellCommand::Mv { src, dest },
        errors,
    ))
}

fn parse_rm_command(args: &[&str], config: &Config) -> Result<CommandDescriptor, ShellError> {
    let mut opts = RmOptions::default();
    let positionals = split_tokens("-rm", args, |flag| {
        match flag {
            "-f" | "--force" => opts.force = true,
            "-r" | "--recursively" => opts.recursively = true,
            _ => return false,
        }
        true
    })?;

    let mut errors = Vec::new();
    let paths = classify_path_args("-rm", &positionals, config, &mut errors);
    Ok(CommandDescriptor::new(
        ShellCommand::Rm { paths, opts },
        errors,
    ))
}

static OCTAL_MODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-7]{3}$").expect("octal mode regex"));

fn parse_chmod_command(args: &[&str], config: &Config) -> Result<CommandDescriptor, ShellError> {
    let positionals = split_tokens("-chmod", args, |_| false)?;
    if positionals.len() != 2 {
        return Err(ShellError::OptionParsing(format!(
            "-chmod: Not enough arguments: expected 2 but got {}",
            positionals.len()
        )));
    }

    let mode = positionals[0];
    if !OCTAL_MODE_RE.is_match(mode) {
        return Err(ShellError::OptionParsing(format!(
            "-chmod: mode '{mode}' does not match the expected pattern."
        )));
    }

    let mut errors = Vec::new();
    let paths = classify_path_args("-chmod", &positionals[1..], config, &mut errors);
    Ok(CommandDescriptor::new(
        ShellCommand::Chmod {
            mode: mode.to_string(),
            paths,
        },
        errors,
    ))
}

static OWNER_GROUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+):(\w+)$").expect("owner:group regex"));

/// Split `owner[:group]`. Anything malformed (extra colons, non-word
/// segments) keeps the whole string as owner.
fn split_owner(owner_arg: &str) -> (String, Option<String>) {
    if owner_arg.matches(':').count() == 1 {
        if let Some(caps) = OWNER_GROUP_RE.captures(owner_arg) {
            return (caps[1].to_string(), Some(caps[2].to_string()));
        }
    }
    (owner_arg.to_string(), None)
}

fn parse_chown_command(args: &[&str], config: &Config) -> Result<CommandDescriptor, ShellError> {
    let positionals = split_tokens("-chown", args, |_| false)?;
    if positionals.len() != 2 {
        return Err(ShellError::OptionParsing(format!(
            "-chown: Not enough arguments: expected 2 but got {}",
            positionals.len()
        )));
    }

    let (owner, group) = split_owner(positionals[0]);
    let mut errors = Vec::new();
    let paths = classify_path_args("-chown", &positionals[1..], config, &mut errors);
    Ok(CommandDescriptor::new(
        ShellCommand::Chown {
            owner,
            group,
            paths,
        },
        errors,
    ))
}

fn parse_chgrp_command(args: &[&str], config: &Config) -> Result<CommandDescriptor, ShellError> {
    let positionals = split_tokens("-chgrp", args, |_| false)?;
    if positionals.len() != 2 {
        return Err(ShellError::OptionParsing(format!(
            "-chgrp: Not enough arguments: expected 2 but got {}",
            positionals.len()
        )));
    }

    let group = positionals[0].to_string();
    let mut errors = Vec::new();
    let paths = classify_path_args("-chgrp", &positionals[1..], config, &mut errors);
    Ok(CommandDescriptor::new(
        ShellCommand::Chgrp { group, paths },
        errors,
    ))
}

fn parse_count_command(args: &[&str], config: &Config) -> Result<CommandDescriptor, ShellError> {
    let mut opts = CountOptions::default();
    let positionals = split_tokens("-count", args, |flag| {
        match flag {
            "-q" | "--quota" => opts.quota = true,
            "-h" | "--humanized" => opts.humanized = true,
            _ => return false,
        }
        true
    })?;

    let mut errors = Vec::new();
    let paths = classify_path_args("-count", &positionals, config, &mut errors);
    Ok(CommandDescriptor::new(
        ShellCommand::Count { paths, opts },
        errors,
    ))
}

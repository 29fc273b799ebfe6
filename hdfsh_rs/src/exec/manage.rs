//! Namespace management commands: `-mkdir`, `-rm`, `-chmod`, `-chown`,
//! `-chgrp`.

use super::{move_to_trash, CommandContext};
use crate::cli::{MkdirOptions, PathArg, RmOptions};
use crate::error::ShellError;
use crate::types::CommandResult;

pub(super) fn run_mkdir(
    ctx: &CommandContext<'_>,
    paths: &[PathArg],
    _opts: &MkdirOptions,
) -> Result<CommandResult, ShellError> {
    let mut lines = Vec::new();
    for arg in paths {
        let Some(path) = arg.as_hdfs() else { continue };
        let client = ctx.client_for(path)?;

        if client.status(path.path(), false)?.is_some() {
            lines.push(format!("mkdir: `{}` File exists", path.source_path()));
            continue;
        }
        client.makedirs(path.path())?;
    }

    if lines.is_empty() {
        Ok(CommandResult::message("Success"))
    } else {
        Ok(CommandResult::message(lines.join("\n")))
    }
}

/// Remove by renaming into the user's trash. A missing path aborts the
/// whole command.
pub(super) fn run_rm(
    ctx: &CommandContext<'_>,
    paths: &[PathArg],
    _opts: &RmOptions,
) -> Result<CommandResult, ShellError> {
    for arg in paths {
        let Some(path) = arg.as_hdfs() else { continue };
        let client = ctx.client_for(path)?;

        if client.status(path.path(), false)?.is_none() {
            return Err(ShellError::Execute(format!(
                "-rm: `{}` No such file or directory",
                path.path()
            )));
        }
        let trashed = move_to_trash(client.as_ref(), path)?;
        tracing::debug!(path = path.path(), trashed = %trashed, "moved to trash");
    }
    Ok(CommandResult::message("Success"))
}

pub(super) fn run_chmod(
    ctx: &CommandContext<'_>,
    mode: &str,
    paths: &[PathArg],
) -> Result<CommandResult, ShellError> {
    apply_each(ctx, paths, |client, path| client.set_permission(path, mode))
}

pub(super) fn run_chown(
    ctx: &CommandContext<'_>,
    owner: &str,
    group: Option<&str>,
    paths: &[PathArg],
) -> Result<CommandResult, ShellError> {
    apply_each(ctx, paths, |client, path| {
        client.set_owner(path, Some(owner), group)
    })
}

pub(super) fn run_chgrp(
    ctx: &CommandContext<'_>,
    group: &str,
    paths: &[PathArg],
) -> Result<CommandResult, ShellError> {
    apply_each(ctx, paths, |client, path| {
        client.set_owner(path, None, Some(group))
    })
}

/// Apply a per-path mutation, continuing past individual failures and
/// reporting them together at the end.
fn apply_each(
    ctx: &CommandContext<'_>,
    paths: &[PathArg],
    mut op: impl FnMut(&dyn crate::client::HdfsFs, &str) -> Result<(), crate::client::ClientError>,
) -> Result<CommandResult, ShellError> {
    let mut errors = Vec::new();
    for arg in paths {
        let Some(path) = arg.as_hdfs() else { continue };
        let client = ctx.client_for(path)?;
        if let Err(err) = op(client.as_ref(), path.path()) {
            errors.push(err.to_string());
        }
    }

    if errors.is_empty() {
        Ok(CommandResult::message("Success"))
    } else {
        Ok(CommandResult::failure(errors.join("\n")))
    }
}

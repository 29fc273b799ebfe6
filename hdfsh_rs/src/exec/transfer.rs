//! Data movement commands: `-get`, `-put`, `-cp`, `-mv`.

use super::{build_local_path, copy_tree, CommandContext};
use crate::cli::{CpOptions, PathArg};
use crate::error::ShellError;
use crate::types::CommandResult;

pub(super) fn run_get(
    ctx: &CommandContext<'_>,
    src: &PathArg,
    dest: Option<&PathArg>,
) -> Result<CommandResult, ShellError> {
    let src = src
        .as_hdfs()
        .ok_or_else(|| ShellError::Execute("-get: source must be an hdfs path".to_string()))?;

    // a missing destination, or an hdfs-looking one, degrades to a
    // workspace-relative local path
    let dest_text = dest.map(|arg| arg.local_text());
    let local_path = build_local_path(ctx.config, dest_text);

    let client = ctx.client_for(src)?;
    let saved = client.download(src.path(), &local_path, true)?;
    Ok(CommandResult::message(format!(
        "Save Path: {}",
        saved.display()
    )))
}

pub(super) fn run_put(
    ctx: &CommandContext<'_>,
    src: &PathArg,
    dest: &PathArg,
) -> Result<CommandResult, ShellError> {
    let dest = dest
        .as_hdfs()
        .ok_or_else(|| ShellError::Execute("-put: destination must be an hdfs path".to_string()))?;

    let local_path = build_local_path(ctx.config, Some(src.local_text()));

    let client = ctx.client_for(dest)?;
    let remote_path = client.upload(dest.path(), &local_path, false)?;
    Ok(CommandResult::message(format!("Upload Path: {remote_path}")))
}

pub(super) fn run_cp(
    ctx: &CommandContext<'_>,
    src: &PathArg,
    dest: &PathArg,
    opts: &CpOptions,
) -> Result<CommandResult, ShellError> {
    let (PathArg::Hdfs(src), PathArg::Hdfs(dest)) = (src, dest) else {
        return Err(ShellError::Execute(
            "get wrong type of hdfs path".to_string(),
        ));
    };

    copy_tree(ctx, src, dest, opts.force)?;
    Ok(CommandResult::message("Success"))
}

pub(super) fn run_mv(
    ctx: &CommandContext<'_>,
    src: &PathArg,
    dest: &PathArg,
) -> Result<CommandResult, ShellError> {
    let (PathArg::Hdfs(src), PathArg::Hdfs(dest)) = (src, dest) else {
        return Err(ShellError::Execute(
            "get wrong type of hdfs path".to_string(),
        ));
    };

    if src.name_service() != dest.name_service() {
        return Err(ShellError::Execute(
            "could not move path in different name service".to_string(),
        ));
    }

    let client = ctx.client_for(src)?;
    client.rename(src.path(), dest.path())?;
    Ok(CommandResult::message("Success"))
}

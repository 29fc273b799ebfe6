//! Command executors.
//!
//! [`dispatch`] routes a parsed descriptor to the matching executor. Each
//! executor resolves its sessions through [`CommandContext`], talks to the
//! cluster via the [`HdfsFs`] trait, and renders a [`CommandResult`].

mod list;
mod manage;
mod transfer;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::{CommandDescriptor, ShellCommand, HELP_TIPS};
use crate::client::HdfsFs;
use crate::config::{current_user, Config};
use crate::error::ShellError;
use crate::paths::{join_path, HdfsPath};
use crate::session::SessionRegistry;
use crate::types::CommandResult;

pub struct CommandContext<'a> {
    pub sessions: &'a SessionRegistry,
    pub config: &'a Config,
}

impl CommandContext<'_> {
    pub fn client_for(&self, path: &HdfsPath) -> Result<Arc<dyn HdfsFs>, ShellError> {
        self.sessions.get_or_create(path.name_service())
    }
}

/// Execute a parsed command. The caller has already rejected descriptors
/// carrying soft errors.
pub fn dispatch(
    descriptor: &CommandDescriptor,
    ctx: &CommandContext<'_>,
) -> Result<CommandResult, ShellError> {
    match &descriptor.command {
        ShellCommand::Ls { paths, opts } => list::run_ls(ctx, paths, opts),
        ShellCommand::Du { paths, opts } => list::run_du(ctx, paths, opts),
        ShellCommand::Count { paths, opts } => list::run_count(ctx, paths, opts),
        ShellCommand::Get { src, dest } => transfer::run_get(ctx, src, dest.as_ref()),
        ShellCommand::Put { src, dest } => transfer::run_put(ctx, src, dest),
        ShellCommand::Cp { src, dest, opts } => transfer::run_cp(ctx, src, dest, opts),
        ShellCommand::Mv { src, dest } => transfer::run_mv(ctx, src, dest),
        ShellCommand::Mkdir { paths, opts } => manage::run_mkdir(ctx, paths, opts),
        ShellCommand::Rm { paths, opts } => manage::run_rm(ctx, paths, opts),
        ShellCommand::Chmod { mode, paths } => manage::run_chmod(ctx, mode, paths),
        ShellCommand::Chown {
            owner,
            group,
            paths,
        } => manage::run_chown(ctx, owner, group.as_deref(), paths),
        ShellCommand::Chgrp { group, paths } => manage::run_chgrp(ctx, group, paths),
        ShellCommand::Help => Ok(CommandResult::message(HELP_TIPS.to_string())),
    }
}

// ============================================================================
// Shared helpers
// ============================================================================

/// Resolve a user-supplied local path against the configured workspace.
/// `None`, empty, and `.` mean the workspace itself; absolute paths are
/// taken as given; anything else is joined onto the workspace.
pub(crate) fn build_local_path(config: &Config, text: Option<&str>) -> PathBuf {
    let workspace = config.workspace();
    match text {
        None => workspace,
        Some(t) if t.is_empty() || t == "." => workspace,
        Some(t) => {
            let path = Path::new(t);
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                workspace.join(t.strip_prefix("./").unwrap_or(t))
            }
        }
    }
}

/// Rename `path` into the current user's trash, mirroring its directory
/// layout under `.Trash/Current`. Returns the trash location.
pub(crate) fn move_to_trash(
    client: &dyn HdfsFs,
    path: &HdfsPath,
) -> Result<String, ShellError> {
    let trash_base = format!("/user/{}/.Trash/Current", current_user());
    let trash_dir = join_path(&trash_base, path.parent().trim_start_matches('/'));
    if client.status(&trash_dir, false)?.is_none() {
        client.makedirs(&trash_dir)?;
    }
    let target = join_path(&trash_dir, path.filename());
    client.rename(path.path(), &target)?;
    Ok(target)
}

/// Recursive copy. Directories map onto the destination via the listed
/// path suffixes, so a copy of `/a` into `/b` lands children at
/// `/b/<suffix>`; entries that are neither file nor directory are skipped.
pub(crate) fn copy_tree(
    ctx: &CommandContext<'_>,
    src: &HdfsPath,
    dest: &HdfsPath,
    force: bool,
) -> Result<(), ShellError> {
    let src_client = ctx.client_for(src)?;
    let status = src_client.status(src.path(), false)?.ok_or_else(|| {
        ShellError::Execute(format!(
            "-cp: `{}` No such file or directory",
            src.source_path()
        ))
    })?;

    if !status.is_dir() {
        return copy_file(ctx, src, dest, force);
    }

    for child in src_client.list(src.path())? {
        let child_src = src.child(&child.path_suffix);
        let child_dest = dest.child(&child.path_suffix);
        if child.is_dir() {
            copy_tree(ctx, &child_src, &child_dest, force)?;
        } else if child.is_file() {
            copy_file(ctx, &child_src, &child_dest, force)?;
        }
    }
    Ok(())
}

/// Copy a single file. The destination may be missing (parents are
/// created), an existing file (overwritten only with `force`), or a
/// directory (receives the source file name).
pub(crate) fn copy_file(
    ctx: &CommandContext<'_>,
    src: &HdfsPath,
    dest: &HdfsPath,
    force: bool,
) -> Result<(), ShellError> {
    let src_client = ctx.client_for(src)?;
    let dest_client = ctx.client_for(dest)?;

    let src_status = src_client.status(src.path(), false)?.ok_or_else(|| {
        ShellError::Execute(format!(
            "-cp: `{}` No such file or directory",
            src.source_path()
        ))
    })?;
    if !src_status.is_file() {
        return Err(ShellError::Execute("-cp: Only support copy file".to_string()));
    }

    let save = match dest_client.status(dest.path(), false)? {
        None => {
            let parent = dest.parent();
            if !parent.is_empty() && dest_client.status(parent, false)?.is_none() {
                dest_client.makedirs(parent)?;
            }
            dest.path().to_string()
        }
        Some(status) if status.is_file() => dest.path().to_string(),
        Some(status) if status.is_dir() => join_path(dest.path(), src.filename()),
        Some(status) => {
            return Err(ShellError::Execute(format!(
                "-cp: dest path `{}` is {} file type",
                dest.source_path(),
                status.kind
            )));
        }
    };

    tracing::debug!(src = src.path(), dest = %save, "copying file");
    let reader = src_client.read(src.path())?;
    dest_client.write(&save, reader, force)?;
    Ok(())
}

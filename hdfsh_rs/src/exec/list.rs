//! Read-only listing commands: `-ls`, `-du`, `-count`.

use super::CommandContext;
use crate::cli::{CountOptions, DuOptions, LsOptions, PathArg};
use crate::error::ShellError;
use crate::format::{humanize_size, timestamp_to_str};
use crate::paths::join_path;
use crate::types::{CommandResult, Table};

pub(super) fn run_ls(
    ctx: &CommandContext<'_>,
    paths: &[PathArg],
    opts: &LsOptions,
) -> Result<CommandResult, ShellError> {
    let columns: Vec<&str> = if opts.show_path_only {
        vec!["path"]
    } else {
        vec![
            "type",
            "permission",
            "replication",
            "owner",
            "group",
            "length",
            "modificationTime",
            "path",
        ]
    };
    let mut table = Table::new(columns);

    for arg in paths {
        let Some(path) = arg.as_hdfs() else { continue };
        let client = ctx.client_for(path)?;
        let mut entries = client.list(path.path())?;

        // sorts are stable and run on the raw numeric fields, before any
        // humanization; reverse applies to the final order
        if opts.sort_by_time {
            entries.sort_by_key(|e| e.modification_time);
        }
        if opts.sort_by_size {
            entries.sort_by_key(|e| e.length);
        }
        if opts.reverse_sort {
            entries.reverse();
        }

        for entry in entries {
            let full_path = join_path(path.source_path(), &entry.path_suffix);
            if opts.show_path_only {
                table.push_row(vec![full_path]);
                continue;
            }
            let length = if opts.humanized {
                humanize_size(entry.length)
            } else {
                entry.length.to_string()
            };
            table.push_row(vec![
                entry.kind,
                entry.permission,
                entry.replication.to_string(),
                entry.owner,
                entry.group,
                length,
                timestamp_to_str(entry.modification_time),
                full_path,
            ]);
        }
    }

    Ok(CommandResult::table(table))
}

pub(super) fn run_du(
    ctx: &CommandContext<'_>,
    paths: &[PathArg],
    opts: &DuOptions,
) -> Result<CommandResult, ShellError> {
    let columns: Vec<&str> = if opts.summary {
        vec!["length", "replicationLength", "path"]
    } else if opts.humanized {
        vec!["length", "replication", "replicationLength", "path"]
    } else {
        vec!["length", "replication", "path"]
    };
    let mut table = Table::new(columns);

    for arg in paths {
        let Some(path) = arg.as_hdfs() else { continue };
        let client = ctx.client_for(path)?;
        let entries = client.list(path.path())?;

        if opts.summary {
            let length: u64 = entries.iter().map(|e| e.length).sum();
            let replication_length: u64 = entries
                .iter()
                .map(|e| e.length * u64::from(e.replication))
                .sum();
            let (length, replication_length) = if opts.humanized {
                (humanize_size(length), humanize_size(replication_length))
            } else {
                (length.to_string(), replication_length.to_string())
            };
            table.push_row(vec![
                length,
                replication_length,
                path.source_path().to_string(),
            ]);
            continue;
        }

        for entry in entries {
            let full_path = join_path(path.source_path(), &entry.path_suffix);
            let replication = entry.replication.to_string();
            if opts.humanized {
                let replication_length =
                    humanize_size(entry.length * u64::from(entry.replication));
                table.push_row(vec![
                    humanize_size(entry.length),
                    replication,
                    replication_length,
                    full_path,
                ]);
            } else {
                table.push_row(vec![entry.length.to_string(), replication, full_path]);
            }
        }
    }

    Ok(CommandResult::table(table))
}

pub(super) fn run_count(
    ctx: &CommandContext<'_>,
    paths: &[PathArg],
    opts: &CountOptions,
) -> Result<CommandResult, ShellError> {
    let mut columns: Vec<&str> = Vec::new();
    if opts.quota {
        columns.extend(["quota", "spaceQuota", "spaceConsumed"]);
    }
    columns.extend(["directoryCount", "fileCount", "length", "path"]);
    let mut table = Table::new(columns);

    for arg in paths {
        let Some(path) = arg.as_hdfs() else { continue };
        let client = ctx.client_for(path)?;
        let summary = client.content(path.path())?;

        let length = if opts.humanized {
            humanize_size(summary.length)
        } else {
            summary.length.to_string()
        };

        let mut row = Vec::new();
        if opts.quota {
            let space_consumed = if opts.humanized && summary.space_consumed > 0 {
                humanize_size(summary.space_consumed)
            } else {
                summary.space_consumed.to_string()
            };
            row.push(summary.quota.to_string());
            row.push(summary.space_quota.to_string());
            row.push(space_consumed);
        }
        row.push(summary.directory_count.to_string());
        row.push(summary.file_count.to_string());
        row.push(length);
        row.push(path.source_path().to_string());
        table.push_row(row);
    }

    Ok(CommandResult::table(table))
}

//! Common value types: remote filesystem records, tabular output, and the
//! per-submission result envelope.

use serde::Deserialize;

/// Entry type strings used by WebHDFS `FileStatus` records.
pub const HDFS_FILE_TYPE: &str = "FILE";
pub const HDFS_DIRECTORY_TYPE: &str = "DIRECTORY";

/// One filesystem entry as reported by `GETFILESTATUS` / `LISTSTATUS`.
///
/// The core only projects and sorts these records; it never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileStatus {
    /// `FILE` or `DIRECTORY`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Entry name relative to the listed directory; empty for the listed
    /// path itself.
    #[serde(rename = "pathSuffix")]
    pub path_suffix: String,
    pub length: u64,
    pub owner: String,
    pub group: String,
    pub permission: String,
    #[serde(default)]
    pub replication: u32,
    /// Epoch milliseconds.
    #[serde(rename = "modificationTime")]
    pub modification_time: i64,
}

impl FileStatus {
    pub fn is_dir(&self) -> bool {
        self.kind == HDFS_DIRECTORY_TYPE
    }

    pub fn is_file(&self) -> bool {
        self.kind == HDFS_FILE_TYPE
    }
}

/// Aggregate directory summary as reported by `GETCONTENTSUMMARY`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentSummary {
    #[serde(rename = "directoryCount")]
    pub directory_count: u64,
    #[serde(rename = "fileCount")]
    pub file_count: u64,
    pub length: u64,
    #[serde(default)]
    pub quota: i64,
    #[serde(rename = "spaceConsumed", default)]
    pub space_consumed: u64,
    #[serde(rename = "spaceQuota", default)]
    pub space_quota: i64,
}

/// Tabular payload with a stable, caller-visible column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(columns: Vec<S>) -> Self {
        Table {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    /// Concatenate rows from another table produced with the same column
    /// set. Rows keep input order.
    pub fn append(&mut self, other: Table) {
        debug_assert_eq!(self.columns, other.columns);
        self.rows.extend(other.rows);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Payload of a successful submission: either a table or a plain message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultData {
    Table(Table),
    Message(String),
}

/// Uniform result envelope produced by exactly one executor invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub status: bool,
    pub data: Option<ResultData>,
    pub message: Option<String>,
}

impl CommandResult {
    pub fn table(table: Table) -> Self {
        CommandResult {
            status: true,
            data: Some(ResultData::Table(table)),
            message: None,
        }
    }

    pub fn message<S: Into<String>>(message: S) -> Self {
        CommandResult {
            status: true,
            data: Some(ResultData::Message(message.into())),
            message: None,
        }
    }

    pub fn failure<S: Into<String>>(message: S) -> Self {
        CommandResult {
            status: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

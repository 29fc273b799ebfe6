//! End-to-end command tests over an in-memory file system injected
//! through the client factory seam.

use std::collections::{BTreeMap, HashMap};
use std::io::{Cursor, Read};
use std::sync::{Arc, Mutex};

use hdfsh::client::{ClientError, HdfsFs};
use hdfsh::config::current_user;
use hdfsh::session::{ClientFactory, SessionRegistry};
use hdfsh::shell::EXPECTED_ERROR_MSG;
use hdfsh::types::{
    CommandResult, ContentSummary, FileStatus, ResultData, Table, HDFS_DIRECTORY_TYPE,
    HDFS_FILE_TYPE,
};
use hdfsh::{Config, HdfsShell, ShellError};

#[derive(Clone, Debug)]
struct Entry {
    kind: &'static str,
    data: Vec<u8>,
    replication: u32,
    mtime: i64,
    owner: String,
    group: String,
    permission: String,
}

impl Entry {
    fn dir() -> Self {
        Entry {
            kind: HDFS_DIRECTORY_TYPE,
            data: Vec::new(),
            replication: 0,
            mtime: 1_700_000_000_000,
            owner: "hive".to_string(),
            group: "hadoop".to_string(),
            permission: "755".to_string(),
        }
    }

    fn file(data: &[u8], replication: u32, mtime: i64) -> Self {
        Entry {
            kind: HDFS_FILE_TYPE,
            data: data.to_vec(),
            replication,
            mtime,
            owner: "hive".to_string(),
            group: "hadoop".to_string(),
            permission: "644".to_string(),
        }
    }

    fn status(&self, suffix: &str) -> FileStatus {
        FileStatus {
            kind: self.kind.to_string(),
            path_suffix: suffix.to_string(),
            length: self.data.len() as u64,
            owner: self.owner.clone(),
            group: self.group.clone(),
            permission: self.permission.clone(),
            replication: self.replication,
            modification_time: self.mtime,
        }
    }
}

#[derive(Default, Debug)]
struct MockFs {
    entries: Mutex<BTreeMap<String, Entry>>,
    calls: Mutex<Vec<String>>,
}

impl MockFs {
    fn seed(entries: &[(&str, Entry)]) -> Arc<Self> {
        let fs = MockFs::default();
        {
            let mut map = fs.entries.lock().unwrap();
            for (path, entry) in entries {
                map.insert((*path).to_string(), entry.clone());
            }
        }
        Arc::new(fs)
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn contains(&self, path: &str) -> bool {
        self.entries.lock().unwrap().contains_key(path)
    }

    fn data(&self, path: &str) -> Option<Vec<u8>> {
        self.entries.lock().unwrap().get(path).map(|e| e.data.clone())
    }
}

impl HdfsFs for MockFs {
    fn status(&self, path: &str, strict: bool) -> Result<Option<FileStatus>, ClientError> {
        match self.entries.lock().unwrap().get(path) {
            Some(entry) => Ok(Some(entry.status(""))),
            None if strict => Err(ClientError::NotFound {
                path: path.to_string(),
            }),
            None => Ok(None),
        }
    }

    fn list(&self, path: &str) -> Result<Vec<FileStatus>, ClientError> {
        let entries = self.entries.lock().unwrap();
        let Some(target) = entries.get(path) else {
            return Err(ClientError::NotFound {
                path: path.to_string(),
            });
        };
        if target.kind == HDFS_FILE_TYPE {
            return Ok(vec![target.status("")]);
        }
        let prefix = format!("{}/", path.trim_end_matches('/'));
        let mut out = Vec::new();
        for (key, entry) in entries.iter() {
            if let Some(rest) = key.strip_prefix(&prefix) {
                if !rest.is_empty() && !rest.contains('/') {
                    out.push(entry.status(rest));
                }
            }
        }
        Ok(out)
    }

    fn content(&self, path: &str) -> Result<ContentSummary, ClientError> {
        let entries = self.entries.lock().unwrap();
        if !entries.contains_key(path) {
            return Err(ClientError::NotFound {
                path: path.to_string(),
            });
        }
        let prefix = format!("{}/", path.trim_end_matches('/'));
        let mut summary = ContentSummary {
            directory_count: 1,
            file_count: 0,
            length: 0,
            quota: -1,
            space_consumed: 0,
            space_quota: -1,
        };
        for (key, entry) in entries.iter() {
            if !key.starts_with(&prefix) {
                continue;
            }
            if entry.kind == HDFS_DIRECTORY_TYPE {
                summary.directory_count += 1;
            } else {
                summary.file_count += 1;
                summary.length += entry.data.len() as u64;
                summary.space_consumed += entry.data.len() as u64 * u64::from(entry.replication);
            }
        }
        Ok(summary)
    }

    fn read(&self, path: &str) -> Result<Box<dyn Read + Send>, ClientError> {
        match self.entries.lock().unwrap().get(path) {
            Some(entry) if entry.kind == HDFS_FILE_TYPE => {
                Ok(Box::new(Cursor::new(entry.data.clone())))
            }
            _ => Err(ClientError::NotFound {
                path: path.to_string(),
            }),
        }
    }

    fn write(
        &self,
        path: &str,
        mut data: Box<dyn Read + Send + 'static>,
        overwrite: bool,
    ) -> Result<(), ClientError> {
        let mut buf = Vec::new();
        data.read_to_end(&mut buf)?;
        let mut entries = self.entries.lock().unwrap();
        if entries.contains_key(path) && !overwrite {
            return Err(ClientError::AlreadyExists(path.to_string()));
        }
        entries.insert(path.to_string(), Entry::file(&buf, 3, 1_700_000_000_000));
        Ok(())
    }

    fn delete(&self, path: &str, _recursive: bool) -> Result<bool, ClientError> {
        self.record(format!("delete {path}"));
        Ok(self.entries.lock().unwrap().remove(path).is_some())
    }

    fn rename(&self, src: &str, dest: &str) -> Result<(), ClientError> {
        self.record(format!("rename {src} {dest}"));
        let mut entries = self.entries.lock().unwrap();
        let moved: Vec<(String, Entry)> = entries
            .iter()
            .filter(|(key, _)| {
                key.as_str() == src || key.starts_with(&format!("{}/", src.trim_end_matches('/')))
            })
            .map(|(key, entry)| (key.clone(), entry.clone()))
            .collect();
        if moved.is_empty() {
            return Err(ClientError::NotFound {
                path: src.to_string(),
            });
        }
        for (key, entry) in moved {
            entries.remove(&key);
            let new_key = format!("{dest}{}", &key[src.len()..]);
            entries.insert(new_key, entry);
        }
        Ok(())
    }

    fn makedirs(&self, path: &str) -> Result<(), ClientError> {
        self.record(format!("makedirs {path}"));
        let mut entries = self.entries.lock().unwrap();
        let mut current = String::new();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current.push('/');
            current.push_str(segment);
            entries.entry(current.clone()).or_insert_with(Entry::dir);
        }
        Ok(())
    }

    fn set_permission(&self, path: &str, permission: &str) -> Result<(), ClientError> {
        self.record(format!("set_permission {path} {permission}"));
        let mut entries = self.entries.lock().unwrap();
        match entries.get_mut(path) {
            Some(entry) => {
                entry.permission = permission.to_string();
                Ok(())
            }
            None => Err(ClientError::NotFound {
                path: path.to_string(),
            }),
        }
    }

    fn set_owner(
        &self,
        path: &str,
        owner: Option<&str>,
        group: Option<&str>,
    ) -> Result<(), ClientError> {
        self.record(format!("set_owner {path} {owner:?} {group:?}"));
        let mut entries = self.entries.lock().unwrap();
        match entries.get_mut(path) {
            Some(entry) => {
                if let Some(owner) = owner {
                    entry.owner = owner.to_string();
                }
                if let Some(group) = group {
                    entry.group = group.to_string();
                }
                Ok(())
            }
            None => Err(ClientError::NotFound {
                path: path.to_string(),
            }),
        }
    }
}

struct MockFactory {
    clusters: HashMap<String, Arc<MockFs>>,
}

impl ClientFactory for MockFactory {
    fn connect(
        &self,
        name_service: &str,
        _config: &Config,
    ) -> Result<Arc<dyn HdfsFs>, ShellError> {
        self.clusters
            .get(name_service)
            .map(|fs| Arc::clone(fs) as Arc<dyn HdfsFs>)
            .ok_or_else(|| ShellError::Session(format!("unknown name service '{name_service}'")))
    }
}

fn test_config(workspace: &std::path::Path) -> Config {
    let mut nodes = HashMap::new();
    nodes.insert("ns1".to_string(), vec!["nn1".to_string()]);
    nodes.insert("ns2".to_string(), vec!["nn2".to_string()]);
    Config {
        web_hdfs_nodes: nodes,
        default_name_service: Some("ns1".to_string()),
        user_workspace: Some(workspace.to_string_lossy().into_owned()),
        ..Config::default()
    }
}

fn shell_with(
    workspace: &std::path::Path,
    clusters: HashMap<String, Arc<MockFs>>,
) -> HdfsShell {
    let config = Arc::new(test_config(workspace));
    let registry =
        SessionRegistry::with_factory(Arc::clone(&config), Box::new(MockFactory { clusters }));
    HdfsShell::with_registry(config, registry)
}

fn single_cluster(fs: Arc<MockFs>, workspace: &std::path::Path) -> HdfsShell {
    let mut clusters = HashMap::new();
    clusters.insert("ns1".to_string(), fs);
    shell_with(workspace, clusters)
}

fn result_table(result: &CommandResult) -> &Table {
    assert!(result.status, "command failed: {:?}", result.message);
    match result.data.as_ref() {
        Some(ResultData::Table(table)) => table,
        other => panic!("expected table, got {other:?}"),
    }
}

fn result_message(result: &CommandResult) -> &str {
    assert!(result.status, "command failed: {:?}", result.message);
    match result.data.as_ref() {
        Some(ResultData::Message(message)) => message,
        other => panic!("expected message, got {other:?}"),
    }
}

fn path_column(table: &Table) -> Vec<String> {
    table
        .rows
        .iter()
        .map(|row| row.last().cloned().unwrap_or_default())
        .collect()
}

#[test]
fn ls_sorts_by_size_and_time() {
    let ws = tempfile::tempdir().unwrap();
    let fs = MockFs::seed(&[
        ("/data", Entry::dir()),
        ("/data/a", Entry::file(&[0; 300], 3, 3_000)),
        ("/data/b", Entry::file(&[0; 100], 3, 1_000)),
        ("/data/c", Entry::file(&[0; 200], 3, 2_000)),
    ]);
    let shell = single_cluster(fs, ws.path());

    let by_size = shell.submit("hdfs dfs -ls -S /data");
    assert_eq!(
        path_column(result_table(&by_size)),
        vec!["/data/b", "/data/c", "/data/a"]
    );

    let by_time_rev = shell.submit("hdfs dfs -ls -t -r /data");
    assert_eq!(
        path_column(result_table(&by_time_rev)),
        vec!["/data/a", "/data/c", "/data/b"]
    );
}

#[test]
fn ls_show_path_only_collapses_columns() {
    let ws = tempfile::tempdir().unwrap();
    let fs = MockFs::seed(&[
        ("/data", Entry::dir()),
        ("/data/a", Entry::file(b"x", 3, 1_000)),
    ]);
    let shell = single_cluster(fs, ws.path());

    let result = shell.submit("hdfs dfs -ls -C /data");
    let table = result_table(&result);
    assert_eq!(table.columns, vec!["path"]);
    assert_eq!(table.rows, vec![vec!["/data/a".to_string()]]);
}

#[test]
fn ls_humanizes_length_after_sorting() {
    let ws = tempfile::tempdir().unwrap();
    let fs = MockFs::seed(&[
        ("/data", Entry::dir()),
        ("/data/big", Entry::file(&[0; 2048], 3, 1_000)),
        ("/data/small", Entry::file(&[0; 512], 3, 2_000)),
    ]);
    let shell = single_cluster(fs, ws.path());

    let result = shell.submit("hdfs dfs -ls -S -h /data");
    let table = result_table(&result);
    // ascending by raw length even though rendered humanized
    assert_eq!(path_column(table), vec!["/data/small", "/data/big"]);
    let length_idx = table.columns.iter().position(|c| c == "length").unwrap();
    assert_eq!(table.rows[0][length_idx], "512 B");
    assert_eq!(table.rows[1][length_idx], "2 KB");
}

#[test]
fn du_summary_humanized() {
    let ws = tempfile::tempdir().unwrap();
    let fs = MockFs::seed(&[
        ("/data", Entry::dir()),
        ("/data/a", Entry::file(&[0; 100], 3, 1_000)),
        ("/data/b", Entry::file(&[0; 200], 3, 1_000)),
    ]);
    let shell = single_cluster(fs, ws.path());

    let result = shell.submit("hdfs dfs -du -s -h /data");
    let table = result_table(&result);
    assert_eq!(table.columns, vec!["length", "replicationLength", "path"]);
    assert_eq!(
        table.rows,
        vec![vec![
            "300 B".to_string(),
            "900 B".to_string(),
            "/data".to_string()
        ]]
    );
}

#[test]
fn du_plain_omits_replication_length() {
    let ws = tempfile::tempdir().unwrap();
    let fs = MockFs::seed(&[
        ("/data", Entry::dir()),
        ("/data/a", Entry::file(&[0; 100], 2, 1_000)),
    ]);
    let shell = single_cluster(fs, ws.path());

    let result = shell.submit("hdfs dfs -du /data");
    let table = result_table(&result);
    assert_eq!(table.columns, vec!["length", "replication", "path"]);
    assert_eq!(
        table.rows,
        vec![vec![
            "100".to_string(),
            "2".to_string(),
            "/data/a".to_string()
        ]]
    );
}

#[test]
fn count_with_quota_columns() {
    let ws = tempfile::tempdir().unwrap();
    let fs = MockFs::seed(&[
        ("/data", Entry::dir()),
        ("/data/sub", Entry::dir()),
        ("/data/a", Entry::file(&[0; 100], 3, 1_000)),
    ]);
    let shell = single_cluster(fs, ws.path());

    let result = shell.submit("hdfs dfs -count -q /data");
    let table = result_table(&result);
    assert_eq!(
        table.columns,
        vec![
            "quota",
            "spaceQuota",
            "spaceConsumed",
            "directoryCount",
            "fileCount",
            "length",
            "path"
        ]
    );
    assert_eq!(
        table.rows,
        vec![vec![
            "-1".to_string(),
            "-1".to_string(),
            "300".to_string(),
            "2".to_string(),
            "1".to_string(),
            "100".to_string(),
            "/data".to_string()
        ]]
    );
}

#[test]
fn mkdir_reports_existing_and_creates_missing() {
    let ws = tempfile::tempdir().unwrap();
    let fs = MockFs::seed(&[("/x", Entry::dir())]);
    let shell = single_cluster(Arc::clone(&fs), ws.path());

    let result = shell.submit("hdfs dfs -mkdir /x /y");
    assert_eq!(result_message(&result), "mkdir: `/x` File exists");
    assert!(fs.contains("/y"));
}

#[test]
fn rm_moves_to_trash() {
    let ws = tempfile::tempdir().unwrap();
    let fs = MockFs::seed(&[
        ("/a", Entry::dir()),
        ("/a/b.txt", Entry::file(b"bytes", 3, 1_000)),
    ]);
    let shell = single_cluster(Arc::clone(&fs), ws.path());

    let result = shell.submit("hdfs dfs -rm /a/b.txt");
    assert_eq!(result_message(&result), "Success");
    assert!(!fs.contains("/a/b.txt"));
    let trash = format!("/user/{}/.Trash/Current/a/b.txt", current_user());
    assert!(fs.contains(&trash), "missing trash entry {trash}");
}

#[test]
fn rm_missing_path_is_expected_failure() {
    let ws = tempfile::tempdir().unwrap();
    let fs = MockFs::seed(&[("/a", Entry::dir())]);
    let shell = single_cluster(Arc::clone(&fs), ws.path());

    let result = shell.submit("hdfs dfs -rm /a/missing.txt");
    assert!(!result.status);
    let message = result.message.unwrap();
    assert!(message.starts_with(EXPECTED_ERROR_MSG));
    assert!(message.contains("-rm: `/a/missing.txt` No such file or directory"));
    assert!(fs.calls().iter().all(|c| !c.starts_with("rename")));
}

#[test]
fn mv_renames_within_name_service() {
    let ws = tempfile::tempdir().unwrap();
    let fs = MockFs::seed(&[
        ("/a", Entry::dir()),
        ("/a/f.txt", Entry::file(b"x", 3, 1_000)),
        ("/b", Entry::dir()),
    ]);
    let shell = single_cluster(Arc::clone(&fs), ws.path());

    let result = shell.submit("hdfs dfs -mv /a/f.txt /b/f.txt");
    assert_eq!(result_message(&result), "Success");
    assert!(!fs.contains("/a/f.txt"));
    assert!(fs.contains("/b/f.txt"));
}

#[test]
fn mv_across_name_services_is_rejected() {
    let ws = tempfile::tempdir().unwrap();
    let ns1 = MockFs::seed(&[("/a", Entry::dir())]);
    let ns2 = MockFs::seed(&[]);
    let mut clusters = HashMap::new();
    clusters.insert("ns1".to_string(), Arc::clone(&ns1));
    clusters.insert("ns2".to_string(), Arc::clone(&ns2));
    let shell = shell_with(ws.path(), clusters);

    let result = shell.submit("hdfs dfs -mv hdfs://ns1/a hdfs://ns2/a");
    assert!(!result.status);
    assert!(result
        .message
        .unwrap()
        .contains("could not move path in different name service"));
    assert!(ns1.calls().iter().all(|c| !c.starts_with("rename")));
    assert!(ns2.calls().iter().all(|c| !c.starts_with("rename")));
}

#[test]
fn cp_copies_directory_tree() {
    let ws = tempfile::tempdir().unwrap();
    let fs = MockFs::seed(&[
        ("/src", Entry::dir()),
        ("/src/f1", Entry::file(b"one", 3, 1_000)),
        ("/src/sub", Entry::dir()),
        ("/src/sub/f2", Entry::file(b"two", 3, 1_000)),
    ]);
    let shell = single_cluster(Arc::clone(&fs), ws.path());

    let result = shell.submit("hdfs dfs -cp /src /dst");
    assert_eq!(result_message(&result), "Success");
    assert_eq!(fs.data("/dst/f1").unwrap(), b"one");
    assert_eq!(fs.data("/dst/sub/f2").unwrap(), b"two");
}

#[test]
fn cp_missing_source_is_failure() {
    let ws = tempfile::tempdir().unwrap();
    let fs = MockFs::seed(&[]);
    let shell = single_cluster(fs, ws.path());

    let result = shell.submit("hdfs dfs -cp /nope /dst");
    assert!(!result.status);
    assert!(result
        .message
        .unwrap()
        .contains("-cp: `/nope` No such file or directory"));
}

#[test]
fn cp_without_force_keeps_existing_file() {
    let ws = tempfile::tempdir().unwrap();
    let fs = MockFs::seed(&[
        ("/src.txt", Entry::file(b"new", 3, 1_000)),
        ("/dst.txt", Entry::file(b"old", 3, 1_000)),
    ]);
    let shell = single_cluster(Arc::clone(&fs), ws.path());

    let result = shell.submit("hdfs dfs -cp /src.txt /dst.txt");
    assert!(!result.status);
    assert_eq!(fs.data("/dst.txt").unwrap(), b"old");

    let forced = shell.submit("hdfs dfs -cp -f /src.txt /dst.txt");
    assert_eq!(result_message(&forced), "Success");
    assert_eq!(fs.data("/dst.txt").unwrap(), b"new");
}

#[test]
fn chmod_continues_past_missing_path() {
    let ws = tempfile::tempdir().unwrap();
    let fs = MockFs::seed(&[("/ok", Entry::file(b"x", 3, 1_000))]);
    let shell = single_cluster(Arc::clone(&fs), ws.path());

    let result = shell.submit("hdfs dfs -chmod 700 /missing");
    assert!(!result.status);
    assert!(result.message.unwrap().contains("No such file or directory"));

    let result = shell.submit("hdfs dfs -chmod 700 /ok");
    assert_eq!(result_message(&result), "Success");
    assert!(fs.calls().contains(&"set_permission /ok 700".to_string()));
}

#[test]
fn chown_and_chgrp_set_owner_fields() {
    let ws = tempfile::tempdir().unwrap();
    let fs = MockFs::seed(&[("/f", Entry::file(b"x", 3, 1_000))]);
    let shell = single_cluster(Arc::clone(&fs), ws.path());

    let result = shell.submit("hdfs dfs -chown alice:analytics /f");
    assert_eq!(result_message(&result), "Success");
    let result = shell.submit("hdfs dfs -chgrp ops /f");
    assert_eq!(result_message(&result), "Success");

    let calls = fs.calls();
    assert!(calls.contains(&"set_owner /f Some(\"alice\") Some(\"analytics\")".to_string()));
    assert!(calls.contains(&"set_owner /f None Some(\"ops\")".to_string()));
}

#[test]
fn get_downloads_into_workspace() {
    let ws = tempfile::tempdir().unwrap();
    let fs = MockFs::seed(&[("/data/a.txt", Entry::file(b"hello", 3, 1_000))]);
    let shell = single_cluster(fs, ws.path());

    let result = shell.submit("hdfs dfs -get /data/a.txt out.txt");
    let expected = ws.path().join("out.txt");
    assert_eq!(
        result_message(&result),
        format!("Save Path: {}", expected.display())
    );
    assert_eq!(std::fs::read(expected).unwrap(), b"hello");
}

#[test]
fn get_without_destination_uses_workspace() {
    let ws = tempfile::tempdir().unwrap();
    let fs = MockFs::seed(&[("/data/a.txt", Entry::file(b"hello", 3, 1_000))]);
    let shell = single_cluster(fs, ws.path());

    let result = shell.submit("hdfs dfs -get /data/a.txt");
    assert!(result.status, "failed: {:?}", result.message);
    assert_eq!(std::fs::read(ws.path().join("a.txt")).unwrap(), b"hello");
}

#[test]
fn put_uploads_into_remote_directory() {
    let ws = tempfile::tempdir().unwrap();
    std::fs::write(ws.path().join("data.csv"), b"1,2,3").unwrap();
    let fs = MockFs::seed(&[("/up", Entry::dir())]);
    let shell = single_cluster(Arc::clone(&fs), ws.path());

    let result = shell.submit("hdfs dfs -put data.csv /up");
    assert_eq!(result_message(&result), "Upload Path: /up/data.csv");
    assert_eq!(fs.data("/up/data.csv").unwrap(), b"1,2,3");
}

#[test]
fn put_refuses_overwrite() {
    let ws = tempfile::tempdir().unwrap();
    std::fs::write(ws.path().join("data.csv"), b"new").unwrap();
    let fs = MockFs::seed(&[("/up/data.csv", Entry::file(b"old", 3, 1_000))]);
    let shell = single_cluster(Arc::clone(&fs), ws.path());

    let result = shell.submit("hdfs dfs -put data.csv /up/data.csv");
    assert!(!result.status);
    assert!(result.message.unwrap().contains("File exists"));
    assert_eq!(fs.data("/up/data.csv").unwrap(), b"old");
}

#[test]
fn ls_routes_embedded_name_service() {
    let ws = tempfile::tempdir().unwrap();
    let ns1 = MockFs::seed(&[("/data", Entry::dir())]);
    let ns2 = MockFs::seed(&[
        ("/other", Entry::dir()),
        ("/other/f", Entry::file(b"z", 3, 1_000)),
    ]);
    let mut clusters = HashMap::new();
    clusters.insert("ns1".to_string(), ns1);
    clusters.insert("ns2".to_string(), ns2);
    let shell = shell_with(ws.path(), clusters);

    let result = shell.submit("hdfs dfs -ls hdfs://ns2/other");
    assert_eq!(
        path_column(result_table(&result)),
        vec!["hdfs://ns2/other/f"]
    );
}

#[test]
fn soft_parse_errors_block_execution() {
    let ws = tempfile::tempdir().unwrap();
    let fs = MockFs::seed(&[("/data", Entry::dir())]);
    let shell = single_cluster(Arc::clone(&fs), ws.path());

    let result = shell.submit("hdfs dfs -ls /data junk");
    assert!(!result.status);
    assert!(result
        .message
        .unwrap()
        .contains("-ls: 'junk': No such file or directory"));
    assert!(fs.calls().is_empty());
}

#[test]
fn help_bypasses_sessions() {
    let ws = tempfile::tempdir().unwrap();
    let shell = shell_with(ws.path(), HashMap::new());

    let result = shell.submit("hdfs dfs -help");
    assert!(result_message(&result).contains("Usage: hadoop fs"));
}

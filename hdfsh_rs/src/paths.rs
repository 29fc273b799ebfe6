//! HDFS path resolution.
//!
//! A raw path string like `hdfs://prod-ns2/user/hive` or `/user/hive` is
//! resolved into an [`HdfsPath`]: which name service it belongs to, the
//! absolute in-filesystem path, and the leading protocol+name-service
//! prefix. The prefix is kept so recursive traversal can rebuild full
//! child path strings without re-deriving the name service.
//!
//! Resolution is pure string work: no network I/O, and it never fails.
//! Inputs with no recognizable name service fall back to the configured
//! default (possibly empty); executors reject an empty name service when
//! they actually need one.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::Config;

/// Protocol marker for plain HDFS paths.
pub const HDFS_PREFIX: &str = "hdfs://";
/// Protocol marker for already-resolved HA paths.
pub const RESOLVED_PREFIX: &str = "resolved://";

const PROTOCOLS: [&str; 2] = [HDFS_PREFIX, RESOLVED_PREFIX];

/// True if the string should be treated as an HDFS path: it carries a
/// protocol marker or starts at the filesystem root.
pub fn is_hdfs_path(path: &str) -> bool {
    path.starts_with(HDFS_PREFIX) || path.starts_with(RESOLVED_PREFIX) || path.starts_with('/')
}

static LOCAL_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.{0,2}/?[\w.\-]+(?:/[\w.\-]+)*/?$").expect("local path regex"));

/// True if the string looks like a plausible local filesystem path
/// (`aa.txt`, `./aa.txt`, `dir/file`). Bare words with no `.` or `/` are
/// rejected so typos surface as "No such file or directory" at parse time.
pub fn is_local_path(text: &str) -> bool {
    (text.contains('/') || text.contains('.')) && LOCAL_PATH_RE.is_match(text)
}

/// A resolved HDFS path. Immutable after construction.
///
/// Invariant: `source_path == path_service + path` for every instance,
/// including children built with [`HdfsPath::child`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HdfsPath {
    source_path: String,
    name_service: String,
    path: String,
    path_service: String,
}

impl HdfsPath {
    /// Resolve a raw path string against the configured name services.
    pub fn resolve(raw: &str, config: &Config) -> Self {
        let name_service = detect_name_service(raw, config);
        let path = real_path(raw, &name_service);
        let path_service = raw.replacen(&path, "", 1);
        HdfsPath {
            source_path: raw.to_string(),
            name_service,
            path,
            path_service,
        }
    }

    /// The string exactly as typed by the user.
    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    /// Name service this path belongs to. Empty when unresolved.
    pub fn name_service(&self) -> &str {
        &self.name_service
    }

    /// Absolute path inside the filesystem, protocol and name service
    /// stripped.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Leading protocol+name-service portion of the source string.
    pub fn path_service(&self) -> &str {
        &self.path_service
    }

    /// Build the path of a directory entry, reusing the parent's
    /// path-service prefix instead of re-resolving from scratch.
    pub fn child(&self, suffix: &str) -> HdfsPath {
        let path = join_path(&self.path, suffix);
        HdfsPath {
            source_path: format!("{}{}", self.path_service, path),
            name_service: self.name_service.clone(),
            path,
            path_service: self.path_service.clone(),
        }
    }

    /// Final component of the absolute path.
    pub fn filename(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or("")
    }

    /// Absolute path of the parent directory.
    pub fn parent(&self) -> &str {
        match self.path.rfind('/') {
            Some(0) => "/",
            Some(idx) => &self.path[..idx],
            None => "",
        }
    }
}

/// Join a base path and an entry suffix with exactly one separator.
pub fn join_path(base: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), suffix)
}

/// Earliest configured name service occurring in the raw string; ties go
/// to the longest match. Falls back to the configured default.
fn detect_name_service(raw: &str, config: &Config) -> String {
    let mut best: Option<(usize, &str)> = None;
    for ns in config.name_services() {
        if ns.is_empty() {
            continue;
        }
        if let Some(idx) = raw.find(ns) {
            let better = match best {
                None => true,
                Some((best_idx, best_ns)) => {
                    idx < best_idx || (idx == best_idx && ns.len() > best_ns.len())
                }
            };
            if better {
                best = Some((idx, ns));
            }
        }
    }
    match best {
        Some((_, ns)) => ns.to_string(),
        None => config.default_name_service().to_string(),
    }
}

/// Strip one occurrence of each protocol marker, then one occurrence of
/// the detected name service, off the front of the string.
fn real_path(raw: &str, name_service: &str) -> String {
    let mut path = raw;
    for protocol in PROTOCOLS {
        if let Some(rest) = path.strip_prefix(protocol) {
            path = rest;
        }
    }
    if !name_service.is_empty() {
        if let Some(rest) = path.strip_prefix(name_service) {
            path = rest;
        }
    }
    path.to_string()
}

//! WebHDFS REST client.
//!
//! [`HdfsFs`] is the seam the executors talk through; [`WebHdfsClient`] is
//! the production implementation over `reqwest::blocking`. The client keeps
//! redirects disabled so the two-step OPEN/CREATE handshake (namenode
//! answers 307, datanode carries the bytes) stays explicit, and walks the
//! configured namenode hosts on transport failures and standby answers.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use reqwest::blocking::{Body, Client, Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, LOCATION};
use reqwest::redirect::Policy;
use reqwest::{Method, StatusCode};
use serde::Deserialize;

use crate::config::Config;
use crate::paths::join_path;
use crate::types::{ContentSummary, FileStatus};

/// Buffer size for streamed reads and writes.
pub const CHUNK_SIZE: usize = 4 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("`{path}`: No such file or directory")]
    NotFound { path: String },

    #[error("`{0}`: File exists")]
    AlreadyExists(String),

    /// A RemoteException the name node reported and we have no better
    /// mapping for.
    #[error("{exception}: {message}")]
    Remote { exception: String, message: String },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("no live namenode answered for name service '{0}'")]
    NoLiveNodes(String),
}

/// File system operations the command executors need, path arguments being
/// HDFS-absolute (`/user/...`, no scheme, no name service).
pub trait HdfsFs: Send + Sync + fmt::Debug {
    /// Status of `path`. With `strict` false a missing path yields
    /// `Ok(None)` instead of [`ClientError::NotFound`].
    fn status(&self, path: &str, strict: bool) -> Result<Option<FileStatus>, ClientError>;

    /// Direct children of a directory (or the single entry for a file).
    fn list(&self, path: &str) -> Result<Vec<FileStatus>, ClientError>;

    /// Recursive content summary of `path`.
    fn content(&self, path: &str) -> Result<ContentSummary, ClientError>;

    /// Open `path` for streamed reading.
    fn read(&self, path: &str) -> Result<Box<dyn Read + Send>, ClientError>;

    /// Create `path` from a streamed reader.
    fn write(
        &self,
        path: &str,
        data: Box<dyn Read + Send + 'static>,
        overwrite: bool,
    ) -> Result<(), ClientError>;

    /// Permanently delete `path`. Returns whether anything was removed.
    fn delete(&self, path: &str, recursive: bool) -> Result<bool, ClientError>;

    fn rename(&self, src: &str, dest: &str) -> Result<(), ClientError>;

    /// Create a directory and any missing parents.
    fn makedirs(&self, path: &str) -> Result<(), ClientError>;

    /// Set the octal permission string (for example `"755"`).
    fn set_permission(&self, path: &str, permission: &str) -> Result<(), ClientError>;

    /// Change owner and/or group. At least one must be given.
    fn set_owner(
        &self,
        path: &str,
        owner: Option<&str>,
        group: Option<&str>,
    ) -> Result<(), ClientError>;

    /// Release any resources tied to the connection.
    fn close(&self) {}

    /// Download `path` to `local`, returning the file written. A `local`
    /// that is an existing directory receives the remote base name.
    fn download(&self, path: &str, local: &Path, overwrite: bool) -> Result<PathBuf, ClientError> {
        let target = if local.is_dir() {
            local.join(hdfs_basename(path))
        } else {
            local.to_path_buf()
        };
        if !overwrite && target.exists() {
            return Err(ClientError::AlreadyExists(target.display().to_string()));
        }
        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let reader = self.read(path)?;
        let mut reader = BufReader::with_capacity(CHUNK_SIZE, reader);
        let mut out = File::create(&target)?;
        io::copy(&mut reader, &mut out)?;
        Ok(target)
    }

    /// Upload the local file at `local` to `remote`, returning the path
    /// written. A `remote` that is an existing directory receives the
    /// local file name.
    fn upload(&self, remote: &str, local: &Path, overwrite: bool) -> Result<String, ClientError> {
        let mut target = remote.to_string();
        if let Some(status) = self.status(remote, false)? {
            if status.is_dir() {
                let name = local
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                target = join_path(remote, &name);
                if !overwrite && self.status(&target, false)?.is_some() {
                    return Err(ClientError::AlreadyExists(target));
                }
            } else if !overwrite {
                return Err(ClientError::AlreadyExists(target));
            }
        }

        let file = File::open(local)?;
        self.write(&target, Box::new(file), overwrite)?;
        Ok(target)
    }
}

fn hdfs_basename(path: &str) -> &str {
    path.trim_end_matches('/').rsplit('/').next().unwrap_or(path)
}

// ============================================================================
// WebHDFS implementation
// ============================================================================

#[derive(Debug)]
pub struct WebHdfsClient {
    name_service: String,
    base_urls: Vec<String>,
    http: Client,
    retry_schedule: Vec<f64>,
    user_name: Option<String>,
    // index of the namenode that last answered, tried first next time
    active: AtomicUsize,
}

impl WebHdfsClient {
    pub fn new(name_service: &str, nodes: &[String], config: &Config) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        for (key, value) in &config.custom_headers {
            let name = HeaderName::from_bytes(key.as_bytes());
            let val = HeaderValue::from_str(value);
            match (name, val) {
                (Ok(name), Ok(val)) => {
                    headers.insert(name, val);
                }
                _ => {
                    tracing::warn!(header = %key, "skipping invalid custom header");
                }
            }
        }

        let http = Client::builder()
            .redirect(Policy::none())
            .default_headers(headers)
            .danger_accept_invalid_certs(config.ignore_ssl_errors)
            .build()?;

        let base_urls = nodes
            .iter()
            .map(|node| {
                if node.contains("://") {
                    format!("{}/webhdfs/v1", node.trim_end_matches('/'))
                } else if node.contains(':') {
                    format!("http://{node}/webhdfs/v1")
                } else {
                    format!("http://{}:{}/webhdfs/v1", node, config.webhdfs_port)
                }
            })
            .collect();

        Ok(WebHdfsClient {
            name_service: name_service.to_string(),
            base_urls,
            http,
            retry_schedule: config.retry_seconds_to_sleep_list.clone(),
            user_name: config.user_name.clone(),
            active: AtomicUsize::new(0),
        })
    }

    fn query(&self, op: &str, params: &[(&str, &str)]) -> String {
        let mut q = format!("op={op}");
        if let Some(user) = &self.user_name {
            q.push_str(&format!("&user.name={}", urlencoding::encode(user)));
        }
        for (key, value) in params {
            q.push_str(&format!("&{key}={}", urlencoding::encode(value)));
        }
        q
    }

    /// Issue a namenode request, failing over across hosts on transport
    /// errors and standby answers, with the configured backoff between
    /// full passes. A 307 answer is returned to the caller untouched.
    fn exec(&self, method: Method, path: &str, query: &str) -> Result<Response, ClientError> {
        let mut last_err: Option<ClientError> = None;
        let passes = self.retry_schedule.len() + 1;
        for pass in 0..passes {
            if pass > 0 {
                let secs = self.retry_schedule[pass - 1];
                tracing::debug!(pass, secs, path, "retrying webhdfs request");
                thread::sleep(Duration::from_secs_f64(secs));
            }
            for offset in 0..self.base_urls.len() {
                let idx = (self.active.load(Ordering::Relaxed) + offset) % self.base_urls.len();
                let url = format!("{}{}?{}", self.base_urls[idx], encode_path(path), query);
                let resp = match self.http.request(method.clone(), &url).send() {
                    Ok(resp) => resp,
                    Err(err) => {
                        tracing::debug!(%url, error = %err, "namenode unreachable");
                        last_err = Some(ClientError::Transport(err));
                        continue;
                    }
                };

                let status = resp.status();
                if status.is_success() || status == StatusCode::TEMPORARY_REDIRECT {
                    self.active.store(idx, Ordering::Relaxed);
                    return Ok(resp);
                }

                match remote_failure(path, resp) {
                    FailMode::Standby(err) => {
                        tracing::debug!(%url, "namenode in standby, trying next host");
                        last_err = Some(err);
                        continue;
                    }
                    FailMode::Final(err) => return Err(err),
                }
            }
        }
        Err(last_err.unwrap_or_else(|| ClientError::NoLiveNodes(self.name_service.clone())))
    }

    /// Follow the datanode redirect of an OPEN response.
    fn follow_read(&self, path: &str, resp: Response) -> Result<Response, ClientError> {
        if resp.status() != StatusCode::TEMPORARY_REDIRECT {
            return Ok(resp);
        }
        let location = redirect_target(&resp).ok_or_else(|| missing_location(path))?;
        let data = self.http.get(&location).send()?;
        if !data.status().is_success() {
            return Err(final_remote_error(path, data));
        }
        Ok(data)
    }
}

fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|seg| urlencoding::encode(seg).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

fn redirect_target(resp: &Response) -> Option<String> {
    resp.headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn missing_location(path: &str) -> ClientError {
    ClientError::Remote {
        exception: "RedirectError".to_string(),
        message: format!("redirect for `{path}` carried no Location header"),
    }
}

#[derive(Deserialize)]
struct RemoteExceptionEnvelope {
    #[serde(rename = "RemoteException")]
    remote_exception: RemoteExceptionBody,
}

#[derive(Deserialize)]
struct RemoteExceptionBody {
    exception: String,
    #[serde(default)]
    message: String,
}

enum FailMode {
    /// The host cannot serve writes right now; another one may.
    Standby(ClientError),
    Final(ClientError),
}

fn remote_failure(path: &str, resp: Response) -> FailMode {
    let status = resp.status();
    let text = resp.text().unwrap_or_default();
    match serde_json::from_str::<RemoteExceptionEnvelope>(&text) {
        Ok(env) => {
            let body = env.remote_exception;
            match body.exception.as_str() {
                "StandbyException" | "RetriableException" => {
                    FailMode::Standby(ClientError::Remote {
                        exception: body.exception,
                        message: body.message,
                    })
                }
                "FileNotFoundException" => FailMode::Final(ClientError::NotFound {
                    path: path.to_string(),
                }),
                "FileAlreadyExistsException" => {
                    FailMode::Final(ClientError::AlreadyExists(path.to_string()))
                }
                _ => FailMode::Final(ClientError::Remote {
                    exception: body.exception,
                    message: body.message,
                }),
            }
        }
        Err(_) => FailMode::Final(ClientError::Remote {
            exception: format!("HTTP {status}"),
            message: text,
        }),
    }
}

fn final_remote_error(path: &str, resp: Response) -> ClientError {
    match remote_failure(path, resp) {
        FailMode::Standby(err) | FailMode::Final(err) => err,
    }
}

#[derive(Deserialize)]
struct FileStatusEnvelope {
    #[serde(rename = "FileStatus")]
    file_status: FileStatus,
}

#[derive(Deserialize)]
struct FileStatusesEnvelope {
    #[serde(rename = "FileStatuses")]
    file_statuses: FileStatusList,
}

#[derive(Deserialize)]
struct FileStatusList {
    #[serde(rename = "FileStatus", default)]
    file_status: Vec<FileStatus>,
}

#[derive(Deserialize)]
struct ContentSummaryEnvelope {
    #[serde(rename = "ContentSummary")]
    content_summary: ContentSummary,
}

#[derive(Deserialize)]
struct BooleanEnvelope {
    boolean: bool,
}

impl HdfsFs for WebHdfsClient {
    fn status(&self, path: &str, strict: bool) -> Result<Option<FileStatus>, ClientError> {
        let resp = match self.exec(Method::GET, path, &self.query("GETFILESTATUS", &[])) {
            Ok(resp) => resp,
            Err(ClientError::NotFound { .. }) if !strict => return Ok(None),
            Err(err) => return Err(err),
        };
        let env: FileStatusEnvelope = resp.json()?;
        Ok(Some(env.file_status))
    }

    fn list(&self, path: &str) -> Result<Vec<FileStatus>, ClientError> {
        let resp = self.exec(Method::GET, path, &self.query("LISTSTATUS", &[]))?;
        let env: FileStatusesEnvelope = resp.json()?;
        Ok(env.file_statuses.file_status)
    }

    fn content(&self, path: &str) -> Result<ContentSummary, ClientError> {
        let resp = self.exec(Method::GET, path, &self.query("GETCONTENTSUMMARY", &[]))?;
        let env: ContentSummaryEnvelope = resp.json()?;
        Ok(env.content_summary)
    }

    fn read(&self, path: &str) -> Result<Box<dyn Read + Send>, ClientError> {
        let resp = self.exec(Method::GET, path, &self.query("OPEN", &[]))?;
        let resp = self.follow_read(path, resp)?;
        Ok(Box::new(resp))
    }

    fn write(
        &self,
        path: &str,
        data: Box<dyn Read + Send + 'static>,
        overwrite: bool,
    ) -> Result<(), ClientError> {
        let flag = if overwrite { "true" } else { "false" };
        let query = self.query("CREATE", &[("overwrite", flag)]);
        let resp = self.exec(Method::PUT, path, &query)?;
        if resp.status() != StatusCode::TEMPORARY_REDIRECT {
            // some gateways answer CREATE directly
            if resp.status().is_success() {
                return Ok(());
            }
            return Err(final_remote_error(path, resp));
        }
        let location = redirect_target(&resp).ok_or_else(|| missing_location(path))?;

        let body = Body::new(BufReader::with_capacity(CHUNK_SIZE, data));
        let data_resp = self.http.put(&location).body(body).send()?;
        if !data_resp.status().is_success() {
            return Err(final_remote_error(path, data_resp));
        }
        Ok(())
    }

    fn delete(&self, path: &str, recursive: bool) -> Result<bool, ClientError> {
        let flag = if recursive { "true" } else { "false" };
        let query = self.query("DELETE", &[("recursive", flag)]);
        let resp = self.exec(Method::DELETE, path, &query)?;
        let env: BooleanEnvelope = resp.json()?;
        Ok(env.boolean)
    }

    fn rename(&self, src: &str, dest: &str) -> Result<(), ClientError> {
        let query = self.query("RENAME", &[("destination", dest)]);
        let resp = self.exec(Method::PUT, src, &query)?;
        let env: BooleanEnvelope = resp.json()?;
        if !env.boolean {
            return Err(ClientError::Remote {
                exception: "RenameError".to_string(),
                message: format!("could not rename `{src}` to `{dest}`"),
            });
        }
        Ok(())
    }

    fn makedirs(&self, path: &str) -> Result<(), ClientError> {
        let resp = self.exec(Method::PUT, path, &self.query("MKDIRS", &[]))?;
        let env: BooleanEnvelope = resp.json()?;
        if !env.boolean {
            return Err(ClientError::Remote {
                exception: "MkdirError".to_string(),
                message: format!("could not create `{path}`"),
            });
        }
        Ok(())
    }

    fn set_permission(&self, path: &str, permission: &str) -> Result<(), ClientError> {
        let query = self.query("SETPERMISSION", &[("permission", permission)]);
        self.exec(Method::PUT, path, &query)?;
        Ok(())
    }

    fn set_owner(
        &self,
        path: &str,
        owner: Option<&str>,
        group: Option<&str>,
    ) -> Result<(), ClientError> {
        let mut params = Vec::new();
        if let Some(owner) = owner {
            params.push(("owner", owner));
        }
        if let Some(group) = group {
            params.push(("group", group));
        }
        let query = self.query("SETOWNER", &params);
        self.exec(Method::PUT, path, &query)?;
        Ok(())
    }
}

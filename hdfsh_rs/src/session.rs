//! Per name service client sessions.
//!
//! Clients are built lazily on first use and cached by name service, so a
//! run of commands against the same cluster shares one connection setup.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::client::{HdfsFs, WebHdfsClient};
use crate::config::Config;
use crate::error::ShellError;

/// Builds a client for a name service. Split out so tests can inject an
/// in-memory file system.
pub trait ClientFactory: Send + Sync {
    fn connect(&self, name_service: &str, config: &Config) -> Result<Arc<dyn HdfsFs>, ShellError>;
}

/// Production factory backed by [`WebHdfsClient`].
pub struct WebHdfsFactory;

impl ClientFactory for WebHdfsFactory {
    fn connect(&self, name_service: &str, config: &Config) -> Result<Arc<dyn HdfsFs>, ShellError> {
        let nodes = config.nodes(name_service).ok_or_else(|| {
            ShellError::Session(format!(
                "Hdfs nodes not found for name service '{name_service}'"
            ))
        })?;
        let client = WebHdfsClient::new(name_service, nodes, config)?;
        Ok(Arc::new(client))
    }
}

pub struct SessionRegistry {
    config: Arc<Config>,
    factory: Box<dyn ClientFactory>,
    sessions: Mutex<HashMap<String, Arc<dyn HdfsFs>>>,
}

impl SessionRegistry {
    pub fn new(config: Arc<Config>) -> Self {
        Self::with_factory(config, Box::new(WebHdfsFactory))
    }

    pub fn with_factory(config: Arc<Config>, factory: Box<dyn ClientFactory>) -> Self {
        SessionRegistry {
            config,
            factory,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Return the cached session for `name_service`, if one is open.
    pub fn get(&self, name_service: &str) -> Option<Arc<dyn HdfsFs>> {
        self.sessions.lock().ok()?.get(name_service).map(Arc::clone)
    }

    /// Return the cached session for `name_service`, creating it on first
    /// use. An empty name service means resolution found neither an
    /// embedded service nor a configured default.
    pub fn get_or_create(&self, name_service: &str) -> Result<Arc<dyn HdfsFs>, ShellError> {
        if name_service.is_empty() {
            return Err(ShellError::Session(
                "no name service resolved; set default_name_service or use hdfs://<ns>/ paths"
                    .to_string(),
            ));
        }

        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| ShellError::Session("session registry lock poisoned".to_string()))?;
        if let Some(client) = sessions.get(name_service) {
            return Ok(Arc::clone(client));
        }

        let client = self.factory.connect(name_service, &self.config)?;
        tracing::info!(name_service, "created hdfs session");
        sessions.insert(name_service.to_string(), Arc::clone(&client));
        Ok(client)
    }

    /// Close and drop the session for `name_service`.
    pub fn close(&self, name_service: &str) -> Result<(), ShellError> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| ShellError::Session("session registry lock poisoned".to_string()))?;
        let client = sessions.remove(name_service).ok_or_else(|| {
            ShellError::Session(format!("Could not find '{name_service}' session"))
        })?;
        client.close();
        tracing::info!(name_service, "closed hdfs session");
        Ok(())
    }

    /// Close every open session. Used on shell shutdown.
    pub fn close_all(&self) {
        if let Ok(mut sessions) = self.sessions.lock() {
            for (name_service, client) in sessions.drain() {
                client.close();
                tracing::info!(name_service, "closed hdfs session");
            }
        }
    }
}

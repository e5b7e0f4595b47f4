//! Container enumeration against the Docker engine API.

use crate::models::container::{ContainerRecord, PortMapping};
use crate::services::config::Settings;
use bollard::container::ListContainersOptions;
use bollard::models::{ContainerSummary, Port};
use bollard::{Docker, API_DEFAULT_VERSION};
use std::fmt;
use std::time::Duration;

pub trait ContainerSource {
    /// One snapshot of the containers, in engine order.
    fn list_containers(&self) -> Result<Vec<ContainerRecord>, SourceError>;
}

#[derive(Debug)]
pub enum SourceError {
    Runtime(std::io::Error),
    Connect(bollard::errors::Error),
    Query(bollard::errors::Error),
    Timeout(Duration),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Runtime(err) => write!(f, "cannot start async runtime: {}", err),
            SourceError::Connect(err) => write!(f, "cannot connect to container engine: {}", err),
            SourceError::Query(err) => write!(f, "listing containers failed: {}", err),
            SourceError::Timeout(d) => {
                write!(f, "container engine did not answer within {}s", d.as_secs())
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Runtime(err) => Some(err),
            SourceError::Connect(err) | SourceError::Query(err) => Some(err),
            SourceError::Timeout(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DockerSource {
    host: Option<String>,
    timeout: Duration,
    all: bool,
}

impl DockerSource {
    pub fn new(host: Option<String>, timeout: Duration, all: bool) -> Self {
        Self { host, timeout, all }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.docker_host.clone(),
            Duration::from_secs(settings.timeout_secs.max(1)),
            settings.all,
        )
    }

    fn connect(&self) -> Result<Docker, SourceError> {
        let timeout = self.timeout.as_secs().max(1);
        let docker = match self.host.as_deref() {
            None => Docker::connect_with_local_defaults(),
            #[cfg(unix)]
            Some(host) if host.starts_with("unix://") => {
                Docker::connect_with_unix(host, timeout, API_DEFAULT_VERSION)
            }
            Some(host) => Docker::connect_with_http(host, timeout, API_DEFAULT_VERSION),
        };
        docker.map_err(SourceError::Connect)
    }

    async fn fetch(&self) -> Result<Vec<ContainerRecord>, SourceError> {
        let docker = self.connect()?;
        let docker = docker
            .negotiate_version()
            .await
            .map_err(SourceError::Connect)?;

        let options = ListContainersOptions::<String> {
            all: self.all,
            ..Default::default()
        };
        let summaries = docker
            .list_containers(Some(options))
            .await
            .map_err(SourceError::Query)?;
        Ok(summaries.into_iter().map(record_from_summary).collect())
    }
}

impl ContainerSource for DockerSource {
    fn list_containers(&self) -> Result<Vec<ContainerRecord>, SourceError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(SourceError::Runtime)?;

        tracing::info!(host = ?self.host, all = self.all, "listing containers");
        let containers = runtime.block_on(async {
            match tokio::time::timeout(self.timeout, self.fetch()).await {
                Ok(result) => result,
                Err(_) => Err(SourceError::Timeout(self.timeout)),
            }
        })?;
        tracing::info!(count = containers.len(), "containers loaded");
        Ok(containers)
    }
}

pub fn record_from_summary(summary: ContainerSummary) -> ContainerRecord {
    ContainerRecord {
        id: summary.id.unwrap_or_default(),
        names: summary.names.unwrap_or_default(),
        image: summary.image.unwrap_or_default(),
        state: summary.state.map(|s| s.to_string()).unwrap_or_default(),
        status: summary.status.unwrap_or_default(),
        ports: summary
            .ports
            .unwrap_or_default()
            .into_iter()
            .map(port_from_api)
            .collect(),
    }
}

fn port_from_api(port: Port) -> PortMapping {
    PortMapping {
        private_port: port.private_port,
        public_port: port.public_port.unwrap_or(0),
        kind: port.typ.map(|t| t.to_string()).unwrap_or_default(),
        bind_address: port.ip.unwrap_or_default(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/docker.rs"]
mod tests;

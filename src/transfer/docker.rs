//! Docker implementation of the container runtime, over bollard.

use crate::config::DockerConfig;
use crate::error::{PackagerError, Result};
use crate::transfer::{ContainerHandle, ContainerRuntime};
use async_trait::async_trait;
use bollard::container::{
    DownloadFromContainerOptions, InspectContainerOptions, UploadToContainerOptions,
};
use bollard::errors::Error as BollardError;
use bollard::Docker;
use futures_util::stream::StreamExt;
use humansize::{format_size, BINARY};
use std::time::Duration;

pub struct DockerRuntime {
    docker: Docker,
}

impl DockerRuntime {
    /// Connect to the configured socket, or to the local defaults.
    pub fn connect(config: &DockerConfig) -> Result<Self> {
        let docker = match &config.socket {
            Some(socket) => {
                Docker::connect_with_socket(socket, config.timeout_secs, bollard::API_DEFAULT_VERSION)
            }
            None => Docker::connect_with_local_defaults(),
        }
        .map_err(|source| PackagerError::Runtime {
            message: "Failed to connect to Docker".to_string(),
            source,
        })?;

        Ok(Self {
            docker: docker.with_timeout(Duration::from_secs(config.timeout_secs)),
        })
    }
}

fn is_not_found(err: &BollardError) -> bool {
    matches!(
        err,
        BollardError::DockerResponseServerError {
            status_code: 404,
            ..
        }
    )
}

#[async_trait]
impl ContainerRuntime for DockerRuntime {
    async fn resolve(&self, name: &str) -> Result<ContainerHandle> {
        match self
            .docker
            .inspect_container(name, None::<InspectContainerOptions>)
            .await
        {
            Ok(inspect) => {
                let id = inspect.id.unwrap_or_else(|| name.to_string());
                tracing::debug!(container = name, %id, "Resolved container");
                Ok(ContainerHandle {
                    id,
                    name: name.to_string(),
                })
            }
            Err(e) if is_not_found(&e) => Err(PackagerError::ContainerNotFound(name.to_string())),
            Err(source) => {
                tracing::error!(container = name, error = %source, "Container lookup failed");
                Err(PackagerError::Runtime {
                    message: "An unexpected error occurred while getting the container."
                        .to_string(),
                    source,
                })
            }
        }
    }

    async fn fetch_archive(&self, container: &ContainerHandle, path: &str) -> Result<Vec<u8>> {
        let mut stream = Box::pin(self.docker.download_from_container(
            &container.id,
            Some(DownloadFromContainerOptions {
                path: path.to_string(),
            }),
        ));

        let mut archive = Vec::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| {
                let reason = if is_not_found(&e) {
                    "path does not exist in the container".to_string()
                } else {
                    e.to_string()
                };
                PackagerError::TransferFailed {
                    path: path.to_string(),
                    reason,
                }
            })?;
            archive.extend_from_slice(&chunk);
        }

        tracing::debug!(
            container = %container.name,
            path,
            size = %format_size(archive.len() as u64, BINARY),
            "Downloaded archive"
        );
        Ok(archive)
    }

    async fn write_archive(
        &self,
        container: &ContainerHandle,
        parent: &str,
        archive: Vec<u8>,
    ) -> Result<()> {
        let size = archive.len() as u64;
        self.docker
            .upload_to_container(
                &container.id,
                Some(UploadToContainerOptions {
                    path: parent.to_string(),
                    ..Default::default()
                }),
                archive.into(),
            )
            .await
            .map_err(|e| PackagerError::TransferFailed {
                path: parent.to_string(),
                reason: e.to_string(),
            })?;

        tracing::debug!(
            container = %container.name,
            parent,
            size = %format_size(size, BINARY),
            "Uploaded archive"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_detection() {
        let err = BollardError::DockerResponseServerError {
            status_code: 404,
            message: "No such container: c1".into(),
        };
        assert!(is_not_found(&err));

        let err = BollardError::DockerResponseServerError {
            status_code: 500,
            message: "boom".into(),
        };
        assert!(!is_not_found(&err));
    }
}

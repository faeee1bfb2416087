//! Container runtime seam.

use crate::error::Result;
use async_trait::async_trait;

/// A resolved container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerHandle {
    /// Runtime identifier used for archive calls.
    pub id: String,
    /// Name the caller asked for.
    pub name: String,
}

/// The three container operations the service needs.
///
/// Archives are uncompressed tar streams, as produced and accepted by the
/// Docker archive endpoints.
#[async_trait]
pub trait ContainerRuntime: Send + Sync {
    /// Look up a container by name or id.
    ///
    /// Returns `ContainerNotFound` when no such container exists.
    async fn resolve(&self, name: &str) -> Result<ContainerHandle>;

    /// Tar archive of `path` inside the container. The archive's top-level
    /// entry is the base name of `path`.
    async fn fetch_archive(&self, container: &ContainerHandle, path: &str) -> Result<Vec<u8>>;

    /// Extract `archive` into the directory `parent` inside the container.
    async fn write_archive(
        &self,
        container: &ContainerHandle,
        parent: &str,
        archive: Vec<u8>,
    ) -> Result<()>;
}

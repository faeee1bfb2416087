//! Container archive transfer.
//!
//! This module provides:
//! - The container runtime seam and its Docker implementation
//! - Per-request host workspaces
//! - Pull (container to host) and push (host to container) of source trees

pub mod archive;
mod docker;
pub mod paths;
mod runtime;
mod workspace;

pub use archive::{pull, push};
pub use docker::DockerRuntime;
pub use runtime::{ContainerHandle, ContainerRuntime};
pub use workspace::RunWorkspace;

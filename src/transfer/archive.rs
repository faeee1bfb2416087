//! Moving source trees between a container and the host.

use crate::error::{PackagerError, Result};
use crate::transfer::paths::{base_name, parent_dir};
use crate::transfer::{ContainerHandle, ContainerRuntime, RunWorkspace};
use humansize::{format_size, BINARY};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

fn transfer_failed(path: &str, reason: impl ToString) -> PackagerError {
    PackagerError::TransferFailed {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}

fn host_error(path: &str, host: &Path, err: io::Error) -> PackagerError {
    if err.kind() == io::ErrorKind::PermissionDenied {
        tracing::warn!(
            host_path = %host.display(),
            "Permission denied while staging archive on the host"
        );
    }
    transfer_failed(path, format!("{}: {}", host.display(), err))
}

/// Copy `container_path` out of the container into the run workspace.
///
/// The archive is saved as `<name>.tar` and unpacked next to it. Returns the
/// extracted tree root, `<workspace>/<name>`, where `name` is the base name
/// of `container_path`.
pub async fn pull(
    runtime: &dyn ContainerRuntime,
    container: &ContainerHandle,
    container_path: &str,
    workspace: &RunWorkspace,
) -> Result<PathBuf> {
    let name = base_name(container_path)
        .ok_or_else(|| transfer_failed(container_path, "path has no base name"))?;

    let archive = runtime.fetch_archive(container, container_path).await?;
    tracing::info!(
        path = container_path,
        size = %format_size(archive.len() as u64, BINARY),
        "Fetched archive from container"
    );

    let tar_path = workspace.archive_path(name);
    tokio::fs::write(&tar_path, &archive)
        .await
        .map_err(|e| host_error(container_path, &tar_path, e))?;

    let dest = workspace.path().to_path_buf();
    let unpack_from = tar_path.clone();
    tokio::task::spawn_blocking(move || unpack(&unpack_from, &dest))
        .await
        .map_err(|e| transfer_failed(container_path, e))?
        .map_err(|e| host_error(container_path, &tar_path, e))?;

    let tree_root = workspace.path().join(name);
    if !tree_root.is_dir() {
        return Err(transfer_failed(
            container_path,
            "archive does not contain a directory with the path's base name",
        ));
    }

    tracing::debug!(tree = %tree_root.display(), "Extracted tree");
    Ok(tree_root)
}

/// Send `tree_root` back into the container so that it lands at
/// `container_path` again.
///
/// The tree is archived under the base name of `container_path` and written
/// into that path's parent directory.
pub async fn push(
    runtime: &dyn ContainerRuntime,
    container: &ContainerHandle,
    tree_root: &Path,
    container_path: &str,
) -> Result<()> {
    let name = base_name(container_path)
        .ok_or_else(|| transfer_failed(container_path, "path has no base name"))?
        .to_string();

    let root = tree_root.to_path_buf();
    let archive = tokio::task::spawn_blocking(move || pack(&root, &name))
        .await
        .map_err(|e| transfer_failed(container_path, e))?
        .map_err(|e| transfer_failed(container_path, format!("{}: {}", tree_root.display(), e)))?;

    let parent = parent_dir(container_path);
    tracing::info!(
        parent = %parent,
        size = %format_size(archive.len() as u64, BINARY),
        "Writing archive to container"
    );
    runtime.write_archive(container, &parent, archive).await
}

/// Unpack a tar file into `dest`.
pub fn unpack(tar_path: &Path, dest: &Path) -> io::Result<()> {
    let file = File::open(tar_path)?;
    let mut archive = tar::Archive::new(file);
    archive.set_preserve_mtime(true);
    archive.unpack(dest)
}

/// Archive the directory `root` with every entry under `name/`.
///
/// Symlinks are stored as links, not followed.
pub fn pack(root: &Path, name: &str) -> io::Result<Vec<u8>> {
    let mut builder = tar::Builder::new(Vec::new());
    builder.follow_symlinks(false);
    builder.append_dir_all(name, root)?;
    builder.into_inner()
}

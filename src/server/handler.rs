//! Request handlers.

use crate::error::{PackagerError, Result};
use crate::server::AppState;
use crate::transfer::paths::{base_name, join_container_path};
use crate::transfer::{self, RunWorkspace};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::Instrument;

const MISSING_FIELDS: &str = "Expected 'containerName' and 'repoPath' to be present.";

/// Body of `POST /package`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageRequest {
    pub container_name: Option<String>,
    pub repo_path: Option<String>,
}

impl PackageRequest {
    /// Both fields, or `BadRequest` naming them.
    pub fn validate(self) -> Result<(String, String)> {
        match (self.container_name, self.repo_path) {
            (Some(container), Some(repo)) if !container.is_empty() && !repo.is_empty() => {
                if base_name(&repo).is_none() {
                    return Err(PackagerError::BadRequest(format!(
                        "'{repo}' does not name a directory."
                    )));
                }
                Ok((container, repo))
            }
            _ => Err(PackagerError::BadRequest(MISSING_FIELDS.to_string())),
        }
    }
}

/// `GET /test`
pub async fn liveness() -> &'static str {
    "test"
}

/// `POST /package`
pub async fn package(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PackageRequest>, JsonRejection>,
) -> Result<String> {
    let Json(request) = payload.map_err(|rejection| {
        PackagerError::BadRequest(format!("{} {}", MISSING_FIELDS, rejection.body_text()))
    })?;
    let (container_name, repo_path) = request.validate()?;

    let run_id = uuid::Uuid::new_v4().simple().to_string();
    let span = tracing::info_span!(
        "package",
        run = %run_id,
        container = %container_name,
        repo = %repo_path
    );

    // Detached from the connection: a dropped client must not stop the build
    // or remove its workspace while it runs.
    let pipeline = tokio::spawn(
        async move { run_package(&state, &run_id, &container_name, &repo_path).await }
            .instrument(span),
    );
    pipeline.await.map_err(|e| PackagerError::BuildFailed {
        command: "packaging task".to_string(),
        status: e.to_string(),
    })?
}

/// Pull, build and push one repository; returns the in-container artifact path.
pub async fn run_package(
    state: &AppState,
    run_id: &str,
    container_name: &str,
    repo_path: &str,
) -> Result<String> {
    let container = state.runtime.resolve(container_name).await?;
    tracing::debug!(id = %container.id, "Container resolved");

    let workspace = RunWorkspace::create(
        &state.config.workspace.root,
        run_id,
        state.config.workspace.keep_runs,
    )?;

    let tree_root = transfer::pull(state.runtime.as_ref(), &container, repo_path, &workspace).await?;
    tracing::info!(tree = %tree_root.display(), "Extracted repository");

    let orchestrator = state.orchestrator.clone();
    let build_root = tree_root.clone();
    let outcome = tokio::task::spawn_blocking(move || orchestrator.package(&build_root))
        .await
        .map_err(|e| PackagerError::BuildFailed {
            command: "build task".to_string(),
            status: e.to_string(),
        })??;

    let artifact_path = join_container_path(repo_path, &outcome.artifact);
    tracing::info!(
        project_type = %outcome.project_type,
        override_script = outcome.used_override,
        artifact = %artifact_path,
        "Packaged repository"
    );

    transfer::push(state.runtime.as_ref(), &container, &tree_root, repo_path).await?;
    tracing::info!("Transferred build output to container");

    Ok(artifact_path)
}

//! Build dispatch: classify a tree, build it and locate the artifact.

use crate::config::BuildConfig;
use crate::error::{PackagerError, Result};
use crate::packager::classifier::ScoreTable;
use crate::packager::executor::{artifact_from_script_output, BuildExecutor};
use crate::packager::listing::list_entries;
use crate::packager::{PackagerRegistry, ProjectType};
use std::path::Path;

/// Result of packaging a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageOutcome {
    /// Classified type (may be `Unknown` when the override script ran).
    pub project_type: ProjectType,
    /// Artifact path relative to the tree root.
    pub artifact: String,
    /// Whether the override script replaced type-based dispatch.
    pub used_override: bool,
}

pub struct PackageOrchestrator {
    registry: PackagerRegistry,
    build: BuildConfig,
    executor: BuildExecutor,
}

impl PackageOrchestrator {
    pub fn new(registry: PackagerRegistry, build: BuildConfig) -> Self {
        Self {
            registry,
            build,
            executor: BuildExecutor::new(),
        }
    }

    pub fn registry(&self) -> &PackagerRegistry {
        &self.registry
    }

    /// Score the top-level entries of `tree_root`.
    pub fn classify(&self, tree_root: &Path) -> Result<ScoreTable> {
        let entries = list_entries(tree_root)?;
        Ok(ScoreTable::compute(&self.registry, &entries))
    }

    /// Build the tree and return where its artifact is.
    ///
    /// The override script, when present at the tree root, wins over the
    /// detected type. Otherwise the packager for the detected type runs its
    /// build steps and locates the artifact.
    pub fn package(&self, tree_root: &Path) -> Result<PackageOutcome> {
        let scores = self.classify(tree_root)?;
        let project_type = scores.best();
        tracing::info!(
            %project_type,
            scores = ?scores.entries(),
            tree = %tree_root.display(),
            "Classified project"
        );

        let script = &self.build.override_script;
        if tree_root.join(script).is_file() {
            let stdout = self.executor.run_script(tree_root, script)?;
            let artifact = artifact_from_script_output(&stdout).ok_or_else(|| {
                PackagerError::ArtifactNotFound(format!(
                    "'{script}' did not print an artifact path inside the tree"
                ))
            })?;
            return Ok(PackageOutcome {
                project_type,
                artifact,
                used_override: true,
            });
        }

        let packager =
            self.registry
                .get(project_type)
                .ok_or_else(|| PackagerError::UnsupportedProjectType {
                    supported: self.registry.supported(),
                })?;

        let steps = packager.build_steps(&self.build);
        self.executor.run_steps(tree_root, &steps)?;

        let artifact = packager.locate(tree_root, &self.build)?;
        tracing::info!(%project_type, %artifact, "Located artifact");

        Ok(PackageOutcome {
            project_type,
            artifact,
            used_override: false,
        })
    }
}

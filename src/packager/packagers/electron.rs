//! Electron packager.

use crate::config::BuildConfig;
use crate::error::{PackagerError, Result};
use crate::packager::listing::list_entries;
use crate::packager::{BuildStep, Packager, ProjectType};
use std::path::Path;

/// Packager for Electron applications.
///
/// Votes for `package.json`, installs dependencies before running the
/// packaging script, and expects exactly one entry under `out/`.
pub struct ElectronPackager;

impl Packager for ElectronPackager {
    fn project_type(&self) -> ProjectType {
        ProjectType::Electron
    }

    fn signals(&self) -> &'static [&'static str] {
        &["package.json"]
    }

    fn build_steps(&self, build: &BuildConfig) -> Vec<BuildStep> {
        vec![
            BuildStep::install(&build.npm_install),
            BuildStep::package(&build.npm_package),
        ]
    }

    fn locate(&self, tree_root: &Path, _build: &BuildConfig) -> Result<String> {
        let out = tree_root.join("out");
        if !out.is_dir() {
            return Err(PackagerError::ArtifactNotFound(format!(
                "directory '{}' does not exist",
                out.display()
            )));
        }

        let mut entries = list_entries(&out)?;
        match entries.len() {
            1 => Ok(format!("out/{}", entries.remove(0))),
            0 => Err(PackagerError::ArtifactNotFound(format!(
                "'{}' is empty",
                out.display()
            ))),
            n => Err(PackagerError::ArtifactNotFound(format!(
                "expected a single entry in '{}', found {}: {}",
                out.display(),
                n,
                entries.join(", ")
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packager::StepKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_electron_packager_properties() {
        let packager = ElectronPackager;

        assert_eq!(packager.project_type(), ProjectType::Electron);
        assert_eq!(packager.signals(), &["package.json"]);
    }

    #[test]
    fn test_electron_installs_before_packaging() {
        let steps = ElectronPackager.build_steps(&BuildConfig::default());

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].kind, StepKind::Install);
        assert_eq!(steps[0].display(), "npm install");
        assert_eq!(steps[1].kind, StepKind::Package);
        assert_eq!(steps[1].display(), "npm run package");
    }

    #[test]
    fn test_electron_locate_single_entry() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("out/MyApp-linux-x64")).unwrap();

        let path = ElectronPackager
            .locate(tmp.path(), &BuildConfig::default())
            .unwrap();
        assert_eq!(path, "out/MyApp-linux-x64");
    }

    #[test]
    fn test_electron_locate_empty_out() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("out")).unwrap();

        let result = ElectronPackager.locate(tmp.path(), &BuildConfig::default());
        assert!(matches!(result, Err(PackagerError::ArtifactNotFound(_))));
    }

    #[test]
    fn test_electron_locate_multiple_entries() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("out/MyApp-linux-x64")).unwrap();
        fs::create_dir_all(tmp.path().join("out/make")).unwrap();

        let result = ElectronPackager.locate(tmp.path(), &BuildConfig::default());
        match result {
            Err(PackagerError::ArtifactNotFound(msg)) => assert!(msg.contains("found 2")),
            other => panic!("Expected ArtifactNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_electron_locate_without_out() {
        let tmp = TempDir::new().unwrap();

        let result = ElectronPackager.locate(tmp.path(), &BuildConfig::default());
        assert!(result.is_err());
    }
}

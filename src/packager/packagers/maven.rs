//! Java/Maven packager.

use crate::config::BuildConfig;
use crate::error::Result;
use crate::packager::listing::first_containing;
use crate::packager::{BuildStep, Packager, ProjectType};
use std::path::Path;

/// Packager for Java projects.
///
/// Votes for `.java` sources and `pom.xml`, runs `mvn package -DskipTests`
/// and picks the jar from `shade/` when that directory exists, `target/`
/// otherwise.
pub struct MavenPackager;

impl Packager for MavenPackager {
    fn project_type(&self) -> ProjectType {
        ProjectType::Java
    }

    fn signals(&self) -> &'static [&'static str] {
        &[".java", "pom.xml"]
    }

    fn build_steps(&self, build: &BuildConfig) -> Vec<BuildStep> {
        vec![BuildStep::package(&build.maven)]
    }

    fn locate(&self, tree_root: &Path, _build: &BuildConfig) -> Result<String> {
        let dir = if tree_root.join("shade").is_dir() {
            "shade"
        } else {
            "target"
        };
        let jar = first_containing(&tree_root.join(dir), ".jar")?;
        Ok(format!("{dir}/{jar}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PackagerError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_maven_packager_properties() {
        let packager = MavenPackager;

        assert_eq!(packager.project_type(), ProjectType::Java);
        assert_eq!(packager.signals(), &[".java", "pom.xml"]);
        assert_eq!(
            packager.build_steps(&BuildConfig::default())[0].display(),
            "mvn package -DskipTests"
        );
    }

    #[test]
    fn test_maven_locate_prefers_shade() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("shade")).unwrap();
        fs::write(tmp.path().join("shade/app.jar"), "").unwrap();
        fs::create_dir(tmp.path().join("target")).unwrap();
        fs::write(tmp.path().join("target/app-1.0.jar"), "").unwrap();

        let path = MavenPackager
            .locate(tmp.path(), &BuildConfig::default())
            .unwrap();
        assert_eq!(path, "shade/app.jar");
    }

    #[test]
    fn test_maven_locate_target() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("target/classes")).unwrap();
        fs::write(tmp.path().join("target/app-1.0.jar"), "").unwrap();

        let path = MavenPackager
            .locate(tmp.path(), &BuildConfig::default())
            .unwrap();
        assert_eq!(path, "target/app-1.0.jar");
    }

    #[test]
    fn test_maven_locate_is_deterministic() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("target")).unwrap();
        fs::write(tmp.path().join("target/app-1.0.jar"), "").unwrap();
        fs::write(tmp.path().join("target/app-1.0-sources.jar"), "").unwrap();

        let path = MavenPackager
            .locate(tmp.path(), &BuildConfig::default())
            .unwrap();
        assert_eq!(path, "target/app-1.0-sources.jar");
    }

    #[test]
    fn test_maven_locate_without_jar() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("target")).unwrap();

        let result = MavenPackager.locate(tmp.path(), &BuildConfig::default());
        assert!(matches!(result, Err(PackagerError::ArtifactNotFound(_))));
    }

    #[test]
    fn test_maven_locate_without_target() {
        let tmp = TempDir::new().unwrap();

        let result = MavenPackager.locate(tmp.path(), &BuildConfig::default());
        assert!(matches!(result, Err(PackagerError::ArtifactNotFound(_))));
    }
}

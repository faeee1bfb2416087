//! Executor for build commands.

use crate::error::{PackagerError, Result};
use crate::packager::{BuildStep, StepKind};
use std::io;
use std::path::{Component, Path};
use std::process::{Command, ExitStatus, Stdio};

/// Runs build steps as child processes in a tree root.
///
/// Tool output goes to the service's own stdout/stderr; only the exit
/// status decides success.
#[derive(Debug, Default, Clone)]
pub struct BuildExecutor;

impl BuildExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Run steps in order, stopping at the first failure.
    ///
    /// A failing install step is reported as `DependencyInstallFailed` and
    /// nothing after it runs.
    pub fn run_steps(&self, tree_root: &Path, steps: &[BuildStep]) -> Result<()> {
        for step in steps {
            tracing::info!(command = %step.display(), kind = ?step.kind, "Running build step");

            let status = self
                .spawn(tree_root, &step.command)
                .map_err(|e| PackagerError::BuildFailed {
                    command: step.display(),
                    status: e.to_string(),
                })?;

            tracing::debug!(command = %step.display(), %status, "Build step finished");

            if !status.success() {
                tracing::warn!(command = %step.display(), %status, "Build step failed");
                return Err(match step.kind {
                    StepKind::Install => PackagerError::DependencyInstallFailed {
                        command: step.display(),
                        status: status.to_string(),
                    },
                    StepKind::Package => PackagerError::BuildFailed {
                        command: step.display(),
                        status: status.to_string(),
                    },
                });
            }
        }
        Ok(())
    }

    /// Run the override script with `sh` and return its captured stdout.
    pub fn run_script(&self, tree_root: &Path, script: &str) -> Result<String> {
        let command = format!("sh {script}");
        tracing::info!(%command, "Running override script");

        let output = Command::new("sh")
            .arg(script)
            .current_dir(tree_root)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| PackagerError::BuildFailed {
                command: command.clone(),
                status: e.to_string(),
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            tracing::warn!(%command, status = %output.status, "Override script failed");
            Err(PackagerError::BuildFailed {
                command,
                status: output.status.to_string(),
            })
        }
    }

    fn spawn(&self, tree_root: &Path, command: &[String]) -> io::Result<ExitStatus> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Empty command"))?;

        Command::new(program)
            .args(args)
            .current_dir(tree_root)
            .stdin(Stdio::null())
            .status()
    }
}

/// Last non-empty line of the override script's output, as a relative path.
///
/// Absolute paths and paths that climb out of the tree with `..` yield `None`.
pub fn artifact_from_script_output(stdout: &str) -> Option<String> {
    let line = stdout
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .last()?;

    let relative = line.trim_start_matches("./");
    let escapes = Path::new(relative)
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if relative.is_empty() || line.starts_with('/') || escapes {
        tracing::warn!(line, "Override script printed a path outside the tree");
        return None;
    }
    Some(relative.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sh(script: &str) -> Vec<String> {
        vec!["sh".into(), "-c".into(), script.into()]
    }

    #[test]
    fn test_run_steps_success() {
        let tmp = TempDir::new().unwrap();
        let steps = vec![BuildStep::package(&sh("mkdir target && touch target/app.jar"))];

        BuildExecutor::new().run_steps(tmp.path(), &steps).unwrap();

        assert!(tmp.path().join("target/app.jar").exists());
    }

    #[test]
    fn test_run_steps_package_failure() {
        let tmp = TempDir::new().unwrap();
        let steps = vec![BuildStep::package(&sh("exit 3"))];

        let result = BuildExecutor::new().run_steps(tmp.path(), &steps);

        assert!(matches!(result, Err(PackagerError::BuildFailed { .. })));
    }

    #[test]
    fn test_install_failure_stops_before_package() {
        let tmp = TempDir::new().unwrap();
        let steps = vec![
            BuildStep::install(&sh("exit 1")),
            BuildStep::package(&sh("touch packaged")),
        ];

        let result = BuildExecutor::new().run_steps(tmp.path(), &steps);

        assert!(matches!(
            result,
            Err(PackagerError::DependencyInstallFailed { .. })
        ));
        assert!(!tmp.path().join("packaged").exists());
    }

    #[test]
    fn test_missing_program_is_build_failure() {
        let tmp = TempDir::new().unwrap();
        let steps = vec![BuildStep::package(&[
            "definitely-not-a-real-build-tool".to_string()
        ])];

        let result = BuildExecutor::new().run_steps(tmp.path(), &steps);

        assert!(matches!(result, Err(PackagerError::BuildFailed { .. })));
    }

    #[test]
    fn test_empty_command_is_build_failure() {
        let tmp = TempDir::new().unwrap();
        let steps = vec![BuildStep::package(&[])];

        let result = BuildExecutor::new().run_steps(tmp.path(), &steps);

        assert!(result.is_err());
    }

    #[test]
    fn test_run_script_captures_stdout() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("package.sh"),
            "mkdir -p dist\ntouch dist/app.tgz\necho building\necho dist/app.tgz\n",
        )
        .unwrap();

        let stdout = BuildExecutor::new()
            .run_script(tmp.path(), "package.sh")
            .unwrap();

        assert!(stdout.contains("building"));
        assert!(tmp.path().join("dist/app.tgz").exists());
    }

    #[test]
    fn test_run_script_failure() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("package.sh"), "exit 2\n").unwrap();

        let result = BuildExecutor::new().run_script(tmp.path(), "package.sh");

        assert!(matches!(result, Err(PackagerError::BuildFailed { .. })));
    }

    #[test]
    fn test_artifact_from_script_output() {
        assert_eq!(
            artifact_from_script_output("building\n./dist/app.tgz\n\n"),
            Some("dist/app.tgz".to_string())
        );
        assert_eq!(artifact_from_script_output("  \n\n"), None);
    }

    #[test]
    fn test_script_output_absolute_path_rejected() {
        assert_eq!(artifact_from_script_output("done\n/etc/passwd\n"), None);
    }

    #[test]
    fn test_script_output_parent_component_rejected() {
        assert_eq!(artifact_from_script_output("../outside.jar\n"), None);
        assert_eq!(artifact_from_script_output("dist/../../outside.jar\n"), None);
        assert_eq!(
            artifact_from_script_output("dist/./app.tgz\n"),
            Some("dist/./app.tgz".to_string())
        );
    }
}

//! C#/.NET packager.

use crate::config::BuildConfig;
use crate::error::Result;
use crate::packager::{BuildStep, Packager, ProjectType};
use std::path::Path;

/// Packager for C# projects.
///
/// Votes for entries containing `.cs` (which covers `.csproj`), runs
/// `dotnet publish` and reports the configured publish folder.
pub struct DotnetPackager;

impl Packager for DotnetPackager {
    fn project_type(&self) -> ProjectType {
        ProjectType::CSharp
    }

    fn signals(&self) -> &'static [&'static str] {
        &[".cs", ".csproj"]
    }

    fn build_steps(&self, build: &BuildConfig) -> Vec<BuildStep> {
        vec![BuildStep::package(&build.dotnet)]
    }

    /// The publish folder is reported without checking that it exists.
    fn locate(&self, _tree_root: &Path, build: &BuildConfig) -> Result<String> {
        Ok(build.dotnet_publish_dir.clone())
    }
}

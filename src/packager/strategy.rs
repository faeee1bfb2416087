//! Core trait and types for project packaging strategies.

use crate::config::BuildConfig;
use crate::error::Result;
use std::fmt;
use std::path::Path;

/// Project types the service knows how to package.
///
/// Declaration order is the classifier's tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectType {
    CSharp,
    Java,
    Electron,
    Unknown,
}

impl ProjectType {
    /// Stable identifier (e.g., "csharp").
    pub fn id(&self) -> &'static str {
        match self {
            ProjectType::CSharp => "csharp",
            ProjectType::Java => "java",
            ProjectType::Electron => "electron",
            ProjectType::Unknown => "unknown",
        }
    }

    /// Human-readable name (e.g., "C#").
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectType::CSharp => "C#",
            ProjectType::Java => "Java",
            ProjectType::Electron => "Electron",
            ProjectType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Role of a build step, used to tell dependency installation apart from
/// the packaging command itself when one fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Install,
    Package,
}

/// A single external command run in the tree root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStep {
    pub kind: StepKind,
    /// Program followed by its arguments.
    pub command: Vec<String>,
}

impl BuildStep {
    pub fn install(command: &[String]) -> Self {
        Self {
            kind: StepKind::Install,
            command: command.to_vec(),
        }
    }

    pub fn package(command: &[String]) -> Self {
        Self {
            kind: StepKind::Package,
            command: command.to_vec(),
        }
    }

    /// Command line joined with spaces, for logs and error messages.
    pub fn display(&self) -> String {
        self.command.join(" ")
    }
}

/// Trait for project packaging strategies.
///
/// Implement this trait to add support for a new project type. A packager is
/// responsible for:
/// - Naming the file name signals that vote for its project type
/// - Providing the build commands to run in the tree root
/// - Locating the artifact those commands produce
pub trait Packager: Send + Sync {
    /// Project type this packager handles.
    fn project_type(&self) -> ProjectType;

    /// Substrings of top-level entry names that count as a signal.
    fn signals(&self) -> &'static [&'static str];

    /// Commands to run, in order.
    fn build_steps(&self, build: &BuildConfig) -> Vec<BuildStep>;

    /// Artifact path relative to the tree root.
    fn locate(&self, tree_root: &Path, build: &BuildConfig) -> Result<String>;

    /// Whether a top-level entry name counts toward this project type.
    ///
    /// An entry adds at most one point no matter how many signals it contains.
    fn matches(&self, entry: &str) -> bool {
        self.signals().iter().any(|s| entry.contains(s))
    }
}

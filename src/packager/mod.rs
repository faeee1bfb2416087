//! Project detection and packaging functionality.
//!
//! This module provides:
//! - Classification of extracted trees (C#, Java, Electron)
//! - Build command dispatch, including the override script
//! - Artifact lookup for each project type

mod classifier;
mod executor;
mod listing;
mod orchestrator;
pub mod packagers;
mod registry;
mod strategy;

pub use classifier::{classify, ScoreTable};
pub use executor::BuildExecutor;
pub use listing::list_entries;
pub use orchestrator::{PackageOrchestrator, PackageOutcome};
pub use packagers::all_packagers;
pub use registry::PackagerRegistry;
pub use strategy::{BuildStep, Packager, ProjectType, StepKind};

//! Packager registry for managing packaging strategies.

use crate::packager::packagers::all_packagers;
use crate::packager::{Packager, ProjectType};
use std::collections::HashSet;

/// Registry that manages packagers.
///
/// Registration order matters: the classifier breaks score ties in favor of
/// the packager registered first.
pub struct PackagerRegistry {
    packagers: Vec<Box<dyn Packager>>,
}

impl PackagerRegistry {
    /// Create a registry with all built-in packagers.
    pub fn new() -> Self {
        Self {
            packagers: all_packagers(),
        }
    }

    /// Create a registry from an explicit list of packagers.
    pub fn from_packagers(packagers: Vec<Box<dyn Packager>>) -> Self {
        Self { packagers }
    }

    /// Create a registry with only the specified project types.
    ///
    /// # Example
    /// ```
    /// use container_packager::packager::PackagerRegistry;
    ///
    /// let registry = PackagerRegistry::with_types(&["java", "electron"]);
    /// assert_eq!(registry.len(), 2);
    /// ```
    pub fn with_types(types: &[&str]) -> Self {
        let type_set: HashSet<&str> = types.iter().copied().collect();
        Self {
            packagers: all_packagers()
                .into_iter()
                .filter(|p| type_set.contains(p.project_type().id()))
                .collect(),
        }
    }

    /// Get all registered packagers.
    pub fn packagers(&self) -> &[Box<dyn Packager>] {
        &self.packagers
    }

    /// Get the packager for a project type.
    pub fn get(&self, project_type: ProjectType) -> Option<&dyn Packager> {
        self.packagers
            .iter()
            .find(|p| p.project_type() == project_type)
            .map(|p| p.as_ref())
    }

    /// Display names of every registered project type.
    pub fn supported(&self) -> Vec<&'static str> {
        self.packagers
            .iter()
            .map(|p| p.project_type().display_name())
            .collect()
    }

    /// Get the number of registered packagers.
    pub fn len(&self) -> usize {
        self.packagers.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.packagers.is_empty()
    }
}

impl Default for PackagerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

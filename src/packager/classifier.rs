//! Heuristic project classification over top-level entry names.

use crate::packager::{PackagerRegistry, ProjectType};

/// Per-type signal counts, in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    scores: Vec<(ProjectType, u32)>,
}

impl ScoreTable {
    /// Score every registered type against the entry names.
    pub fn compute<S: AsRef<str>>(registry: &PackagerRegistry, entries: &[S]) -> Self {
        let mut scores: Vec<(ProjectType, u32)> = registry
            .packagers()
            .iter()
            .map(|p| (p.project_type(), 0))
            .collect();

        for entry in entries {
            let entry = entry.as_ref();
            for (packager, (_, score)) in registry.packagers().iter().zip(scores.iter_mut()) {
                if packager.matches(entry) {
                    *score += 1;
                }
            }
        }

        Self { scores }
    }

    /// Score of a single type (0 when it is not registered).
    pub fn score(&self, project_type: ProjectType) -> u32 {
        self.scores
            .iter()
            .find(|(t, _)| *t == project_type)
            .map_or(0, |(_, s)| *s)
    }

    pub fn entries(&self) -> &[(ProjectType, u32)] {
        &self.scores
    }

    /// Type with the strictly greatest score.
    ///
    /// A later type with an equal score never overtakes an earlier one.
    /// All-zero tables yield `Unknown`.
    pub fn best(&self) -> ProjectType {
        let mut best = ProjectType::Unknown;
        let mut max = 0;
        for &(project_type, score) in &self.scores {
            if score > max {
                max = score;
                best = project_type;
            }
        }
        best
    }
}

/// Classify a listing with the built-in packagers.
pub fn classify<S: AsRef<str>>(entries: &[S]) -> ProjectType {
    ScoreTable::compute(&PackagerRegistry::new(), entries).best()
}

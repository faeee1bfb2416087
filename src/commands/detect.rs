//! Detect command implementation.

use crate::cli::DetectArgs;
use crate::packager::{list_entries, PackagerRegistry, ProjectType, ScoreTable};
use anyhow::{Context, Result};

/// Exit code when no project type could be determined.
pub const EXIT_UNKNOWN: i32 = 3;

/// Run the detect command.
pub fn run(args: DetectArgs) -> Result<()> {
    let path = args
        .path
        .canonicalize()
        .with_context(|| format!("Cannot access {}", args.path.display()))?;

    let entries = list_entries(&path)?;
    let registry = PackagerRegistry::new();
    let scores = ScoreTable::compute(&registry, &entries);
    let project_type = scores.best();

    tracing::debug!(path = %path.display(), entries = entries.len(), "Classified directory");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&render_json(&scores))?);
    } else {
        print_scores(&path.display().to_string(), &scores);
    }

    if project_type == ProjectType::Unknown {
        std::process::exit(EXIT_UNKNOWN);
    }

    Ok(())
}

fn render_json(scores: &ScoreTable) -> serde_json::Value {
    let table: serde_json::Map<String, serde_json::Value> = scores
        .entries()
        .iter()
        .map(|(t, s)| (t.id().to_string(), serde_json::Value::from(*s)))
        .collect();

    serde_json::json!({
        "projectType": scores.best().id(),
        "scores": table,
    })
}

fn print_scores(path: &str, scores: &ScoreTable) {
    println!("{}: {}", path, scores.best());
    println!("\n  {:<10} {:>6}", "TYPE", "SCORE");
    println!("  {}", "─".repeat(17));
    for (project_type, score) in scores.entries() {
        println!("  {:<10} {:>6}", project_type.display_name(), score);
    }
}

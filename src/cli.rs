use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Container Packager - builds projects living inside running containers
#[derive(Parser, Debug)]
#[command(name = "container-packager")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the packaging HTTP service
    Serve(ServeArgs),

    /// Detect the project type of a local directory
    Detect(DetectArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind (overrides config)
    #[arg(long, value_name = "HOST", env = "PACKAGER_HOST")]
    pub host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long, value_name = "PORT", env = "PACKAGER_PORT")]
    pub port: Option<u16>,

    /// Directory for per-request workspaces (overrides config)
    #[arg(short, long, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Keep per-request workspaces after responding
    #[arg(long)]
    pub keep_runs: bool,
}

#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Directory to classify
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // Validates the CLI definition is correct
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_detect_command() {
        let cli = Cli::parse_from(["container-packager", "detect", "/srv/app"]);
        match cli.command {
            Command::Detect(args) => {
                assert_eq!(args.path, PathBuf::from("/srv/app"));
                assert!(!args.json);
            }
            _ => panic!("Expected Detect command"),
        }
    }

    #[test]
    fn parse_serve_with_options() {
        let cli = Cli::parse_from([
            "container-packager",
            "serve",
            "--port",
            "8080",
            "--workspace",
            "/var/lib/packager",
            "--keep-runs",
        ]);
        match cli.command {
            Command::Serve(args) => {
                assert_eq!(args.port, Some(8080));
                assert_eq!(args.workspace, Some(PathBuf::from("/var/lib/packager")));
                assert!(args.keep_runs);
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn global_verbose_flag() {
        let cli = Cli::parse_from(["container-packager", "-vvv", "detect"]);
        assert_eq!(cli.verbose, 3);
    }
}

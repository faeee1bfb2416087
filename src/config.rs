use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub workspace: WorkspaceConfig,
    pub docker: DockerConfig,
    pub build: BuildConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Per-request timeout in seconds (0 = none)
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Directory under which per-request run directories are created
    pub root: PathBuf,
    /// Keep run directories after the response is sent
    pub keep_runs: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DockerConfig {
    /// Unix socket of the Docker daemon (None = local defaults)
    pub socket: Option<String>,
    /// API timeout in seconds
    pub timeout_secs: u64,
}

/// Commands run for each supported project type.
///
/// Each command is a program followed by its arguments. They are spawned
/// directly, without a shell, in the extracted tree root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub dotnet: Vec<String>,
    pub maven: Vec<String>,
    pub npm_install: Vec<String>,
    pub npm_package: Vec<String>,
    /// File name of the override script looked up at the tree root
    pub override_script: String,
    /// Publish folder reported for C# projects, relative to the tree root
    pub dotnet_publish_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            request_timeout_secs: 0,
        }
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./temp"),
            keep_runs: false,
        }
    }
}

impl Default for DockerConfig {
    fn default() -> Self {
        Self {
            socket: None,
            timeout_secs: 120,
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            dotnet: command(&["dotnet", "publish"]),
            maven: command(&["mvn", "package", "-DskipTests"]),
            npm_install: command(&["npm", "install"]),
            npm_package: command(&["npm", "run", "package"]),
            override_script: "package.sh".to_string(),
            dotnet_publish_dir: "bin/Debug/net6.0/publish".to_string(),
        }
    }
}

fn command(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the user config file is used
    /// when present, and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.exists() => p,
                _ => return Ok(Self::default()),
            },
        };

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ParseError {
                path: path.clone(),
                source,
            })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/container-packager/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("container-packager").join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be non-zero".into()));
        }

        let commands = [
            ("build.dotnet", &self.build.dotnet),
            ("build.maven", &self.build.maven),
            ("build.npm_install", &self.build.npm_install),
            ("build.npm_package", &self.build.npm_package),
        ];
        for (name, cmd) in commands {
            if cmd.first().map_or(true, |p| p.trim().is_empty()) {
                return Err(ConfigError::Invalid(format!("{name} must name a program")));
            }
        }

        let script = &self.build.override_script;
        if script.is_empty() || script.contains('/') || script.contains('\\') {
            return Err(ConfigError::Invalid(
                "build.override_script must be a plain file name".into(),
            ));
        }

        if self.build.dotnet_publish_dir.is_empty() {
            return Err(ConfigError::Invalid(
                "build.dotnet_publish_dir must not be empty".into(),
            ));
        }

        Ok(())
    }
}

//! # Configuration
//!
//! Settings are layered, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. TOML file (`--config`, or `gradebook.toml` in the working directory)
//! 3. Environment variables
//! 4. CLI flags (applied by the `cli` module)
//!
//! ## Example
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 3000
//! graphiql = true
//! rate_limit = 100
//! cors_origins = ["http://localhost:5173"]
//!
//! [data]
//! dir = "data"
//! ```
//!
//! ## Environment Variables
//!
//! - `GRADEBOOK_DATA_DIR`: directory holding the JSON record files
//! - `GRADEBOOK_CORS_ORIGINS`: comma-separated origins, or "*" for all
//! - `GRADEBOOK_RATE_LIMIT`: requests per second (0 disables)

use gradebook_core::GradebookError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "gradebook.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to.
    pub host: String,

    /// Port to bind to.
    pub port: u16,

    /// Serve the GraphiQL page on `GET /graphql`.
    pub graphiql: bool,

    /// Requests per second across all clients; 0 disables limiting.
    pub rate_limit: u32,

    /// Allowed CORS origins. Empty means localhost only, `["*"]` means any.
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            graphiql: true,
            rate_limit: 100,
            cors_origins: Vec::new(),
            body_limit_bytes: 2 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Dataset location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory containing `student.json`, `course.json` and `grade.json`.
    pub dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
        }
    }
}

impl Config {
    /// Load configuration from defaults, an optional TOML file and the
    /// process environment.
    ///
    /// An explicitly named file must exist. Without one, `gradebook.toml` is
    /// read if present and silently skipped otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, GradebookError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Parse a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, GradebookError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            GradebookError::ConfigError(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
            .map_err(|e| GradebookError::ConfigError(format!("{}: {}", path.display(), e)))
    }

    /// Parse TOML text. Missing sections and keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, GradebookError> {
        toml::from_str(contents).map_err(|e| GradebookError::ConfigError(e.to_string()))
    }

    /// Apply environment-style overrides read through `lookup`.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, GradebookError> {
        if let Some(dir) = lookup("GRADEBOOK_DATA_DIR").filter(|d| !d.is_empty()) {
            self.data.dir = PathBuf::from(dir);
        }

        if let Some(origins) = lookup("GRADEBOOK_CORS_ORIGINS") {
            self.server.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(limit) = lookup("GRADEBOOK_RATE_LIMIT") {
            self.server.rate_limit = limit.trim().parse().map_err(|_| {
                GradebookError::ConfigError(format!(
                    "GRADEBOOK_RATE_LIMIT must be a non-negative integer, got '{}'",
                    limit
                ))
            })?;
        }

        Ok(self)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_bind_port_3000_with_graphiql() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert!(config.server.graphiql);
        assert_eq!(config.data.dir, PathBuf::from("data"));
        assert_eq!(config.server.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = Config::from_toml_str("[server]\nport = 8080\n").expect("parse");

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.rate_limit, 100);
        assert_eq!(config.data, DataConfig::default());
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = Config::from_toml_str("[server]\nport = \"high\"\n").expect_err("bad port");
        assert!(matches!(err, GradebookError::ConfigError(_)));
    }

    #[test]
    fn env_overrides_file_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("GRADEBOOK_DATA_DIR", "/srv/records"),
            ("GRADEBOOK_CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("GRADEBOOK_RATE_LIMIT", "0"),
        ]);

        let config = Config::from_toml_str("[data]\ndir = \"elsewhere\"\n")
            .and_then(|c| c.with_overrides(|k| env.get(k).map(|v| v.to_string())))
            .expect("config");

        assert_eq!(config.data.dir, PathBuf::from("/srv/records"));
        assert_eq!(
            config.server.cors_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert_eq!(config.server.rate_limit, 0);
    }

    #[test]
    fn bad_rate_limit_env_is_rejected() {
        let err = Config::default()
            .with_overrides(|k| (k == "GRADEBOOK_RATE_LIMIT").then(|| "fast".to_string()))
            .expect_err("not a number");
        assert!(matches!(err, GradebookError::ConfigError(_)));
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("gradebook.toml");
        std::fs::write(&path, "[server]\ngraphiql = false\n").expect("write");

        let config = Config::from_file(&path)
            .and_then(|c| c.with_overrides(no_env))
            .expect("load");
        assert!(!config.server.graphiql);
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).expect_err("missing");
        assert!(matches!(err, GradebookError::ConfigError(_)));
    }
}

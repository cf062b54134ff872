//! Configuration file management for tutor.
//!
//! Provides a TOML-based config file at `~/.config/tutor/config.toml` and a
//! resolution chain: CLI flag > env var > config file > default.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use tutor_core::backend::OpenAiConfig;
use tutor_db::config::DbConfig;

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub database: DatabaseSection,
    /// Completion backend settings. Model id, endpoint, timeout, and the
    /// API-key env-var name all live here rather than in code.
    #[serde(default)]
    pub openai: OpenAiConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatabaseSection {
    pub url: String,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: DbConfig::DEFAULT_URL.to_string(),
        }
    }
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the tutor config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/tutor` or `~/.config/tutor`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("tutor");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("tutor")
}

/// Return the path to the tutor config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents).context("failed to parse config file")?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;
    Ok(())
}

// -----------------------------------------------------------------------
// Resolution
// -----------------------------------------------------------------------

/// Fully resolved runtime configuration.
#[derive(Debug)]
pub struct TutorConfig {
    pub db_config: DbConfig,
    pub openai: OpenAiConfig,
}

impl TutorConfig {
    /// Resolve configuration for a command invocation.
    ///
    /// Database URL priority: `--database-url` flag, then
    /// `TUTOR_DATABASE_URL`, then the config file, then the default.
    /// Backend settings come from the config file when present, otherwise
    /// defaults.
    pub fn resolve(database_url_flag: Option<&str>) -> Result<Self> {
        let file = load_config().ok();

        let db_config = if let Some(url) = database_url_flag {
            DbConfig::new(url)
        } else if let Ok(url) = std::env::var("TUTOR_DATABASE_URL") {
            DbConfig::new(url)
        } else if let Some(file) = &file {
            DbConfig::new(file.database.url.clone())
        } else {
            DbConfig::new(DbConfig::DEFAULT_URL)
        };

        let openai = file.map(|f| f.openai).unwrap_or_default();

        Ok(Self { db_config, openai })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_file_gets_defaults() {
        let cfg: ConfigFile = toml::from_str("").unwrap();
        assert_eq!(cfg.database.url, DbConfig::DEFAULT_URL);
        assert_eq!(cfg.openai.api_key_env, "OPENAI_API_KEY");
        assert_eq!(cfg.openai.timeout_secs, 60);
    }

    #[test]
    fn config_file_sections_parse() {
        let cfg: ConfigFile = toml::from_str(
            r#"
[database]
url = "postgresql://db.internal:5432/tutor_prod"

[openai]
model = "gpt-4o"
timeout_secs = 90
"#,
        )
        .unwrap();
        assert_eq!(cfg.database.url, "postgresql://db.internal:5432/tutor_prod");
        assert_eq!(cfg.openai.model, "gpt-4o");
        assert_eq!(cfg.openai.timeout_secs, 90);
    }

    #[test]
    fn flag_overrides_everything() {
        let resolved = TutorConfig::resolve(Some("postgresql://flag-host:5432/x")).unwrap();
        assert_eq!(
            resolved.db_config.database_url,
            "postgresql://flag-host:5432/x"
        );
    }

    #[test]
    fn config_round_trips_through_toml() {
        let cfg = ConfigFile::default();
        let rendered = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ConfigFile = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.database.url, cfg.database.url);
        assert_eq!(parsed.openai.model, cfg.openai.model);
    }
}

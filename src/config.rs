//! Declarative configuration for hives and agents.
//!
//! An [`AgentConfig`] is both the parameter struct for
//! [`Hive::create_agent`](crate::Hive::create_agent) and the shape of an
//! `[[agents]]` table in a `hive.toml` file. Loading falls back to an empty
//! config when no file exists.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Retry budget applied when a config omits `max_retries`.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Parameters for one agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub name: String,
    pub backstory: String,
    pub instructions: String,

    /// Tool names, resolved against the hive's tool registry at creation
    /// time.
    #[serde(default)]
    pub tools: Vec<String>,

    pub model: String,

    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

impl AgentConfig {
    /// Config with no tools and the default retry budget.
    pub fn new(
        name: impl Into<String>,
        backstory: impl Into<String>,
        instructions: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            backstory: backstory.into(),
            instructions: instructions.into(),
            tools: Vec::new(),
            model: model.into(),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    pub fn with_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tools = tools.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HiveConfig {
    pub verbose: bool,
    pub agents: Vec<AgentConfig>,
}

impl HiveConfig {
    /// Load a config from an explicit path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from the default path, falling back to an empty config when the
    /// file does not exist.
    pub fn load_default() -> Result<Self> {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Config directory (`~/.config/hive`).
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("hive"))
    }

    /// Default config file path (`~/.config/hive/hive.toml`).
    pub fn default_config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("hive.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn omitted_fields_fall_back_to_defaults() {
        let config: HiveConfig = toml::from_str(
            r#"
            [[agents]]
            name = "summarizer"
            backstory = "You condense text."
            instructions = "Summarize the input in one sentence."
            model = "echo"
            "#,
        )
        .unwrap();

        assert!(!config.verbose);
        assert_eq!(config.agents.len(), 1);
        let agent = &config.agents[0];
        assert!(agent.tools.is_empty());
        assert_eq!(agent.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn full_agent_table_round_trips() {
        let original = HiveConfig {
            verbose: true,
            agents: vec![AgentConfig::new("researcher", "B", "I", "echo")
                .with_tools(["search"])
                .with_max_retries(5)],
        };

        let serialized = toml::to_string(&original).unwrap();
        let parsed: HiveConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = HiveConfig::load("/nonexistent/hive.toml").unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hive.toml");
        std::fs::write(&path, "agents = 12").unwrap();

        let err = HiveConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }
}

use crate::security::DEFAULT_DENIED_SUBSTRINGS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Config directory not found")]
    DirectoryNotFound,

    #[error("Invalid config value: {0}")]
    InvalidValue(String),

    #[error("API key environment variable '{0}' is not set")]
    MissingApiKey(String),
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub llm: LlmConfig,
    pub security: SecurityConfig,
    pub behavior: BehaviorConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LlmConfig {
    pub endpoint: String,
    /// Name of the environment variable holding the credential. The key
    /// itself is never stored in the config file.
    pub api_key_env: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SecurityConfig {
    pub denied_substrings: Vec<String>,
}

/// What to do when the binary is invoked with no arguments. The original
/// tool flip-flopped between these over its life; here it is an explicit
/// choice.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum NoArgsBehavior {
    Usage,
    DefaultInstruction,
    InitReadme,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BehaviorConfig {
    pub require_confirmation: bool,
    pub no_args: NoArgsBehavior,
    pub default_instruction: String,
    pub log_commands: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExportConfig {
    pub log_file: String,
    /// Branch name assumed for commits with no decoration
    pub default_branch: String,
}

impl Config {
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        let home = std::env::var("HOME").map_err(|_| ConfigError::DirectoryNotFound)?;
        Ok(PathBuf::from(home).join(".config").join("gitpal"))
    }

    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file, falling back to defaults when no file
    /// exists yet
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default_config());
        }

        let contents = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), ConfigError> {
        self.validate()?;

        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)?;

        let path = Self::config_path()?;
        fs::write(&path, toml::to_string_pretty(self)?)?;

        // Owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    pub fn default_config() -> Self {
        Config {
            llm: LlmConfig {
                endpoint: "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent".to_string(),
                api_key_env: "GEMINI_API_KEY".to_string(),
                timeout_seconds: 10,
            },
            security: SecurityConfig {
                denied_substrings: DEFAULT_DENIED_SUBSTRINGS
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
            behavior: BehaviorConfig {
                require_confirmation: true,
                no_args: NoArgsBehavior::Usage,
                default_instruction: "add and commit changes".to_string(),
                log_commands: true,
            },
            export: ExportConfig {
                log_file: "git_log.json".to_string(),
                default_branch: "main".to_string(),
            },
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.llm.endpoint.starts_with("http") {
            return Err(ConfigError::InvalidValue(format!(
                "endpoint does not look like a URL: {}",
                self.llm.endpoint
            )));
        }

        if self.llm.api_key_env.is_empty() {
            return Err(ConfigError::InvalidValue(
                "api_key_env must not be empty".to_string(),
            ));
        }

        if self.llm.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue(
                "timeout_seconds must be greater than 0".to_string(),
            ));
        }

        if self.export.log_file.is_empty() {
            return Err(ConfigError::InvalidValue(
                "export.log_file must not be empty".to_string(),
            ));
        }

        if self.export.default_branch.is_empty() {
            return Err(ConfigError::InvalidValue(
                "export.default_branch must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolve the credential from the environment. There is no fallback
    /// value; flows that need the generation service fail fast without it.
    pub fn require_api_key(&self) -> Result<String, ConfigError> {
        match std::env::var(&self.llm.api_key_env) {
            Ok(key) if !key.is_empty() => Ok(key),
            _ => Err(ConfigError::MissingApiKey(self.llm.api_key_env.clone())),
        }
    }
}

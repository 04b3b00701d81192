use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

pub const CONFIG_ENV: &str = "BACKGAMMON_CONFIG";
pub const SEED_ENV: &str = "BACKGAMMON_SEED";
pub const WHITE_ENV: &str = "BACKGAMMON_WHITE";
pub const BLACK_ENV: &str = "BACKGAMMON_BLACK";
pub const LOG_ENV: &str = "BACKGAMMON_LOG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    pub white_name: String,
    pub black_name: String,
    pub seed: Option<u64>,
    pub log_path: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub white_name: ValueSource,
    pub black_name: ValueSource,
    pub seed: ValueSource,
    pub log_path: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            white_name: ValueSource::Default,
            black_name: ValueSource::Default,
            seed: ValueSource::Default,
            log_path: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: EngineConfig,
    pub sources: ConfigSources,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            white_name: "Player 1".into(),
            black_name: "Player 2".into(),
            seed: None,
            log_path: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub fn load() -> Result<EngineConfig, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Defaults, then the TOML file named by `BACKGAMMON_CONFIG`, then
/// individual environment overrides.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = EngineConfig::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        apply_file(&mut cfg, &mut sources, toml::from_str(&s)?);
    }

    if let Some(seed) = non_empty_env(SEED_ENV) {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(name) = non_empty_env(WHITE_ENV) {
        cfg.white_name = name;
        sources.white_name = ValueSource::Env;
    }
    if let Some(name) = non_empty_env(BLACK_ENV) {
        cfg.black_name = name;
        sources.black_name = ValueSource::Env;
    }
    if let Some(path) = non_empty_env(LOG_ENV) {
        cfg.log_path = Some(path);
        sources.log_path = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

/// Parses a config file body on top of the defaults.
pub fn from_toml_str(s: &str) -> Result<EngineConfig, ConfigError> {
    let mut cfg = EngineConfig::default();
    apply_file(&mut cfg, &mut ConfigSources::default(), toml::from_str(s)?);
    validate(&cfg)?;
    Ok(cfg)
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    white_name: Option<String>,
    #[serde(default)]
    black_name: Option<String>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    log_path: Option<String>,
}

fn apply_file(cfg: &mut EngineConfig, sources: &mut ConfigSources, f: FileConfig) {
    if let Some(v) = f.white_name {
        cfg.white_name = v;
        sources.white_name = ValueSource::File;
    }
    if let Some(v) = f.black_name {
        cfg.black_name = v;
        sources.black_name = ValueSource::File;
    }
    if let Some(v) = f.seed {
        cfg.seed = Some(v);
        sources.seed = ValueSource::File;
    }
    if let Some(v) = f.log_path {
        cfg.log_path = Some(v);
        sources.log_path = ValueSource::File;
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn validate(cfg: &EngineConfig) -> Result<(), ConfigError> {
    if cfg.white_name.trim().is_empty() || cfg.black_name.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: player names must not be empty".into(),
        ));
    }
    if cfg.white_name == cfg.black_name {
        return Err(ConfigError::Invalid(
            "Invalid configuration: player names must differ".into(),
        ));
    }
    Ok(())
}

//! Layered settings: built-in defaults, then an optional TOML file named by
//! `FELT_CONFIG`, then `FELT_*` environment variables. Every value remembers
//! which layer it came from so `felt cfg` can show it.

use std::fmt;
use std::fs;

use felt_ai::DealerConfig;
use felt_engine::errors::GameError;
use felt_engine::player::STARTING_CHIPS;
use felt_engine::rules::Blinds;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_chips: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub seed: Option<u64>,
    /// Chance, in percent, that the dealer folds a weak hand to a bet
    pub fold_percent: u8,
    pub raise_amount: u32,
}

impl Default for Config {
    fn default() -> Self {
        let blinds = Blinds::default();
        Self {
            starting_chips: STARTING_CHIPS,
            small_blind: blinds.small,
            big_blind: blinds.big,
            seed: None,
            fold_percent: 35,
            raise_amount: 50,
        }
    }
}

impl Config {
    pub fn blinds(&self) -> Result<Blinds, GameError> {
        Blinds::new(self.small_blind, self.big_blind)
    }

    pub fn dealer(&self) -> DealerConfig {
        DealerConfig {
            raise_amount: self.raise_amount,
            fold_percent: self.fold_percent,
            ..DealerConfig::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_chips: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub seed: ValueSource,
    pub fold_percent: ValueSource,
    pub raise_amount: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_chips: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            seed: ValueSource::Default,
            fold_percent: ValueSource::Default,
            raise_amount: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("FELT_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_chips {
            cfg.starting_chips = v;
            sources.starting_chips = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.fold_percent {
            cfg.fold_percent = v;
            sources.fold_percent = ValueSource::File;
        }
        if let Some(v) = f.raise_amount {
            cfg.raise_amount = v;
            sources.raise_amount = ValueSource::File;
        }
    }

    if let Some(v) = env_value("FELT_SEED")? {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_value("FELT_STARTING_CHIPS")? {
        cfg.starting_chips = v;
        sources.starting_chips = ValueSource::Env;
    }
    if let Some(v) = env_value("FELT_SMALL_BLIND")? {
        cfg.small_blind = v;
        sources.small_blind = ValueSource::Env;
    }
    if let Some(v) = env_value("FELT_BIG_BLIND")? {
        cfg.big_blind = v;
        sources.big_blind = ValueSource::Env;
    }
    if let Some(v) = env_value("FELT_FOLD_PERCENT")? {
        cfg.fold_percent = v;
        sources.fold_percent = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

/// Parses an environment variable; unset or empty means "not given".
fn env_value<T: std::str::FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(raw) if !raw.is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: '{}'", name, raw))),
        _ => Ok(None),
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_chips: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    fold_percent: Option<u8>,
    #[serde(default)]
    raise_amount: Option<u32>,
}

/// Largest stack per seat; both stacks together must fit the pot.
pub const MAX_STARTING_CHIPS: u32 = u32::MAX / 2;

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_chips == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_chips must be >0".into(),
        ));
    }
    if cfg.starting_chips > MAX_STARTING_CHIPS {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: starting_chips must be <={} (got {})",
            MAX_STARTING_CHIPS, cfg.starting_chips
        )));
    }
    if cfg.small_blind == 0 || cfg.small_blind > cfg.big_blind {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: blinds must satisfy 0 < small_blind <= big_blind (got {}/{})",
            cfg.small_blind, cfg.big_blind
        )));
    }
    if cfg.fold_percent > 100 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: fold_percent must be <=100".into(),
        ));
    }
    if cfg.raise_amount == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: raise_amount must be >0".into(),
        ));
    }
    Ok(())
}

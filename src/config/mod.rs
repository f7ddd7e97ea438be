use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::EngineError;
use crate::planner::DEFAULT_HORIZON_MONTHS;

const DEFAULT_DIR_NAME: &str = ".taka_core";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Returns the application data directory, defaulting to `~/.taka_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("TAKA_CORE_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    /// Provider written onto mandates created by the toggle flow.
    pub default_provider: String,
    pub default_monthly_limit: f64,
    /// Country code the country-specific leaderboard badge keys on.
    pub high_value_country: String,
    pub horizon_months: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-BD".into(),
            currency: "BDT".into(),
            default_provider: "bKash".into(),
            default_monthly_limit: 5000.0,
            high_value_country: "US".into(),
            horizon_months: DEFAULT_HORIZON_MONTHS,
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, EngineError> {
        Self::from_base(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, EngineError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, EngineError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    /// Loads the stored configuration, falling back to defaults when the
    /// file does not exist yet.
    pub fn load(&self) -> Result<Config, EngineError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), EngineError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::{DashboardError, Result};

const DEFAULT_DIR_NAME: &str = ".budget_dashboard";
const CONFIG_FILE: &str = "config.json";
const HOME_ENV: &str = "BUDGET_DASHBOARD_HOME";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub file_path: PathBuf,
    pub sheet_name: String,
    pub refresh_interval_secs: u64,
    pub cache_ttl_secs: u64,
    pub title: String,
    pub plain_mode: bool,
    pub bar_width: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from("Budget.xlsx"),
            sheet_name: "DashboardData".into(),
            refresh_interval_secs: 30,
            cache_ttl_secs: 30,
            title: "Family Budget Dashboard".into(),
            plain_mode: false,
            bar_width: 20,
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sheet_name.trim().is_empty() {
            return Err(DashboardError::Config("sheet name must not be empty".into()));
        }
        if self.refresh_interval_secs == 0 {
            return Err(DashboardError::Config(
                "refresh interval must be at least one second".into(),
            ));
        }
        if self.bar_width == 0 {
            return Err(DashboardError::Config("bar width must be positive".into()));
        }
        Ok(())
    }
}

/// Returns the application directory, defaulting to `~/.budget_dashboard`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: impl AsRef<Path>) -> Self {
        Self {
            path: base.as_ref().join(CONFIG_FILE),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the stored configuration, or the defaults when none was saved.
    pub fn load(&self) -> Result<DashboardConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file; using defaults");
            return Ok(DashboardConfig::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: DashboardConfig = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &DashboardConfig) -> Result<()> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
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

fn write_file(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

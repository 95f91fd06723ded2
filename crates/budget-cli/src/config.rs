use std::path::{Path, PathBuf};

use budget_core::Kind;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIST_LIMIT: usize = 20;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetConfig {
    #[serde(default)]
    pub ui: UiSection,
    #[serde(default)]
    pub log: LogSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// IANA zone used to stamp entry dates; system local time when unset
    pub timezone: Option<String>,
    pub currency_symbol: String,
    /// Row cap for list/search; 0 disables the cap
    pub list_limit: usize,
    pub default_kind: KindSetting,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            timezone: None,
            currency_symbol: "$".to_string(),
            list_limit: DEFAULT_LIST_LIMIT,
            default_kind: KindSetting::Expense,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KindSetting {
    Income,
    Expense,
}

impl From<KindSetting> for Kind {
    fn from(value: KindSetting) -> Self {
        match value {
            KindSetting::Income => Kind::Income,
            KindSetting::Expense => Kind::Expense,
        }
    }
}

impl BudgetConfig {
    /// Parsed timezone, if one is configured.
    pub fn timezone(&self) -> anyhow::Result<Option<chrono_tz::Tz>> {
        match self.ui.timezone.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) if value.eq_ignore_ascii_case("auto") => Ok(None),
            Some(value) => value
                .parse::<chrono_tz::Tz>()
                .map(Some)
                .map_err(|_| anyhow::anyhow!("Invalid timezone in config: {}", value)),
        }
    }

    /// Row cap for list/search, `None` when disabled.
    pub fn list_limit(&self) -> Option<usize> {
        match self.ui.list_limit {
            0 => None,
            limit => Some(limit),
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Resolve the config path: explicit flag or `BUDGET_CONFIG`, else XDG default.
pub fn resolve_config_path(explicit: Option<&str>) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(value) if !value.trim().is_empty() => Ok(PathBuf::from(value)),
        _ => default_config_path(),
    }
}

pub fn read_config(path: &Path) -> anyhow::Result<BudgetConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Read the config if it exists, otherwise fall back to defaults.
pub fn load_config(path: &Path) -> anyhow::Result<BudgetConfig> {
    if path.exists() {
        read_config(path)
    } else {
        Ok(BudgetConfig::default())
    }
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("budget"));
        }
    }
    Ok(home_dir()?.join(".config").join("budget"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

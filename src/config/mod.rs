//! Environment-driven configuration.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::indicators::{IndicatorError, WindowSet};

/// Moving-average windows a caller may pick from.
pub const WINDOW_MENU: [u32; 6] = [5, 10, 20, 50, 100, 200];

/// Windows used when the caller does not choose any.
pub const DEFAULT_WINDOWS: [u32; 3] = [20, 50, 200];

pub const DEFAULT_FRED_BASE_URL: &str = "https://api.stlouisfed.org";

/// Snapshot files are named `<prefix><YYYY-MM-DD>.csv`.
pub const SNAPSHOT_PREFIX: &str = "liquidity_data_";

/// Window selection errors: parsing, menu membership, or an invalid set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("window '{0}' is not an integer")]
    UnparseableWindow(String),

    #[error("window {window} is not one of the allowed windows {menu:?}")]
    NotInMenu { window: u32, menu: Vec<u32> },

    #[error(transparent)]
    Window(#[from] IndicatorError),
}

/// Get the deployment environment (`APP_ENV`), defaulting to sandbox.
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .map(|v| v.trim().to_lowercase())
        .unwrap_or_else(|_| "sandbox".to_string())
}

/// Directory holding snapshot files (`DATA_DIR`).
pub fn get_data_dir() -> PathBuf {
    env::var("DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

pub fn get_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080)
}

/// FRED API key (`FRED_API_KEY`). Required by the collector only.
pub fn get_fred_api_key() -> Option<String> {
    env::var("FRED_API_KEY").ok().filter(|k| !k.trim().is_empty())
}

/// FRED endpoint override (`FRED_BASE_URL`); `None` means the public API.
pub fn get_fred_base_url() -> Option<String> {
    env::var("FRED_BASE_URL").ok().filter(|u| !u.trim().is_empty())
}

/// Window selection for the dashboard and report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    menu: Vec<u32>,
    defaults: WindowSet,
}

impl WindowConfig {
    /// Build a config whose defaults must come from the menu.
    pub fn new(menu: &[u32], defaults: &[i64]) -> Result<Self, ConfigError> {
        let config = Self {
            menu: menu.to_vec(),
            defaults: WindowSet::new(defaults)?,
        };
        config.check_menu(&config.defaults)?;
        Ok(config)
    }

    /// Read `MA_WINDOWS` (e.g. `20,50,200`), falling back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var("MA_WINDOWS") {
            Ok(raw) => {
                let windows = parse_window_list(&raw)?;
                Self::new(&WINDOW_MENU, &windows)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn menu(&self) -> &[u32] {
        &self.menu
    }

    pub fn defaults(&self) -> &WindowSet {
        &self.defaults
    }

    /// Resolve a requested selection; `None` means the default subset.
    pub fn select(&self, requested: Option<&[i64]>) -> Result<WindowSet, ConfigError> {
        match requested {
            None => Ok(self.defaults.clone()),
            Some(windows) => {
                let set = WindowSet::new(windows)?;
                self.check_menu(&set)?;
                Ok(set)
            }
        }
    }

    fn check_menu(&self, set: &WindowSet) -> Result<(), ConfigError> {
        match set.iter().find(|w| !self.menu.contains(w)) {
            Some(window) => Err(ConfigError::NotInMenu {
                window,
                menu: self.menu.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            menu: WINDOW_MENU.to_vec(),
            defaults: WindowSet::from_valid(DEFAULT_WINDOWS.to_vec()),
        }
    }
}

/// Parse a comma-separated window list such as `"20, 50"`.
pub fn parse_window_list(raw: &str) -> Result<Vec<i64>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>()
                .map_err(|_| ConfigError::UnparseableWindow(part.to_string()))
        })
        .collect()
}

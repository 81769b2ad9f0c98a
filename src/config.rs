use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, UiError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Exported as `ESCDELAY` when the environment leaves it unset.
    pub esc_delay_ms: u32,
    pub label_width: u16,
    /// Size of the list a Combo pops up.
    pub list_width: u16,
    pub list_height: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            esc_delay_ms: 25,
            label_width: 16,
            list_width: 30,
            list_height: 10,
            log_dir: None,
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Config =
            serde_json::from_str(text).map_err(|e| UiError::Config(e.to_string()))?;
        if config.list_height == 0 {
            return Err(UiError::Config("list_height must be at least 1".to_string()));
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("sailor").join("logs"))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;

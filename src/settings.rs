use std::path::PathBuf;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{OpshubError, Result};

const SHEET_BASE: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vR71Z8tflSQ766x9J0dY1RCujrmPEKHPrH9q0uPmxF-CUq29W00jJuLc6jMpGMjoFhyKC4-KreB0J1j/pub";

fn default_assignments_url() -> String {
    format!("{SHEET_BASE}?gid=1020515194&single=true&output=csv")
}

fn default_va_tasks_url() -> String {
    format!("{SHEET_BASE}?gid=711470626&single=true&output=csv")
}

fn default_hub_url() -> String {
    format!("{SHEET_BASE}?gid=528090500&single=true&output=csv")
}

fn default_timezone() -> String {
    "America/Los_Angeles".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_assignments_url")]
    pub assignments_url: String,
    #[serde(default = "default_va_tasks_url")]
    pub va_tasks_url: String,
    #[serde(default = "default_hub_url")]
    pub hub_url: String,
    /// IANA zone name for "today"; all civil dates are computed here.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub creator_id: String,
    #[serde(default)]
    pub va_id: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            assignments_url: default_assignments_url(),
            va_tasks_url: default_va_tasks_url(),
            hub_url: default_hub_url(),
            timezone: default_timezone(),
            creator_id: String::new(),
            va_id: String::new(),
        }
    }
}

impl Settings {
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse()
            .map_err(|_| OpshubError::Timezone(self.timezone.clone()))
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("opshub")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn marks_path() -> PathBuf {
    config_dir().join("marks.json")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| OpshubError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

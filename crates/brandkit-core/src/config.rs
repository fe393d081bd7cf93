use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ACCENT_ENV: &str = "THEME_ACCENT_COLOR";
pub const BASE_ENV: &str = "THEME_BASE_COLOR";

/// Colour families the stylesheet tooling knows about.
pub const ACCENT_COLORS: &[&str] = &[
    "red", "orange", "amber", "yellow", "lime", "green", "emerald", "teal", "cyan", "sky", "blue",
    "indigo", "violet", "purple", "fuchsia", "pink", "rose",
];
pub const BASE_COLORS: &[&str] = &["slate", "gray", "zinc", "neutral", "stone"];

// ---------------------------------------------------------------------------
// ConfigWarning
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub message: String,
}

impl ConfigWarning {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// ThemeConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_accent")]
    pub accent: String,
    #[serde(default = "default_base")]
    pub base: String,
}

fn default_accent() -> String {
    "blue".to_string()
}

fn default_base() -> String {
    "zinc".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: default_accent(),
            base: default_base(),
        }
    }
}

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_ttl_minutes")]
    pub ttl_minutes: u32,
}

fn default_ttl_minutes() -> u32 {
    60
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: default_ttl_minutes(),
        }
    }
}

impl SessionConfig {
    pub fn ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(i64::from(self.ttl_minutes))
    }
}

// ---------------------------------------------------------------------------
// TwoFactorConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoFactorConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Days a device stays trusted after a successful challenge. `None`
    /// disables device trust entirely.
    #[serde(default = "default_trust_days")]
    pub trust_days: Option<u32>,
}

fn default_true() -> bool {
    true
}

fn default_trust_days() -> Option<u32> {
    Some(30)
}

impl TwoFactorConfig {
    pub fn trust_duration(&self) -> Option<chrono::Duration> {
        crate::two_factor::trust_duration(self.trust_days)
    }
}

impl Default for TwoFactorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            trust_days: default_trust_days(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub sessions: SessionConfig,
    #[serde(default)]
    pub two_factor: TwoFactorConfig,
}

impl Config {
    /// Load `.brandkit/config.yaml`, falling back to defaults when absent, and
    /// apply the theme environment overrides.
    pub fn load(root: &Path) -> Result<Self> {
        let mut cfg = Self::load_file(root)?;
        cfg.apply_env(|key| std::env::var(key).ok());
        Ok(cfg)
    }

    /// Like [`Config::load`] without environment overrides.
    pub fn load_file(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    /// Override the theme colours from `lookup` (normally the process
    /// environment). Blank values are ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(accent) = lookup(ACCENT_ENV).filter(|v| !v.trim().is_empty()) {
            self.theme.accent = accent.trim().to_string();
        }
        if let Some(base) = lookup(BASE_ENV).filter(|v| !v.trim().is_empty()) {
            self.theme.base = base.trim().to_string();
        }
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        for (key, value, known) in [
            ("theme.accent", &self.theme.accent, ACCENT_COLORS),
            ("theme.base", &self.theme.base, BASE_COLORS),
        ] {
            if value.trim().is_empty() {
                warnings.push(ConfigWarning::new(format!("{key} is empty")));
            } else if !known.contains(&value.as_str()) {
                warnings.push(ConfigWarning::new(format!(
                    "unknown colour '{value}' in {key}"
                )));
            }
        }

        if self.sessions.ttl_minutes == 0 {
            warnings.push(ConfigWarning::new(
                "sessions.ttl_minutes is 0: sessions expire as soon as they are created",
            ));
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

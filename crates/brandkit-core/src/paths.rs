use crate::error::{BrandkitError, Result};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const BRANDKIT_DIR: &str = ".brandkit";
pub const SESSIONS_DIR: &str = ".brandkit/sessions";
pub const OPTIONS_DIR: &str = "options";

pub const CONFIG_FILE: &str = ".brandkit/config.yaml";
pub const MANIFEST_FILE: &str = "manifest.yaml";

/// Mission document locations, in lookup order. The first one is the
/// primary location; the rest are fallbacks.
pub const MISSION_CANDIDATES: &[&str] = &[
    ".agent-os/product/mission.md",
    "business-plan.md",
    "docs/business-plan.md",
];

pub const STYLESHEET: &str = "resources/css/app.css";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn mission_candidates(root: &Path) -> Vec<PathBuf> {
    MISSION_CANDIDATES.iter().map(|p| root.join(p)).collect()
}

pub fn stylesheet_path(root: &Path) -> PathBuf {
    root.join(STYLESHEET)
}

pub fn sessions_dir(root: &Path) -> PathBuf {
    root.join(SESSIONS_DIR)
}

pub fn session_dir(root: &Path, id: &str) -> PathBuf {
    sessions_dir(root).join(id)
}

pub fn session_manifest(root: &Path, id: &str) -> PathBuf {
    session_dir(root, id).join(MANIFEST_FILE)
}

pub fn options_dir(root: &Path, session_id: &str) -> PathBuf {
    session_dir(root, session_id).join(OPTIONS_DIR)
}

pub fn option_path(root: &Path, session_id: &str, option_id: &str) -> PathBuf {
    options_dir(root, session_id).join(format!("{option_id}.yaml"))
}

// ---------------------------------------------------------------------------
// Id validation
// ---------------------------------------------------------------------------

/// Session and option ids are uuids. Anything else is rejected before it
/// reaches the file system.
pub fn validate_id(id: &str) -> Result<()> {
    uuid::Uuid::parse_str(id)
        .map(|_| ())
        .map_err(|_| BrandkitError::InvalidSessionId(id.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

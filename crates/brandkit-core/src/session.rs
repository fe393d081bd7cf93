use crate::error::{BrandkitError, Result};
use crate::paths;
use crate::types::{BusinessContext, LogoBrief};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub const MAX_SERVICE_NAME_LEN: usize = 50;
/// Stored when the mission pitch yields no app name.
pub const DEFAULT_APP_NAME: &str = "Untitled App";

// ---------------------------------------------------------------------------
// SessionStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Pending,
    Generating,
    Ready,
    Completed,
    Expired,
}

impl SessionStatus {
    pub const ALL: &'static [SessionStatus] = &[
        SessionStatus::Pending,
        SessionStatus::Generating,
        SessionStatus::Ready,
        SessionStatus::Completed,
        SessionStatus::Expired,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SessionStatus::Pending => "pending",
            SessionStatus::Generating => "generating",
            SessionStatus::Ready => "ready",
            SessionStatus::Completed => "completed",
            SessionStatus::Expired => "expired",
        }
    }

    /// Whether `self -> target` is an allowed move. Generation can be retried
    /// (`generating -> pending`) and any live session can be expired.
    pub fn can_transition_to(self, target: SessionStatus) -> bool {
        use SessionStatus::*;
        matches!(
            (self, target),
            (Pending, Generating)
                | (Generating, Ready)
                | (Generating, Pending)
                | (Ready, Completed)
                | (Pending | Generating | Ready | Completed, Expired)
        )
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SessionStatus {
    type Err = BrandkitError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(SessionStatus::Pending),
            "generating" => Ok(SessionStatus::Generating),
            "ready" => Ok(SessionStatus::Ready),
            "completed" => Ok(SessionStatus::Completed),
            "expired" => Ok(SessionStatus::Expired),
            other => Err(BrandkitError::InvalidStatus(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// GeneratedOption
// ---------------------------------------------------------------------------

/// Lightweight reference to an option, kept on the session manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedOption {
    pub option_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

// ---------------------------------------------------------------------------
// LogoSession
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoSession {
    pub id: String,
    pub app_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_context: Option<BusinessContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_template: Option<String>,
    #[serde(default)]
    pub generated_options: Vec<GeneratedOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_option_id: Option<String>,
    #[serde(default)]
    pub status: SessionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl LogoSession {
    pub fn new(app_name: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            app_name: app_name.into(),
            business_context: None,
            prompt_template: None,
            generated_options: Vec::new(),
            selected_option_id: None,
            status: SessionStatus::Pending,
            created_at: now,
            updated_at: now,
            expires_at: now + ttl,
        }
    }

    /// A session seeded from a mission brief and the prompt built from it.
    /// A missing or blank app name falls back to [`DEFAULT_APP_NAME`].
    pub fn from_brief(brief: LogoBrief, prompt_template: String, ttl: Duration) -> Self {
        let app_name = brief
            .app_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
        let mut session = Self::new(app_name, ttl);
        session.business_context = Some(brief.context);
        session.prompt_template = Some(prompt_template);
        session
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    // ---------------------------------------------------------------------------
    // Persistence
    // ---------------------------------------------------------------------------

    pub fn load(root: &Path, id: &str) -> Result<Self> {
        paths::validate_id(id)?;
        let manifest = paths::session_manifest(root, id);
        if !manifest.exists() {
            return Err(BrandkitError::SessionNotFound(id.to_string()));
        }
        let data = std::fs::read_to_string(&manifest)?;
        let session: LogoSession = serde_yaml::from_str(&data)?;
        Ok(session)
    }

    /// Write the manifest, stamping `updated_at`.
    pub fn save(&mut self, root: &Path) -> Result<()> {
        self.updated_at = Utc::now();
        let manifest = paths::session_manifest(root, &self.id);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&manifest, data.as_bytes())
    }

    /// Every stored session, oldest first. Directories that are not session
    /// ids or lack a manifest are ignored.
    pub fn list(root: &Path) -> Result<Vec<Self>> {
        let sessions_dir = paths::sessions_dir(root);
        if !sessions_dir.exists() {
            return Ok(Vec::new());
        }

        let mut sessions = Vec::new();
        for entry in std::fs::read_dir(&sessions_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                let id = entry.file_name().to_string_lossy().into_owned();
                match Self::load(root, &id) {
                    Ok(s) => sessions.push(s),
                    Err(
                        BrandkitError::SessionNotFound(_) | BrandkitError::InvalidSessionId(_),
                    ) => {}
                    Err(e) => return Err(e),
                }
            }
        }
        sessions.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(sessions)
    }

    pub fn active(root: &Path, now: DateTime<Utc>) -> Result<Vec<Self>> {
        Ok(Self::list(root)?
            .into_iter()
            .filter(|s| !s.is_expired(now))
            .collect())
    }

    pub fn expired(root: &Path, now: DateTime<Utc>) -> Result<Vec<Self>> {
        Ok(Self::list(root)?
            .into_iter()
            .filter(|s| s.is_expired(now))
            .collect())
    }

    /// Remove a session together with all of its options.
    pub fn delete(root: &Path, id: &str) -> Result<()> {
        paths::validate_id(id)?;
        let dir = paths::session_dir(root, id);
        if !dir.exists() {
            return Err(BrandkitError::SessionNotFound(id.to_string()));
        }
        std::fs::remove_dir_all(&dir)?;
        tracing::debug!(id, "session deleted");
        Ok(())
    }

    /// Delete every session whose expiry is at or before `now`. Returns the
    /// number removed.
    pub fn purge_expired(root: &Path, now: DateTime<Utc>) -> Result<usize> {
        let expired = Self::expired(root, now)?;
        for session in &expired {
            Self::delete(root, &session.id)?;
        }
        if !expired.is_empty() {
            tracing::info!(count = expired.len(), "expired sessions purged");
        }
        Ok(expired.len())
    }

    // ---------------------------------------------------------------------------
    // Status transitions
    // ---------------------------------------------------------------------------

    pub fn transition(&mut self, target: SessionStatus) -> Result<()> {
        if !self.status.can_transition_to(target) {
            return Err(BrandkitError::InvalidTransition {
                from: self.status.to_string(),
                to: target.to_string(),
                reason: "transition not allowed".to_string(),
            });
        }
        self.status = target;
        Ok(())
    }

    // ---------------------------------------------------------------------------
    // Options
    // ---------------------------------------------------------------------------

    /// Persist `option` under this session and reference it from the manifest.
    pub fn add_option(&mut self, root: &Path, option: &LogoOption) -> Result<()> {
        if option.session_id != self.id {
            return Err(BrandkitError::OptionNotFound(option.id.clone()));
        }
        option.save(root)?;
        self.generated_options.push(GeneratedOption {
            option_id: option.id.clone(),
            thumbnail_url: option.image_url.clone(),
        });
        self.save(root)
    }

    /// Options stored for this session, oldest first.
    pub fn options(&self, root: &Path) -> Result<Vec<LogoOption>> {
        let dir = paths::options_dir(root, &self.id);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut options = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }
            let data = std::fs::read_to_string(&path)?;
            options.push(serde_yaml::from_str::<LogoOption>(&data)?);
        }
        options.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(options)
    }

    /// Record the chosen option and complete the session. The option must
    /// belong to this session and the session must be `ready`.
    pub fn select_option(&mut self, root: &Path, option_id: &str) -> Result<()> {
        let option = LogoOption::load(root, &self.id, option_id)?;
        self.transition(SessionStatus::Completed)?;
        self.selected_option_id = Some(option.id);
        self.save(root)
    }
}

// ---------------------------------------------------------------------------
// LogoOption
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoOption {
    pub id: String,
    pub session_id: String,
    pub prompt: String,
    pub ai_service: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl LogoOption {
    pub fn new(
        session_id: impl Into<String>,
        prompt: impl Into<String>,
        ai_service: impl Into<String>,
    ) -> Result<Self> {
        let ai_service = ai_service.into();
        if ai_service.chars().count() > MAX_SERVICE_NAME_LEN {
            return Err(BrandkitError::ServiceNameTooLong(ai_service));
        }
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            session_id: session_id.into(),
            prompt: prompt.into(),
            ai_service,
            image_url: None,
            image_data: None,
            metadata: serde_json::Value::Null,
            created_at: Utc::now(),
        })
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn load(root: &Path, session_id: &str, option_id: &str) -> Result<Self> {
        paths::validate_id(session_id)?;
        paths::validate_id(option_id)?;
        let path = paths::option_path(root, session_id, option_id);
        if !path.exists() {
            return Err(BrandkitError::OptionNotFound(option_id.to_string()));
        }
        let data = std::fs::read_to_string(&path)?;
        let option: LogoOption = serde_yaml::from_str(&data)?;
        Ok(option)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::option_path(root, &self.session_id, &self.id);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

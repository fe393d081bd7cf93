use crate::config::ThemeConfig;
use crate::extractor;
use crate::mission::read_mission_document;
use crate::prompt;
use crate::theme;
use crate::types::{BusinessContext, LogoBrief, PromptContext, ThemeColors};
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// MissionParser
// ---------------------------------------------------------------------------

/// Mission-driven prompt pipeline as seen by callers. The synthesis methods
/// are pure and shared by every implementation.
pub trait MissionParser {
    fn extract_business_context(&self) -> BusinessContext;

    fn extract_theme_colors(&self) -> ThemeColors;

    fn extract_app_name(&self) -> Option<String>;

    fn generate_prompt_context(
        &self,
        business: &BusinessContext,
        colors: &ThemeColors,
    ) -> PromptContext {
        prompt::generate_prompt_context(business, colors)
    }

    fn generate_logo_prompt(&self, brief: &LogoBrief, colors: &ThemeColors) -> String {
        prompt::generate_logo_prompt(brief, colors)
    }
}

// ---------------------------------------------------------------------------
// ProjectMissionParser
// ---------------------------------------------------------------------------

/// Reads the mission document and stylesheet of a project directory. Nothing
/// is cached: every call goes back to the file system.
#[derive(Debug, Clone)]
pub struct ProjectMissionParser {
    root: PathBuf,
    theme: ThemeConfig,
}

impl ProjectMissionParser {
    pub fn new(root: impl Into<PathBuf>, theme: ThemeConfig) -> Self {
        Self {
            root: root.into(),
            theme,
        }
    }

    /// App name and business context from a single read of the mission file.
    pub fn brief(&self) -> LogoBrief {
        let document = read_mission_document(&self.root);
        LogoBrief::new(
            extractor::extract_app_name(&document),
            extractor::extract_business_context(&document),
        )
    }
}

impl MissionParser for ProjectMissionParser {
    fn extract_business_context(&self) -> BusinessContext {
        extractor::extract_business_context(&read_mission_document(&self.root))
    }

    fn extract_theme_colors(&self) -> ThemeColors {
        theme::extract_theme_colors(&self.root, &self.theme)
    }

    fn extract_app_name(&self) -> Option<String> {
        extractor::extract_app_name(&read_mission_document(&self.root))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// BusinessContext
// ---------------------------------------------------------------------------

/// Structured summary of a mission document.
///
/// Every list holds distinct entries in first-seen order. All fields default
/// so a partially filled context (as stored on a session, or supplied by a
/// caller) deserializes cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessContext {
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub target_audience: Vec<String>,
    #[serde(default)]
    pub brand_personality: Vec<String>,
    #[serde(default)]
    pub values: Vec<String>,
}

impl BusinessContext {
    pub fn is_empty(&self) -> bool {
        self.industry.is_none()
            && self.target_audience.is_empty()
            && self.brand_personality.is_empty()
            && self.values.is_empty()
    }
}

// ---------------------------------------------------------------------------
// LogoBrief
// ---------------------------------------------------------------------------

/// Business context plus the app name, the input of the logo prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoBrief {
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(flatten)]
    pub context: BusinessContext,
}

impl LogoBrief {
    pub fn new(app_name: Option<String>, context: BusinessContext) -> Self {
        Self { app_name, context }
    }
}

// ---------------------------------------------------------------------------
// ThemeColors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub accent: String,
    pub base: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_shade: Option<String>,
}

impl ThemeColors {
    pub fn new(accent: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            accent: accent.into(),
            base: base.into(),
            accent_shade: None,
        }
    }
}

// ---------------------------------------------------------------------------
// PromptContext
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptContext {
    pub style_keywords: Vec<String>,
    pub color_palette: Vec<String>,
    pub industry_context: Vec<String>,
    pub audience_context: Vec<String>,
}

// ---------------------------------------------------------------------------
// Ordered-set helper
// ---------------------------------------------------------------------------

/// Drop repeated entries, keeping the first occurrence of each.
pub fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

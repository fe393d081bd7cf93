use crate::config::{Config, ThemeConfig, ACCENT_COLORS, BASE_COLORS};
use crate::error::{BrandkitError, Result};
use crate::io::{atomic_write, read_optional};
use crate::paths;
use crate::types::ThemeColors;
use regex::{Captures, Regex};
use serde::Serialize;
use std::ops::Range;
use std::path::Path;
use std::sync::OnceLock;

/// Shade used for `--color-accent` in the light theme.
pub const LIGHT_ACCENT_SHADE: u16 = 600;
/// Shade used for `--color-accent` inside `.dark { ... }`.
pub const DARK_ACCENT_SHADE: u16 = 500;

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Resolve the configured colours, refining the accent to a concrete shade
/// when the project stylesheet declares one.
pub fn extract_theme_colors(root: &Path, theme: &ThemeConfig) -> ThemeColors {
    let mut colors = ThemeColors::new(theme.accent.clone(), theme.base.clone());
    if let Some(css) = read_optional(&paths::stylesheet_path(root)) {
        colors.accent_shade = find_accent_shade(&css, &colors.accent);
    }
    colors
}

/// First `--color-accent: var(--color-<accent>-<N>)` declaration in `css`,
/// returned as `<accent>-<N>`.
pub fn find_accent_shade(css: &str, accent: &str) -> Option<String> {
    // The accent family is interpolated into the pattern, so it is built per call.
    let pattern = format!(
        r"--color-accent:\s*var\(--color-({}-\d+)\)",
        regex::escape(accent)
    );
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!(accent, error = %e, "could not build accent pattern");
            return None;
        }
    };
    let shade = re.captures(css).map(|caps| caps[1].to_string());
    tracing::debug!(accent, shade = ?shade, "accent shade lookup");
    shade
}

// ---------------------------------------------------------------------------
// Switching
// ---------------------------------------------------------------------------

static ACCENT_DECL_RE: OnceLock<Regex> = OnceLock::new();
static DARK_BLOCK_RE: OnceLock<Regex> = OnceLock::new();

fn accent_decl_re() -> &'static Regex {
    ACCENT_DECL_RE.get_or_init(|| {
        Regex::new(r"--color-accent:\s*var\(--color-[a-z]+-\d+\)").expect("valid regex")
    })
}

fn dark_block_re() -> &'static Regex {
    DARK_BLOCK_RE.get_or_init(|| Regex::new(r"\.dark\s*\{[^}]*\}").expect("valid regex"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeUpdate {
    pub accent: String,
    pub base: String,
    /// `--color-accent` declarations rewritten in the stylesheet.
    pub declarations_updated: usize,
}

/// Point every `--color-accent` declaration in `css` at the `accent` family:
/// the light shade normally, the dark shade inside `.dark` blocks. Returns the
/// new stylesheet and the number of declarations rewritten.
pub fn rewrite_accent(css: &str, accent: &str) -> (String, usize) {
    let dark: Vec<Range<usize>> = dark_block_re().find_iter(css).map(|m| m.range()).collect();
    let mut count = 0;
    let updated = accent_decl_re().replace_all(css, |caps: &Captures| {
        count += 1;
        let start = caps.get(0).map_or(0, |m| m.start());
        let shade = if dark.iter().any(|block| block.contains(&start)) {
            DARK_ACCENT_SHADE
        } else {
            LIGHT_ACCENT_SHADE
        };
        format!("--color-accent: var(--color-{accent}-{shade})")
    });
    (updated.into_owned(), count)
}

fn check_family(kind: &'static str, value: &str, known: &[&str]) -> Result<()> {
    if known.contains(&value) {
        Ok(())
    } else {
        Err(BrandkitError::UnknownColor {
            kind,
            value: value.to_string(),
        })
    }
}

/// Switch the project theme. Both families are validated before anything is
/// written. The choice is stored in `.brandkit/config.yaml`, and a new accent
/// is also written into the stylesheet when one exists.
pub fn set_theme_colors(
    root: &Path,
    accent: Option<&str>,
    base: Option<&str>,
) -> Result<ThemeUpdate> {
    if let Some(accent) = accent {
        check_family("accent", accent, ACCENT_COLORS)?;
    }
    if let Some(base) = base {
        check_family("base", base, BASE_COLORS)?;
    }

    let mut config = Config::load_file(root)?;
    if let Some(accent) = accent {
        config.theme.accent = accent.to_string();
    }
    if let Some(base) = base {
        config.theme.base = base.to_string();
    }
    config.save(root)?;

    let mut declarations_updated = 0;
    let stylesheet = paths::stylesheet_path(root);
    if let Some(accent) = accent.filter(|_| stylesheet.is_file()) {
        // Read strictly: a lossy decode would corrupt the file on write-back.
        let css = std::fs::read_to_string(&stylesheet)?;
        let (updated, count) = rewrite_accent(&css, accent);
        if count > 0 {
            atomic_write(&stylesheet, updated.as_bytes())?;
        }
        declarations_updated = count;
    }

    tracing::info!(
        accent = %config.theme.accent,
        base = %config.theme.base,
        declarations_updated,
        "theme updated"
    );
    Ok(ThemeUpdate {
        accent: config.theme.accent,
        base: config.theme.base,
        declarations_updated,
    })
}

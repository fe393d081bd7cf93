use crate::types::{BusinessContext, LogoBrief, PromptContext, ThemeColors};

const DEFAULT_APP_NAME: &str = "the application";
const DEFAULT_INDUSTRY: &str = "technology";
const DEFAULT_PERSONALITY: &str = "modern, professional";
const DEFAULT_ACCENT: &str = "blue";

/// Sort the business context and colours into prompt categories.
pub fn generate_prompt_context(business: &BusinessContext, colors: &ThemeColors) -> PromptContext {
    let mut color_palette = vec![colors.accent.clone()];
    if colors.base != colors.accent {
        color_palette.push(colors.base.clone());
    }

    PromptContext {
        style_keywords: business.brand_personality.clone(),
        color_palette,
        industry_context: business
            .industry
            .iter()
            .filter(|industry| !industry.is_empty())
            .cloned()
            .collect(),
        audience_context: business.target_audience.clone(),
    }
}

/// The image-generation prompt for `brief`. Absent or empty inputs fall back
/// to generic wording, so the result is always a complete sentence set.
pub fn generate_logo_prompt(brief: &LogoBrief, colors: &ThemeColors) -> String {
    let app_name = non_empty(brief.app_name.as_deref()).unwrap_or(DEFAULT_APP_NAME);
    let industry = non_empty(brief.context.industry.as_deref()).unwrap_or(DEFAULT_INDUSTRY);
    let personality = if brief.context.brand_personality.is_empty() {
        DEFAULT_PERSONALITY.to_string()
    } else {
        brief.context.brand_personality.join(", ")
    };
    let main_color = non_empty(Some(colors.accent.as_str())).unwrap_or(DEFAULT_ACCENT);

    let mut prompt = String::with_capacity(320);
    prompt.push_str(&format!("Create a minimalist square logo for {app_name}, "));
    prompt.push_str(&format!("a {industry} application. "));
    prompt.push_str(&format!("The logo should be {personality}. "));
    prompt.push_str(&format!("Use {main_color} as the primary color. "));
    prompt.push_str("The design should work well at small sizes and be suitable for app icons. ");
    prompt.push_str("Keep it simple, memorable, and avoid text unless absolutely essential.");
    prompt
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

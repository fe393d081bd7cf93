//! Heuristic business-context extraction from a markdown mission document.
//!
//! Nothing here fails: a document that does not follow the expected layout
//! simply yields fewer matches.

use crate::rules::{evaluate, personality_scans, value_scans};
use crate::types::{dedup_preserving_order, BusinessContext};
use regex::Regex;
use std::sync::OnceLock;

const ECOMMERCE_TERMS: &[&str] = &["e-commerce", "ecommerce", "online store"];
const ECOMMERCE_LABEL: &str = "e-commerce";

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

static INDUSTRY_RE: OnceLock<Regex> = OnceLock::new();
static CUSTOMERS_HEADING_RE: OnceLock<Regex> = OnceLock::new();
static BOLD_RE: OnceLock<Regex> = OnceLock::new();
static HELPS_RE: OnceLock<Regex> = OnceLock::new();
static APP_NAME_RE: OnceLock<Regex> = OnceLock::new();

fn industry_re() -> &'static Regex {
    INDUSTRY_RE.get_or_init(|| {
        Regex::new(r"(?i)is\s+(?:a|an)\s+([\w\s]+?)\s+(?:that|designed|for)").expect("valid regex")
    })
}

fn customers_heading_re() -> &'static Regex {
    CUSTOMERS_HEADING_RE
        .get_or_init(|| Regex::new(r"### Primary Customers\s*\n").expect("valid regex"))
}

fn bold_re() -> &'static Regex {
    BOLD_RE.get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid regex"))
}

fn helps_re() -> &'static Regex {
    HELPS_RE.get_or_init(|| {
        Regex::new(r"(?i)helps?\s+([\w\s,]+?)\s+(?:to|by|manage|track)").expect("valid regex")
    })
}

fn app_name_re() -> &'static Regex {
    APP_NAME_RE.get_or_init(|| {
        Regex::new(r"## Pitch\s*\n\s*\n\s*([A-Z][\w\s]+?)\s+is").expect("valid regex")
    })
}

// ---------------------------------------------------------------------------
// Section helpers
// ---------------------------------------------------------------------------

/// Text following `heading` up to the next `\n##` (which also ends at `###`)
/// or the end of the document. The body is never empty: the terminator is
/// only looked for from the second character on.
pub(crate) fn section_body<'a>(content: &'a str, heading: &str) -> Option<&'a str> {
    let start = content.find(heading)? + heading.len();
    body_from(content, start)
}

fn body_from(content: &str, start: usize) -> Option<&str> {
    let rest = &content[start..];
    let first = rest.chars().next()?.len_utf8();
    let end = rest[first..]
        .find("\n##")
        .map_or(rest.len(), |offset| first + offset);
    Some(&rest[..end])
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Derive industry, audience, personality and values from `document`.
///
/// An empty document yields an empty context.
pub fn extract_business_context(document: &str) -> BusinessContext {
    if document.is_empty() {
        return BusinessContext::default();
    }

    let context = BusinessContext {
        industry: extract_industry(document),
        target_audience: extract_target_audience(document),
        brand_personality: evaluate(&personality_scans(), document),
        values: evaluate(&value_scans(), document),
    };
    tracing::debug!(
        industry = ?context.industry,
        audience = context.target_audience.len(),
        personality = context.brand_personality.len(),
        values = context.values.len(),
        "business context extracted"
    );
    context
}

/// The capitalized name opening the `## Pitch` paragraph, e.g.
/// `"FinanceFlow"` from "FinanceFlow is a personal finance tool".
pub fn extract_app_name(document: &str) -> Option<String> {
    if document.is_empty() {
        return None;
    }
    app_name_re()
        .captures(document)
        .map(|caps| caps[1].trim().to_string())
}

pub fn extract_industry(document: &str) -> Option<String> {
    if let Some(caps) = industry_re().captures(document) {
        return Some(caps[1].trim().to_lowercase());
    }

    let lower = document.to_lowercase();
    if ECOMMERCE_TERMS.iter().any(|term| lower.contains(term)) {
        return Some(ECOMMERCE_LABEL.to_string());
    }

    None
}

pub fn extract_target_audience(document: &str) -> Vec<String> {
    let mut audience: Vec<String> = customers_heading_re()
        .find(document)
        .and_then(|m| body_from(document, m.end()))
        .map(|section| {
            bold_re()
                .captures_iter(section)
                .map(|caps| caps[1].trim().to_lowercase())
                .collect()
        })
        .unwrap_or_default();

    if audience.is_empty() {
        if let Some(caps) = helps_re().captures(document) {
            audience.push(caps[1].trim().to_lowercase());
        }
    }

    dedup_preserving_order(audience)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const TASKMASTER: &str = "\
# Product Mission

> Last Updated: 2025-01-24
> Version: 1.0.0

## Pitch

TaskMaster is a productivity software designed for small business owners that helps them manage tasks efficiently by providing intuitive task management and collaboration features.

## Users

### Primary Customers

- **Small Business Owners**: Entrepreneurs running businesses with 1-50 employees
- **Freelancers**: Independent professionals managing multiple projects

### User Personas

**Busy Entrepreneur** (30-45 years old)
- **Role:** Small Business Owner
- **Context:** Managing multiple projects and team members
- **Pain Points:** Task overload, poor organization, missed deadlines
- **Goals:** Streamline workflows, improve team productivity

## The Problem

### Task Management Chaos

Small businesses struggle with scattered tasks across emails, sticky notes, and various apps. This fragmentation leads to missed deadlines and decreased productivity.

**Our Solution:** Centralized task management with smart prioritization.

## Differentiators

### AI-Powered Prioritization

Unlike traditional task managers, we use AI to automatically prioritize tasks based on deadlines, dependencies, and business impact.

## Key Features

### Core Features

- **Smart Task Lists:** AI-organized task prioritization
- **Team Collaboration:** Real-time updates and assignments
- **Progress Tracking:** Visual dashboards and reports
";

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_document_yields_empty_context() {
        let ctx = extract_business_context("");
        assert_eq!(ctx, BusinessContext::default());
        assert!(ctx.industry.is_none());
        assert!(ctx.is_empty());
    }

    #[test]
    fn full_mission_document() {
        let ctx = extract_business_context(TASKMASTER);
        assert_eq!(ctx.industry.as_deref(), Some("productivity software"));
        assert_eq!(
            ctx.target_audience,
            strings(&["small business owners", "freelancers"])
        );
        assert_eq!(ctx.brand_personality, strings(&["efficient"]));
        assert_eq!(ctx.values, strings(&["organization", "productivity"]));
    }

    #[test]
    fn extraction_is_idempotent() {
        assert_eq!(
            extract_business_context(TASKMASTER),
            extract_business_context(TASKMASTER)
        );
    }

    #[test]
    fn app_name_from_pitch() {
        let doc = "\
# Product Mission

## Pitch

FinanceFlow is a personal finance management tool that helps individuals track expenses and budget effectively.
";
        assert_eq!(extract_app_name(doc).as_deref(), Some("FinanceFlow"));
        assert_eq!(extract_app_name(TASKMASTER).as_deref(), Some("TaskMaster"));
    }

    #[test]
    fn app_name_multi_word() {
        let doc = "## Pitch\n\nTask Master Pro is a planner for teams.\n";
        assert_eq!(extract_app_name(doc).as_deref(), Some("Task Master Pro"));
    }

    #[test]
    fn app_name_absent() {
        assert!(extract_app_name("").is_none());
        assert!(extract_app_name("# Mission\n\nNo pitch here.").is_none());
        // Lower-case opening word is not treated as a name.
        assert!(extract_app_name("## Pitch\n\nour app is great\n").is_none());
    }

    #[test]
    fn industry_falls_back_to_ecommerce() {
        let doc = "# Business Plan\n\nOur product is an e-commerce platform...";
        assert_eq!(extract_industry(doc).as_deref(), Some("e-commerce"));
        assert_eq!(
            extract_industry("We run an Online Store.").as_deref(),
            Some("e-commerce")
        );
    }

    #[test]
    fn industry_pitch_is_case_insensitive() {
        let doc = "Acme IS AN Analytics Platform FOR retailers.";
        assert_eq!(extract_industry(doc).as_deref(), Some("analytics platform"));
    }

    #[test]
    fn industry_absent() {
        assert!(extract_industry("Nothing to see.").is_none());
    }

    #[test]
    fn audience_dedups_repeated_customers() {
        let doc = "\
### Primary Customers

- **Small Business Owners**: owners
- **Freelancers**: solo
- **Small Business Owners**: again
- **Freelancers**: again

## Next

**Small Business Owners** mentioned outside the section.
";
        assert_eq!(
            extract_target_audience(doc),
            strings(&["small business owners", "freelancers"])
        );
    }

    #[test]
    fn audience_section_ends_at_next_heading() {
        let doc = "\
### Primary Customers

- **Designers**: people who design

### User Personas

**Busy Entrepreneur** (30-45 years old)
";
        assert_eq!(extract_target_audience(doc), strings(&["designers"]));
    }

    #[test]
    fn audience_falls_back_to_pitch() {
        let doc = "Ledger helps freelancers and agencies track invoices.";
        assert_eq!(
            extract_target_audience(doc),
            strings(&["freelancers and agencies"])
        );
    }

    #[test]
    fn personas_yield_personality() {
        let doc = "\
# Product Mission

## Users

### User Personas

**Tech-Savvy Professional** (25-35 years old)
- **Role:** Software Developer
- **Context:** Building modern applications
- **Pain Points:** Complex setup, slow development
- **Goals:** Rapid prototyping, clean code

**Creative Designer** (30-40 years old)
- **Role:** UI/UX Designer
- **Context:** Creating beautiful interfaces
- **Pain Points:** Limited customization options
- **Goals:** Flexible design system
";
        let ctx = extract_business_context(doc);
        assert_eq!(
            ctx.brand_personality,
            strings(&["fast", "modern", "flexible", "creative"])
        );
    }

    #[test]
    fn problem_solution_values() {
        let doc = "\
# Product Mission

## The Problem

### Security Vulnerabilities

Applications often have security flaws that expose user data. This creates trust issues and compliance problems.

**Our Solution:** Bank-level security with automated vulnerability scanning.

### Performance Issues

Slow applications frustrate users and hurt business growth.

**Our Solution:** Lightning-fast performance with intelligent caching.
";
        let ctx = extract_business_context(doc);
        assert_eq!(ctx.values, strings(&["security", "trust", "performance"]));
    }

    #[test]
    fn section_body_requires_one_character() {
        assert!(section_body("## Differentiators", "## Differentiators").is_none());
        // The leading newline is the mandatory first character, so the
        // following `## Next` is not seen as a terminator.
        assert_eq!(
            section_body("## Differentiators\n## Next", "## Differentiators"),
            Some("\n## Next")
        );
    }

    #[test]
    fn section_body_runs_to_end_of_document() {
        assert_eq!(
            section_body("## Key Features\n- smart lists", "## Key Features"),
            Some("\n- smart lists")
        );
    }
}

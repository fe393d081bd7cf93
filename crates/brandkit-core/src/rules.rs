use crate::extractor::section_body;
use crate::types::dedup_preserving_order;
use regex::Regex;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Keyword
// ---------------------------------------------------------------------------

/// Emits `label` when any needle is a substring of the (lower-cased) excerpt text.
#[derive(Debug, Clone, Copy)]
pub struct Keyword {
    pub label: &'static str,
    pub needles: &'static [&'static str],
}

impl Keyword {
    pub fn matches(&self, text: &str) -> bool {
        self.needles.iter().any(|needle| text.contains(needle))
    }
}

macro_rules! keyword {
    ($label:literal <= [$($needle:literal),+ $(,)?]) => {
        Keyword {
            label: $label,
            needles: &[$($needle),+],
        }
    };
}

// ---------------------------------------------------------------------------
// Vocabularies
// ---------------------------------------------------------------------------

pub const GOAL_VOCABULARY: &[Keyword] = &[
    keyword!("fast" <= ["rapid", "fast", "quick"]),
    keyword!("modern" <= ["clean", "modern", "beautiful"]),
    keyword!("flexible" <= ["flexible", "customiz"]),
    keyword!("secure" <= ["secure", "safe"]),
    keyword!("creative" <= ["creative", "design"]),
    keyword!("efficient" <= ["streamline", "improve"]),
];

pub const DIFFERENTIATOR_VOCABULARY: &[Keyword] = &[
    keyword!("smart" <= ["ai", "smart", "intelligent", "ai-powered"]),
    keyword!("trustworthy" <= ["trust", "reliable"]),
    keyword!("innovative" <= ["innovat"]),
    keyword!("professional" <= ["profession"]),
];

pub const FEATURE_VOCABULARY: &[Keyword] = &[keyword!("smart" <= ["smart", "ai", "intelligent"])];

pub const SOLUTION_VOCABULARY: &[Keyword] = &[keyword!(
    "efficient" <= ["efficient", "streamline", "centralized", "smart"]
)];

pub const PROBLEM_VOCABULARY: &[Keyword] = &[
    keyword!("security" <= ["security", "vulnerab"]),
    keyword!("performance" <= ["performance", "slow", "speed"]),
    keyword!("organization" <= ["chaos", "disorganiz", "scatter", "management"]),
    keyword!("productivity" <= ["productiv", "task"]),
    keyword!("trust" <= ["trust", "reliab"]),
    keyword!("teamwork" <= ["collaborat", "team"]),
];

pub const PROBLEM_BODY_VOCABULARY: &[Keyword] = &[
    keyword!("trust" <= ["trust", "reliab", "secure"]),
    keyword!("productivity" <= ["productiv"]),
];

pub const DOCUMENT_VALUE_VOCABULARY: &[Keyword] =
    &[keyword!("productivity" <= ["productivity", "productive"])];

// ---------------------------------------------------------------------------
// Excerpt / Scan
// ---------------------------------------------------------------------------

/// One piece of document text paired with the vocabulary it is tested against.
#[derive(Debug, Clone)]
pub struct Excerpt {
    pub text: String,
    pub vocabulary: &'static [Keyword],
}

impl Excerpt {
    pub fn new(text: &str, vocabulary: &'static [Keyword]) -> Self {
        Self {
            text: text.to_lowercase(),
            vocabulary,
        }
    }

    /// Labels of every keyword that matches, in vocabulary order.
    pub fn hits(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.vocabulary
            .iter()
            .filter(|k| k.matches(&self.text))
            .map(|k| k.label)
    }
}

/// A fn-pointer scan: cuts excerpts out of a document. Scans run independently
/// and in list order.
pub struct Scan {
    pub id: &'static str,
    pub excerpts: fn(&str) -> Vec<Excerpt>,
}

/// Run `scans` over `document` and collect the distinct labels in first-seen
/// order.
pub fn evaluate(scans: &[Scan], document: &str) -> Vec<String> {
    let mut labels = Vec::new();
    for scan in scans {
        let before = labels.len();
        for excerpt in (scan.excerpts)(document) {
            labels.extend(excerpt.hits().map(str::to_string));
        }
        tracing::trace!(scan = scan.id, hits = labels.len() - before, "scan evaluated");
    }
    dedup_preserving_order(labels)
}

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

static GOALS_RE: OnceLock<Regex> = OnceLock::new();
static SOLUTION_RE: OnceLock<Regex> = OnceLock::new();
static PROBLEM_BLOCK_RE: OnceLock<Regex> = OnceLock::new();

fn goals_re() -> &'static Regex {
    GOALS_RE.get_or_init(|| Regex::new(r"(?i)\*\*Goals:\*\*\s*([^\n]+)").expect("valid regex"))
}

fn solution_re() -> &'static Regex {
    SOLUTION_RE
        .get_or_init(|| Regex::new(r"(?i)\*\*Our Solution:\*\*\s*([^\n]+)").expect("valid regex"))
}

/// `### heading`, a blank line, then body text (no `#`) up to `**Our Solution:**`.
fn problem_block_re() -> &'static Regex {
    PROBLEM_BLOCK_RE.get_or_init(|| {
        Regex::new(r"(?s)###\s*([^\n]+)\s*\n\s*\n([^#]+?)\*\*Our Solution:\*\*")
            .expect("valid regex")
    })
}

// ---------------------------------------------------------------------------
// Excerpt builders
// ---------------------------------------------------------------------------

fn goal_excerpts(doc: &str) -> Vec<Excerpt> {
    goals_re()
        .captures_iter(doc)
        .flat_map(|caps| {
            caps[1]
                .split(',')
                .map(|goal| Excerpt::new(goal.trim(), GOAL_VOCABULARY))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn differentiator_excerpts(doc: &str) -> Vec<Excerpt> {
    section_body(doc, "## Differentiators")
        .map(|body| vec![Excerpt::new(body, DIFFERENTIATOR_VOCABULARY)])
        .unwrap_or_default()
}

fn feature_excerpts(doc: &str) -> Vec<Excerpt> {
    section_body(doc, "## Key Features")
        .map(|body| vec![Excerpt::new(body, FEATURE_VOCABULARY)])
        .unwrap_or_default()
}

fn solution_excerpts(doc: &str) -> Vec<Excerpt> {
    solution_re()
        .captures_iter(doc)
        .map(|caps| Excerpt::new(&caps[1], SOLUTION_VOCABULARY))
        .collect()
}

fn problem_block_excerpts(doc: &str) -> Vec<Excerpt> {
    problem_block_re()
        .captures_iter(doc)
        .flat_map(|caps| {
            [
                Excerpt::new(&caps[1], PROBLEM_VOCABULARY),
                Excerpt::new(&caps[2], PROBLEM_BODY_VOCABULARY),
            ]
        })
        .collect()
}

fn document_excerpts(doc: &str) -> Vec<Excerpt> {
    vec![Excerpt::new(doc, DOCUMENT_VALUE_VOCABULARY)]
}

// ---------------------------------------------------------------------------
// Default scans (evaluation order matters for first-seen ordering)
// ---------------------------------------------------------------------------

pub fn personality_scans() -> Vec<Scan> {
    vec![
        Scan {
            id: "persona_goals",
            excerpts: goal_excerpts,
        },
        Scan {
            id: "differentiators",
            excerpts: differentiator_excerpts,
        },
        Scan {
            id: "key_features",
            excerpts: feature_excerpts,
        },
        Scan {
            id: "solutions",
            excerpts: solution_excerpts,
        },
    ]
}

pub fn value_scans() -> Vec<Scan> {
    vec![
        Scan {
            id: "problem_blocks",
            excerpts: problem_block_excerpts,
        },
        Scan {
            id: "whole_document",
            excerpts: document_excerpts,
        },
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

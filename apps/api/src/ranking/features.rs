//! Feature extraction — turns one (job, candidate) pair into six normalized signals.
//!
//! Candidate data arrives as free-form application-form answers keyed by the
//! exact form-field labels, so every parse here is defensive: a missing or
//! malformed field resolves to a documented numeric fallback, never an error.
//! The resulting `FeatureVector` is ephemeral — recomputed on every scoring
//! call, never persisted — and the same vector that produced a score must
//! also drive its rationale.

use serde_json::{Map, Value};

use crate::models::ranking::{Candidate, Job};

// ────────────────────────────────────────────────────────────────────────────
// Field labels and vocabularies
// ────────────────────────────────────────────────────────────────────────────

/// Form-field labels read by name. These must match the application form verbatim.
pub const EXPERIENCE_FIELD: &str = "Years of Experience";
pub const EDUCATION_FIELD: &str = "Education";
pub const MOTIVATION_FIELD: &str = "Why do you want to work here?";

/// Technology/role vocabulary for skills matching.
///
/// Matching is plain substring containment on lower-cased text, so "java"
/// also hits inside "javascript" — accepted as an over-match (the term still
/// appears in the text) and pinned by a test.
pub const SKILL_KEYWORDS: &[&str] = &[
    "python",
    "javascript",
    "react",
    "node",
    "sql",
    "aws",
    "docker",
    "typescript",
    "vue",
    "angular",
    "java",
    "c++",
    "golang",
    "rust",
    "kubernetes",
    "mongodb",
    "postgresql",
    "redis",
    "graphql",
    "api",
    "machine learning",
    "ai",
    "data",
    "frontend",
    "backend",
    "fullstack",
];

/// Education tiers, checked in order — the first tier with a matching
/// substring wins, so "PhD and Master's" resolves to the doctoral tier.
const EDUCATION_TIERS: &[(&[&str], f64)] = &[
    (&["phd", "doctorate"], 1.0),
    (&["master", "ms", "mba"], 0.8),
    (&["bachelor", "bs", "ba"], 0.6),
    (&["associate"], 0.4),
];

/// Long-form answers are those longer than this many characters.
const LONG_ANSWER_MIN_CHARS: usize = 10;

/// Normalization ceilings for the two length-based features.
const RESPONSE_NORM_CHARS: f64 = 200.0;
const MOTIVATION_NORM_CHARS: f64 = 150.0;

// ────────────────────────────────────────────────────────────────────────────
// Feature vector
// ────────────────────────────────────────────────────────────────────────────

/// The six signals a scoring backend consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    /// Parsed years of experience; 0 when absent or unparsable.
    pub experience_years: f64,
    /// Fraction of candidate-data fields carrying a filled value, in [0, 1].
    pub completeness: f64,
    /// Mean length of long-form answers normalized by 200 chars, in [0, 1].
    pub response_quality: f64,
    /// Overlap between candidate skills and job skills, in [0, 1]; a neutral
    /// 0.5 when the job text names no known skill.
    pub skills_match: f64,
    /// Highest detected education tier: one of {0.2, 0.4, 0.6, 0.8, 1.0}.
    pub education_level: f64,
    /// Motivation-answer length normalized by 150 chars, in [0, 1].
    pub motivation_quality: f64,
}

/// Extracts all six features from a (job, candidate) pair. Total — every
/// input produces a vector.
pub fn extract_features(job: &Job, candidate: &Candidate) -> FeatureVector {
    let data = &candidate.data;

    FeatureVector {
        experience_years: experience_years(data.get(EXPERIENCE_FIELD)),
        completeness: completeness(data),
        response_quality: response_quality(data),
        skills_match: skills_match(job, data),
        education_level: education_level(data.get(EDUCATION_FIELD)),
        motivation_quality: motivation_quality(data.get(MOTIVATION_FIELD)),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Individual features
// ────────────────────────────────────────────────────────────────────────────

/// Parses the "Years of Experience" answer.
///
/// Numeric values pass through directly. Strings resolve in priority order:
/// a "10+"/"15+"/"20+" bucket marker → 15; a hyphenated range "A-B" → the
/// mean of A and B (A alone when B does not parse); otherwise the text with
/// any trailing '+' stripped is parsed as a float. Anything else yields 0.
fn experience_years(value: Option<&Value>) -> f64 {
    let value = match value {
        Some(v) => v,
        None => return 0.0,
    };

    if let Some(n) = value.as_f64() {
        return n;
    }

    let text = match value.as_str() {
        Some(s) => s,
        None => return 0.0,
    };

    if ["10+", "15+", "20+"].iter().any(|bucket| text.contains(bucket)) {
        return 15.0;
    }

    if text.contains('-') {
        let mut bounds = text.split('-');
        let low = bounds.next().and_then(parse_years);
        let high = bounds.next().and_then(parse_years);
        return match (low, high) {
            (Some(a), Some(b)) => (a + b) / 2.0,
            (Some(a), None) => a,
            _ => 0.0,
        };
    }

    parse_years(text.trim_end_matches('+')).unwrap_or(0.0)
}

fn parse_years(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Fraction of candidate-data fields that carry a filled value. Empty data
/// mapping → 0.
fn completeness(data: &Map<String, Value>) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let filled = data.values().filter(|v| is_filled(v)).count();
    filled as f64 / data.len() as f64
}

/// Whether a form value counts as filled: non-blank strings, non-zero
/// numbers, `true`, and non-empty arrays/objects.
fn is_filled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Mean character length of long-form string answers, normalized by 200 and
/// capped at 1. No long-form answers → 0.
fn response_quality(data: &Map<String, Value>) -> f64 {
    let lengths: Vec<f64> = data
        .values()
        .filter_map(Value::as_str)
        .map(|answer| answer.chars().count())
        .filter(|&len| len > LONG_ANSWER_MIN_CHARS)
        .map(|len| len as f64)
        .collect();

    if lengths.is_empty() {
        return 0.0;
    }

    let mean = lengths.iter().sum::<f64>() / lengths.len() as f64;
    (mean / RESPONSE_NORM_CHARS).min(1.0)
}

/// Overlap between the skills a candidate mentions anywhere in their answers
/// and the skills the job text asks for.
///
/// Returns |candidate ∩ job| / |job| over `SKILL_KEYWORDS`, or a neutral 0.5
/// when the job title + description name no known skill at all.
fn skills_match(job: &Job, data: &Map<String, Value>) -> f64 {
    let candidate_text = data
        .values()
        .map(value_text)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let job_text = format!(
        "{} {}",
        job.title,
        job.description.as_deref().unwrap_or_default()
    )
    .to_lowercase();

    let job_skills: Vec<&str> = SKILL_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| job_text.contains(kw))
        .collect();

    if job_skills.is_empty() {
        return 0.5;
    }

    let matching = job_skills
        .iter()
        .filter(|kw| candidate_text.contains(*kw))
        .count();

    matching as f64 / job_skills.len() as f64
}

/// Flattens any form value into searchable text. Strings pass through;
/// numbers, booleans, and containers are stringified; null becomes empty.
fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Highest education tier whose marker appears in the education answer.
/// Unrecognized or missing → 0.2 (some signal is assumed, never zero).
fn education_level(value: Option<&Value>) -> f64 {
    let text = value.map(value_text).unwrap_or_default().to_lowercase();

    for (markers, level) in EDUCATION_TIERS {
        if markers.iter().any(|marker| text.contains(marker)) {
            return *level;
        }
    }
    0.2
}

/// Motivation-answer length normalized by 150 chars, capped at 1.
/// Missing answer → 0.
fn motivation_quality(value: Option<&Value>) -> f64 {
    let text = value.map(value_text).unwrap_or_default();
    (text.chars().count() as f64 / MOTIVATION_NORM_CHARS).min(1.0)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A job opening, as supplied by the caller on each ranking request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub description: Option<String>,
    /// Structured requirements. Accepted for forward compatibility; the
    /// current extractor only reads title and description.
    #[serde(default)]
    pub requirements: Map<String, Value>,
}

/// One applicant, carrying free-form application-form answers keyed by the
/// exact form-field labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub data: Map<String, Value>,
}

/// Output record for one candidate in a ranked batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub id: String,
    pub name: String,
    /// Match score in [0, 100], rounded to one decimal place.
    pub score: f64,
    /// Human-readable explanation of the score.
    pub rationale: String,
}

#![allow(dead_code)]

//! Scoring — pluggable, trait-based backends that map a `FeatureVector` to a
//! base score, plus the presentation-variety perturbation applied on top.
//!
//! Default: `HeuristicModel` (fixed-weight sum, pure, deterministic).
//! Future: a learned model would implement `ScoreModel` and be injected into
//! the `Ranker` explicitly — it is never ambient state.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::ranking::features::FeatureVector;

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

/// Relative share of each feature in the heuristic score. Shares sum to 1,
/// so a candidate maxing every feature lands exactly on 100 before
/// perturbation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub experience: f64,
    pub skills: f64,
    pub completeness: f64,
    pub response_quality: f64,
    pub education: f64,
    pub motivation: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            experience: 0.25,
            skills: 0.30,
            completeness: 0.15,
            response_quality: 0.15,
            education: 0.10,
            motivation: 0.05,
        }
    }
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.experience
            + self.skills
            + self.completeness
            + self.response_quality
            + self.education
            + self.motivation
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// A scoring backend: maps one feature vector to a base score in [0, 100].
///
/// Carried by the `Ranker` as `Arc<dyn ScoreModel>`. Implementations must be
/// pure with respect to their inputs — no hidden mutable state — so a single
/// instance can serve concurrent batches.
pub trait ScoreModel: Send + Sync {
    /// Short backend identifier, reported in ranking responses.
    fn name(&self) -> &'static str;

    /// Backend transparency blob for the scorer-info endpoint.
    fn info(&self) -> Value;

    /// Base score in [0, 100] for one candidate's features.
    fn score(&self, features: &FeatureVector) -> Result<f64>;
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicModel — the default backend
// ────────────────────────────────────────────────────────────────────────────

/// Fixed-weight heuristic scorer.
///
/// Experience saturates at 10 years; every other feature already lives in
/// [0, 1], so each term contributes at most its weight share of 100 points.
pub struct HeuristicModel {
    weights: ScoringWeights,
}

/// Years of experience at which the experience term maxes out.
const EXPERIENCE_SATURATION_YEARS: f64 = 10.0;

impl HeuristicModel {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }
}

impl Default for HeuristicModel {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}

impl ScoreModel for HeuristicModel {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn info(&self) -> Value {
        json!({ "weights": self.weights })
    }

    fn score(&self, features: &FeatureVector) -> Result<f64> {
        let w = &self.weights;

        let experience = (features.experience_years / EXPERIENCE_SATURATION_YEARS).min(1.0)
            * 100.0
            * w.experience;
        let skills = features.skills_match * 100.0 * w.skills;
        let completeness = features.completeness * 100.0 * w.completeness;
        let quality = features.response_quality * 100.0 * w.response_quality;
        let education = features.education_level * 100.0 * w.education;
        let motivation = features.motivation_quality * 100.0 * w.motivation;

        Ok(experience + skills + completeness + quality + education + motivation)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Perturbation
// ────────────────────────────────────────────────────────────────────────────

/// Maximum absolute score adjustment applied on top of the base score, in points.
pub const MAX_PERTURBATION: f64 = 3.0;

/// Randomness source for the presentation-variety perturbation.
///
/// The draw is an explicit, injectable dependency: tests disable it,
/// reproducible runs seed it, production pulls OS entropy. Each ranking call
/// builds one generator and draws once per candidate.
#[derive(Debug, Clone)]
pub enum Perturbation {
    /// No perturbation — scores are fully deterministic.
    Disabled,
    /// Reproducible: the same seed yields the same draw sequence per call.
    Seeded(u64),
    /// Operating default: fresh OS entropy per ranking call.
    FromEntropy,
}

impl Perturbation {
    /// One generator per ranking call, or `None` when disabled.
    pub fn sampler(&self) -> Option<StdRng> {
        match self {
            Perturbation::Disabled => None,
            Perturbation::Seeded(seed) => Some(StdRng::seed_from_u64(*seed)),
            Perturbation::FromEntropy => Some(StdRng::from_entropy()),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Perturbation::Disabled => "disabled",
            Perturbation::Seeded(_) => "seeded",
            Perturbation::FromEntropy => "entropy",
        }
    }
}

/// Applies one perturbation draw to a base score, clamps to [0, 100], and
/// rounds to one decimal place. Clamping happens before rounding so a
/// perturbed 99.97 reports as 100.0, never above.
pub fn finalize_score(base: f64, rng: Option<&mut StdRng>) -> f64 {
    let noise = match rng {
        Some(rng) => rng.gen_range(-MAX_PERTURBATION..=MAX_PERTURBATION),
        None => 0.0,
    };
    let clamped = (base + noise).clamp(0.0, 100.0);
    (clamped * 10.0).round() / 10.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

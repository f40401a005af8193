//! Batch ranking — scores, explains, and orders candidates for one job.

use std::sync::Arc;

use crate::errors::AppError;
use crate::models::ranking::{Candidate, Job, RankedCandidate};
use crate::ranking::features::extract_features;
use crate::ranking::rationale::build_rationale;
use crate::ranking::scoring::{finalize_score, HeuristicModel, Perturbation, ScoreModel};

/// The ranking engine carried in `AppState`.
///
/// Holds no mutable state, so one instance serves all requests concurrently.
/// Both collaborators are explicit: the scoring backend behind
/// `Arc<dyn ScoreModel>`, and the perturbation source injected at startup.
#[derive(Clone)]
pub struct Ranker {
    model: Arc<dyn ScoreModel>,
    perturbation: Perturbation,
}

impl Ranker {
    pub fn new(model: Arc<dyn ScoreModel>, perturbation: Perturbation) -> Self {
        Self {
            model,
            perturbation,
        }
    }

    /// Engine with the default heuristic backend.
    pub fn heuristic(perturbation: Perturbation) -> Self {
        Self::new(Arc::new(HeuristicModel::default()), perturbation)
    }

    pub fn backend(&self) -> &'static str {
        self.model.name()
    }

    pub fn backend_info(&self) -> serde_json::Value {
        self.model.info()
    }

    pub fn perturbation(&self) -> &Perturbation {
        &self.perturbation
    }

    /// Ranks a batch of candidates against one job.
    ///
    /// Features are extracted once per candidate and that same vector drives
    /// both the score and its rationale. Output is ordered by score
    /// descending; equal scores keep their request order (stable sort). If
    /// the backend rejects any candidate the whole batch fails — no partial
    /// rankings.
    pub fn rank(
        &self,
        job: &Job,
        candidates: &[Candidate],
    ) -> Result<Vec<RankedCandidate>, AppError> {
        let mut rng = self.perturbation.sampler();

        let mut ranked = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let features = extract_features(job, candidate);
            let base = self
                .model
                .score(&features)
                .map_err(|e| AppError::Scoring(format!("candidate '{}': {e}", candidate.id)))?;
            let score = finalize_score(base, rng.as_mut());
            let rationale = build_rationale(&features, score);

            ranked.push(RankedCandidate {
                id: candidate.id.clone(),
                name: candidate.name.clone(),
                score,
                rationale,
            });
        }

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(ranked)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

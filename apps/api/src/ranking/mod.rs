// Candidate Ranking Engine
// Implements: feature extraction, heuristic scoring, rationale generation, batch ordering.
// The backend sits behind ScoreModel so a learned model can be swapped in
// without touching extraction or rationale code.

pub mod features;
pub mod handlers;
pub mod ranker;
pub mod rationale;
pub mod scoring;

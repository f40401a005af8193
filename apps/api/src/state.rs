use crate::config::Config;
use crate::ranking::ranker::Ranker;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The ranking engine. Stateless, so one instance serves every request;
    /// its scoring backend and perturbation source are fixed at startup.
    pub ranker: Ranker,
}

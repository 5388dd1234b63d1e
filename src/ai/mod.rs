//! The computer opponent: static evaluation and depth-limited minimax with
//! alpha-beta pruning, plus a random baseline.

mod agent;
mod heuristic;
mod minimax;
mod random;

pub use agent::Agent;
pub use heuristic::{CompletedRunsHeuristic, Heuristic, RUN_SCORE};
pub use minimax::{generate_children, MinimaxAgent, ScoredChild, SEARCH_DEPTH};
pub use random::RandomAgent;

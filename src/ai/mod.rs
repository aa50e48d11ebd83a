//! Computer players: the move-source trait and the priority-chain agent.

mod agent;
mod heuristic;

pub use agent::Agent;
pub use heuristic::HeuristicAgent;

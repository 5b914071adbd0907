//! Simulated-annealing wall optimizer and the bulk-move simulator it drives.
//!
//! Depends on `maze-core` for the data model; owns everything with a notion
//! of randomness or wall-clock time.

mod anneal;
mod emit;
mod prune;
mod rng;
mod simulator;

pub use anneal::{AnnealConstants, AnnealOutcome, Optimizer};
pub use emit::{append_individual_moves, emit, EmittedPlan, MAIN_GROUP};
pub use prune::{prune, PruneResult};
pub use rng::Mt19937;
pub use simulator::BulkMoveSimulator;

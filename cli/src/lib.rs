//! Library half of the CLI: stdin parsing, individual-move cleanup, and
//! stdout formatting, plus a `run` entry point the binary and the
//! integration tests both call.

pub mod cleanup;
pub mod config;
pub mod error;
pub mod format;
pub mod parse;

use maze_anneal::{append_individual_moves, emit, prune, AnnealConstants, BulkMoveSimulator, Optimizer};

use config::Config;

/// Run the full pipeline on an already-read input string and return the
/// formatted solution. Shared by `main` and the integration tests so the
/// two never drift.
pub fn solve(input: &str, config: &Config) -> anyhow::Result<String> {
    let instance = parse::parse_instance(input)?;
    let k = instance.k();

    let constants = AnnealConstants::from_k(k, config.time_scale);
    let outcome = Optimizer::new(instance.agents, instance.walls, config.seed).run(constants);

    let mut walls = outcome.walls;
    let mut simulator = BulkMoveSimulator::new();
    let pruned = prune(&mut walls, &outcome.agents, outcome.script, &mut simulator);

    let wallv: Vec<Vec<bool>> =
        (0..maze_core::N).map(|r| (0..=maze_core::N).map(|c| walls.is_wallv(r, c)).collect()).collect();
    let wallh: Vec<Vec<bool>> =
        (0..=maze_core::N).map(|r| (0..maze_core::N).map(|c| walls.is_wallh(r, c)).collect()).collect();

    let mut plan = emit(wallv, wallh, k, outcome.script);

    let destinations: Vec<_> = outcome.agents.iter().map(|a| a.dst).collect();
    let cleanup_moves = cleanup::plan_cleanup(&pruned.positions, &destinations, &walls);
    append_individual_moves(&mut plan, cleanup_moves);

    let group_ids = format::flatten_group_ids(&plan.groups, k);
    Ok(format::format_output(&plan.wallv, &plan.wallh, &group_ids, &plan.operations))
}

//! The wall pruner (spec §4.5): two reset/mark/clear sweeps that open back up
//! any non-original wall the annealer closed but the final script never
//! actually crosses. Two passes, not one, because each pass starts by
//! resetting agents to `src` and replaying against whatever `walls` looks
//! like *right now* — a wall pass 1 clears (because its own replay never
//! tested it) can change where a later agent gets stuck or which cell it
//! occupies, which in turn can change what pass 2's replay tests and marks.
//! Grounded on the reference solver's `for loop in range(2)` sweep, which
//! calls `self.reset()` fresh inside each iteration rather than once before
//! the loop.

use maze_core::{Agent, CellGrid, Pos, ScriptParams, WallGrid, WallMarks, N};

use crate::simulator::BulkMoveSimulator;

/// Final agent positions after the step-by-step trace, plus how many walls
/// were opened back up across both passes.
pub struct PruneResult {
    pub positions: Vec<Pos>,
    pub removed: usize,
}

/// Run the seven-phase script one cell-step at a time (not the `move_fast`
/// shortcut) twice, marking every wall edge an agent actually tests along
/// the way and clearing whatever stayed unmarked after each replay. The
/// second pass's replay runs against the wall grid the first pass already
/// mutated.
pub fn prune(
    walls: &mut WallGrid,
    agents: &[Agent],
    script: ScriptParams,
    simulator: &mut BulkMoveSimulator,
) -> PruneResult {
    let mut positions: Vec<Pos> = Vec::new();
    let mut removed = 0;

    for _ in 0..2 {
        positions = agents.iter().map(|a| a.src).collect();
        let mut cell = CellGrid::from_positions(&positions);
        let mut marks = WallMarks::new();

        for (dir, n) in script.phases() {
            for _ in 0..n {
                simulator.step_mark(dir, &mut positions, &mut cell, walls, &mut marks);
            }
        }

        for r in 0..N {
            for c in 1..N {
                if walls.is_wallv(r, c) && !walls.is_original_v(r, c) && !marks.is_marked_v(r, c) {
                    walls.clear_wallv(r, c);
                    removed += 1;
                }
            }
        }
        for r in 1..N {
            for c in 0..N {
                if walls.is_wallh(r, c) && !walls.is_original_h(r, c) && !marks.is_marked_h(r, c) {
                    walls.clear_wallh(r, c);
                    removed += 1;
                }
            }
        }
    }

    tracing::debug!(removed, "pruned unused walls");
    PruneResult { positions, removed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn empty_walls() -> WallGrid {
        WallGrid::new(vec![vec![false; N + 1]; N], vec![vec![false; N]; N + 1])
    }

    #[test]
    fn unused_closed_wall_is_opened() {
        let mut walls = empty_walls();
        // Close a wall far from the single agent's path.
        walls.toggle_wallv(25, 10).unwrap();
        let agents = vec![Agent::new(Pos::new(0, 0), Pos::new(0, 3))];
        let script = ScriptParams { max_u: 0, max_d: 0, max_l: 0, max_r: 3 };
        let mut sim = BulkMoveSimulator::new();

        let result = prune(&mut walls, &agents, script, &mut sim);

        assert!(!walls.is_wallv(25, 10), "unused wall must be cleared");
        assert_eq!(result.removed, 1);
    }

    #[test]
    fn a_wall_on_the_agents_path_survives() {
        let mut walls = empty_walls();
        walls.toggle_wallv(0, 2).unwrap();
        let agents = vec![Agent::new(Pos::new(0, 0), Pos::new(0, 5))];
        let script = ScriptParams { max_u: 0, max_d: 0, max_l: 0, max_r: 5 };
        let mut sim = BulkMoveSimulator::new();

        let result = prune(&mut walls, &agents, script, &mut sim);

        assert!(walls.is_wallv(0, 2), "a wall the agent actually meets must survive pruning");
        assert_eq!(result.removed, 0);
    }

    #[test]
    fn original_walls_are_never_touched() {
        let mut owallh = vec![vec![false; N]; N + 1];
        owallh[5][5] = true;
        let mut walls = WallGrid::new(vec![vec![false; N + 1]; N], owallh);
        let agents = vec![Agent::new(Pos::new(0, 0), Pos::new(0, 0))];
        let script = ScriptParams { max_u: 0, max_d: 0, max_l: 0, max_r: 0 };
        let mut sim = BulkMoveSimulator::new();

        let result = prune(&mut walls, &agents, script, &mut sim);

        assert!(walls.is_wallh(5, 5));
        assert_eq!(result.removed, 0);
    }
}

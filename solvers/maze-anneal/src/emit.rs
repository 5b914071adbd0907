//! The script emitter (spec §4.6): turns a pruned wall grid and the
//! seven-phase script into the concrete per-step operation list the caller
//! will print.

use maze_core::{Direction, Operation, ScriptParams};

/// The group id used for the single group that contains every agent — this
/// system only ever moves agents together, never splits them into multiple
/// independently-moving groups.
pub const MAIN_GROUP: u32 = 0;

/// A finished plan: the walls to report, the group membership, and the
/// step-by-step operations to execute in order.
pub struct EmittedPlan {
    pub wallv: Vec<Vec<bool>>,
    pub wallh: Vec<Vec<bool>>,
    pub groups: Vec<Vec<u32>>,
    pub operations: Vec<Operation>,
}

/// Expand `script` into one `Operation::Group` per cell-step, in emission
/// order, and pair it with the wall grid and the all-agents group.
pub fn emit(wallv: Vec<Vec<bool>>, wallh: Vec<Vec<bool>>, k: usize, script: ScriptParams) -> EmittedPlan {
    let operations = expand_group_script(script);
    let groups = vec![(0..k as u32).collect()];
    EmittedPlan { wallv, wallh, groups, operations }
}

fn expand_group_script(script: ScriptParams) -> Vec<Operation> {
    let mut ops = Vec::with_capacity(script.total_len() as usize);
    for (dir, n) in script.phases() {
        ops.extend(std::iter::repeat(Operation::Group { group_id: MAIN_GROUP, dir }).take(n as usize));
    }
    ops
}

/// Append individual-move cleanup operations produced by the caller's own
/// per-agent pathing (spec Design Notes: the emitter does not invent a
/// heuristic, it only sequences whatever the caller hands it).
pub fn append_individual_moves(plan: &mut EmittedPlan, moves: impl IntoIterator<Item = (u32, Direction)>) {
    plan.operations.extend(moves.into_iter().map(|(agent_id, dir)| Operation::Individual { agent_id, dir }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_script_emits_no_operations() {
        let script = ScriptParams { max_u: 0, max_d: 0, max_l: 0, max_r: 0 };
        let plan = emit(vec![], vec![], 1, script);
        assert!(plan.operations.is_empty());
        assert_eq!(plan.groups, vec![vec![0]]);
    }

    #[test]
    fn operation_count_matches_total_len() {
        let script = ScriptParams { max_u: 2, max_d: 1, max_l: 4, max_r: 3 };
        let plan = emit(vec![], vec![], 3, script);
        assert_eq!(plan.operations.len(), script.total_len() as usize);
        for op in &plan.operations {
            assert!(matches!(op, Operation::Group { group_id: MAIN_GROUP, .. }));
        }
    }

    #[test]
    fn individual_moves_append_after_group_moves() {
        let script = ScriptParams { max_u: 0, max_d: 0, max_l: 0, max_r: 1 };
        let mut plan = emit(vec![], vec![], 2, script);
        let before = plan.operations.len();
        append_individual_moves(&mut plan, [(0, Direction::Up), (1, Direction::Left)]);
        assert_eq!(plan.operations.len(), before + 2);
        assert_eq!(plan.operations[before], Operation::Individual { agent_id: 0, dir: Direction::Up });
    }
}

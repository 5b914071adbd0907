//! Integration tests for the grid/agent data model.

use maze_core::{Agent, CoreError, Instance, Pos, ScriptParams, WallGrid, N};
use pretty_assertions::assert_eq;

fn empty_walls() -> WallGrid {
    WallGrid::new(vec![vec![false; N + 1]; N], vec![vec![false; N]; N + 1])
}

#[test]
fn instance_rejects_empty_agent_set() {
    let err = Instance::new(vec![], empty_walls()).unwrap_err();
    assert_eq!(err, CoreError::NoAgents);
}

#[test]
fn instance_rejects_too_many_agents() {
    let agents: Vec<Agent> = (0..101).map(|_| Agent::new(Pos::new(0, 0), Pos::new(0, 0))).collect();
    let err = Instance::new(agents, empty_walls()).unwrap_err();
    assert_eq!(err, CoreError::TooManyAgents(101));
}

// Scenario 1 (spec §8): K=1, src=dst=(0,0), no walls.
#[test]
fn scenario_single_agent_in_place() {
    let agents = vec![Agent::new(Pos::new(0, 0), Pos::new(0, 0))];
    let instance = Instance::new(agents, empty_walls()).unwrap();
    let params = ScriptParams::derive(&instance.agents);
    assert_eq!(params.max_u + params.max_d + params.max_l + params.max_r, 0);
    assert_eq!(params.total_len(), 0);
}

// Scenario 5 (spec §8): original walls between rows 14 and 15 can never be
// cleared by the grid API's invariant.
#[test]
fn original_walls_stay_present_between_rows_14_and_15() {
    let mut owallh = vec![vec![false; N]; N + 1];
    for c in 0..N {
        owallh[15][c] = true;
    }
    let walls = WallGrid::new(vec![vec![false; N + 1]; N], owallh);
    for c in 0..N {
        assert!(walls.is_original_h(15, c));
        assert!(walls.is_wallh(15, c));
    }
    walls.check_invariants();
}

#[test]
fn full_enclosure_traps_an_agent_but_instance_still_constructs() {
    let mut owallv = vec![vec![false; N + 1]; N];
    let mut owallh = vec![vec![false; N]; N + 1];
    // Wall off cell (10, 10) on all four sides.
    owallv[10][10] = true;
    owallv[10][11] = true;
    owallh[10][10] = true;
    owallh[11][10] = true;
    let walls = WallGrid::new(owallv, owallh);
    let agents = vec![Agent::new(Pos::new(10, 10), Pos::new(0, 0))];
    let instance = Instance::new(agents, walls).unwrap();
    assert_eq!(instance.k(), 1);
}

//! Individual-move cleanup: per-agent A* over the frozen wall grid, ignoring
//! other agents (grounded on the reference solver's real pathing phase,
//! which — unlike the stub direct-path fallback — runs true A* search
//! respecting walls). Produces the `i <agent_id> <dir>` tail of the plan.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use maze_core::{Direction, Pos, WallGrid, N};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    priority: u32,
    row: u8,
    col: u8,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.cmp(&self.priority).then_with(|| other.row.cmp(&self.row)).then_with(|| other.col.cmp(&self.col))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest direction sequence from `from` to `to` under `walls`, by A* with
/// the Manhattan-distance heuristic. Returns `None` if `to` is unreachable
/// (should not happen on a connected grid, but the caller is expected to
/// handle it rather than panic).
pub fn find_path(from: Pos, to: Pos, walls: &WallGrid) -> Option<Vec<Direction>> {
    if from == to {
        return Some(Vec::new());
    }

    let index = |p: Pos| p.r as usize * N + p.c as usize;
    let mut best_cost = vec![u32::MAX; N * N];
    let mut came_from: Vec<Option<(Pos, Direction)>> = vec![None; N * N];
    let mut heap = BinaryHeap::new();

    best_cost[index(from)] = 0;
    heap.push(QueueEntry { priority: from.manhattan(to), row: from.r, col: from.c });

    while let Some(entry) = heap.pop() {
        let current = Pos::new(entry.row, entry.col);
        if current == to {
            break;
        }
        let cost_here = best_cost[index(current)];
        if cost_here == u32::MAX {
            continue;
        }

        for &dir in &Direction::ALL {
            if blocked(current, dir, walls) {
                continue;
            }
            let (dr, dc) = dir.delta();
            let nr = current.r as i32 + dr;
            let nc = current.c as i32 + dc;
            if nr < 0 || nc < 0 || nr >= N as i32 || nc >= N as i32 {
                continue;
            }
            let next = Pos::new(nr as u8, nc as u8);
            let new_cost = cost_here + 1;
            if new_cost < best_cost[index(next)] {
                best_cost[index(next)] = new_cost;
                came_from[index(next)] = Some((current, dir));
                heap.push(QueueEntry { priority: new_cost + next.manhattan(to), row: next.r, col: next.c });
            }
        }
    }

    if best_cost[index(to)] == u32::MAX {
        return None;
    }

    let mut path = Vec::new();
    let mut cur = to;
    while cur != from {
        let (prev, dir) = came_from[index(cur)]?;
        path.push(dir);
        cur = prev;
    }
    path.reverse();
    Some(path)
}

fn blocked(p: Pos, dir: Direction, walls: &WallGrid) -> bool {
    let (r, c) = (p.r as usize, p.c as usize);
    match dir {
        Direction::Up => walls.is_wallh(r, c),
        Direction::Down => walls.is_wallh(r + 1, c),
        Direction::Left => walls.is_wallv(r, c),
        Direction::Right => walls.is_wallv(r, c + 1),
    }
}

/// Hard ceiling on emitted individual moves, matching the reference
/// solver's `bfs_step > 100000` guard.
const MAX_CLEANUP_STEPS: usize = 100_000;

/// Plan individual moves for every agent not already at its destination,
/// ordered by ascending residual distance (closest first), matching the
/// reference solver's cleanup ordering.
pub fn plan_cleanup(positions: &[Pos], destinations: &[Pos], walls: &WallGrid) -> Vec<(u32, Direction)> {
    let mut order: Vec<usize> = (0..positions.len()).collect();
    order.sort_by_key(|&i| positions[i].manhattan(destinations[i]));

    let mut moves = Vec::new();
    for i in order {
        if positions[i] == destinations[i] {
            continue;
        }
        if let Some(path) = find_path(positions[i], destinations[i], walls) {
            if moves.len() + path.len() > MAX_CLEANUP_STEPS {
                tracing::warn!(cap = MAX_CLEANUP_STEPS, "individual-move cleanup cap reached");
                break;
            }
            moves.extend(path.into_iter().map(|dir| (i as u32, dir)));
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn empty_walls() -> WallGrid {
        WallGrid::new(vec![vec![false; N + 1]; N], vec![vec![false; N]; N + 1])
    }

    #[test]
    fn straight_line_path_has_manhattan_length() {
        let walls = empty_walls();
        let path = find_path(Pos::new(0, 0), Pos::new(3, 4), &walls).unwrap();
        assert_eq!(path.len(), 7);
    }

    #[test]
    fn same_cell_yields_empty_path() {
        let walls = empty_walls();
        let path = find_path(Pos::new(5, 5), Pos::new(5, 5), &walls).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn path_routes_around_a_wall() {
        let mut walls = empty_walls();
        // Block the direct route up at column 0 between rows 0 and 1.
        walls.toggle_wallh(1, 0).unwrap();
        let path = find_path(Pos::new(1, 0), Pos::new(0, 0), &walls).unwrap();
        // Must detour sideways since straight Up is blocked.
        assert!(path.len() > 1);
        assert!(!path.iter().all(|&d| d == Direction::Up));
    }

    #[test]
    fn cleanup_skips_agents_already_home() {
        let walls = empty_walls();
        let positions = vec![Pos::new(0, 0), Pos::new(1, 1)];
        let destinations = vec![Pos::new(0, 0), Pos::new(1, 3)];
        let moves = plan_cleanup(&positions, &destinations, &walls);
        assert!(moves.iter().all(|&(id, _)| id == 1));
        assert_eq!(moves.len(), 2);
    }
}

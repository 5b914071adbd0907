use std::fmt::Write as _;

#[cfg(test)]
use maze_core::Direction;
use maze_core::{Operation, N};

/// Render the final plan in the stdout contract (spec §6): wall rows, the
/// group-id line, then the operation stream.
pub fn format_output(wallv: &[Vec<bool>], wallh: &[Vec<bool>], groups: &[u32], operations: &[Operation]) -> String {
    let mut out = String::new();

    for r in 0..N {
        for c in 1..N {
            out.push(if wallv[r][c] { '1' } else { '0' });
        }
        out.push('\n');
    }
    for r in 1..N {
        for c in 0..N {
            out.push(if wallh[r][c] { '1' } else { '0' });
        }
        out.push('\n');
    }

    for (i, g) in groups.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{g}");
    }
    out.push('\n');

    for op in operations {
        match *op {
            Operation::Group { group_id, dir } => {
                let _ = writeln!(out, "g {} {}", group_id, dir.as_char());
            }
            Operation::Individual { agent_id, dir } => {
                let _ = writeln!(out, "i {} {}", agent_id, dir.as_char());
            }
        }
    }

    out
}

/// Flatten `EmittedPlan.groups` (one vector per group) into the per-agent
/// group-id line the format expects.
pub fn flatten_group_ids(groups: &[Vec<u32>], k: usize) -> Vec<u32> {
    let mut ids = vec![0u32; k];
    for (group_id, members) in groups.iter().enumerate() {
        for &agent_id in members {
            ids[agent_id as usize] = group_id as u32;
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_a_trivial_single_agent_plan() {
        let wallv = vec![vec![true; N + 1]; N];
        let wallh = vec![vec![true; N]; N + 1];
        let output = format_output(&wallv, &wallh, &[0], &[]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), N + (N - 1) + 1);
        assert_eq!(lines[2 * N - 1], "0");
    }

    #[test]
    fn renders_group_and_individual_operations() {
        let wallv = vec![vec![false; N + 1]; N];
        let wallh = vec![vec![false; N]; N + 1];
        let ops = vec![Operation::Group { group_id: 0, dir: Direction::Up }, Operation::Individual { agent_id: 2, dir: Direction::Left }];
        let output = format_output(&wallv, &wallh, &[0, 0, 0], &ops);
        assert!(output.contains("g 0 U"));
        assert!(output.contains("i 2 L"));
    }

    #[test]
    fn flattens_a_single_all_agents_group() {
        let groups = vec![vec![0, 1, 2]];
        assert_eq!(flatten_group_ids(&groups, 3), vec![0, 0, 0]);
    }
}

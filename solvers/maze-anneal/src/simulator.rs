//! The collision-aware bulk-move simulator (spec §4.3).
//!
//! This is the hot loop: `move_fast` runs once per SA iteration, so it must
//! stay allocation-free. All scratch lives in `BulkMoveSimulator` itself,
//! sized to `MAX_K`/`N` at construction time.

use maze_core::{CellGrid, Direction, Pos, WallGrid, WallMarks, WallRunIndex, MAX_K, N};

/// Owns the bucket-sort scratch (`order`/`n_order` in spec §3) used by both
/// simulator variants. One instance is created per optimizer run and reused
/// across every iteration.
pub struct BulkMoveSimulator {
    order: [[u32; MAX_K]; N],
    n_order: [u32; N],
}

impl BulkMoveSimulator {
    pub fn new() -> Self {
        Self { order: [[0; MAX_K]; N], n_order: [0; N] }
    }

    /// Bucket agents by `key(pos)` into `self.order`, always visited in
    /// ascending bucket order afterwards. Callers encode "process the far
    /// side first" (spec's "processing order reversed for D and R") by
    /// choosing a key that counts down from `N - 1` instead of up from `0`.
    fn bucket(&mut self, positions: &[Pos], key: impl Fn(Pos) -> usize) {
        self.n_order = [0; N];
        for (i, p) in positions.iter().enumerate() {
            let b = key(*p);
            let slot = self.n_order[b] as usize;
            self.order[b][slot] = i as u32;
            self.n_order[b] += 1;
        }
    }

    /// Fast variant (spec §4.3.1): shift every agent up to `n` cells in
    /// `dir`, respecting walls and already-settled agents. Only `positions`
    /// is mutated — `cell` is not touched by this variant.
    pub fn move_fast(&mut self, dir: Direction, n: u32, positions: &mut [Pos], index: &WallRunIndex) {
        let n = n as i32;
        match dir {
            Direction::Up => {
                self.bucket(positions, |p| p.r as usize);
                let mut next_pos = [-1i32; N];
                for bucket in 0..N {
                    for k in 0..self.n_order[bucket] as usize {
                        let i = self.order[bucket][k] as usize;
                        let (y, x) = (positions[i].r as i32, positions[i].c as usize);
                        let new_y = (y - n).max(next_pos[x] + 1).max(index.next_wallu(y as usize, x));
                        positions[i] = Pos::new(new_y as u8, x as u8);
                        next_pos[x] = new_y;
                    }
                }
            }
            Direction::Down => {
                self.bucket(positions, |p| N - 1 - p.r as usize);
                let mut next_pos = [N as i32; N];
                for bucket in 0..N {
                    for k in 0..self.n_order[bucket] as usize {
                        let i = self.order[bucket][k] as usize;
                        let (y, x) = (positions[i].r as i32, positions[i].c as usize);
                        let new_y = (y + n).min(next_pos[x] - 1).min(index.next_walld(y as usize, x));
                        positions[i] = Pos::new(new_y as u8, x as u8);
                        next_pos[x] = new_y;
                    }
                }
            }
            Direction::Left => {
                self.bucket(positions, |p| p.c as usize);
                let mut next_pos = [-1i32; N];
                for bucket in 0..N {
                    for k in 0..self.n_order[bucket] as usize {
                        let i = self.order[bucket][k] as usize;
                        let (y, x) = (positions[i].r as usize, positions[i].c as i32);
                        let new_x = (x - n).max(next_pos[y] + 1).max(index.next_walll(y, x as usize));
                        positions[i] = Pos::new(y as u8, new_x as u8);
                        next_pos[y] = new_x;
                    }
                }
            }
            Direction::Right => {
                self.bucket(positions, |p| N - 1 - p.c as usize);
                let mut next_pos = [N as i32; N];
                for bucket in 0..N {
                    for k in 0..self.n_order[bucket] as usize {
                        let i = self.order[bucket][k] as usize;
                        let (y, x) = (positions[i].r as usize, positions[i].c as i32);
                        let new_x = (x + n).min(next_pos[y] - 1).min(index.next_wallr(y, x as usize));
                        positions[i] = Pos::new(y as u8, new_x as u8);
                        next_pos[y] = new_x;
                    }
                }
            }
        }
    }

    /// Mark-wall variant (spec §4.3.2): a single one-cell step, marking the
    /// crossed wall regardless of outcome, and moving only if the wall is
    /// absent and the target cell is unoccupied. Updates both `positions`
    /// and `cell`.
    pub fn step_mark(
        &mut self,
        dir: Direction,
        positions: &mut [Pos],
        cell: &mut CellGrid,
        walls: &WallGrid,
        marks: &mut WallMarks,
    ) {
        match dir {
            Direction::Up => {
                self.bucket(positions, |p| p.r as usize);
                for bucket in 0..N {
                    for k in 0..self.n_order[bucket] as usize {
                        let i = self.order[bucket][k] as usize;
                        let p = positions[i];
                        let (y, x) = (p.r as usize, p.c as usize);
                        marks.mark_h(y, x);
                        if !walls.is_wallh(y, x) && y > 0 && !cell.get(Pos::new(y as u8 - 1, x as u8)) {
                            let target = Pos::new(y as u8 - 1, x as u8);
                            cell.set(p, false);
                            cell.set(target, true);
                            positions[i] = target;
                        }
                    }
                }
            }
            Direction::Down => {
                self.bucket(positions, |p| N - 1 - p.r as usize);
                for bucket in 0..N {
                    for k in 0..self.n_order[bucket] as usize {
                        let i = self.order[bucket][k] as usize;
                        let p = positions[i];
                        let (y, x) = (p.r as usize, p.c as usize);
                        marks.mark_h(y + 1, x);
                        if !walls.is_wallh(y + 1, x) && y + 1 < N && !cell.get(Pos::new(y as u8 + 1, x as u8)) {
                            let target = Pos::new(y as u8 + 1, x as u8);
                            cell.set(p, false);
                            cell.set(target, true);
                            positions[i] = target;
                        }
                    }
                }
            }
            Direction::Left => {
                self.bucket(positions, |p| p.c as usize);
                for bucket in 0..N {
                    for k in 0..self.n_order[bucket] as usize {
                        let i = self.order[bucket][k] as usize;
                        let p = positions[i];
                        let (y, x) = (p.r as usize, p.c as usize);
                        marks.mark_v(y, x);
                        if !walls.is_wallv(y, x) && x > 0 && !cell.get(Pos::new(y as u8, x as u8 - 1)) {
                            let target = Pos::new(y as u8, x as u8 - 1);
                            cell.set(p, false);
                            cell.set(target, true);
                            positions[i] = target;
                        }
                    }
                }
            }
            Direction::Right => {
                self.bucket(positions, |p| N - 1 - p.c as usize);
                for bucket in 0..N {
                    for k in 0..self.n_order[bucket] as usize {
                        let i = self.order[bucket][k] as usize;
                        let p = positions[i];
                        let (y, x) = (p.r as usize, p.c as usize);
                        marks.mark_v(y, x + 1);
                        if !walls.is_wallv(y, x + 1) && x + 1 < N && !cell.get(Pos::new(y as u8, x as u8 + 1)) {
                            let target = Pos::new(y as u8, x as u8 + 1);
                            cell.set(p, false);
                            cell.set(target, true);
                            positions[i] = target;
                        }
                    }
                }
            }
        }
    }
}

impl Default for BulkMoveSimulator {
    fn default() -> Self {
        Self::new()
    }
}

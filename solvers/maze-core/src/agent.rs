use crate::N;

/// A cell coordinate. Both components are in `[0, N)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Self {
        Self { r, c }
    }

    /// Manhattan distance to `other`.
    pub fn manhattan(self, other: Pos) -> u32 {
        (self.r as i32 - other.r as i32).unsigned_abs() + (self.c as i32 - other.c as i32).unsigned_abs()
    }
}

/// An agent. `src`/`dst` are immutable for the instance's lifetime; the
/// current position during simulation lives outside this type, in a
/// `Vec<Pos>` scratch buffer owned by whichever algorithm is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agent {
    pub src: Pos,
    pub dst: Pos,
}

impl Agent {
    pub fn new(src: Pos, dst: Pos) -> Self {
        Self { src, dst }
    }
}

/// Cell occupancy plane, `cell[N][N]`. Invariant: the set of `true` cells
/// always equals the multiset of current agent positions.
#[derive(Debug, Clone)]
pub struct CellGrid {
    occupied: [[bool; N]; N],
}

impl CellGrid {
    pub fn empty() -> Self {
        Self { occupied: [[false; N]; N] }
    }

    /// Build from a set of agent positions, matching spec §4.5 `reset`.
    pub fn from_positions(positions: &[Pos]) -> Self {
        let mut grid = Self::empty();
        for p in positions {
            grid.set(*p, true);
        }
        grid
    }

    #[inline]
    pub fn get(&self, p: Pos) -> bool {
        self.occupied[p.r as usize][p.c as usize]
    }

    #[inline]
    pub fn set(&mut self, p: Pos, value: bool) {
        self.occupied[p.r as usize][p.c as usize] = value;
    }

    pub fn clear(&mut self) {
        for row in &mut self.occupied {
            row.fill(false);
        }
    }

    /// Total number of occupied cells — should always equal K.
    pub fn count(&self) -> usize {
        self.occupied.iter().flatten().filter(|b| **b).count()
    }
}

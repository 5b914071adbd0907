use crate::grid::WallGrid;
use crate::N;

/// Precomputed "stop coordinate" planes (spec §4.2). For a cell `(r, c)`,
/// `next_wallu[r][c]` is the row of the nearest wall above (inclusive,
/// i.e. the row an agent sliding up would stop on), and so on for the other
/// three directions. These ignore other agents — the simulator combines
/// them with per-row/column occupancy to resolve collisions.
#[derive(Debug, Clone)]
pub struct WallRunIndex {
    next_wallu: Vec<[i32; N]>,
    next_walld: Vec<[i32; N]>,
    next_walll: Vec<[i32; N]>,
    next_wallr: Vec<[i32; N]>,
}

impl WallRunIndex {
    /// Build the index from scratch for every row and column.
    pub fn build(walls: &WallGrid) -> Self {
        let mut index = Self {
            next_wallu: vec![[0; N]; N],
            next_walld: vec![[0; N]; N],
            next_walll: vec![[0; N]; N],
            next_wallr: vec![[0; N]; N],
        };
        for r in 0..N {
            index.rebuild_row(r, walls);
        }
        for c in 0..N {
            index.rebuild_col(c, walls);
        }
        index
    }

    #[inline]
    pub fn next_wallu(&self, r: usize, c: usize) -> i32 {
        self.next_wallu[r][c]
    }

    #[inline]
    pub fn next_walld(&self, r: usize, c: usize) -> i32 {
        self.next_walld[r][c]
    }

    #[inline]
    pub fn next_walll(&self, r: usize, c: usize) -> i32 {
        self.next_walll[r][c]
    }

    #[inline]
    pub fn next_wallr(&self, r: usize, c: usize) -> i32 {
        self.next_wallr[r][c]
    }

    /// Recompute `next_walll`/`next_wallr` for row `r` only. Called after a
    /// vertical wall in row `r` has been toggled.
    pub fn rebuild_row(&mut self, r: usize, walls: &WallGrid) {
        for c in 0..N {
            self.next_walll[r][c] = if walls.is_wallv(r, c) {
                c as i32
            } else if c == 0 {
                // is_wallv(r, 0) is always true (boundary), so this arm is
                // unreachable, but keep it defined for clarity.
                -1
            } else {
                self.next_walll[r][c - 1]
            };
        }
        for c in (0..N).rev() {
            self.next_wallr[r][c] = if walls.is_wallv(r, c + 1) {
                c as i32
            } else {
                self.next_wallr[r][c + 1]
            };
        }
    }

    /// Recompute `next_wallu`/`next_walld` for column `c` only. Called after
    /// a horizontal wall in column `c` has been toggled.
    pub fn rebuild_col(&mut self, c: usize, walls: &WallGrid) {
        for r in 0..N {
            self.next_wallu[r][c] = if walls.is_wallh(r, c) {
                r as i32
            } else if r == 0 {
                -1
            } else {
                self.next_wallu[r - 1][c]
            };
        }
        for r in (0..N).rev() {
            self.next_walld[r][c] = if walls.is_wallh(r + 1, c) {
                r as i32
            } else {
                self.next_walld[r + 1][c]
            };
        }
    }
}

use crate::agent::Agent;

/// The four extrema that define the fixed seven-phase group script
/// (spec §3, §4.3.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptParams {
    pub max_u: u32,
    pub max_d: u32,
    pub max_l: u32,
    pub max_r: u32,
}

impl ScriptParams {
    /// Derive from extrema of `(dst - src)` over all agents, adjusted by
    /// the constant delta and clamped at zero. Behavior on an empty agent
    /// slice is undefined by spec (Design Notes); callers must not pass one.
    pub fn derive(agents: &[Agent]) -> Self {
        debug_assert!(!agents.is_empty(), "ScriptParams::derive requires at least one agent");

        let mut max_u = 0i32;
        let mut max_d = 0i32;
        let mut max_l = 0i32;
        let mut max_r = 0i32;
        for a in agents {
            let dr = a.dst.r as i32 - a.src.r as i32;
            let dc = a.dst.c as i32 - a.src.c as i32;
            max_u = max_u.max(dr);
            max_d = max_d.max(-dr);
            max_l = max_l.max(dc);
            max_r = max_r.max(-dc);
        }

        let delta: i32 = if agents.len() < 33 { -2 } else { -1 };
        ScriptParams {
            max_u: (max_u + delta).max(0) as u32,
            max_d: (max_d + delta).max(0) as u32,
            max_l: (max_l + delta).max(0) as u32,
            max_r: (max_r + delta).max(0) as u32,
        }
    }

    /// The fixed seven phases of the group script, in emission order
    /// (spec §4.3.1). Zero-length phases are kept in the list — callers
    /// that need only the nonzero ones should filter.
    pub fn phases(&self) -> [(crate::Direction, u32); 7] {
        use crate::Direction::*;
        [
            (Up, self.max_u / 2),
            (Left, self.max_l / 2),
            (Down, self.max_d / 2),
            (Right, self.max_r),
            (Down, self.max_d - self.max_d / 2),
            (Left, self.max_l - self.max_l / 2),
            (Up, self.max_u - self.max_u / 2),
        ]
    }

    /// Total number of group-move lines the script expands to.
    pub fn total_len(&self) -> u32 {
        self.phases().iter().map(|(_, n)| n).sum()
    }
}

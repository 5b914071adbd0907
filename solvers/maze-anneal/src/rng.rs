//! A self-contained MT19937 generator.
//!
//! The optimizer's acceptance rule and wall-choice proposals must be
//! reproducible given a fixed seed (spec §4.4, §8 scenario 6: "fixed RNG
//! seed ... must produce identical output across two invocations"). That
//! rules out relying on `rand`'s default `StdRng` (ChaCha, version-pinned
//! but not part of our own contract) — we own the exact generator instead
//! and plug it into the `rand` ecosystem via `RngCore`/`SeedableRng`, the
//! same way crates like `rand_pcg`/`rand_hc` wrap a hand-written engine.

use rand_core::{impls, Error, RngCore, SeedableRng};

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

pub struct Mt19937 {
    state: [u32; N],
    index: usize,
}

impl Mt19937 {
    pub fn new(seed: u32) -> Self {
        let mut rng = Mt19937 { state: [0; N], index: N };
        rng.reseed(seed);
        rng
    }

    fn reseed(&mut self, seed: u32) {
        self.state[0] = seed;
        for i in 1..N {
            let prev = self.state[i - 1];
            self.state[i] = (1_812_433_253u32.wrapping_mul(prev ^ (prev >> 30))).wrapping_add(i as u32);
        }
        self.index = N;
    }

    fn twist(&mut self) {
        for i in 0..N {
            let y = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % N] & LOWER_MASK);
            let mut next = self.state[(i + M) % N] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.state[i] = next;
        }
        self.index = 0;
    }
}

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.state[self.index];
        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^= y >> 18;
        self.index += 1;
        y
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mt19937 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Mt19937::new(u32::from_le_bytes(seed))
    }

    fn seed_from_u64(seed: u64) -> Self {
        Mt19937::new(seed as u32)
    }
}

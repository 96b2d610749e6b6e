//! A simple pseudorandom number generator.
//!
//! Specifically, a translation of the *really* minimal C PCG32 implementation from <https://www.pcg-random.org/>,[^note] implementing [RngCore] and [SeedableRng] so the generator may be used anywhere a [rand::Rng] is required.
//!
//! Generation of problems is reproducible from a seed, and each problem in a batch is given its own generator (see [search](crate::procedures::search)), so a generator is never shared between threads.
//!
//! [^note]: At the time of writing, the C implementation is at the top of the [download page](https://www.pcg-random.org/download.html).

use rand::SeedableRng;
use rand_core::{impls, RngCore};

/// State and increment
#[derive(Clone, Debug, Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl MinimalPCG32 {
    /// A generator seeded by some number.
    pub fn from_u64(seed: u64) -> Self {
        Self::from_seed(seed.to_le_bytes())
    }
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        // The increment must be odd.
        const INCREMENT: u64 = 1442695040888963407;
        let mut rng = Self {
            state: 0,
            inc: INCREMENT,
        };
        rng.next_u32();
        rng.state = rng.state.wrapping_add(u64::from_le_bytes(seed));
        rng.next_u32();
        rng
    }
}

#[cfg(test)]
mod pcg_tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn same_seed() {
        let mut one = MinimalPCG32::from_u64(73);
        let mut two = MinimalPCG32::from_u64(73);
        for _ in 0..64 {
            assert_eq!(one.next_u32(), two.next_u32());
        }
    }

    #[test]
    fn distinct_seeds() {
        let mut one = MinimalPCG32::from_u64(2);
        let mut two = MinimalPCG32::from_u64(3);
        let one_values = (0..8).map(|_| one.next_u32()).collect::<Vec<_>>();
        let two_values = (0..8).map(|_| two.next_u32()).collect::<Vec<_>>();
        assert_ne!(one_values, two_values);
    }

    #[test]
    fn ranges_are_covered() {
        let mut rng = MinimalPCG32::from_u64(11);
        let mut seen = [false; 4];
        for _ in 0..256 {
            seen[rng.random_range(0..4_usize)] = true;
        }
        assert!(seen.iter().all(|seen| *seen));

        let trues = (0..1000).filter(|_| rng.random_bool(0.25)).count();
        assert!(100 < trues && trues < 400);
    }
}

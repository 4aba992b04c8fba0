/*!
A simple pseudorandom number generator.

Specifically, the *really* minimal C PCG32 implementation from <https://www.pcg-random.org/>, implemented to satisfy the [RngCore](rand_core::RngCore) and [SeedableRng](rand_core::SeedableRng) traits of [rand_core].

PCG(32) is used as the default source of (pseudo)random numbers as it is simple, fast, and --- as a seeded generator --- keeps solves reproducible: a [context](crate::context) with the same configuration, clauses, and assumptions always takes the same path.

A [context](crate::context::GenericContext) is parameterised to anything which satisfies [Rng](rand::Rng), so revising the source of randomness requires only a different parameter.
*/

use rand_core::{impls, RngCore, SeedableRng};

/// State and increment of a minimal PCG32 generator.
#[derive(Default)]
pub struct MinimalPCG32 {
    state: u64,
    increment: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.increment);

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rotation = (old_state >> 59) as u32;
        xorshifted.rotate_right(rotation)
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
        // Any odd constant works as an increment.
        const INCREMENT: u64 = 1442695040888963407;
        Self {
            state: u64::from_le_bytes(seed).wrapping_add(INCREMENT),
            increment: INCREMENT,
        }
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    #[test]
    fn determined_by_seed() {
        let mut a = MinimalPCG32::from_seed(91648253_u64.to_le_bytes());
        let mut b = MinimalPCG32::from_seed(91648253_u64.to_le_bytes());

        for _ in 0..64 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn seeds_differ() {
        let mut a = MinimalPCG32::from_seed(2_u64.to_le_bytes());
        let mut b = MinimalPCG32::from_seed(3_u64.to_le_bytes());

        let a_values = (0..8).map(|_| a.next_u32()).collect::<Vec<_>>();
        let b_values = (0..8).map(|_| b.next_u32()).collect::<Vec<_>>();

        assert_ne!(a_values, b_values);
    }
}

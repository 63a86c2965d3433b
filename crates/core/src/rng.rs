//! RNG module - deterministic active-column selection
//!
//! Every row picks its active column independently and uniformly. The
//! generator is a small seeded LCG so a given seed always produces the same
//! track, which keeps tests and replays reproducible.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits of the state: the low bits of a power-of-two LCG
    /// have short periods (bit 0 simply alternates).
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max <= 1 {
            return 0;
        }
        (((self.next_u32() as u64) * (max as u64)) >> 32) as u32
    }

    /// Pick a column index in `0..column_count`.
    pub fn next_column(&mut self, column_count: usize) -> usize {
        self.next_range(column_count as u32) as usize
    }

    /// Current internal state (the seed that reproduces the rest of the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in 1..10u32 {
            for _ in 0..200 {
                assert!(rng.next_range(max) < max);
            }
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_columns_are_roughly_uniform() {
        let mut rng = SimpleRng::new(42);
        let mut counts = [0u32; 4];
        for _ in 0..4000 {
            counts[rng.next_column(4)] += 1;
        }
        // Each bucket should be near 1000; allow generous slack.
        for (col, &count) in counts.iter().enumerate() {
            assert!(
                (700..1300).contains(&count),
                "column {} drawn {} times",
                col,
                count
            );
        }
    }

    #[test]
    fn test_low_bit_does_not_alternate() {
        let mut rng = SimpleRng::new(3);
        let picks: Vec<usize> = (0..16).map(|_| rng.next_column(2)).collect();
        let alternating = picks.windows(2).all(|w| w[0] != w[1]);
        assert!(!alternating, "picks: {:?}", picks);
    }
}

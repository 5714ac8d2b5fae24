//! RNG module - seeded deterministic randomness
//!
//! Everything random in a game (pool shuffle, rack refills, mine placement,
//! starting turn) draws from a caller-owned [`SimpleRng`], so a recorded
//! seed replays the whole game. The host supplies entropy by seeding; the
//! engine never reads a clock or OS RNG itself.

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
        // LCG formula: (a * state + c) mod m, a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Uniform index into a collection of the given length.
    /// Returns None for an empty collection.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.next_range(len as u32) as usize)
    }

    /// Pick one of two values with equal probability
    pub fn coin_flip(&mut self) -> bool {
        self.next_u32() & 1 == 1
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state (for replaying a game from a snapshot)
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

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_pick_index_bounds() {
        let mut rng = SimpleRng::new(7);
        assert_eq!(rng.pick_index(0), None);
        for _ in 0..50 {
            let idx = rng.pick_index(13).unwrap();
            assert!(idx < 13);
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = SimpleRng::new(42);
        let mut values: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut values);

        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<u32>>());
    }

    #[test]
    fn test_coin_flip_hits_both_sides() {
        let mut rng = SimpleRng::new(99);
        let flips: Vec<bool> = (0..64).map(|_| rng.coin_flip()).collect();
        assert!(flips.iter().any(|&f| f));
        assert!(flips.iter().any(|&f| !f));
    }
}

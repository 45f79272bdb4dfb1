//! RNG module - piece generation
//!
//! Every piece gets a fresh id from a counter owned by the generator and a
//! kind drawn uniformly from the 7-tag alphabet. The kind stream comes from a
//! small seeded LCG so a session can be replayed from its seed.

use crate::types::{Piece, PIECE_KINDS};

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
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with a
    /// short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (((self.next_u32() >> 16) as u64 * max as u64) >> 16) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Hands out uniquely identified pieces.
///
/// Ids start at 1 and are never reused for the generator's lifetime. Undo
/// restores old pieces but never rewinds this counter.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    next_id: u32,
    rng: SimpleRng,
}

impl PieceGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            next_id: 1,
            rng: SimpleRng::new(seed),
        }
    }

    /// Generate the next piece.
    pub fn generate(&mut self) -> Piece {
        let id = self.next_id;
        self.next_id += 1;
        let kind = PIECE_KINDS[self.rng.next_range(PIECE_KINDS.len() as u32) as usize];
        Piece::new(id, kind)
    }

    /// Id the next generated piece will carry.
    pub fn peek_id(&self) -> u32 {
        self.next_id
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_eq!(rng.state(), 1);
        assert_ne!(rng.next_u32(), rng.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let mut generator = PieceGenerator::new(7);
        assert_eq!(generator.peek_id(), 1);

        let ids: Vec<u32> = (0..10).map(|_| generator.generate().id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
        assert_eq!(generator.peek_id(), 11);
    }

    #[test]
    fn test_same_seed_same_kinds() {
        let mut a = PieceGenerator::new(2024);
        let mut b = PieceGenerator::new(2024);
        for _ in 0..50 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn test_every_kind_eventually_appears() {
        let mut generator = PieceGenerator::new(1);
        let drawn: Vec<PieceKind> = (0..500).map(|_| generator.generate().kind).collect();
        for kind in PIECE_KINDS {
            assert!(drawn.contains(&kind), "Missing piece: {:?}", kind);
        }
    }
}

//! RNG strategy for battle resolution.
//!
//! The battle engine asks for integers in a half-open range and never reaches
//! for global randomness. Two strategies exist: a seeded linear congruential
//! generator defined here, and an OS-entropy source that lives in the engine
//! crate (the domain stays free of `rand`).

/// Source of uniformly distributed integers in `[min, max)`.
pub trait BattleRng {
    /// Returns an integer in `[min, max)`. Implementations return `min` when
    /// the range is empty.
    fn next(&mut self, min: i32, max: i32) -> i32;
}

impl<R: BattleRng + ?Sized> BattleRng for Box<R> {
    fn next(&mut self, min: i32, max: i32) -> i32 {
        (**self).next(min, max)
    }
}

impl<R: BattleRng + ?Sized> BattleRng for &mut R {
    fn next(&mut self, min: i32, max: i32) -> i32 {
        (**self).next(min, max)
    }
}

/// Reproducible linear congruential generator.
///
/// `s' = (s * 9301 + 49297) mod 233280`, output `min + floor(s' / 233280 * (max - min))`.
/// Two generators built from the same seed and fed the same ranges yield the
/// same sequence.
///
/// # Examples
///
/// ```
/// use arena_domain::rng::{BattleRng, SeededRng};
///
/// let mut rng = SeededRng::new(1);
/// assert_eq!(rng.next(0, 100), 25);
/// assert_eq!(rng.next(0, 100), 54);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: i64,
}

impl SeededRng {
    const MULTIPLIER: i64 = 9301;
    const INCREMENT: i64 = 49297;
    const MODULUS: i64 = 233_280;

    /// Negative seeds are folded into `[0, 233280)`.
    pub fn new(seed: i64) -> Self {
        Self {
            state: seed.rem_euclid(Self::MODULUS),
        }
    }

    fn step(&mut self) -> i64 {
        self.state = (self.state * Self::MULTIPLIER + Self::INCREMENT) % Self::MODULUS;
        self.state
    }
}

impl BattleRng for SeededRng {
    fn next(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let fraction = self.step() as f64 / Self::MODULUS as f64;
        let span = (i64::from(max) - i64::from(min)) as f64;
        let offset = (fraction * span).floor() as i64;
        // fraction < 1, so offset < span and the sum stays below max
        (i64::from(min) + offset) as i32
    }
}

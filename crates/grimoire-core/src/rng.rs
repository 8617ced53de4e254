//! Randomness port and its adapters.
//!
//! The engine never owns or seeds a generator. Every handler that needs chance
//! takes a [`Randomness`] capability from the caller, so a replay with the same
//! source yields the same state and the same event sequence.
//!
//! # Adapters
//!
//! - [`SeededRng`]: `ChaCha8` stream, seeded explicitly or from OS entropy
//! - [`ScriptedRng`]: replays fixed queues of values, for tests and replays
//!
//! # Example
//!
//! ```
//! use grimoire_core::rng::{Randomness, SeededRng};
//!
//! let mut a = SeededRng::from_seed(7);
//! let mut b = SeededRng::from_seed(7);
//! assert_eq!(a.next_int(100), b.next_int(100));
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// =============================================================================
// Port
// =============================================================================

/// Source of uniform random values consumed by the rules engine.
pub trait Randomness {
    /// Returns a uniform integer in `[0, bound)`. A `bound` of zero yields zero.
    fn next_int(&mut self, bound: u32) -> u32;

    /// Returns a uniform float in `[0.0, 1.0)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: Randomness + ?Sized> Randomness for &mut R {
    fn next_int(&mut self, bound: u32) -> u32 {
        (**self).next_int(bound)
    }

    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Inclusive integer range drawn uniformly.
///
/// A malformed span (`max < min`) is treated as the single value `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Lowest value that can be drawn.
    pub min: u32,
    /// Highest value that can be drawn.
    pub max: u32,
}

impl Span {
    /// Creates a span covering `min..=max`.
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Creates a span containing exactly one value.
    #[must_use]
    pub const fn fixed(value: u32) -> Self {
        Self::new(value, value)
    }

    /// Returns the upper bound after clamping it up to `min`.
    #[must_use]
    pub const fn clamped_max(self) -> u32 {
        if self.max < self.min {
            self.min
        } else {
            self.max
        }
    }

    /// Draws one value. Consumes exactly one `next_int` call.
    pub fn draw<R: Randomness + ?Sized>(self, rng: &mut R) -> u32 {
        let width = (self.clamped_max() - self.min).saturating_add(1);
        self.min + rng.next_int(width)
    }
}

// =============================================================================
// Seeded adapter
// =============================================================================

/// Production randomness backed by `ChaCha8`.
#[derive(Debug, Clone)]
pub struct SeededRng {
    inner: ChaCha8Rng,
    seed: Option<u64>,
}

impl SeededRng {
    /// Creates a deterministic generator. Equal seeds give equal streams.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates a generator seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
            seed: None,
        }
    }

    /// Returns the seed this generator was created with, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Randomness for SeededRng {
    fn next_int(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.inner.gen_range(0..bound)
    }

    fn next_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

// =============================================================================
// Scripted adapter
// =============================================================================

/// Randomness that replays pre-recorded values.
///
/// Integers are reduced modulo the requested bound; floats are clamped into
/// `[0.0, 1.0)`. Once a queue runs dry it keeps answering with the minimum
/// value (`0` or `0.0`).
///
/// # Example
///
/// ```
/// use grimoire_core::rng::{Randomness, ScriptedRng};
///
/// let mut rng = ScriptedRng::new([120, 3], [0.5]);
/// assert_eq!(rng.next_int(100), 20);
/// assert_eq!(rng.next_int(2), 1);
/// assert_eq!(rng.next_int(10), 0); // exhausted
/// assert!((rng.next_unit() - 0.5).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    ints: VecDeque<u32>,
    units: VecDeque<f64>,
}

impl ScriptedRng {
    /// Largest float the adapter will hand out.
    const UNIT_CEILING: f64 = 1.0 - f64::EPSILON;

    /// Creates a scripted source from integer and float queues.
    pub fn new(ints: impl IntoIterator<Item = u32>, units: impl IntoIterator<Item = f64>) -> Self {
        Self {
            ints: ints.into_iter().collect(),
            units: units.into_iter().collect(),
        }
    }

    /// Creates a source that always answers with the minimum value.
    #[must_use]
    pub fn minimum() -> Self {
        Self::default()
    }

    /// Creates a source with only integer values queued.
    pub fn ints(ints: impl IntoIterator<Item = u32>) -> Self {
        Self::new(ints, [])
    }

    /// Returns how many scripted integers have not been consumed.
    #[must_use]
    pub fn remaining_ints(&self) -> usize {
        self.ints.len()
    }

    /// Returns how many scripted floats have not been consumed.
    #[must_use]
    pub fn remaining_units(&self) -> usize {
        self.units.len()
    }
}

impl Randomness for ScriptedRng {
    fn next_int(&mut self, bound: u32) -> u32 {
        let value = self.ints.pop_front().unwrap_or(0);
        if bound == 0 {
            0
        } else {
            value % bound
        }
    }

    fn next_unit(&mut self) -> f64 {
        let value = self.units.pop_front().unwrap_or(0.0);
        if value.is_nan() {
            return 0.0;
        }
        value.clamp(0.0, Self::UNIT_CEILING)
    }
}

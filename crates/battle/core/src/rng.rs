//! Random source for damage variance, retreat rolls and target picks.
//!
//! The engine never reaches for ambient randomness. Every draw goes through a
//! [`BattleRng`] owned by the encounter, so a seeded [`PcgRng`] replays the
//! same battle and a [`ScriptedRng`] can force any individual roll.

/// Random source consumed by the battle engine.
///
/// Only [`next_u32`](BattleRng::next_u32) is required; every other draw is
/// derived from it, which keeps scripted sources easy to reason about.
pub trait BattleRng {
    /// Next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0.0, 1.0]`, both ends inclusive.
    fn unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }

    /// Uniform value in `[min, max]`.
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        if min >= max {
            return min;
        }
        min + self.unit() * (max - min)
    }

    /// Uniform integer in `[0, bound)`. Returns 0 when `bound` is 0.
    ///
    /// Raw values from the top partial block of `u32` space are redrawn so
    /// every residue is equally likely.
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        let zone = (1u64 << 32) / u64::from(bound) * u64::from(bound);
        loop {
            let value = self.next_u32();
            if u64::from(value) < zone {
                return value % bound;
            }
        }
    }

    /// Percentile roll in `[0, 100)`.
    fn roll_percent(&mut self) -> u32 {
        self.below(100)
    }

    /// Uniform integer in `[min, max]` inclusive.
    fn range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = max - min + 1;
        min + self.below(span)
    }

    /// Uniform index into a slice of length `len`.
    fn index(&mut self, len: usize) -> usize {
        let bound = u32::try_from(len).unwrap_or(u32::MAX);
        self.below(bound) as usize
    }
}

impl<R: BattleRng + ?Sized> BattleRng for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

impl<R: BattleRng + ?Sized> BattleRng for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 64-bit LCG state, 32-bit permuted output.
/// Same seed, same sequence.
#[derive(Clone, Debug)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    pub fn seeded(seed: u64) -> Self {
        // One warm-up step so small seeds do not start from a near-zero state.
        Self {
            state: Self::pcg_step(seed ^ 0x9e3779b97f4a7c15),
        }
    }

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl BattleRng for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let current = self.state;
        self.state = Self::pcg_step(current);
        Self::pcg_output(current)
    }
}

/// Replays a fixed list of raw values, cycling when exhausted.
///
/// Derived draws map directly onto the raw values: `below(n)` is
/// `value % n` with no redraw, so `ScriptedRng::repeat(29)` forces every percentile roll
/// to 29. `unit()` is `value / u32::MAX`, so 0 yields the minimum damage
/// multiplier and `u32::MAX` the maximum.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Source that yields `value` forever.
    pub fn repeat(value: u32) -> Self {
        Self::new(vec![value])
    }

    /// Number of raw values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl BattleRng for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }

    // Plain modulo, one raw value per draw: a script never gets redrawn.
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next_u32() % bound
    }
}

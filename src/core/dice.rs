//! The four-stick throw.
//!
//! Senet is played with four two-sided casting sticks, each landing flat
//! side up or round side up. The throw's value is the number of flat sides
//! showing, except that zero flats (all round) counts as six. Five is not a
//! throwable value; it only ever appears as a bear-off remainder.
//!
//! The dice are injected into `Game` behind the `DiceSource` trait, so tests
//! script exact sequences with `FixedDice` while play uses `StickDice`.

use std::collections::VecDeque;

use super::rng::GameRng;

/// Number of casting sticks in a throw.
pub const STICK_COUNT: u32 = 4;

/// A source of stick-throw values.
///
/// Implementations must only produce values in {1, 2, 3, 4, 6}. `Send` so
/// a game owning its dice can be confined behind a mutex.
pub trait DiceSource: std::fmt::Debug + Send {
    /// Produce the next throw value.
    fn roll(&mut self) -> u8;
}

/// Real stick throws: four independent fair flips.
#[derive(Clone, Debug)]
pub struct StickDice {
    rng: GameRng,
}

impl StickDice {
    /// Create stick dice with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create stick dice seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }
}

impl DiceSource for StickDice {
    fn roll(&mut self) -> u8 {
        let mut flats = 0u8;
        for _ in 0..STICK_COUNT {
            if self.rng.gen_bool(0.5) {
                flats += 1;
            }
        }

        // All round sides up counts as six.
        if flats == 0 {
            6
        } else {
            flats
        }
    }
}

/// Scripted throws for tests and replays.
///
/// Values are handed out in order. Running past the end of the script is a
/// contract violation and panics.
#[derive(Clone, Debug)]
pub struct FixedDice {
    rolls: VecDeque<u8>,
}

impl FixedDice {
    /// Create a scripted dice source from a throw sequence.
    #[must_use]
    pub fn new(rolls: &[u8]) -> Self {
        Self {
            rolls: rolls.iter().copied().collect(),
        }
    }

    /// Throws remaining in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl DiceSource for FixedDice {
    fn roll(&mut self) -> u8 {
        match self.rolls.pop_front() {
            Some(value) => value,
            None => panic!("FixedDice script exhausted"),
        }
    }
}

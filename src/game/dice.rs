use crate::game::board::RollError;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const MIN_FACE: u8 = 1;
pub const MAX_FACE: u8 = 6;

/// Number of intermediate faces shown before a roll settles.
pub const ROLL_ANIMATION_FRAMES: usize = 10;

/// Two six-sided dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    pub first: u8,
    pub second: u8,
}

impl DiceRoll {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        DiceRoll {
            first: rng.random_range(MIN_FACE..=MAX_FACE),
            second: rng.random_range(MIN_FACE..=MAX_FACE),
        }
    }

    /// Frames for a rolling animation. The last frame is the settled result;
    /// an empty request still yields one frame.
    pub fn animate<R: Rng>(rng: &mut R, frames: usize) -> Vec<DiceRoll> {
        (0..frames.max(1)).map(|_| DiceRoll::random(rng)).collect()
    }

    pub fn sum(&self) -> u8 {
        self.first.saturating_add(self.second)
    }

    /// Sum of a roll whose faces are both real die faces.
    pub fn checked_sum(&self) -> Result<u8, RollError> {
        let faces = MIN_FACE..=MAX_FACE;
        let invalid = RollError::InvalidFaces {
            first: self.first,
            second: self.second,
        };
        if !faces.contains(&self.first) || !faces.contains(&self.second) {
            return Err(invalid);
        }
        self.first.checked_add(self.second).ok_or(invalid)
    }
}

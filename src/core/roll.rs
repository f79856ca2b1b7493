//! A single roll of one or two dice.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rng::RandomSource;

/// The faces of one roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    dice: SmallVec<[u8; 2]>,
}

impl Roll {
    /// Roll `dice` independent dice.
    pub fn roll<R: RandomSource>(rng: &mut R, dice: usize) -> Self {
        Self {
            dice: (0..dice).map(|_| rng.roll_die()).collect(),
        }
    }

    /// Build a roll from known faces.
    #[must_use]
    pub fn from_faces(faces: &[u8]) -> Self {
        Self {
            dice: SmallVec::from_slice(faces),
        }
    }

    #[must_use]
    pub fn faces(&self) -> &[u8] {
        &self.dice
    }

    #[must_use]
    pub fn dice_count(&self) -> usize {
        self.dice.len()
    }

    /// Sum of all faces.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.dice.iter().map(|&f| u32::from(f)).sum()
    }

    /// Exactly two dice showing the same face.
    #[must_use]
    pub fn is_doubles(&self) -> bool {
        matches!(self.dice.as_slice(), [a, b] if a == b)
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<String> = self.dice.iter().map(u8::to_string).collect();
        write!(f, "{} ({})", self.total(), faces.join(","))
    }
}

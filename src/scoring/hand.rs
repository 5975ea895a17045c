//! Hand classification for a single line of five cells.
//!
//! A line is scored like a poker hand over the multiset of its values: the
//! result never depends on the order of the cells. Every signature below
//! assumes exactly [`LINE_LENGTH`] values; other lengths need a new table.

use crate::game::board::{Cell, BOARD_SIZE};
use serde::{Deserialize, Serialize};

/// Cells per scoring line.
pub const LINE_LENGTH: usize = BOARD_SIZE;

/// Value that turns a straight into the cheaper [`HandCategory::StraightWithSeven`].
pub const LUCKY_SEVEN: u8 = 7;

/// Five cells taken from the board, possibly not all filled yet.
pub type Line = [Cell; LINE_LENGTH];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    FiveOfAKind,
    StraightNoSeven,
    StraightWithSeven,
    FourOfAKind,
    FullHouse,
    ThreeOfAKind,
    TwoPair,
    OnePair,
    NoHand,
}

impl HandCategory {
    /// In decision order.
    pub const ALL: [HandCategory; 9] = [
        HandCategory::FiveOfAKind,
        HandCategory::StraightWithSeven,
        HandCategory::StraightNoSeven,
        HandCategory::FourOfAKind,
        HandCategory::FullHouse,
        HandCategory::ThreeOfAKind,
        HandCategory::TwoPair,
        HandCategory::OnePair,
        HandCategory::NoHand,
    ];

    pub fn base_score(&self) -> u32 {
        match self {
            HandCategory::FiveOfAKind => 10,
            HandCategory::StraightNoSeven => 12,
            HandCategory::StraightWithSeven => 8,
            HandCategory::FourOfAKind => 6,
            HandCategory::FullHouse => 8,
            HandCategory::ThreeOfAKind => 3,
            HandCategory::TwoPair => 3,
            HandCategory::OnePair => 1,
            HandCategory::NoHand => 0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::FiveOfAKind => "Five of a Kind",
            HandCategory::StraightNoSeven => "Straight (no 7)",
            HandCategory::StraightWithSeven => "Straight (with 7)",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::FullHouse => "Full House",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::OnePair => "One Pair",
            HandCategory::NoHand => "No Hand",
        }
    }
}

impl std::fmt::Display for HandCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a line. Any empty cell makes it `(NoHand, 0)`.
pub fn classify(line: &Line) -> (HandCategory, u32) {
    let mut values = [0u8; LINE_LENGTH];
    for (slot, cell) in values.iter_mut().zip(line) {
        match cell {
            Some(value) => *slot = *value,
            None => return (HandCategory::NoHand, 0),
        }
    }
    let category = classify_values(values);
    (category, category.base_score())
}

/// Classify five filled values.
pub fn classify_values(values: [u8; LINE_LENGTH]) -> HandCategory {
    let mut sorted = values;
    sorted.sort_unstable();

    let signature = count_signature(&sorted);
    let straight = sorted.windows(2).all(|w| w[0].checked_add(1) == Some(w[1]));

    // Straights can only have the [1, 1, 1, 1, 1] signature, so testing them
    // before the pair-based hands cannot shadow any of those.
    match signature.as_slice() {
        [5] => HandCategory::FiveOfAKind,
        _ if straight && sorted.contains(&LUCKY_SEVEN) => HandCategory::StraightWithSeven,
        _ if straight => HandCategory::StraightNoSeven,
        [4, 1] => HandCategory::FourOfAKind,
        [3, 2] => HandCategory::FullHouse,
        [3, 1, 1] => HandCategory::ThreeOfAKind,
        [2, 2, 1] => HandCategory::TwoPair,
        [2, 1, 1, 1] => HandCategory::OnePair,
        _ => HandCategory::NoHand,
    }
}

/// Multiplicities of the distinct values, largest first: `[3, 2]` for a full house.
fn count_signature(sorted: &[u8; LINE_LENGTH]) -> Vec<usize> {
    let mut counts: Vec<usize> = sorted.chunk_by(|a, b| a == b).map(<[u8]>::len).collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    counts
}

//! Caller-supplied game options.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, SearchLimits, DEFAULT_SEARCH_DEPTH, MAX_SEARCH_DEPTH};

/// Who controls each side, and how deep the engine searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    pub white_human: bool,
    pub black_human: bool,
    /// Search depth in plies, `0..=MAX_SEARCH_DEPTH`
    pub depth: u32,
}

impl GameConfig {
    /// Both sides played by people
    #[must_use]
    pub fn two_players() -> Self {
        GameConfig {
            white_human: true,
            black_human: true,
            depth: DEFAULT_SEARCH_DEPTH,
        }
    }

    /// Set the search depth, clamped to [`MAX_SEARCH_DEPTH`]
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth.min(MAX_SEARCH_DEPTH);
        self
    }

    #[must_use]
    pub fn is_human(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_human,
            Color::Black => self.black_human,
        }
    }

    /// Search limits for the engine side, depth clamped to [`MAX_SEARCH_DEPTH`]
    #[must_use]
    pub fn limits(&self) -> SearchLimits {
        SearchLimits::depth(self.depth.min(MAX_SEARCH_DEPTH))
    }
}

/// White is played by a person, Black by the engine at depth 2.
impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            white_human: true,
            black_human: false,
            depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

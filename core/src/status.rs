use serde::{Deserialize, Serialize};

use crate::CellCount;

/// Outcome of a game. `Win` and `Lose` are terminal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Neutral,
    Win,
    Lose,
}

impl GameStatus {
    /// A revealed mine outranks a cleared board.
    pub const fn derive(game_over: bool, safe_remaining: CellCount) -> Self {
        if game_over {
            Self::Lose
        } else if safe_remaining == 0 {
            Self::Win
        } else {
            Self::Neutral
        }
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_covers_all_outcomes() {
        assert_eq!(GameStatus::derive(false, 3), GameStatus::Neutral);
        assert_eq!(GameStatus::derive(false, 0), GameStatus::Win);
        assert_eq!(GameStatus::derive(true, 3), GameStatus::Lose);
        assert_eq!(GameStatus::derive(true, 0), GameStatus::Lose);
    }

    #[test]
    fn only_win_and_lose_are_finished() {
        assert!(!GameStatus::Neutral.is_finished());
        assert!(GameStatus::Win.is_finished());
        assert!(GameStatus::Lose.is_finished());
    }
}

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

mod search;
mod trivial;

/// Default cap on how deep the hint search follows one branch.
pub const MAX_RECURSION_DEPTH: usize = 25;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HintKind {
    Safe,
    Mine,
    HighProbability,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hint {
    pub x: Coord,
    pub y: Coord,
    pub kind: HintKind,
}

impl Hint {
    pub const fn new((x, y): Coord2, kind: HintKind) -> Self {
        Self { x, y, kind }
    }

    pub const fn coords(&self) -> Coord2 {
        (self.x, self.y)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    pub max_depth: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_RECURSION_DEPTH,
        }
    }
}

impl Board {
    /// Suggests a next move from what the player can currently see.
    ///
    /// A single certain hint is returned when one is found; otherwise every
    /// frontier cell tied for the lowest estimated mine ratio. The ratio comes
    /// from sampled search paths and is not a true probability.
    pub fn hints(&self) -> Vec<Hint> {
        self.hints_with(SolverConfig::default())
    }

    pub fn hints_with(&self, config: SolverConfig) -> Vec<Hint> {
        if let Some(hint) = trivial::find_trivial(self) {
            log::trace!("Trivial hint {hint:?}");
            return alloc::vec![hint];
        }

        let hints = search::search(self, config);
        log::trace!("Search produced {} hint(s)", hints.len());
        hints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Coord2, mines: &[Coord2]) -> Board {
        Board::with_layout(MineLayout::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn fresh_board_has_no_hints() {
        let board = board((4, 4), &[(1, 1)]);

        assert!(board.hints().is_empty());
    }

    #[test]
    fn satisfied_number_gives_single_safe_hint() {
        let mut board = board((5, 1), &[(0, 0)]);
        board.reveal_all((1, 0));
        board.toggle_flag((0, 0));

        assert_eq!(board.hints(), [Hint::new((2, 0), HintKind::Safe)]);
    }

    #[test]
    fn saturated_number_gives_single_mine_hint() {
        let mut board = board((4, 1), &[(0, 0), (2, 0)]);
        board.reveal_all((1, 0));

        assert_eq!(board.hints(), [Hint::new((0, 0), HintKind::Mine)]);
    }

    #[test]
    fn search_finds_safe_cell_behind_one_one_pattern() {
        let mut board = board((3, 2), &[(0, 1)]);
        board.reveal_all((0, 0));
        board.reveal_all((1, 0));

        assert_eq!(board.hints(), [Hint::new((2, 0), HintKind::Safe)]);
    }

    #[test]
    fn even_split_returns_all_tied_cells() {
        let mut board = board((3, 1), &[(0, 0)]);
        board.reveal_all((1, 0));

        assert_eq!(
            board.hints(),
            [
                Hint::new((0, 0), HintKind::HighProbability),
                Hint::new((2, 0), HintKind::HighProbability),
            ]
        );
    }

    #[test]
    fn depth_cap_limits_what_the_search_can_prove() {
        let mut board = board((3, 2), &[(0, 1)]);
        board.reveal_all((0, 0));
        board.reveal_all((1, 0));

        let hints = board.hints_with(SolverConfig { max_depth: 1 });

        assert_eq!(hints, [Hint::new((2, 1), HintKind::HighProbability)]);
    }

    #[test]
    fn hints_do_not_mutate_the_board() {
        let mut board = board((3, 2), &[(0, 1)]);
        board.reveal_all((0, 0));
        board.reveal_all((1, 0));
        let before = board.clone();

        board.hints();

        assert_eq!(board, before);
    }

    #[test]
    fn hint_kind_uses_screaming_case_names() {
        let json = serde_json::to_string(&HintKind::HighProbability).unwrap();

        assert_eq!(json, "\"HIGH_PROBABILITY\"");
    }
}

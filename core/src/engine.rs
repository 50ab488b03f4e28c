use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// One game: the grid, the frontier, and the counters that drive the status.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: BoardConfig,
    grid: Grid,
    frontier: BTreeSet<Coord2>,
    safe_remaining: CellCount,
    mine_counter: i32,
    game_over: bool,
}

impl Board {
    /// Creates a board with mines drawn from `seed`.
    pub fn new(config: BoardConfig, seed: u64) -> Self {
        Self::with_generator(config, DensityMineGenerator::new(seed))
    }

    pub fn with_generator(config: BoardConfig, generator: impl MineGenerator) -> Self {
        let layout = generator.generate(config);
        Self::build(config, layout)
    }

    /// Creates a board around a fixed layout; the density is the layout's own.
    pub fn with_layout(layout: MineLayout) -> Self {
        let config = BoardConfig::new_unchecked(layout.size(), layout.density());
        Self::build(config, layout)
    }

    fn build(config: BoardConfig, layout: MineLayout) -> Self {
        log::debug!(
            "New board {:?}, density {}, {} mines",
            layout.size(),
            config.density,
            layout.mine_count()
        );
        Self {
            config,
            safe_remaining: layout.safe_cell_count(),
            mine_counter: i32::from(layout.mine_count()),
            grid: Grid::new(layout),
            frontier: BTreeSet::new(),
            game_over: false,
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn density(&self) -> f64 {
        self.config.density
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::derive(self.game_over, self.safe_remaining)
    }

    pub fn is_finished(&self) -> bool {
        self.status().is_finished()
    }

    pub fn is_valid(&self, coords: Coord2) -> bool {
        self.grid.is_valid(coords)
    }

    /// Converts host coordinates, returning `None` when they are off the board.
    pub fn locate(&self, x: i64, y: i64) -> Option<Coord2> {
        let coords = (Coord::try_from(x).ok()?, Coord::try_from(y).ok()?);
        self.is_valid(coords).then_some(coords)
    }

    pub fn total_mines(&self) -> CellCount {
        self.grid.layout().mine_count()
    }

    /// Mine count minus placed flags. Negative when over-flagged.
    pub fn mine_counter(&self) -> i32 {
        self.mine_counter
    }

    pub fn safe_remaining(&self) -> CellCount {
        self.safe_remaining
    }

    /// Hidden cells touching at least one revealed cell, in `(x, y)` order.
    pub fn frontier(&self) -> &BTreeSet<Coord2> {
        &self.frontier
    }

    pub fn is_bomb(&self, coords: Coord2) -> bool {
        self.is_valid(coords) && self.grid.has_mine(coords)
    }

    pub fn is_flagged(&self, coords: Coord2) -> bool {
        self.is_valid(coords) && self.grid.state(coords).is_flagged()
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.is_valid(coords) && self.grid.state(coords).is_revealed()
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        if self.is_valid(coords) {
            self.grid.adjacent_mines(coords)
        } else {
            0
        }
    }

    pub fn cell_view(&self, coords: Coord2) -> CellView {
        if !self.is_valid(coords) {
            return CellView::Hidden;
        }

        match self.grid.state(coords) {
            CellState::Hidden => CellView::Hidden,
            CellState::Flagged => CellView::Flagged,
            CellState::Revealed if self.grid.has_mine(coords) => CellView::Mine,
            CellState::Revealed => CellView::Revealed(self.grid.adjacent_mines(coords)),
        }
    }

    /// A revealed number whose flags already match its count and that still has
    /// hidden neighbors.
    pub fn can_chord_reveal_at(&self, coords: Coord2) -> bool {
        self.is_revealed(coords)
            && self.grid.count_adjacent_flagged(coords) == self.grid.adjacent_mines(coords)
            && self.grid.count_adjacent_hidden(coords) > 0
    }

    /// Reveals a cell, or chords around a satisfied number, returning every
    /// cell this action revealed.
    pub fn reveal_all(&mut self, coords: Coord2) -> Vec<Coord2> {
        let mut revealed = Vec::new();

        if !self.is_valid(coords) {
            return revealed;
        }
        if self.is_finished() {
            log::debug!("Ignoring reveal at {coords:?}, game already ended");
            return revealed;
        }

        match self.grid.state(coords) {
            CellState::Flagged => {}
            CellState::Revealed => {
                if self.can_chord_reveal_at(coords) {
                    for neighbor in self.grid.neighbors(coords) {
                        self.flood_reveal(neighbor, &mut revealed);
                    }
                }
            }
            CellState::Hidden => self.flood_reveal(coords, &mut revealed),
        }

        if self.is_finished() && !revealed.is_empty() {
            log::debug!("Game ended with {:?}", self.status());
        }
        revealed
    }

    /// Flips the flag on a hidden cell and returns the resulting flag state.
    pub fn toggle_flag(&mut self, coords: Coord2) -> bool {
        if !self.is_valid(coords) {
            return false;
        }
        if self.is_finished() {
            log::debug!("Ignoring flag at {coords:?}, game already ended");
            return self.grid.state(coords).is_flagged();
        }

        match self.grid.state(coords) {
            CellState::Revealed => false,
            CellState::Hidden => {
                self.grid.set_state(coords, CellState::Flagged);
                self.mine_counter -= 1;
                self.frontier.remove(&coords);
                true
            }
            CellState::Flagged => {
                self.grid.set_state(coords, CellState::Hidden);
                self.mine_counter += 1;
                if self.grid.has_revealed_neighbor(coords) {
                    self.frontier.insert(coords);
                }
                false
            }
        }
    }

    /// Reveals `start` and, through zero-count cells, everything it opens up.
    /// A cell is expanded only while it is still hidden, so the cell state is
    /// the visited set.
    fn flood_reveal(&mut self, start: Coord2, revealed: &mut Vec<Coord2>) {
        let mut to_visit = vec![start];

        while let Some(coords) = to_visit.pop() {
            if !self.grid.state(coords).is_hidden() {
                continue;
            }

            self.reveal_single_cell(coords);
            revealed.push(coords);

            if self.grid.has_mine(coords) {
                self.game_over = true;
                continue;
            }

            if self.grid.adjacent_mines(coords) == 0 {
                let next: SmallVec<[Coord2; 8]> = self.grid.hidden_neighbors(coords).collect();
                to_visit.extend(next.into_iter().rev());
            }
        }
    }

    fn reveal_single_cell(&mut self, coords: Coord2) {
        self.grid.set_state(coords, CellState::Revealed);
        if !self.grid.has_mine(coords) {
            self.safe_remaining -= 1;
        }

        self.frontier.remove(&coords);
        self.frontier.extend(self.grid.hidden_neighbors(coords));
    }
}

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Cell storage for one board: the immutable mine layout plus the mutable
/// per-cell state, and the neighbor counts derived from both.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    layout: MineLayout,
    cells: Array2<CellState>,
}

impl Grid {
    pub fn new(layout: MineLayout) -> Self {
        let size = layout.size();
        Self {
            layout,
            cells: Array2::default(size.to_nd_index()),
        }
    }

    pub fn size(&self) -> Coord2 {
        self.layout.size()
    }

    pub fn layout(&self) -> &MineLayout {
        &self.layout
    }

    pub fn is_valid(&self, (x, y): Coord2) -> bool {
        let (size_x, size_y) = self.size();
        x < size_x && y < size_y
    }

    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    /// Panics on out-of-bounds coordinates; callers check `is_valid` first.
    pub fn state(&self, coords: Coord2) -> CellState {
        self.cells[coords.to_nd_index()]
    }

    pub(crate) fn set_state(&mut self, coords: Coord2, state: CellState) {
        self.cells[coords.to_nd_index()] = state;
    }

    pub fn has_mine(&self, coords: Coord2) -> bool {
        self.layout.contains_mine(coords)
    }

    pub fn adjacent_mines(&self, coords: Coord2) -> u8 {
        self.layout.adjacent_mine_count(coords)
    }

    pub fn count_adjacent_flagged(&self, coords: Coord2) -> u8 {
        self.count_neighbors(coords, CellState::is_flagged)
    }

    /// Neighbors that are neither revealed nor flagged.
    pub fn count_adjacent_hidden(&self, coords: Coord2) -> u8 {
        self.count_neighbors(coords, CellState::is_hidden)
    }

    pub fn count_adjacent_revealed(&self, coords: Coord2) -> u8 {
        self.count_neighbors(coords, CellState::is_revealed)
    }

    pub fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        self.neighbors(coords)
            .filter(|&pos| self.layout.contains_mine(pos))
            .count() as u8
    }

    pub fn has_revealed_neighbor(&self, coords: Coord2) -> bool {
        self.neighbors(coords)
            .any(|pos| self.state(pos).is_revealed())
    }

    /// Mines still unaccounted for around a numbered cell, trusting the flags.
    pub fn mine_deficit(&self, coords: Coord2) -> i16 {
        i16::from(self.adjacent_mines(coords)) - i16::from(self.count_adjacent_flagged(coords))
    }

    pub fn revealed_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + '_ {
        self.neighbors(coords)
            .filter(move |&pos| self.state(pos).is_revealed())
    }

    pub fn hidden_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + '_ {
        self.neighbors(coords)
            .filter(move |&pos| self.state(pos).is_hidden())
    }

    fn count_neighbors(&self, coords: Coord2, pred: impl Fn(CellState) -> bool) -> u8 {
        self.neighbors(coords)
            .filter(|&pos| pred(self.state(pos)))
            .count() as u8
    }
}

#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use hint::*;
pub use status::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod grid;
mod hint;
mod status;
mod types;

/// Board identity: dimensions and the per-cell mine probability.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord2,
    pub density: f64,
}

impl BoardConfig {
    pub const fn new_unchecked(size: Coord2, density: f64) -> Self {
        Self { size, density }
    }

    /// Validates host-supplied dimensions and density.
    ///
    /// Width and height must be in `1..=255` and density in `[0, 1)`.
    pub fn new(width: usize, height: usize, density: f64) -> Result<Self> {
        let size_x = Coord::try_from(width).map_err(|_| GameError::InvalidSize)?;
        let size_y = Coord::try_from(height).map_err(|_| GameError::InvalidSize)?;
        if size_x == 0 || size_y == 0 {
            return Err(GameError::InvalidSize);
        }
        if !(0.0..1.0).contains(&density) {
            return Err(GameError::InvalidDensity);
        }
        Ok(Self::new_unchecked((size_x, size_y), density))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

/// Fixed mine positions with adjacency counts computed once at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    adjacent: Array2<u8>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let (size_x, size_y) = mine_mask.dim();
        let bounds = (size_x as Coord, size_y as Coord);
        let adjacent = Array2::from_shape_fn((size_x, size_y), |(x, y)| {
            NeighborIter::new((x as Coord, y as Coord), bounds)
                .filter(|&pos| mine_mask[pos.to_nd_index()])
                .count() as u8
        });
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mine_mask,
            adjacent,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn size(&self) -> Coord2 {
        let (size_x, size_y) = self.mine_mask.dim();
        (size_x as Coord, size_y as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    /// Fraction of cells holding a mine.
    pub fn density(&self) -> f64 {
        f64::from(self.mine_count) / f64::from(self.total_cells())
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.adjacent[coords.to_nd_index()]
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_accepts_bounds() {
        assert!(BoardConfig::new(1, 1, 0.0).is_ok());
        assert!(BoardConfig::new(255, 255, 0.99).is_ok());
    }

    #[test]
    fn config_rejects_bad_size() {
        assert_eq!(BoardConfig::new(0, 5, 0.1), Err(GameError::InvalidSize));
        assert_eq!(BoardConfig::new(5, 256, 0.1), Err(GameError::InvalidSize));
    }

    #[test]
    fn config_rejects_bad_density() {
        assert_eq!(BoardConfig::new(5, 5, 1.0), Err(GameError::InvalidDensity));
        assert_eq!(BoardConfig::new(5, 5, -0.1), Err(GameError::InvalidDensity));
        assert_eq!(BoardConfig::new(5, 5, f64::NAN), Err(GameError::InvalidDensity));
    }

    #[test]
    fn layout_counts_adjacent_mines_once() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(0, 0), (2, 2)]).unwrap();

        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.safe_cell_count(), 7);
        assert_eq!(layout.adjacent_mine_count((1, 1)), 2);
        assert_eq!(layout.adjacent_mine_count((2, 0)), 0);
        assert_eq!(layout.adjacent_mine_count((0, 1)), 1);
        assert!(layout.contains_mine((2, 2)));
    }

    #[test]
    fn layout_rejects_out_of_bounds_mine() {
        assert_eq!(
            MineLayout::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::InvalidCoords)
        );
    }
}

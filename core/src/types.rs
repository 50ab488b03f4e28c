/// Single coordinate axis used for board width, height, and positions.
///
/// Boards are capped at 255 cells per side, so this doubles as the size bound.
pub type Coord = u8;

/// Count type used for mine counts and cell totals. `255 * 255` fits.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    (a as CellCount) * (b as CellCount)
}

pub fn manhattan(a: Coord2, b: Coord2) -> u16 {
    u16::from(a.0.abs_diff(b.0)) + u16::from(a.1.abs_diff(b.1))
}

/// Fixed 8-direction offset set, row by row starting at the upper-left.
const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

fn offset(center: Coord2, (dx, dy): (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let x = center.0.checked_add_signed(dx)?;
    let y = center.1.checked_add_signed(dy)?;
    (x < bounds.0 && y < bounds.1).then_some((x, y))
}

/// Lazy iterator over the in-bounds neighbors of a cell, yielding at most 8
/// coordinates. Ask the grid for a new one to walk the neighbors again.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: usize,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = OFFSETS.get(self.index) {
            self.index += 1;
            if let Some(pos) = offset(self.center, delta, self.bounds) {
                return Some(pos);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(OFFSETS.len() - self.index))
    }
}

impl core::iter::FusedIterator for NeighborIter {}

use crate::*;
pub use density::*;

mod density;

/// Source of mine positions for a new board.
pub trait MineGenerator {
    fn generate(self, config: BoardConfig) -> MineLayout;
}

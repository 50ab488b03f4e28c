use serde::{Deserialize, Serialize};

/// Player-facing state of a single cell.
///
/// Revealed and flagged are mutually exclusive by construction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Hidden,
    Flagged,
    Revealed,
}

impl CellState {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

/// What an observer should display for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    Mine,
}

impl CellView {
    /// Numeric display code: `0..=8` adjacent count, `9` mine, `10` hidden, `11` flag.
    pub const fn display_code(self) -> u8 {
        match self {
            Self::Revealed(count) => count,
            Self::Mine => 9,
            Self::Hidden => 10,
            Self::Flagged => 11,
        }
    }
}

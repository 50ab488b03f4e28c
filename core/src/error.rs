use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board width and height must be between 1 and 255")]
    InvalidSize,
    #[error("Mine density must be in the range [0, 1)")]
    InvalidDensity,
}

pub type Result<T> = core::result::Result<T, GameError>;

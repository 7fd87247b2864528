//! Error types for the game engine.
//!
//! The board engine itself is infallible. Errors only arise at the
//! boundary, where untrusted input (direction strings, externally supplied
//! boards, snapshots) is turned into engine types.

use super::board::{BOARD_SIZE, MAX_TILE_SUM};

/// Errors that can occur when feeding external input into the engine.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A direction string that does not name one of the four directions.
    #[error("invalid direction: {0:?}")]
    InvalidDirection(String),

    /// A grid whose dimensions are not 3x3.
    #[error("invalid board shape: expected {size}x{size}, got {rows} rows with {cols} columns", size = BOARD_SIZE)]
    InvalidShape {
        /// Number of rows supplied.
        rows: usize,
        /// Length of the row that failed the check. When the row count is
        /// wrong this is the length of row 0 (or 0 if there are no rows).
        cols: usize,
    },

    /// A cell holding something other than 0 or a power of two.
    #[error("invalid tile {value} at ({row}, {col}): must be 0 or a power of two")]
    InvalidTile {
        row: usize,
        col: usize,
        value: u32,
    },

    /// A board whose tiles add up to more than `MAX_TILE_SUM`.
    #[error("tile sum {sum} exceeds the maximum of {max}", max = MAX_TILE_SUM)]
    TileSumTooLarge { sum: u64 },

    /// A session snapshot could not be encoded or decoded.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::InvalidDirection("sideways".to_string());
        assert_eq!(err.to_string(), "invalid direction: \"sideways\"");

        let err = GameError::InvalidShape { rows: 2, cols: 3 };
        assert_eq!(
            err.to_string(),
            "invalid board shape: expected 3x3, got 2 rows with 3 columns"
        );

        let err = GameError::InvalidTile { row: 1, col: 2, value: 6 };
        assert_eq!(
            err.to_string(),
            "invalid tile 6 at (1, 2): must be 0 or a power of two"
        );

        let err = GameError::TileSumTooLarge { sum: 1 << 31 };
        assert_eq!(
            err.to_string(),
            "tile sum 2147483648 exceeds the maximum of 1073741824"
        );
    }
}

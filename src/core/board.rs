//! The 3x3 game board.
//!
//! A `Board` is a plain value: every engine operation takes a board and
//! returns a new one. Cells hold `0` (empty) or a positive power of two.
//!
//! ## Construction
//!
//! ```
//! use mini_2048::core::Board;
//!
//! let board = Board::from_cells([[2, 2, 0], [0, 0, 0], [0, 0, 0]]).unwrap();
//! assert_eq!(board.score(), 4);
//! assert_eq!(board.empty_count(), 7);
//!
//! // Untrusted grids are validated
//! assert!(Board::from_rows(&[vec![2, 3, 0]]).is_err());
//! ```

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Total number of cells.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// One row (or, after rotation, one column) of the board.
pub type Line = [u32; BOARD_SIZE];

/// Score type. Always the sum of all tiles.
pub type Score = u32;

/// Largest tile sum a board may be built with.
///
/// Every tile, and every merge result, is bounded by the sum, so engine
/// arithmetic on a validated board stays well inside `u32`.
pub const MAX_TILE_SUM: u32 = 1 << 30;

/// A 3x3 grid of tile values, row-major.
///
/// Serialized as a plain 3x3 array. Deserializing goes through
/// [`Board::from_cells`], so decoded boards are always valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Line; BOARD_SIZE]", into = "[Line; BOARD_SIZE]")]
pub struct Board {
    cells: [Line; BOARD_SIZE],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[0; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Engine-internal constructor. Callers guarantee the tile invariant.
    pub(crate) const fn from_cells_unchecked(cells: [Line; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Build a board from a fixed-size grid, validating every cell.
    ///
    /// Cells must be 0 or a power of two, and their sum must not exceed
    /// [`MAX_TILE_SUM`].
    pub fn from_cells(cells: [Line; BOARD_SIZE]) -> Result<Self, GameError> {
        let mut sum = 0u64;
        for (row, line) in cells.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GameError::InvalidTile { row, col, value });
                }
                sum += u64::from(value);
            }
        }
        if sum > u64::from(MAX_TILE_SUM) {
            return Err(GameError::TileSumTooLarge { sum });
        }
        Ok(Self { cells })
    }

    /// Build a board from a dynamically sized grid.
    ///
    /// Rejects anything that isn't exactly 3 rows of 3 cells, then applies
    /// the same checks as [`Board::from_cells`].
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self, GameError> {
        if rows.len() != BOARD_SIZE {
            return Err(GameError::InvalidShape {
                rows: rows.len(),
                cols: rows.first().map_or(0, Vec::len),
            });
        }
        let mut cells = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != BOARD_SIZE {
                return Err(GameError::InvalidShape {
                    rows: rows.len(),
                    cols: row.len(),
                });
            }
            cells[r].copy_from_slice(row);
        }
        Self::from_cells(cells)
    }

    /// Re-check the tile invariant.
    pub fn validate(&self) -> Result<(), GameError> {
        Self::from_cells(self.cells).map(|_| ())
    }

    /// Get a cell value.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    /// Return a copy with one cell replaced.
    #[must_use]
    pub(crate) fn with_cell(mut self, row: usize, col: usize, value: u32) -> Self {
        self.cells[row][col] = value;
        self
    }

    /// Borrow the rows.
    #[must_use]
    pub fn rows(&self) -> &[Line; BOARD_SIZE] {
        &self.cells
    }

    /// Grid as nested vectors (for display layers and bindings).
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.cells.iter().map(|line| line.to_vec()).collect()
    }

    /// Iterate over all cell values in row-major order.
    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Positions of empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::with_capacity(CELL_COUNT);
        for (r, line) in self.cells.iter().enumerate() {
            for (c, &value) in line.iter().enumerate() {
                if value == 0 {
                    empty.push((r, c));
                }
            }
        }
        empty
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.values().filter(|&v| v == 0).count()
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Sum of all tiles.
    #[must_use]
    pub fn score(&self) -> Score {
        self.values().sum()
    }

    /// Largest tile on the board (0 for an empty board).
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.values().max().unwrap_or(0)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, line) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, &value) in line.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if value == 0 {
                    write!(f, "{:>4}", ".")?;
                } else {
                    write!(f, "{:>4}", value)?;
                }
            }
        }
        Ok(())
    }
}

impl TryFrom<[Line; BOARD_SIZE]> for Board {
    type Error = GameError;

    fn try_from(cells: [Line; BOARD_SIZE]) -> Result<Self, Self::Error> {
        Self::from_cells(cells)
    }
}

impl From<Board> for [Line; BOARD_SIZE] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

/// 0 or a positive power of two.
fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.empty_count(), CELL_COUNT);
        assert_eq!(board.score(), 0);
        assert_eq!(board.max_tile(), 0);
        assert!(!board.is_full());
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_from_cells_validates_tiles() {
        assert!(Board::from_cells([[2, 4, 8], [16, 0, 0], [0, 0, 1024]]).is_ok());

        let err = Board::from_cells([[2, 0, 0], [0, 3, 0], [0, 0, 0]]).unwrap_err();
        assert!(matches!(err, GameError::InvalidTile { row: 1, col: 1, value: 3 }));

        // 1 is 2^0 but never a legal tile
        assert!(Board::from_cells([[1, 0, 0], [0, 0, 0], [0, 0, 0]]).is_err());
    }

    #[test]
    fn test_tile_sum_cap() {
        // At the cap: the pair merges into a single 2^30 tile
        let at_cap = Board::from_cells([[1 << 29, 1 << 29, 0], [0, 0, 0], [0, 0, 0]]).unwrap();
        assert_eq!(at_cap.score(), MAX_TILE_SUM);

        let err = Board::from_cells([[1 << 29, 1 << 29, 2], [0, 0, 0], [0, 0, 0]]).unwrap_err();
        assert!(matches!(err, GameError::TileSumTooLarge { sum } if sum == (1 << 30) + 2));

        let err = Board::from_cells([[1 << 31, 1 << 31, 0], [0, 0, 0], [0, 0, 0]]).unwrap_err();
        assert!(matches!(err, GameError::TileSumTooLarge { sum } if sum == 1 << 32));

        let err = Board::from_rows(&[vec![1 << 31, 0, 1 << 31], vec![0; 3], vec![0; 3]]).unwrap_err();
        assert!(matches!(err, GameError::TileSumTooLarge { .. }));
    }

    #[test]
    fn test_from_rows_rejects_wrong_shape() {
        let err = Board::from_rows(&[vec![0, 0, 0], vec![0, 0, 0]]).unwrap_err();
        assert!(matches!(err, GameError::InvalidShape { rows: 2, cols: 3 }));

        let err = Board::from_rows(&[vec![0, 0, 0], vec![0, 0], vec![0, 0, 0]]).unwrap_err();
        assert!(matches!(err, GameError::InvalidShape { rows: 3, cols: 2 }));

        // Wrong row count reports the length of row 0
        let err = Board::from_rows(&[vec![0, 0, 0, 0], vec![0, 0, 0]]).unwrap_err();
        assert!(matches!(err, GameError::InvalidShape { rows: 2, cols: 4 }));

        let err = Board::from_rows(&[]).unwrap_err();
        assert!(matches!(err, GameError::InvalidShape { rows: 0, cols: 0 }));
    }

    #[test]
    fn test_from_rows_round_trip() {
        let rows = vec![vec![2, 0, 4], vec![0, 8, 0], vec![16, 0, 2]];
        let board = Board::from_rows(&rows).unwrap();
        assert_eq!(board.to_rows(), rows);
        assert_eq!(board.get(2, 0), 16);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = Board::from_cells([[2, 0, 4], [4, 2, 0], [0, 8, 16]]).unwrap();
        assert_eq!(board.empty_cells(), vec![(0, 1), (1, 2), (2, 0)]);
        assert_eq!(board.empty_count(), 3);
    }

    #[test]
    fn test_score_and_max_tile() {
        let board = Board::from_cells([[2, 4, 8], [0, 0, 0], [32, 0, 2]]).unwrap();
        assert_eq!(board.score(), 48);
        assert_eq!(board.max_tile(), 32);
    }

    #[test]
    fn test_with_cell_does_not_touch_original() {
        let board = Board::empty();
        let placed = board.with_cell(1, 1, 2);
        assert_eq!(board.get(1, 1), 0);
        assert_eq!(placed.get(1, 1), 2);
    }

    #[test]
    fn test_display() {
        let board = Board::from_cells([[2, 0, 0], [0, 16, 0], [0, 0, 128]]).unwrap();
        let text = board.to_string();
        assert_eq!(text.lines().count(), 3);
        assert!(text.starts_with("   2"));
        assert!(text.ends_with(" 128"));
    }

    #[test]
    fn test_board_serde() {
        let board = Board::from_cells([[2, 0, 4], [0, 8, 0], [16, 0, 2]]).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "[[2,0,4],[0,8,0],[16,0,2]]");
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }

    #[test]
    fn test_board_deserialize_validates() {
        let err = serde_json::from_str::<Board>("[[3,3,0],[0,0,0],[0,0,0]]").unwrap_err();
        assert!(err.to_string().contains("invalid tile 3 at (0, 0)"));

        assert!(serde_json::from_str::<Board>("[[2,0,0],[0,0,0]]").is_err());
        assert!(serde_json::from_str::<Board>("[[1073741824,1073741824,0],[0,0,0],[0,0,0]]").is_err());
    }
}

//! Board engine: the pure state-transition functions of the game.
//!
//! All four directions reduce to a single "move left" primitive:
//!
//! 1. rotate the board so the requested direction points left
//! 2. compress every row with [`compress_line`]
//! 3. rotate back
//!
//! None of these functions mutate their input.

use smallvec::SmallVec;

use crate::core::action::{Direction, SpawnedTile};
use crate::core::board::{Board, Line, BOARD_SIZE};
use crate::core::rng::{TileSource, FOUR_PROBABILITY};

/// Slide a line toward index 0, merging equal neighbours.
///
/// Zeros are removed first. Then equal pairs merge left to right, and each
/// value takes part in at most one merge. The result is padded with zeros.
///
/// ```
/// use mini_2048::rules::compress_line;
///
/// assert_eq!(compress_line([2, 0, 2]), [4, 0, 0]);
/// assert_eq!(compress_line([2, 2, 2]), [4, 2, 0]);
/// assert_eq!(compress_line([4, 2, 2]), [4, 4, 0]);
/// ```
#[must_use]
pub fn compress_line(line: Line) -> Line {
    let tiles: SmallVec<[u32; BOARD_SIZE]> = line.iter().copied().filter(|&v| v != 0).collect();

    let mut out = [0; BOARD_SIZE];
    let mut write = 0;
    let mut i = 0;
    while i < tiles.len() {
        if i + 1 < tiles.len() && tiles[i] == tiles[i + 1] {
            out[write] = tiles[i] * 2;
            i += 2;
        } else {
            out[write] = tiles[i];
            i += 1;
        }
        write += 1;
    }
    out
}

/// Rotate the board by `quarter_turns` quarter-turns.
///
/// One turn maps cell (r, c) to (c, 2 - r). The count is taken mod 4, so
/// four turns is the identity.
#[must_use]
pub fn rotate(board: &Board, quarter_turns: u8) -> Board {
    let mut cells = *board.rows();
    for _ in 0..quarter_turns % 4 {
        let mut next = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (r, line) in cells.iter().enumerate() {
            for (c, &value) in line.iter().enumerate() {
                next[c][BOARD_SIZE - 1 - r] = value;
            }
        }
        cells = next;
    }
    Board::from_cells_unchecked(cells)
}

/// Apply a move without spawning.
///
/// Tiles slide toward the edge named by `direction`. The tile sum is
/// unchanged.
#[must_use]
pub fn move_board(board: &Board, direction: Direction) -> Board {
    let turns = direction.quarter_turns();
    let normalized = rotate(board, turns);

    let mut cells = *normalized.rows();
    for line in &mut cells {
        *line = compress_line(*line);
    }

    rotate(&Board::from_cells_unchecked(cells), (4 - turns) % 4)
}

/// True if any move can still change the board.
///
/// That is: some cell is empty, or two orthogonally adjacent cells are
/// equal.
#[must_use]
pub fn has_moves(board: &Board) -> bool {
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            let value = board.get(r, c);
            if value == 0 {
                return true;
            }
            if c + 1 < BOARD_SIZE && value == board.get(r, c + 1) {
                return true;
            }
            if r + 1 < BOARD_SIZE && value == board.get(r + 1, c) {
                return true;
            }
        }
    }
    false
}

/// Terminal-state test. A full but stuck board and any other unmovable
/// board count the same.
#[must_use]
pub fn is_game_over(board: &Board) -> bool {
    !has_moves(board)
}

/// Place one random tile with the standard 2/4 odds.
///
/// A full board is returned unchanged.
#[must_use]
pub fn spawn_random_tile<S: TileSource + ?Sized>(board: &Board, source: &mut S) -> Board {
    place_random_tile(board, source, FOUR_PROBABILITY).map_or(*board, |(next, _)| next)
}

/// Place one random tile and report where it went.
///
/// The cell is chosen uniformly among empty cells (row-major order). The
/// value is 4 with probability `four_probability`, otherwise 2. Returns
/// `None` on a full board without consuming randomness.
pub fn place_random_tile<S: TileSource + ?Sized>(
    board: &Board,
    source: &mut S,
    four_probability: f64,
) -> Option<(Board, SpawnedTile)> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let (row, col) = empty[source.choose_cell(empty.len())];
    let value = if source.roll_four(four_probability) { 4 } else { 2 };

    Some((board.with_cell(row, col, value), SpawnedTile { row, col, value }))
}

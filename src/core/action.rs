//! Move representation: the four directions plus a record of each
//! accepted move.
//!
//! Directions arrive from the UI as strings, so `Direction` implements
//! `FromStr` and rejects anything that isn't one of the four directions.
//!
//! ```
//! use mini_2048::core::Direction;
//!
//! let dir: Direction = "left".parse().unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert!("diagonal".parse::<Direction>().is_err());
//! ```

use serde::{Deserialize, Serialize};

use super::board::Score;
use super::error::GameError;

/// A directional move command. Tiles slide toward the named edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in on-screen button order.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Quarter-turns that bring this direction onto "left".
    ///
    /// The inverse rotation is `4 - turns` (mod 4).
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Direction::Left => 0,
            Direction::Down => 1,
            Direction::Right => 2,
            Direction::Up => 3,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" | "↑" => Ok(Direction::Up),
            "down" | "d" | "↓" => Ok(Direction::Down),
            "left" | "l" | "←" => Ok(Direction::Left),
            "right" | "r" | "→" => Ok(Direction::Right),
            _ => Err(GameError::InvalidDirection(s.to_string())),
        }
    }
}

/// A tile placed by a spawn step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpawnedTile {
    pub row: usize,
    pub col: usize,
    /// 2 or 4.
    pub value: u32,
}

/// A recorded move with what it produced.
///
/// Only accepted moves (ones that changed the board) are recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Direction played.
    pub direction: Direction,

    /// Tile spawned after the move. Always `Some` in practice, since a
    /// board-changing move leaves at least one empty cell.
    pub spawned: Option<SpawnedTile>,

    /// Score after the spawn.
    pub score: Score,

    /// 1-based move number.
    pub sequence: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(direction: Direction, spawned: Option<SpawnedTile>, score: Score, sequence: u32) -> Self {
        Self {
            direction,
            spawned,
            score,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directions() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("DOWN".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!(" Left ".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!("r".parse::<Direction>().unwrap(), Direction::Right);
        assert_eq!("↑".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("←".parse::<Direction>().unwrap(), Direction::Left);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for input in ["", "north", "upp", "2", "↗"] {
            let err = input.parse::<Direction>().unwrap_err();
            assert!(matches!(err, GameError::InvalidDirection(ref s) if s == input));
        }
    }

    #[test]
    fn test_display_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(dir.to_string().parse::<Direction>().unwrap(), dir);
        }
    }

    #[test]
    fn test_quarter_turns_distinct() {
        let mut turns: Vec<_> = Direction::ALL.iter().map(|d| d.quarter_turns()).collect();
        turns.sort_unstable();
        assert_eq!(turns, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_direction_serialization() {
        let json = serde_json::to_string(&Direction::Right).unwrap();
        assert_eq!(json, "\"right\"");
        let deserialized: Direction = serde_json::from_str("\"up\"").unwrap();
        assert_eq!(deserialized, Direction::Up);
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord::new(
            Direction::Left,
            Some(SpawnedTile { row: 2, col: 1, value: 4 }),
            12,
            3,
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}

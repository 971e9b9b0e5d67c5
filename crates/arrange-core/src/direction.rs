//! Layout direction definitions.
//!
//! The [`Direction`] enum mirrors the values ELK accepts for its
//! `elk.direction` option. The external string form is the upper-case ELK
//! name (`DOWN`, `RIGHT`, ...), parsing accepts any letter case.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string does not name a known [`Direction`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported layout direction `{0}`, expected one of UNDEFINED, RIGHT, LEFT, DOWN, UP")]
pub struct ParseDirectionError(String);

impl ParseDirectionError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.0
    }
}

/// Flow orientation used by direction-aware layout algorithms.
///
/// # Variants
///
/// - `Undefined` - Let the layout engine pick (default)
/// - `Right` - Left to right
/// - `Left` - Right to left
/// - `Down` - Top to bottom
/// - `Up` - Bottom to top
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Direction {
    /// No preferred direction (default)
    #[default]
    Undefined,
    /// Flow from left to right
    Right,
    /// Flow from right to left
    Left,
    /// Flow from top to bottom
    Down,
    /// Flow from bottom to top
    Up,
}

impl Direction {
    /// Every direction, in ELK declaration order.
    pub const ALL: [Direction; 5] = [
        Direction::Undefined,
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// Returns the ELK string for this direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrange_core::direction::Direction;
    ///
    /// assert_eq!(Direction::Down.as_str(), "DOWN");
    /// ```
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Undefined => "UNDEFINED",
            Direction::Right => "RIGHT",
            Direction::Left => "LEFT",
            Direction::Down => "DOWN",
            Direction::Up => "UP",
        }
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|direction| direction.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}

impl TryFrom<String> for Direction {
    type Error = ParseDirectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Direction> for &'static str {
    fn from(val: Direction) -> Self {
        val.as_str()
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

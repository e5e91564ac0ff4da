//! Core domain types for unbounded N-in-a-row.

use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A cell on the unbounded board.
///
/// Any pair of `i64` values is a valid point; there is no board edge.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, new,
)]
#[display("({x}, {y})")]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i64,
    /// Vertical coordinate.
    pub y: i64,
}

impl FromStr for Point {
    type Err = ParsePointError;

    /// Parses `"x,y"`, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| ParsePointError::new(s, "expected `x,y`"))?;
        let x = x
            .trim()
            .parse()
            .map_err(|_| ParsePointError::new(s, "x is not an integer"))?;
        let y = y
            .trim()
            .parse()
            .map_err(|_| ParsePointError::new(s, "y is not an integer"))?;
        Ok(Self { x, y })
    }
}

/// Failure to parse a [`Point`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid point {:?}: {}", input, reason)]
pub struct ParsePointError {
    /// The text that failed to parse.
    pub input: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

impl ParsePointError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// One of the two players.
///
/// On the wire a player is `1` (first) or `-1` (second); `0` is reserved
/// for "nobody", see [`Player::code`] and [`Player::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Recorded as the last mover of a fresh game.
    First,
    /// Places the first reduced mark of a fresh game.
    Second,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Signed wire code: `1` for [`Player::First`], `-1` for [`Player::Second`].
    pub fn code(self) -> i8 {
        match self {
            Player::First => 1,
            Player::Second => -1,
        }
    }

    /// Decodes a wire code where `0` means "nobody".
    #[instrument]
    pub fn from_code(code: i8) -> Result<Option<Self>, InvalidPlayerCode> {
        match code {
            0 => Ok(None),
            1 => Ok(Some(Player::First)),
            -1 => Ok(Some(Player::Second)),
            other => Err(InvalidPlayerCode { code: other }),
        }
    }
}

/// Encodes an optional player, `0` standing for `None`.
pub fn player_code(player: Option<Player>) -> i8 {
    player.map_or(0, Player::code)
}

/// A wire code outside `{-1, 0, 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Invalid player code {}", code)]
pub struct InvalidPlayerCode {
    /// The rejected code.
    pub code: i8,
}

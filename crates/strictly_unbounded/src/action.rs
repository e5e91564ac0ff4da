//! First-class action types.
//!
//! Actions are domain events, not side effects. They carry the player's
//! intent and can be validated independently of execution.

use super::{Player, Point};
use serde::{Deserialize, Serialize};

/// A request to the turn reducer.
///
/// Serialized as `{"type": "Move", "payload": {"x": .., "y": ..}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Action {
    /// Place the current player's mark at a point.
    Move(Point),
}

impl Action {
    /// The point this action targets.
    pub fn point(&self) -> Point {
        match self {
            Action::Move(point) => *point,
        }
    }
}

impl From<Point> for Action {
    fn from(point: Point) -> Self {
        Action::Move(point)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move(point) => write!(f, "move {}", point),
        }
    }
}

/// Reason the turn reducer declined an action.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The point already holds a mark.
    #[display("Point {} is already occupied", _0)]
    PointOccupied(Point),

    /// The game already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

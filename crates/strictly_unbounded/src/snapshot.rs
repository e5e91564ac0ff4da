//! Compact persisted form of a game.
//!
//! Only the marks (the row view) are stored; the column and diagonal views
//! are rebuilt on load since they describe the same facts. Loading checks
//! structure only, so any state [`GameState::apply_move`] can produce
//! survives a round trip.

use super::invariants::{GameInvariants, InvariantSet};
use super::state::GameState;
use super::types::{Player, player_code};
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A mark as stored in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct SnapshotMark {
    /// Horizontal coordinate.
    pub x: i64,
    /// Vertical coordinate.
    pub y: i64,
    /// Player code, `1` or `-1`.
    pub player: i8,
}

/// Serializable game state.
///
/// Player fields use the signed wire codes of [`Player::code`], with `0`
/// for "nobody" in `winner`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Exact run length required to win.
    pub win_length: usize,
    /// Player who made the last move.
    pub current_player: i8,
    /// Winner, or `0`.
    pub winner: i8,
    /// Marks sorted by `(x, y)`.
    pub marks: Vec<SnapshotMark>,
}

impl Snapshot {
    /// Encodes the snapshot as JSON.
    #[instrument(skip(self), fields(marks = self.marks.len()))]
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self)
            .map_err(|e| SnapshotError::new(format!("Failed to encode snapshot: {}", e)))
    }

    /// Decodes a snapshot from JSON.
    #[instrument(skip(json))]
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json)
            .map_err(|e| SnapshotError::new(format!("Failed to parse snapshot: {}", e)))
    }
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        Self {
            win_length: state.win_length(),
            current_player: state.current_player().code(),
            winner: player_code(state.winner()),
            marks: state
                .marks()
                .into_iter()
                .map(|(point, player)| SnapshotMark::new(point.x, point.y, player.code()))
                .collect(),
        }
    }
}

impl From<GameState> for Snapshot {
    fn from(state: GameState) -> Self {
        Self::from(&state)
    }
}

impl TryFrom<Snapshot> for GameState {
    type Error = SnapshotError;

    #[instrument(skip(snapshot), fields(marks = snapshot.marks.len()))]
    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        let current_player = Player::from_code(snapshot.current_player)
            .map_err(|e| SnapshotError::new(format!("current_player: {}", e)))?
            .ok_or_else(|| SnapshotError::new("current_player must not be 0"))?;
        let winner = Player::from_code(snapshot.winner)
            .map_err(|e| SnapshotError::new(format!("winner: {}", e)))?;

        let mut state = GameState::with_current_player(snapshot.win_length, current_player);

        for mark in &snapshot.marks {
            let point = super::Point::new(mark.x, mark.y);
            let player = Player::from_code(mark.player)
                .map_err(|e| SnapshotError::new(format!("mark at {}: {}", point, e)))?
                .ok_or_else(|| SnapshotError::new(format!("mark at {} has no player", point)))?;

            if state.is_occupied(point) {
                return Err(SnapshotError::new(format!("Duplicate mark at {}", point)));
            }
            state.record(point, player);
        }
        state.winner = winner;

        GameInvariants::check_all(&state).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Snapshot rejected");
            SnapshotError::new(format!("Inconsistent snapshot: {}", descriptions))
        })?;

        debug!(marks = state.mark_count(), "Snapshot restored");
        Ok(state)
    }
}

/// Snapshot encoding or restoration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Snapshot error: {} at {}:{}", message, file, line)]
pub struct SnapshotError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SnapshotError {
    /// Creates a new snapshot error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

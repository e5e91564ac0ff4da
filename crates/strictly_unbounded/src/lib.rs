//! Strictly Unbounded - N-in-a-row rules on an infinite board
//!
//! Two players alternate placing marks at arbitrary integer coordinates.
//! A fresh game records [`Player::First`] as the last mover, so the first
//! reduced move places [`Player::Second`]'s mark.
//! A player wins by forming a run of exactly `n` consecutive marks along a
//! row, column, diagonal or anti-diagonal.
//!
//! # Architecture
//!
//! - **Lines**: line-family mapping, sparse per-line indexes, run counting
//! - **State**: the four indexes plus winner/turn bookkeeping, and the
//!   unchecked [`GameState::apply_move`] transition
//! - **Reducer**: [`GameState::reduce`], the validated transition
//! - **Snapshot**: compact persisted form holding only the marks
//!
//! Win detection after a move only walks the lines through that move, so
//! its cost does not grow with the number of marks on the board.
//!
//! # Example
//!
//! ```
//! use strictly_unbounded::{Action, EngineConfig, Player, Point};
//!
//! # fn main() -> Result<(), strictly_unbounded::ConfigError> {
//! let game = EngineConfig::new(2)?
//!     .new_game()
//!     .reduce(Action::Move(Point::new(0, 0)))
//!     .reduce(Action::Move(Point::new(5, 5)))
//!     .reduce(Action::Move(Point::new(0, 1)));
//!
//! assert_eq!(game.winner(), Some(Player::Second));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod config;
mod invariants;
mod lines;
mod reducer;
mod snapshot;
mod state;
mod types;

// Crate-level exports - Domain types
pub use types::{InvalidPlayerCode, ParsePointError, Player, Point, player_code};

// Crate-level exports - Line families and indexes
pub use lines::{
    Line, LineFamily, LineId, LineIndex, anti_diagonal_line_id, count_run, diagonal_line_id,
};

// Crate-level exports - State and transitions
pub use action::{Action, MoveError};
pub use reducer::{Contract, GameNotOver, MoveContract, PointIsEmpty};
pub use state::{DEFAULT_WIN_LENGTH, GameState};

// Crate-level exports - Invariants
pub use invariants::{
    GameInvariants, IndexesAgreeInvariant, Invariant, InvariantSet, InvariantViolation,
    MarksAlternateInvariant, WinLengthPositiveInvariant,
};

// Crate-level exports - Configuration and persistence
pub use config::{ConfigError, EngineConfig};
pub use snapshot::{Snapshot, SnapshotError, SnapshotMark};

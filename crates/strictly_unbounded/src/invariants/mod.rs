//! First-class invariants for the game state.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are testable independently and back the reducer's postcondition.
//!
//! [`GameInvariants`] holds only structural properties, true for any state
//! reached through [`GameState::apply_move`](crate::GameState::apply_move).
//! Turn alternation is a separate check for reducer-driven games.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod indexes_agree;
pub mod marks_alternate;
pub mod win_length;

pub use indexes_agree::IndexesAgreeInvariant;
pub use marks_alternate::MarksAlternateInvariant;
pub use win_length::WinLengthPositiveInvariant;

/// Structural game invariants as a composable set.
pub type GameInvariants = (IndexesAgreeInvariant, WinLengthPositiveInvariant);

//! The configured win-length can be reached.

use super::super::GameState;
use super::Invariant;

/// Invariant: the win-length is at least one.
///
/// A zero-length run can never be formed, so such a game could not end.
pub struct WinLengthPositiveInvariant;

impl Invariant<GameState> for WinLengthPositiveInvariant {
    fn holds(state: &GameState) -> bool {
        state.win_length() > 0
    }

    fn description() -> &'static str {
        "Win length is at least one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_win_length_holds() {
        assert!(WinLengthPositiveInvariant::holds(&GameState::new(1)));
        assert!(WinLengthPositiveInvariant::holds(&GameState::default()));
    }

    #[test]
    fn test_zero_win_length_violates() {
        assert!(!WinLengthPositiveInvariant::holds(&GameState::new(0)));
    }
}

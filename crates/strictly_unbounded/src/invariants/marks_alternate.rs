//! Mark counts are consistent with alternating turns.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: the two players' mark counts differ by at most one, and when
/// they differ the player holding more marks made the last move.
///
/// Holds for any game driven by the turn reducer, whoever opened it. Games
/// built with [`GameState::apply_move`] may break it.
pub struct MarksAlternateInvariant;

impl Invariant<GameState> for MarksAlternateInvariant {
    fn holds(state: &GameState) -> bool {
        let (first, second) = state
            .marks()
            .iter()
            .fold((0usize, 0usize), |(first, second), &(_, player)| match player {
                Player::First => (first + 1, second),
                Player::Second => (first, second + 1),
            });

        match first.abs_diff(second) {
            0 => true,
            1 => {
                let ahead = if first > second {
                    Player::First
                } else {
                    Player::Second
                };
                state.current_player() == ahead
            }
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Players alternate (mark counts differ by at most one)"
    }
}

//! The turn reducer and the move contract it enforces.
//!
//! Contracts define correctness through preconditions and postconditions.
//! The reducer checks the precondition on every action and the
//! postcondition in debug builds.

use super::action::{Action, MoveError};
use super::invariants::{GameInvariants, InvariantSet};
use super::state::GameState;
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has no winner yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any action once a winner exists.
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        match state.winner() {
            Some(winner) => Err(MoveError::GameOver(winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: the target point holds no mark.
pub struct PointIsEmpty;

impl PointIsEmpty {
    /// Rejects a move onto an occupied point.
    pub fn check(action: &Action, state: &GameState) -> Result<(), MoveError> {
        let point = action.point();
        if state.is_occupied(point) {
            Err(MoveError::PointOccupied(point))
        } else {
            Ok(())
        }
    }
}

/// Contract for move actions.
///
/// Preconditions:
/// - Game has no winner
/// - Point is empty
///
/// Postconditions:
/// - Exactly one mark was added
/// - The mark belongs to the player who was to move
/// - The structural game invariants hold
pub struct MoveContract;

impl Contract<GameState, Action> for MoveContract {
    fn pre(state: &GameState, action: &Action) -> Result<(), MoveError> {
        GameNotOver::check(state)?;
        PointIsEmpty::check(action, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if after.mark_count() != before.mark_count() + 1 {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: expected {} marks, found {}",
                before.mark_count() + 1,
                after.mark_count()
            )));
        }
        if after.current_player() != before.to_move() {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {} moved instead of {}",
                after.current_player(),
                before.to_move()
            )));
        }
        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  Reducer
// ─────────────────────────────────────────────────────────────

impl GameState {
    /// Reports whether `action` would be accepted, and why not.
    pub fn check(&self, action: &Action) -> Result<(), MoveError> {
        MoveContract::pre(self, action)
    }

    /// Applies `action` for the player to move, the opponent of
    /// [`GameState::current_player`].
    ///
    /// Illegal actions (occupied point, finished game) are ignored and the
    /// state comes back unchanged; use [`GameState::check`] to learn why.
    #[instrument(skip(self), fields(to_move = %self.to_move()))]
    pub fn reduce(self, action: Action) -> Self {
        if let Err(reason) = MoveContract::pre(&self, &action) {
            debug!(%reason, "Action ignored");
            return self;
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.to_move();
        let next = match action {
            Action::Move(point) => self.apply_move(point, player),
        };

        #[cfg(debug_assertions)]
        if let Err(violation) = MoveContract::post(&before, &next) {
            panic!("move contract postcondition violated: {}", violation);
        }

        next
    }

    /// Runs `actions` through [`GameState::reduce`] in order.
    #[instrument(skip(self, actions))]
    pub fn replay(self, actions: impl IntoIterator<Item = Action>) -> Self {
        actions.into_iter().fold(self, GameState::reduce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Point};

    fn moves(points: &[(i64, i64)]) -> Vec<Action> {
        points
            .iter()
            .map(|&(x, y)| Action::Move(Point::new(x, y)))
            .collect()
    }

    #[test]
    fn test_precondition_empty_point() {
        let game = GameState::new(3);
        assert!(MoveContract::pre(&game, &Action::Move(Point::new(0, 0))).is_ok());
    }

    #[test]
    fn test_precondition_occupied_point() {
        let game = GameState::new(3).reduce(Action::Move(Point::new(0, 0)));
        assert_eq!(
            game.check(&Action::Move(Point::new(0, 0))),
            Err(MoveError::PointOccupied(Point::new(0, 0)))
        );
    }

    #[test]
    fn test_precondition_game_over() {
        let game = GameState::new(2).replay(moves(&[(0, 0), (5, 5), (1, 0)]));
        assert_eq!(game.winner(), Some(Player::Second));
        assert_eq!(
            game.check(&Action::Move(Point::new(9, 9))),
            Err(MoveError::GameOver(Player::Second))
        );
    }

    #[test]
    fn test_first_reduced_mark_is_second_players() {
        let game = GameState::new(5).reduce(Action::Move(Point::new(0, 0)));
        assert_eq!(game.occupant(Point::new(0, 0)), Some(Player::Second));
        assert_eq!(game.current_player(), Player::Second);
    }

    #[test]
    fn test_reducer_alternates_players() {
        let game = GameState::new(5);
        assert_eq!(game.to_move(), Player::Second);

        let game = game.reduce(Action::Move(Point::new(0, 0)));
        assert_eq!(game.occupant(Point::new(0, 0)), Some(Player::Second));
        assert_eq!(game.to_move(), Player::First);

        let game = game.reduce(Action::Move(Point::new(1, 0)));
        assert_eq!(game.occupant(Point::new(1, 0)), Some(Player::First));
        assert_eq!(game.current_player(), Player::First);
        assert_eq!(game.to_move(), Player::Second);
    }

    #[test]
    fn test_reduce_after_unchecked_moves_by_one_player() {
        let game = GameState::new(5)
            .apply_move(Point::new(0, 0), Player::First)
            .apply_move(Point::new(1, 0), Player::First)
            .reduce(Action::Move(Point::new(9, 9)));

        assert_eq!(game.occupant(Point::new(9, 9)), Some(Player::Second));
        assert_eq!(game.mark_count(), 3);
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new(4).replay(moves(&[(0, 0), (3, -1)]));
        let after = before.clone().reduce(Action::Move(Point::new(-2, 2)));
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameState::new(4);
        let mut after = before.clone().reduce(Action::Move(Point::new(0, 0)));
        after.anti_diagonals.set(4, 4, Player::Second);
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_missing_move() {
        let before = GameState::new(4);
        assert!(MoveContract::post(&before, &before.clone()).is_err());

        let wrong_player = before.clone().apply_move(Point::new(0, 0), Player::First);
        assert!(MoveContract::post(&before, &wrong_player).is_err());
    }
}

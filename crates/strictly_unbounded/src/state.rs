//! Game state and the unchecked move applicator.

use super::lines::{LineFamily, LineId, LineIndex, count_run};
use super::snapshot::Snapshot;
use super::types::{Player, Point};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Win-length used when the caller does not choose one.
pub const DEFAULT_WIN_LENGTH: usize = 5;

/// Complete game state.
///
/// Holds four views of the same set of marks, one per [`LineFamily`].
/// Transitions consume the state and return its successor; clone first to
/// keep a historical state around.
///
/// Serializes through [`Snapshot`], which stores only the row view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Snapshot", try_from = "Snapshot")]
pub struct GameState {
    pub(crate) rows: LineIndex,
    pub(crate) columns: LineIndex,
    pub(crate) diagonals: LineIndex,
    pub(crate) anti_diagonals: LineIndex,
    pub(crate) winner: Option<Player>,
    pub(crate) current_player: Player,
    pub(crate) win_length: usize,
}

impl GameState {
    /// Creates a fresh game with `current_player` set to [`Player::First`].
    ///
    /// The reducer places the opponent of `current_player`, so the first
    /// mark placed through [`GameState::reduce`] is [`Player::Second`]'s.
    #[instrument]
    pub fn new(win_length: usize) -> Self {
        Self::with_current_player(win_length, Player::First)
    }

    /// Creates a fresh game whose first reducer mark belongs to `opener`.
    #[instrument]
    pub fn with_opening_player(win_length: usize, opener: Player) -> Self {
        Self::with_current_player(win_length, opener.opponent())
    }

    pub(crate) fn with_current_player(win_length: usize, current_player: Player) -> Self {
        Self {
            rows: LineIndex::new(),
            columns: LineIndex::new(),
            diagonals: LineIndex::new(),
            anti_diagonals: LineIndex::new(),
            winner: None,
            current_player,
            win_length,
        }
    }

    /// Returns the winner, if the game has been won.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// True once a winner exists.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Returns the player the turn reducer alternates from.
    ///
    /// After any move this is the player who made it.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the player whose mark the next reduced move places.
    pub fn to_move(&self) -> Player {
        self.current_player.opponent()
    }

    /// Exact run length required to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// The index for one line family.
    pub fn index(&self, family: LineFamily) -> &LineIndex {
        match family {
            LineFamily::Row => &self.rows,
            LineFamily::Column => &self.columns,
            LineFamily::Diagonal => &self.diagonals,
            LineFamily::AntiDiagonal => &self.anti_diagonals,
        }
    }

    fn index_mut(&mut self, family: LineFamily) -> &mut LineIndex {
        match family {
            LineFamily::Row => &mut self.rows,
            LineFamily::Column => &mut self.columns,
            LineFamily::Diagonal => &mut self.diagonals,
            LineFamily::AntiDiagonal => &mut self.anti_diagonals,
        }
    }

    /// Player occupying `point`, read from the row view.
    pub fn occupant(&self, point: Point) -> Option<Player> {
        self.rows.get(LineId::from(point.y), point.x)
    }

    /// True if `point` holds a mark.
    pub fn is_occupied(&self, point: Point) -> bool {
        self.occupant(point).is_some()
    }

    /// Number of marks on the board.
    pub fn mark_count(&self) -> usize {
        self.rows.mark_count()
    }

    /// Every mark on the board, sorted by `(x, y)`.
    pub fn marks(&self) -> Vec<(Point, Player)> {
        let mut marks: Vec<_> = self
            .rows
            .iter()
            .filter_map(|(&id, line)| i64::try_from(id).ok().map(|y| (y, line)))
            .flat_map(|(y, line)| {
                line.iter()
                    .map(move |(x, player)| (Point::new(x, y), player))
            })
            .collect();
        marks.sort_unstable_by_key(|&(point, _)| point);
        marks
    }

    /// Length of `player`'s run through `point` along one family.
    pub fn run_length(&self, family: LineFamily, point: Point, player: Player) -> usize {
        self.index(family)
            .line(family.line_id(point))
            .map_or(0, |line| count_run(line, family.position_along(point), player))
    }

    /// Records `player` at `point` in all four views without evaluating a win.
    pub(crate) fn record(&mut self, point: Point, player: Player) {
        for family in LineFamily::iter() {
            self.index_mut(family)
                .set(family.line_id(point), family.position_along(point), player);
        }
    }

    /// Places `player`'s mark at `point` and decides whether it wins.
    ///
    /// This is the unchecked transition: it neither verifies that `point`
    /// is empty nor that the game is still running. Placing on an occupied
    /// point silently overwrites it. Use [`GameState::reduce`] for the
    /// validated transition.
    ///
    /// The resulting state records `player` as `current_player`. A win requires
    /// a run of exactly [`GameState::win_length`] marks; longer runs do not
    /// count.
    #[instrument(skip(self), fields(win_length = self.win_length))]
    pub fn apply_move(mut self, point: Point, player: Player) -> Self {
        self.record(point, player);
        self.current_player = player;

        let winning = LineFamily::iter()
            .find(|&family| self.run_length(family, point, player) == self.win_length);

        match winning {
            Some(family) => {
                info!(%point, %player, %family, "Winning run completed");
                self.winner = Some(player);
            }
            None => debug!(%point, %player, "Mark placed"),
        }

        self
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_WIN_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(win_length: usize, moves: &[((i64, i64), Player)]) -> GameState {
        moves
            .iter()
            .fold(GameState::new(win_length), |state, &((x, y), player)| {
                state.apply_move(Point::new(x, y), player)
            })
    }

    #[test]
    fn test_new_game_is_empty() {
        let state = GameState::new(4);
        assert_eq!(state.winner(), None);
        assert_eq!(state.current_player(), Player::First);
        assert_eq!(state.to_move(), Player::Second);
        assert_eq!(state.win_length(), 4);
        assert_eq!(state.mark_count(), 0);
        for family in LineFamily::iter() {
            assert!(state.index(family).is_empty());
        }
    }

    #[test]
    fn test_default_uses_default_win_length() {
        assert_eq!(GameState::default().win_length(), DEFAULT_WIN_LENGTH);
    }

    #[test]
    fn test_placed_mark_visible_in_all_views() {
        let point = Point::new(-3, 7);
        let state = GameState::new(5).apply_move(point, Player::Second);

        for family in LineFamily::iter() {
            let index = state.index(family);
            assert_eq!(
                index.get(family.line_id(point), family.position_along(point)),
                Some(Player::Second),
                "{family}"
            );
            assert_eq!(index.mark_count(), 1);
        }
        assert_eq!(state.occupant(point), Some(Player::Second));
        assert_eq!(state.current_player(), Player::Second);
        assert_eq!(state.to_move(), Player::First);
    }

    #[test]
    fn test_run_length_per_family() {
        let state = play(
            9,
            &[
                ((0, 0), Player::First),
                ((1, 0), Player::First),
                ((0, 1), Player::First),
                ((1, 1), Player::First),
            ],
        );
        let origin = Point::new(0, 0);
        assert_eq!(state.run_length(LineFamily::Row, origin, Player::First), 2);
        assert_eq!(state.run_length(LineFamily::Column, origin, Player::First), 2);
        assert_eq!(state.run_length(LineFamily::Diagonal, origin, Player::First), 2);
        assert_eq!(state.run_length(LineFamily::AntiDiagonal, origin, Player::First), 1);
        assert_eq!(
            state.run_length(LineFamily::Row, Point::new(50, 50), Player::First),
            0
        );
    }

    #[test]
    fn test_win_on_exact_length() {
        let state = play(
            3,
            &[
                ((0, 0), Player::First),
                ((0, 5), Player::Second),
                ((2, 0), Player::First),
                ((1, 5), Player::Second),
            ],
        );
        assert_eq!(state.winner(), None);

        // Filling the gap joins both sides.
        let state = state.apply_move(Point::new(1, 0), Player::First);
        assert_eq!(state.winner(), Some(Player::First));
    }

    #[test]
    fn test_overline_is_not_a_win() {
        let state = play(
            3,
            &[
                ((0, 0), Player::First),
                ((1, 0), Player::First),
                ((3, 0), Player::First),
                ((4, 0), Player::First),
            ],
        );
        assert_eq!(state.winner(), None);

        // Joining two pairs makes a run of five, not three.
        let state = state.apply_move(Point::new(2, 0), Player::First);
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_all_views_updated_even_when_row_wins() {
        let state = play(
            2,
            &[((0, 0), Player::First), ((1, 0), Player::First)],
        );
        assert_eq!(state.winner(), Some(Player::First));

        let last = Point::new(1, 0);
        for family in LineFamily::iter() {
            assert_eq!(
                state
                    .index(family)
                    .get(family.line_id(last), family.position_along(last)),
                Some(Player::First),
                "{family}"
            );
        }
    }

    #[test]
    fn test_marks_sorted() {
        let state = play(
            5,
            &[
                ((2, 1), Player::First),
                ((-1, 4), Player::Second),
                ((2, -6), Player::First),
            ],
        );
        assert_eq!(
            state.marks(),
            vec![
                (Point::new(-1, 4), Player::Second),
                (Point::new(2, -6), Player::First),
                (Point::new(2, 1), Player::First),
            ]
        );
    }

    #[test]
    fn test_marks_skip_row_ids_outside_coordinates() {
        let mut state = GameState::new(5).apply_move(Point::new(1, 2), Player::First);
        state.rows.set(LineId::MAX, 0, Player::Second);

        assert_eq!(state.marks(), vec![(Point::new(1, 2), Player::First)]);
    }

    #[test]
    fn test_opening_player_places_first_reduced_mark() {
        let state = GameState::with_opening_player(5, Player::First);
        assert_eq!(state.to_move(), Player::First);
        assert_eq!(state.current_player(), Player::Second);
    }

    #[test]
    fn test_history_is_preserved_by_cloning() {
        let before = GameState::new(3).apply_move(Point::new(0, 0), Player::First);
        let after = before.clone().apply_move(Point::new(1, 1), Player::Second);

        assert!(!before.is_occupied(Point::new(1, 1)));
        assert!(after.is_occupied(Point::new(1, 1)));
        assert_eq!(before.mark_count(), 1);
    }
}

//! The four line views describe one set of marks.

use super::super::lines::LineFamily;
use super::super::GameState;
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: every mark in the row view appears, with the same player,
/// in the column, diagonal and anti-diagonal views, and no view holds
/// extra marks.
pub struct IndexesAgreeInvariant;

impl Invariant<GameState> for IndexesAgreeInvariant {
    fn holds(state: &GameState) -> bool {
        let marks = state.marks();

        LineFamily::iter().all(|family| {
            let index = state.index(family);
            index.mark_count() == marks.len()
                && marks.iter().all(|&(point, player)| {
                    index.get(family.line_id(point), family.position_along(point)) == Some(player)
                })
        })
    }

    fn description() -> &'static str {
        "Row, column, diagonal and anti-diagonal views hold the same marks"
    }
}

//! Line families and the sparse per-line occupancy indexes.
//!
//! Every placed mark lies on exactly one line of each family. A family
//! maps a point to a line identifier (shared by all points on the line)
//! and a position along that line (consecutive cells have consecutive
//! positions). Win detection only ever looks at one line at a time, so
//! nothing here depends on how many marks are on the board.

use super::types::{Player, Point};
use std::collections::HashMap;
use std::collections::hash_map;

/// Identifier of one line within a family.
///
/// Wider than a coordinate so that `y - x` and `x + y` are total over `i64`.
pub type LineId = i128;

/// Returns the identifier of the `\` diagonal through `point`.
///
/// Constant along `(x + k, y + k)`.
pub fn diagonal_line_id(point: Point) -> LineId {
    LineId::from(point.y) - LineId::from(point.x)
}

/// Returns the identifier of the `/` diagonal through `point`.
///
/// Constant along `(x + k, y - k)`.
pub fn anti_diagonal_line_id(point: Point) -> LineId {
    LineId::from(point.x) + LineId::from(point.y)
}

/// One of the four ways of grouping points into straight lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum LineFamily {
    /// Horizontal lines, keyed by `y`.
    Row,
    /// Vertical lines, keyed by `x`.
    Column,
    /// `\` diagonals, keyed by `y - x`.
    Diagonal,
    /// `/` diagonals, keyed by `x + y`.
    AntiDiagonal,
}

impl LineFamily {
    /// Identifier of the line of this family passing through `point`.
    pub fn line_id(self, point: Point) -> LineId {
        match self {
            LineFamily::Row => LineId::from(point.y),
            LineFamily::Column => LineId::from(point.x),
            LineFamily::Diagonal => diagonal_line_id(point),
            LineFamily::AntiDiagonal => anti_diagonal_line_id(point),
        }
    }

    /// Position of `point` along its line of this family.
    pub fn position_along(self, point: Point) -> i64 {
        match self {
            LineFamily::Column => point.y,
            LineFamily::Row | LineFamily::Diagonal | LineFamily::AntiDiagonal => point.x,
        }
    }
}

/// Sparse occupancy of a single line: position along the line to player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    cells: HashMap<i64, Player>,
}

impl Line {
    /// Player occupying `position`, if any.
    pub fn get(&self, position: i64) -> Option<Player> {
        self.cells.get(&position).copied()
    }

    /// Records `player` at `position`, overwriting whatever was there.
    pub fn set(&mut self, position: i64, player: Player) {
        self.cells.insert(position, player);
    }

    /// Number of occupied positions.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if no position on the line is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Occupied positions in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, Player)> + '_ {
        self.cells.iter().map(|(&position, &player)| (position, player))
    }
}

/// Length of the contiguous run of `player` marks through `position`.
///
/// Scans outward in both directions and subtracts the placed cell, which
/// both scans count. Returns 0 when `position` does not hold `player`.
pub fn count_run(line: &Line, position: i64, player: Player) -> usize {
    let scan = |step: fn(i64) -> Option<i64>| {
        std::iter::successors(Some(position), move |&p| step(p))
            .take_while(|&p| line.get(p) == Some(player))
            .count()
    };

    let left = scan(|p| p.checked_sub(1));
    let right = scan(|p| p.checked_add(1));

    (left + right).saturating_sub(1)
}

/// All lines of one family that hold at least one mark.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineIndex {
    lines: HashMap<LineId, Line>,
}

impl LineIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// The line with the given identifier, if it holds any mark.
    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(&id)
    }

    /// Player at `position` on line `id`, if any.
    pub fn get(&self, id: LineId, position: i64) -> Option<Player> {
        self.lines.get(&id).and_then(|line| line.get(position))
    }

    /// Records `player` at `position` on line `id`, creating the line if needed.
    ///
    /// Returns the updated line.
    pub fn set(&mut self, id: LineId, position: i64, player: Player) -> &Line {
        let line = self.lines.entry(id).or_default();
        line.set(position, player);
        line
    }

    /// Number of non-empty lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of marks across all lines.
    pub fn mark_count(&self) -> usize {
        self.lines.values().map(Line::len).sum()
    }

    /// True if the index holds no marks.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, LineId, Line> {
        self.lines.iter()
    }
}

//! The knight's travail: shortest knight tour between two squares.

use crate::movegen::{MoveGenerator, MoveList};
use crate::search::{SearchOutcome, SearchProblem, ShortestPathSearch};
use knight_core::Position;

/// Binds a goal square and knight move generation to the search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnightsTravail {
    goal: Position,
    moves: MoveGenerator,
}

impl KnightsTravail {
    /// Creates a problem whose only goal is `goal`.
    pub const fn new(goal: Position) -> Self {
        KnightsTravail {
            goal,
            moves: MoveGenerator::KNIGHT,
        }
    }

    /// Returns the goal square.
    pub const fn goal(&self) -> Position {
        self.goal
    }

    /// Searches for a shortest knight path from `start` to the goal.
    pub fn solve(&self, start: Position) -> SearchOutcome<Position> {
        ShortestPathSearch::new(start, self).run()
    }
}

impl SearchProblem<Position> for KnightsTravail {
    type Successors = MoveList;

    fn is_goal(&self, state: &Position) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Position) -> MoveList {
        self.moves.valid_moves_from(*state)
    }

    fn state_space_hint(&self) -> Option<usize> {
        Some(Position::COUNT)
    }
}

/// Returns a shortest knight path from `start` to `end`, both included.
///
/// ```
/// use knight_core::Position;
/// use knight_search::knights_travail;
///
/// let path = knights_travail(Position::A1, Position::H8);
/// assert_eq!(path.len(), 7);
/// assert_eq!(path.first(), Some(&Position::A1));
/// assert_eq!(path.last(), Some(&Position::H8));
/// ```
pub fn knights_travail(start: Position, end: Position) -> Vec<Position> {
    KnightsTravail::new(end).solve(start).path
}

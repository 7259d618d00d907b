//! Move distances from one square to every other square.
//!
//! Computed level by level over a [`MoveTable`], independently of
//! [`ShortestPathSearch`](crate::ShortestPathSearch). Useful for checking
//! search results and for printing distance maps.

use crate::movegen::MoveTable;
use knight_core::Position;

/// Number of moves needed to reach each square from an origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    origin: Position,
    distances: [Option<u8>; Position::COUNT],
}

impl DistanceTable {
    /// Computes distances from `origin` using the destinations in `table`.
    pub fn compute(origin: Position, table: &MoveTable) -> Self {
        let mut distances = [None; Position::COUNT];
        distances[origin.index() as usize] = Some(0);

        let mut level = vec![origin];
        let mut depth = 0u8;
        while !level.is_empty() {
            depth += 1;
            let mut next = Vec::new();
            for &from in &level {
                for &to in table.moves_from(from) {
                    let slot = &mut distances[to.index() as usize];
                    if slot.is_none() {
                        *slot = Some(depth);
                        next.push(to);
                    }
                }
            }
            tracing::trace!(depth, squares = next.len(), "distance level");
            level = next;
        }

        DistanceTable { origin, distances }
    }

    /// Computes knight distances from `origin`.
    pub fn knight(origin: Position) -> Self {
        Self::compute(origin, &MoveTable::default())
    }

    /// Returns the origin square.
    pub fn origin(&self) -> Position {
        self.origin
    }

    /// Returns the number of moves from the origin to `to`, or `None` if
    /// `to` is unreachable.
    #[inline]
    pub fn distance(&self, to: Position) -> Option<u8> {
        self.distances[to.index() as usize]
    }

    /// Returns the largest distance to any reachable square.
    pub fn max_distance(&self) -> u8 {
        self.distances.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Iterates over the squares exactly `moves` moves away, in index order.
    pub fn squares_at(&self, moves: u8) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&p| self.distance(p) == Some(moves))
    }

    /// Returns true if every square is reachable from the origin.
    pub fn is_complete(&self) -> bool {
        self.distances.iter().all(Option::is_some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MoveGenerator;
    use knight_core::Delta;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn distances_from_corner() {
        let table = DistanceTable::knight(Position::A1);
        assert_eq!(table.origin(), Position::A1);
        assert_eq!(table.distance(Position::A1), Some(0));
        assert_eq!(table.distance(pos("B3")), Some(1));
        assert_eq!(table.distance(pos("C2")), Some(1));
        assert_eq!(table.distance(pos("B4")), Some(2));
        assert_eq!(table.distance(pos("B2")), Some(4));
        assert_eq!(table.distance(Position::H8), Some(6));
        assert_eq!(table.max_distance(), 6);
        assert!(table.is_complete());
    }

    #[test]
    fn squares_at_each_level_partition_the_board() {
        let table = DistanceTable::knight(pos("D4"));
        let total: usize = (0..=table.max_distance())
            .map(|d| table.squares_at(d).count())
            .sum();
        assert_eq!(total, Position::COUNT);
        assert_eq!(table.squares_at(0).collect::<Vec<_>>(), vec![pos("D4")]);
        assert_eq!(table.squares_at(1).count(), 8);
    }

    #[test]
    fn unreachable_squares_have_no_distance() {
        // A piece that only moves two ranks up or down never changes file
        // and only reaches ranks of the same parity.
        static HOPS: [Delta; 2] = [Delta::new(2, 0), Delta::new(-2, 0)];
        let hops = MoveTable::new(&MoveGenerator::new(&HOPS));
        let table = DistanceTable::compute(Position::A1, &hops);
        assert_eq!(table.distance(pos("C1")), Some(1));
        assert_eq!(table.distance(pos("G1")), Some(3));
        assert_eq!(table.distance(pos("B1")), None);
        assert_eq!(table.distance(pos("A2")), None);
        assert_eq!(table.max_distance(), 3);
        assert!(!table.is_complete());
        assert_eq!(table.squares_at(4).count(), 0);
    }
}

//! Successor generation for a piece moving by fixed offsets.

use knight_core::{Delta, Position, KNIGHT_DELTAS};

/// A list of destination squares with a fixed maximum capacity.
///
/// A piece described by a delta table has at most one destination per
/// delta, so a fixed-size array avoids heap allocations during generation.
#[derive(Clone, Copy)]
pub struct MoveList {
    moves: [Position; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Maximum number of destinations from any square.
    pub const MAX_MOVES: usize = 8;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [Position::A1; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a destination to the list.
    #[inline]
    pub fn push(&mut self, pos: Position) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = pos;
        self.len += 1;
    }

    /// Returns the number of destinations.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the destinations.
    #[inline]
    pub fn as_slice(&self) -> &[Position] {
        &self.moves[..self.len]
    }

    /// Returns true if `pos` is one of the destinations.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.as_slice().contains(&pos)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Position;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len);
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Position;
    type IntoIter = std::iter::Take<std::array::IntoIter<Position, { MoveList::MAX_MOVES }>>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter().take(self.len)
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates on-board destinations from a fixed table of deltas.
///
/// The generator holds no state beyond the table, so the same square always
/// yields the same list in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveGenerator {
    deltas: &'static [Delta],
}

impl MoveGenerator {
    /// Knight moves, in [`KNIGHT_DELTAS`] order.
    pub const KNIGHT: MoveGenerator = MoveGenerator::new(&KNIGHT_DELTAS);

    /// Creates a generator for the given delta table.
    ///
    /// # Panics
    ///
    /// Panics if the table holds more than [`MoveList::MAX_MOVES`] deltas.
    pub const fn new(deltas: &'static [Delta]) -> Self {
        assert!(deltas.len() <= MoveList::MAX_MOVES);
        MoveGenerator { deltas }
    }

    /// Returns the delta table.
    #[inline]
    pub const fn deltas(&self) -> &'static [Delta] {
        self.deltas
    }

    /// Returns every destination reachable in one move from `from`,
    /// in delta-table order.
    pub fn valid_moves_from(&self, from: Position) -> MoveList {
        let mut moves = MoveList::new();
        for &delta in self.deltas {
            if let Some(to) = from.offset(delta) {
                moves.push(to);
            }
        }
        moves
    }
}

impl Default for MoveGenerator {
    fn default() -> Self {
        Self::KNIGHT
    }
}

/// Precomputed destinations for every square.
///
/// Owned by the caller and built once from a [`MoveGenerator`]; lookups are
/// a single index.
#[derive(Clone)]
pub struct MoveTable {
    moves: [MoveList; Position::COUNT],
}

impl MoveTable {
    /// Builds the table for every square on the board.
    pub fn new(generator: &MoveGenerator) -> Self {
        let mut moves = [MoveList::new(); Position::COUNT];
        for pos in Position::all() {
            moves[pos.index() as usize] = generator.valid_moves_from(pos);
        }
        MoveTable { moves }
    }

    /// Returns the precomputed destinations from `from`.
    #[inline]
    pub fn moves_from(&self, from: Position) -> &MoveList {
        &self.moves[from.index() as usize]
    }
}

impl Default for MoveTable {
    fn default() -> Self {
        Self::new(&MoveGenerator::KNIGHT)
    }
}

impl std::fmt::Debug for MoveTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(Position::all().map(|pos| (pos, self.moves_from(pos))))
            .finish()
    }
}

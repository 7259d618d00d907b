//! Move offsets.

use std::fmt;

/// A relative move: signed offsets applied to a position's rank and file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delta {
    /// Offset applied to the rank (A-H).
    pub rank: i8,
    /// Offset applied to the file (1-8).
    pub file: i8,
}

impl Delta {
    /// Creates a delta from rank and file offsets.
    #[inline]
    pub const fn new(rank: i8, file: i8) -> Self {
        Delta { rank, file }
    }

    /// Returns the delta that undoes this one.
    #[inline]
    pub const fn inverse(self) -> Self {
        Delta::new(-self.rank, -self.file)
    }

    /// Returns true if this delta is one of the eight knight shapes.
    #[inline]
    pub const fn is_knight_move(self) -> bool {
        let r = self.rank.unsigned_abs();
        let f = self.file.unsigned_abs();
        (r == 1 && f == 2) || (r == 2 && f == 1)
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+}, {:+})", self.rank, self.file)
    }
}

/// The eight knight move shapes.
///
/// Successors are always generated in this order, which decides which of
/// several equally short paths a search returns.
pub const KNIGHT_DELTAS: [Delta; 8] = [
    Delta::new(1, 2),
    Delta::new(2, 1),
    Delta::new(2, -1),
    Delta::new(1, -2),
    Delta::new(-2, -1),
    Delta::new(-1, -2),
    Delta::new(-2, 1),
    Delta::new(-1, 2),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn knight_deltas_are_distinct_knight_shapes() {
        let unique: HashSet<Delta> = KNIGHT_DELTAS.iter().copied().collect();
        assert_eq!(unique.len(), 8);
        assert!(KNIGHT_DELTAS.iter().all(|d| d.is_knight_move()));
    }

    #[test]
    fn knight_deltas_are_closed_under_inverse() {
        for delta in KNIGHT_DELTAS {
            assert!(KNIGHT_DELTAS.contains(&delta.inverse()));
        }
    }

    #[test]
    fn non_knight_shapes() {
        assert!(!Delta::new(0, 0).is_knight_move());
        assert!(!Delta::new(1, 1).is_knight_move());
        assert!(!Delta::new(2, 2).is_knight_move());
        assert!(!Delta::new(0, 3).is_knight_move());
        assert!(!Delta::new(1, 3).is_knight_move());
    }

    #[test]
    fn delta_display() {
        assert_eq!(Delta::new(1, -2).to_string(), "(+1, -2)");
        assert_eq!(Delta::new(-2, 1).to_string(), "(-2, +1)");
    }
}

//! Board coordinates in algebraic notation.

use crate::Delta;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when building or moving a [`Position`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("invalid position '{0}': expected a rank letter A-H followed by a file digit 1-8")]
    Malformed(String),

    #[error("invalid rank '{0}': expected a letter from A to H")]
    InvalidRank(char),

    #[error("invalid file '{0}': expected a digit from 1 to 8")]
    InvalidFile(char),

    #[error("invalid move: {delta} from {position} leaves the board")]
    InvalidMove { position: Position, delta: Delta },
}

impl PositionError {
    /// Returns true for errors raised while parsing input, as opposed to
    /// applying a move.
    pub fn is_invalid_position(&self) -> bool {
        !matches!(self, PositionError::InvalidMove { .. })
    }
}

/// A rank on the board, lettered A to H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl Rank {
    /// All ranks in order.
    pub const ALL: [Rank; 8] = [
        Rank::A,
        Rank::B,
        Rank::C,
        Rank::D,
        Rank::E,
        Rank::F,
        Rank::G,
        Rank::H,
    ];

    /// Creates a rank from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Rank::A),
            1 => Some(Rank::B),
            2 => Some(Rank::C),
            3 => Some(Rank::D),
            4 => Some(Rank::E),
            5 => Some(Rank::F),
            6 => Some(Rank::G),
            7 => Some(Rank::H),
            _ => None,
        }
    }

    /// Creates a rank from a character ('a'-'h' or 'A'-'H').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Rank::A),
            'B' => Some(Rank::B),
            'C' => Some(Rank::C),
            'D' => Some(Rank::D),
            'E' => Some(Rank::E),
            'F' => Some(Rank::F),
            'G' => Some(Rank::G),
            'H' => Some(Rank::H),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the uppercase letter.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A file on the board, numbered 1 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    F1 = 0,
    F2 = 1,
    F3 = 2,
    F4 = 3,
    F5 = 4,
    F6 = 5,
    F7 = 6,
    F8 = 7,
}

impl File {
    /// All files in order.
    pub const ALL: [File; 8] = [
        File::F1,
        File::F2,
        File::F3,
        File::F4,
        File::F5,
        File::F6,
        File::F7,
        File::F8,
    ];

    /// Creates a file from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(File::F1),
            1 => Some(File::F2),
            2 => Some(File::F3),
            3 => Some(File::F4),
            4 => Some(File::F5),
            5 => Some(File::F6),
            6 => Some(File::F7),
            7 => Some(File::F8),
            _ => None,
        }
    }

    /// Creates a file from a character ('1'-'8').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(File::F1),
            '2' => Some(File::F2),
            '3' => Some(File::F3),
            '4' => Some(File::F4),
            '5' => Some(File::F5),
            '6' => Some(File::F6),
            '7' => Some(File::F7),
            '8' => Some(File::F8),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the digit.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A square on the board, indexed 0-63.
///
/// Squares are indexed file by file:
/// - A1 = 0, B1 = 1, ..., H1 = 7
/// - A2 = 8, ..., H8 = 63
///
/// Ordering follows the index, so it is a stable sort key.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u8);

impl Position {
    /// Number of squares on the board.
    pub const COUNT: usize = 64;

    /// Creates a position from rank and file.
    #[inline]
    pub const fn new(rank: Rank, file: File) -> Self {
        Position(file.index() * 8 + rank.index())
    }

    /// Creates a position from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Position(index))
        } else {
            None
        }
    }

    /// Parses a position from algebraic notation (e.g., "e4" or "E4").
    pub fn from_algebraic(s: &str) -> Result<Self, PositionError> {
        let mut chars = s.chars();
        let (r, f) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(f), None) => (r, f),
            _ => return Err(PositionError::Malformed(s.to_string())),
        };
        if !r.is_ascii_alphanumeric() || !f.is_ascii_alphanumeric() {
            return Err(PositionError::Malformed(s.to_string()));
        }

        let rank = Rank::from_char(r).ok_or(PositionError::InvalidRank(r))?;
        let file = File::from_char(f).ok_or(PositionError::InvalidFile(f))?;
        Ok(Position::new(rank, file))
    }

    /// Iterates over every square, A1 through H8.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..64u8).map(Position)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the rank of this position.
    #[inline]
    pub const fn rank(self) -> Rank {
        match Rank::from_index(self.0 % 8) {
            Some(r) => r,
            None => unreachable!(),
        }
    }

    /// Returns the file of this position.
    #[inline]
    pub const fn file(self) -> File {
        match File::from_index(self.0 / 8) {
            Some(f) => f,
            None => unreachable!(),
        }
    }

    /// Returns the position reached by `delta`, or `None` if it leaves the board.
    #[inline]
    pub const fn offset(self, delta: Delta) -> Option<Self> {
        let (rank, file) = match (
            ((self.0 % 8) as i8).checked_add(delta.rank),
            ((self.0 / 8) as i8).checked_add(delta.file),
        ) {
            (Some(rank), Some(file)) => (rank, file),
            _ => return None,
        };
        if rank < 0 || rank > 7 || file < 0 || file > 7 {
            return None;
        }
        Some(Position(file as u8 * 8 + rank as u8))
    }

    /// Returns true if applying `delta` keeps the position on the board.
    #[inline]
    pub const fn is_valid_move(self, delta: Delta) -> bool {
        self.offset(delta).is_some()
    }

    /// Applies `delta`, failing if the result would be off the board.
    pub fn apply_move(self, delta: Delta) -> Result<Self, PositionError> {
        self.offset(delta)
            .ok_or(PositionError::InvalidMove {
                position: self,
                delta,
            })
    }

    /// Returns the algebraic notation for this position.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.rank(), self.file())
    }

    // Corners
    pub const A1: Position = Position(0);
    pub const H1: Position = Position(7);
    pub const A8: Position = Position(56);
    pub const H8: Position = Position(63);
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_algebraic(s)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self.to_algebraic())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.file())
    }
}

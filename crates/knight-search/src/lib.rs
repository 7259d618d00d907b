//! Shortest path search for the knight's travail.
//!
//! This crate provides:
//! - [`ShortestPathSearch`] - breadth-first search over any [`SearchProblem`]
//! - [`FnProblem`] - a [`SearchProblem`] assembled from two closures
//! - [`MoveGenerator`] and [`MoveTable`] - knight successor generation
//! - [`KnightsTravail`] - the knight's goal test and successor binding
//! - [`DistanceTable`] - move distances from one square to all others
//!
//! # Example
//!
//! ```
//! use knight_core::Position;
//! use knight_search::{KnightsTravail, ShortestPathSearch};
//!
//! let start: Position = "a1".parse().unwrap();
//! let goal: Position = "b4".parse().unwrap();
//!
//! let problem = KnightsTravail::new(goal);
//! let path = ShortestPathSearch::new(start, &problem).find_shortest_path();
//! let squares: Vec<String> = path.iter().map(|p| p.to_algebraic()).collect();
//! assert_eq!(squares, ["A1", "C2", "B4"]);
//! ```

mod distance;
pub mod movegen;
mod problem;
pub mod search;

pub use distance::DistanceTable;
pub use movegen::{MoveGenerator, MoveList, MoveTable};
pub use problem::{knights_travail, KnightsTravail};
pub use search::{
    shortest_path, FnProblem, SearchOutcome, SearchProblem, SearchStats, ShortestPathSearch,
};

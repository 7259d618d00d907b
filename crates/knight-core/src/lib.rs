//! Core types for the knight's travail.
//!
//! This crate provides the board vocabulary shared by the search crates:
//! - [`Position`], [`Rank`], and [`File`] for board coordinates
//! - [`Delta`] and [`KNIGHT_DELTAS`] for move offsets
//! - [`PositionError`] for parse and move failures

mod delta;
mod position;

pub use delta::{Delta, KNIGHT_DELTAS};
pub use position::{File, Position, PositionError, Rank};

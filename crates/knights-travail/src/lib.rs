//! Knight's Travail - shortest knight paths from the command line.
//!
//! # Modules
//!
//! - [`config`] - TOML configuration for output settings
//! - [`prompt`] - Interactive reading of squares
//! - [`render`] - Text and JSON output of paths and distance maps

pub mod config;
pub mod prompt;
pub mod render;

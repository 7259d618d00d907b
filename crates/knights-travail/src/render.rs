//! Formatting of search results for stdout.

use crate::config::{OutputFormat, TravailConfig};
use knight_core::{File, Position, Rank};
use knight_search::DistanceTable;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

/// JSON representation of a path search.
#[derive(Debug, Serialize)]
struct PathJson {
    start: String,
    end: String,
    /// `None` when no path exists.
    moves: Option<usize>,
    path: Vec<String>,
}

/// JSON representation of a distance map.
#[derive(Debug, Serialize)]
struct DistancesJson {
    origin: String,
    max_distance: u8,
    distances: BTreeMap<String, Option<u8>>,
}

/// Joins the squares of `path` with `separator`.
///
/// An empty path renders as an empty string.
pub fn format_path(path: &[Position], separator: &str) -> String {
    path.iter()
        .map(|p| p.to_algebraic())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Renders a path search result according to `config`.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn render_path(
    start: Position,
    end: Position,
    path: &[Position],
    config: &TravailConfig,
) -> Result<String, serde_json::Error> {
    let moves = path.len().checked_sub(1);
    match config.format {
        OutputFormat::Text => {
            let mut out = format_path(path, &config.separator);
            if config.show_move_count {
                if let Some(moves) = moves {
                    let plural = if moves == 1 { "" } else { "s" };
                    let _ = write!(out, " ({moves} move{plural})");
                }
            }
            Ok(out)
        }
        OutputFormat::Json => serde_json::to_string(&PathJson {
            start: start.to_algebraic(),
            end: end.to_algebraic(),
            moves,
            path: path.iter().map(|p| p.to_algebraic()).collect(),
        }),
    }
}

/// Renders a distance map according to `format`.
///
/// The text grid has file 8 at the top and rank A on the left. Unreachable
/// squares are shown as `.`.
pub fn render_distances(
    table: &DistanceTable,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(distance_grid(table)),
        OutputFormat::Json => serde_json::to_string(&DistancesJson {
            origin: table.origin().to_algebraic(),
            max_distance: table.max_distance(),
            distances: Position::all()
                .map(|p| (p.to_algebraic(), table.distance(p)))
                .collect(),
        }),
    }
}

fn distance_grid(table: &DistanceTable) -> String {
    let mut out = String::from(" ");
    for rank in Rank::ALL {
        let _ = write!(out, " {rank}");
    }
    for file in File::ALL.iter().rev() {
        let _ = write!(out, "\n{file}");
        for rank in Rank::ALL {
            match table.distance(Position::new(rank, *file)) {
                Some(d) => {
                    let _ = write!(out, " {d}");
                }
                None => out.push_str(" ."),
            }
        }
    }
    out
}

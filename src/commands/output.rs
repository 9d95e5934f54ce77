//! Shared output helpers for commands

use serde::Serialize;

use roadsearch_core::error::Result;
use roadsearch_core::graph::Coord;

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print rendered text that already ends in a newline
pub fn print_block(text: &str) {
    print!("{}", text);
}

pub fn format_coord(coord: &Coord) -> String {
    format!("{:.6},{:.6}", coord.lat, coord.lon)
}

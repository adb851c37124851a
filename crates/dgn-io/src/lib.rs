//! # dgn-io: Graph File I/O
//!
//! Reads and writes the line-oriented text format used to persist a
//! [`dgn_core::Network`]:
//!
//! ```text
//! 7                      graph-type tag (informational)
//! 3                      city count N
//! 0 "Recife" "120.5"     N city lines: <id> "<name>" "<weight>"
//! 1 "Olinda" "40"
//! 2 "Paulista" "33.25"
//! 2                      link count M
//! 0 1 3.5                M link lines: <src> <dst> <weight>
//! 1 2 1.25
//! ```
//!
//! ## Loading
//!
//! [`importers::load_graph`] parses into a fresh network and only hands it
//! back once every line has been accepted, so a malformed file can never leave
//! a half-built graph behind. Errors carry the 1-based line number.
//!
//! ## Saving
//!
//! [`exporters::save_graph`] writes cities in ascending id order and links in
//! (source, destination) order. Weights use the shortest representation that
//! parses back to the same `f64`, so a save/load cycle is lossless. The file
//! is written to a temporary sibling and renamed over the target. A city name
//! holding a line break cannot be represented, so such a network is refused
//! before anything touches the disk.

pub mod exporters;
pub mod importers;

pub use exporters::{check_writable, save_graph, to_graph_string, write_graph, GRAPH_TYPE_TAG};
pub use importers::{load_graph, parse_graph_str, read_graph_text, ParsedGraph};

//! Error types shared by every dgn crate
//!
//! [`DgnError`] covers malformed graph files, references to absent cities or
//! links, unreachable path queries, unsavable names and plain I/O failures. Library crates
//! return [`DgnResult`]; the CLI wraps these in `anyhow` at its boundary.
//!
//! # Example
//!
//! ```ignore
//! use dgn_core::{DgnError, DgnResult};
//!
//! fn drop_link(network: &mut Network) -> DgnResult<()> {
//!     network.remove_link(CityId::new(0), CityId::new(1))?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::CityId;

/// Unified error type for graph store operations.
#[derive(Error, Debug)]
pub enum DgnError {
    /// Malformed graph file; `line` is 1-based
    #[error("Format error on line {line}: {message}")]
    Format { line: usize, message: String },

    /// Operation referenced a city or link that does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// No directed path between the requested pair
    #[error("No path from {src} to {dst}")]
    PathNotFound { src: CityId, dst: CityId },

    /// Shortest-path search needs finite, non-negative link costs
    #[error("Link {src} -> {dst} has weight {weight}; shortest path needs finite non-negative costs")]
    NegativeWeight {
        src: CityId,
        dst: CityId,
        weight: f64,
    },

    /// All-pairs distances are undefined
    #[error("Network contains a negative-weight cycle")]
    NegativeCycle,

    /// I/O errors (file open, read, write)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// City name that the line-oriented file format cannot hold
    #[error("City {city} has a name with a line break, which a graph file cannot store: {name:?}")]
    InvalidName { city: CityId, name: String },
}

/// Convenience type alias for Results using DgnError.
pub type DgnResult<T> = Result<T, DgnError>;

impl DgnError {
    pub fn format(line: usize, message: impl Into<String>) -> Self {
        DgnError::Format {
            line,
            message: message.into(),
        }
    }

    pub fn city_not_found(id: CityId) -> Self {
        DgnError::NotFound(format!("city {id}"))
    }

    pub fn link_not_found(src: CityId, dst: CityId) -> Self {
        DgnError::NotFound(format!("link {src} -> {dst}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_display_names_line() {
        let err = DgnError::format(4, "expected 3 fields");
        assert_eq!(err.to_string(), "Format error on line 4: expected 3 fields");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DgnError = io_err.into();
        assert!(matches!(err, DgnError::Io(_)));
    }

    #[test]
    fn test_not_found_helpers() {
        let err = DgnError::link_not_found(CityId::new(2), CityId::new(0));
        assert!(err.to_string().contains("link 2 -> 0"));
        let err = DgnError::city_not_found(CityId::new(9));
        assert!(err.to_string().contains("city 9"));
    }

    #[test]
    fn test_invalid_name_display_escapes_line_break() {
        let err = DgnError::InvalidName {
            city: CityId::new(3),
            name: "Boa\nVista".to_string(),
        };
        assert!(err.to_string().contains("City 3"));
        assert!(err.to_string().contains("\"Boa\\nVista\""));
    }

    #[test]
    fn test_question_mark_operator() {
        fn inner() -> DgnResult<()> {
            Err(DgnError::PathNotFound {
                src: CityId::new(0),
                dst: CityId::new(1),
            })
        }

        fn outer() -> DgnResult<()> {
            inner()?;
            Ok(())
        }

        assert!(matches!(outer(), Err(DgnError::PathNotFound { .. })));
    }
}

//! Input validation errors
//!
//! All of these are raised before a run is generated. None are fatal: the
//! UI reports the message and keeps the current visualization.

use thiserror::Error;

/// Errors produced while parsing the input line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A non-empty segment is not an integer
    #[error("\"{segment}\" is not a valid number")]
    Parse { segment: String },

    /// Nothing left after dropping empty segments
    #[error("Please enter at least one number")]
    Empty,

    /// More numbers than the visualization can show
    #[error("Please enter no more than {max} numbers for optimal visualization (got {count})")]
    TooManyElements { count: usize, max: usize },
}

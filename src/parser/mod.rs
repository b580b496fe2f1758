//! Input parsing and validation
//!
//! Turns the free-text input line into a bounded list of integers:
//! - [`input`]: comma-separated parsing, defaults, and formatting back to text
//! - [`errors`]: [`InputError`] taxonomy
//!
//! # Input Format
//!
//! Numbers separated by commas. Whitespace around each number is ignored and
//! empty segments (`"3, , 2"`) are skipped. Between 1 and [`MAX_ELEMENTS`]
//! numbers are accepted.

pub mod errors;
pub mod input;

pub use errors::InputError;
pub use input::{
    format_values, parse_input, validate, DEFAULT_INPUT, DEFAULT_VALUES, MAX_ELEMENTS,
};

//! Selection sort step generator
//!
//! This module turns an input sequence into the full, immutable list of
//! [`Step`](crate::snapshot::Step)s the UI plays back:
//! - [`engine`]: the selection sort walk and snapshot capture
//!
//! # Execution Model
//!
//! The sort runs to completion in one call. A snapshot of the working array,
//! tagged with per-position states, is recorded at every moment worth showing:
//! iteration start, each comparison, each new minimum, each swap, and each
//! settled position. Comparison and swap totals are returned alongside.
//!
//! The generator performs no validation; input bounds are checked by
//! [`parser`](crate::parser) before a run is ever generated.

pub mod engine;

pub use engine::generate;

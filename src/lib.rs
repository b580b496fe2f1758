//! # Introduction
//!
//! sortty generates every intermediate state of a selection sort over a small
//! list of integers and plays the result back step by step, forward and
//! backward, in a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input text → Parser → Vec<i64> → Sorter → Steps → Cursor → TUI
//! ```
//!
//! 1. [`parser`]: splits the comma-separated input line and validates it
//!    (1 to 20 integers).
//! 2. [`sorter`]: runs selection sort to completion, capturing a
//!    [`snapshot::Step`] at every comparison, new minimum, swap, and settled
//!    position, plus comparison/swap totals.
//! 3. [`snapshot`]: the step data model shared by every layer.
//! 4. [`playback`]: the [`playback::Cursor`]: position, play/pause/stop,
//!    speed, and the single pending auto-advance tick.
//! 5. [`config`]: persisted defaults (input, speed, poll rate).
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod config;
pub mod parser;
pub mod playback;
pub mod snapshot;
pub mod sorter;
pub mod ui;

pub use config::Config;
pub use playback::Cursor;

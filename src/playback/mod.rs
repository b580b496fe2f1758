//! Playback over a generated run
//!
//! - [`cursor`]: [`Cursor`], the position/play state over a [`SortRun`](crate::snapshot::SortRun)
//! - [`speed`]: [`Speed`] levels and [`TickSchedule`], the single pending auto-advance
//!
//! # Timing Model
//!
//! The cursor never sleeps or spawns anything. While playing it owns at most
//! one [`TickSchedule`] holding the instant the next auto-advance is due. The
//! host event loop calls [`Cursor::poll`] with the current time; a due tick
//! advances one step and schedules the next one. Pausing, stopping, loading,
//! and reaching the last step drop the schedule.

pub mod cursor;
pub mod speed;

pub use cursor::Cursor;
pub use speed::{Speed, TickSchedule};

//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility for maintainability.
//!
//! # Pane Modules
//!
//! - [`header`]: Title and step counter
//! - [`input`]: The editable comma-separated input line
//! - [`bars`]: One bar per array element, colored by its state, plus a legend
//! - [`step`]: Heading and description of the current step
//! - [`stats`]: Comparison/swap totals and the current array state
//! - [`explanation`]: Static description of selection sort
//! - [`status`]: Status bar with keybindings and playback state
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*` function that reads from the
//! current [`Step`](crate::snapshot::Step) and never mutates playback state.

pub mod bars;
pub mod explanation;
pub mod header;
pub mod input;
pub mod stats;
pub mod status;
pub mod step;

// Re-export render functions for convenience
pub use bars::render_bars_pane;
pub use explanation::render_explanation_pane;
pub use header::render_header;
pub use input::render_input_pane;
pub use stats::render_stats_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use step::render_step_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block with the shared title/border styling
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

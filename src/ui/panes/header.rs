//! Title bar with the step counter

use super::pane_block;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the header. Steps are numbered from 0, so the last one is `total - 1`.
pub fn render_header(frame: &mut Frame, area: Rect, current_step: usize, total_steps: usize) {
    let block = pane_block("", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    let title = Line::from(vec![
        Span::styled(
            " Selection Sort Visualizer ",
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Interactive algorithm learning tool",
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), halves[0]);

    let counter = Line::from(vec![
        Span::styled(
            format!("Step {} ", current_step),
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("of {} total ", total_steps.saturating_sub(1)),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ]);
    frame.render_widget(Paragraph::new(counter).alignment(Alignment::Right), halves[1]);
}

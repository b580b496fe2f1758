//! Current step description

use super::pane_block;
use crate::snapshot::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Padding, Paragraph, Wrap},
    Frame,
};

pub fn render_step_pane(frame: &mut Frame, area: Rect, position: usize, step: &Step) {
    let block = pane_block(" Current Step ", false).padding(Padding::new(1, 1, 0, 0));

    let lines = vec![
        Line::from(Span::styled(
            format!("Step {}: {}", position, step.title()),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            step.description.clone(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

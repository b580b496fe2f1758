//! Results and statistics pane

use super::pane_block;
use crate::playback::Speed;
use crate::snapshot::{RunStats, Step};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Padding, Paragraph, Wrap},
    Frame,
};

/// Render run totals and the array as it stands at the current step
pub fn render_stats_pane(frame: &mut Frame, area: Rect, stats: RunStats, speed: Speed, step: &Step) {
    let block = pane_block(" Results & Statistics ", false).padding(Padding::new(1, 1, 0, 0));

    let label = Style::default().fg(DEFAULT_THEME.comment);
    let number = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);

    let mut array_spans = Vec::new();
    for element in &step.array {
        array_spans.push(Span::styled(
            format!(" {} ", element.value),
            Style::default()
                .bg(DEFAULT_THEME.state_color(element.state))
                .fg(Color::Black),
        ));
        array_spans.push(Span::raw(" "));
    }

    let lines = vec![
        Line::from(vec![
            Span::styled("Total Comparisons  ", label),
            Span::styled(stats.total_comparisons.to_string(), number(DEFAULT_THEME.primary)),
        ]),
        Line::from(vec![
            Span::styled("Total Swaps        ", label),
            Span::styled(stats.total_swaps.to_string(), number(DEFAULT_THEME.success)),
        ]),
        Line::from(vec![
            Span::styled("Time Complexity    ", label),
            Span::styled("O(n²)", number(DEFAULT_THEME.secondary)),
        ]),
        Line::from(vec![
            Span::styled("Speed              ", label),
            Span::styled(
                format!("{} ({}ms/step)", speed.level(), speed.delay().as_millis()),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("Current Array State:", label)),
        Line::from(array_spans),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

//! Input line rendering

use super::pane_block;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the comma-separated input line. While editing, a block cursor is
/// drawn after the text and the border is highlighted.
pub fn render_input_pane(frame: &mut Frame, area: Rect, text: &str, is_editing: bool) {
    let title = if is_editing {
        " Input Data (Enter to load, Esc to cancel) "
    } else {
        " Input Data (i to edit) "
    };
    let block = pane_block(title, is_editing);

    let mut spans = vec![Span::styled(
        text.to_string(),
        Style::default().fg(DEFAULT_THEME.fg),
    )];
    if is_editing {
        spans.push(Span::styled(
            " ",
            Style::default()
                .bg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    // Keep the end of long input visible
    let inner_width = area.width.saturating_sub(2) as usize;
    let text_width = text.chars().count() + usize::from(is_editing);
    let scroll = text_width.saturating_sub(inner_width) as u16;

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .scroll((0, scroll));
    frame.render_widget(paragraph, area);
}

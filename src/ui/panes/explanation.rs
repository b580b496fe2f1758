//! Static explanation of selection sort

use super::pane_block;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Padding, Paragraph, Wrap},
    Frame,
};

const STEPS: [&str; 6] = [
    "Divide the array into sorted (left) and unsorted (right) sections",
    "Initially, sorted section is empty, unsorted section contains all elements",
    "Find the smallest element in the unsorted section",
    "Swap it with the first element of the unsorted section",
    "Move the boundary between sorted and unsorted sections one position right",
    "Repeat steps 3-5 until all elements are sorted",
];

const ADVANTAGES: [&str; 3] = [
    "Simple to understand and implement",
    "In-place sorting (no extra memory needed)",
    "Consistent performance regardless of input",
];

const DISADVANTAGES: [&str; 3] = [
    "O(n²) time complexity",
    "Not stable (doesn't preserve relative order)",
    "More swaps compared to insertion sort",
];

pub fn render_explanation_pane(frame: &mut Frame, area: Rect) {
    let block = pane_block(" Algorithm Explanation ", false).padding(Padding::new(1, 1, 0, 0));

    let heading = |text: &'static str, style: Style| {
        Line::from(Span::styled(text, style.add_modifier(Modifier::BOLD)))
    };
    let body = Style::default().fg(DEFAULT_THEME.fg);

    let mut lines = vec![heading(
        "Selection Sort Steps:",
        Style::default().fg(DEFAULT_THEME.primary),
    )];
    lines.extend(
        STEPS
            .iter()
            .enumerate()
            .map(|(i, text)| Line::from(Span::styled(format!("{}. {}", i + 1, text), body))),
    );

    lines.push(Line::from(""));
    lines.push(heading(
        "Advantages",
        Style::default().fg(DEFAULT_THEME.success),
    ));
    lines.extend(
        ADVANTAGES
            .iter()
            .map(|text| Line::from(Span::styled(format!("• {}", text), body))),
    );

    lines.push(Line::from(""));
    lines.push(heading(
        "Disadvantages",
        Style::default().fg(DEFAULT_THEME.secondary),
    ));
    lines.extend(
        DISADVANTAGES
            .iter()
            .map(|text| Line::from(Span::styled(format!("• {}", text), body))),
    );

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

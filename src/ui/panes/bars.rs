//! Array visualization pane
//!
//! Draws one bar per element of the current step. Bar color comes from the
//! element's [`ElementState`]; the bar's value label is the element value and
//! the label under it is its index.
//!
//! # Scaling
//!
//! Heights are mapped into `MIN_HEIGHT..=MAX_HEIGHT` relative to the smallest
//! and largest value on screen (with zero always in range), so negative values
//! still get a visible bar and the smallest bar never disappears.

use super::pane_block;
use crate::snapshot::{ElementState, Step};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};

const MIN_HEIGHT: u64 = 60;
const MAX_HEIGHT: u64 = 200;
const BAR_GAP: u16 = 1;
const MAX_BAR_WIDTH: u16 = 7;

/// Map `value` into `MIN_HEIGHT..=MAX_HEIGHT` over the range `[lo, hi]`
pub(crate) fn bar_height(value: i64, lo: i64, hi: i64) -> u64 {
    // i128 so that spans like i64::MIN..=i64::MAX cannot overflow
    let lo = i128::from(lo.min(0));
    let hi = i128::from(hi.max(0));
    if hi == lo {
        return MAX_HEIGHT;
    }
    let span = (hi - lo) as f64;
    let ratio = (i128::from(value).clamp(lo, hi) - lo) as f64 / span;
    MIN_HEIGHT + (ratio * (MAX_HEIGHT - MIN_HEIGHT) as f64).round() as u64
}

/// Widest bar that still fits `count` bars into `width` columns
pub(crate) fn bar_width(width: u16, count: usize) -> u16 {
    if count == 0 {
        return 1;
    }
    let count = count as u16;
    let gaps = BAR_GAP * count.saturating_sub(1);
    (width.saturating_sub(gaps) / count).clamp(1, MAX_BAR_WIDTH)
}

/// Render the bars pane for one step
pub fn render_bars_pane(frame: &mut Frame, area: Rect, step: &Step) {
    let block = pane_block(" Algorithm Visualization ", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let lo = step.array.iter().map(|e| e.value).min().unwrap_or(0);
    let hi = step.array.iter().map(|e| e.value).max().unwrap_or(0);

    let bars: Vec<Bar> = step
        .array
        .iter()
        .map(|element| {
            let color = DEFAULT_THEME.state_color(element.state);
            Bar::default()
                .value(bar_height(element.value, lo, hi))
                .text_value(element.value.to_string())
                .label(Line::from(element.index.to_string()))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .bg(color)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let width = bar_width(rows[0].width, bars.len());
    let chart_width = (width + BAR_GAP) * bars.len() as u16;
    let chart_area = centered(rows[0], chart_width);

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(width)
        .bar_gap(BAR_GAP)
        .max(MAX_HEIGHT);
    frame.render_widget(chart, chart_area);

    frame.render_widget(
        Paragraph::new(legend()).alignment(Alignment::Center),
        rows[1],
    );
}

fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

fn legend() -> Line<'static> {
    let mut spans = Vec::new();
    for state in ElementState::ALL {
        spans.push(Span::styled(
            "■ ",
            Style::default().fg(DEFAULT_THEME.state_color(state)),
        ));
        spans.push(Span::styled(
            format!("{}  ", state.label()),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heights_span_min_to_max() {
        assert_eq!(bar_height(10, 1, 10), MAX_HEIGHT);
        assert_eq!(bar_height(0, 1, 10), MIN_HEIGHT);
        assert_eq!(bar_height(5, 0, 10), 130);
    }

    #[test]
    fn negative_values_get_visible_bars() {
        assert_eq!(bar_height(-5, -5, 5), MIN_HEIGHT);
        assert_eq!(bar_height(5, -5, 5), MAX_HEIGHT);
        assert!(bar_height(-5, -5, -1) >= MIN_HEIGHT);
    }

    #[test]
    fn uniform_values_fill_the_pane() {
        assert_eq!(bar_height(0, 0, 0), MAX_HEIGHT);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        assert_eq!(bar_height(i64::MIN, i64::MIN, i64::MAX), MIN_HEIGHT);
        assert_eq!(bar_height(i64::MAX, i64::MIN, i64::MAX), MAX_HEIGHT);
        assert_eq!(bar_height(i64::MAX, 0, i64::MAX), MAX_HEIGHT);
        assert_eq!(bar_height(i64::MIN, i64::MIN, 0), MIN_HEIGHT);
        let mid = bar_height(0, i64::MIN, i64::MAX);
        assert!(mid > MIN_HEIGHT && mid < MAX_HEIGHT);
    }

    #[test]
    fn bar_width_fits_area() {
        assert_eq!(bar_width(100, 10), 7);
        assert_eq!(bar_width(39, 20), 1);
        assert_eq!(bar_width(59, 20), 2);
        assert_eq!(bar_width(0, 3), 1);
    }
}

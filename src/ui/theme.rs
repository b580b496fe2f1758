use crate::snapshot::ElementState;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub sorted: Color,
    pub unsorted: Color,
    pub comparing: Color,
    pub swapping: Color,
    pub minimum: Color,
}

impl Theme {
    /// Bar color for an element state
    pub fn state_color(&self, state: ElementState) -> Color {
        match state {
            ElementState::Sorted => self.sorted,
            ElementState::Unsorted => self.unsorted,
            ElementState::Comparing => self.comparing,
            ElementState::Swapping => self.swapping,
            ElementState::Minimum => self.minimum,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    sorted: Color::Rgb(16, 185, 129),          // Emerald
    unsorted: Color::Rgb(203, 213, 225),       // Slate
    comparing: Color::Rgb(245, 158, 11),       // Amber
    swapping: Color::Rgb(239, 68, 68),         // Red
    minimum: Color::Rgb(59, 130, 246),         // Blue
};

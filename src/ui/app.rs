//! Main TUI application state and logic

use crate::parser::format_values;
use crate::playback::Cursor;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Whether keys drive playback or edit the input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// The main application state
pub struct App {
    /// Playback cursor over the current run
    pub cursor: Cursor,

    /// Text of the input line
    pub input_line: String,

    pub input_mode: InputMode,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports an error
    pub status_is_error: bool,

    /// Upper bound on how long to wait for a key event
    pub tick_rate: Duration,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around the given cursor
    pub fn new(cursor: Cursor, tick_rate: Duration) -> Self {
        let input_line = format_values(cursor.input());
        App {
            cursor,
            input_line,
            input_mode: InputMode::Normal,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            tick_rate,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.cursor.poll(Instant::now()) {
                if self.cursor.is_playing() {
                    self.set_status("Playing...");
                } else {
                    self.set_status("Playback complete");
                }
            }

            // Wake up no later than the next scheduled step
            let timeout = self
                .cursor
                .next_due()
                .map(|due| due.saturating_duration_since(Instant::now()).min(self.tick_rate))
                .unwrap_or(self.tick_rate);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Header, input line, panes, status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        // Split into 2 columns
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[2]);

        // Left column: Bars (top) | Step (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(5)])
            .split(columns[0]);

        // Right column: Statistics (top) | Explanation (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(10), Constraint::Min(0)])
            .split(columns[1]);

        super::panes::render_header(
            frame,
            main_chunks[0],
            self.cursor.position(),
            self.cursor.len(),
        );

        super::panes::render_input_pane(
            frame,
            main_chunks[1],
            &self.input_line,
            self.input_mode == InputMode::Editing,
        );

        if let Some(step) = self.cursor.current_step() {
            super::panes::render_bars_pane(frame, left_rows[0], step);
            super::panes::render_step_pane(frame, left_rows[1], self.cursor.position(), step);
            super::panes::render_stats_pane(
                frame,
                right_rows[0],
                self.cursor.stats(),
                self.cursor.speed(),
                step,
            );
        }

        super::panes::render_explanation_pane(frame, right_rows[1]);

        super::panes::render_status_bar(
            frame,
            main_chunks[3],
            super::panes::StatusRenderData {
                message: &self.status_message,
                is_error: self.status_is_error,
                current_step: self.cursor.position(),
                total_steps: self.cursor.len(),
                is_playing: self.cursor.is_playing(),
                is_editing: self.input_mode == InputMode::Editing,
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Editing => self.handle_editing_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.cursor.pause();
                if self.cursor.step_backward() {
                    self.set_status("Stepped backward");
                } else {
                    self.set_status("Already at the first step");
                }
            }
            KeyCode::Right => {
                self.cursor.pause();
                if self.cursor.step_forward() {
                    self.set_status("Stepped forward");
                } else {
                    self.set_status("Already at the last step");
                }
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Char('s') => {
                self.cursor.stop();
                self.set_status("Stopped");
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.cursor.set_speed(self.cursor.speed().faster().level());
                self.set_status(format!("Speed: {}", self.cursor.speed().level()));
            }
            KeyCode::Char('-') => {
                self.cursor.set_speed(self.cursor.speed().slower().level());
                self.set_status(format!("Speed: {}", self.cursor.speed().level()));
            }
            KeyCode::Enter => {
                self.cursor.jump_to_end();
                self.set_status("Jumped to end");
            }
            KeyCode::Char('r') => {
                self.cursor.reset();
                self.input_line = format_values(self.cursor.input());
                self.set_status("Reset to default input");
            }
            KeyCode::Char('i') => {
                self.cursor.pause();
                self.input_mode = InputMode::Editing;
                self.set_status("Editing input");
            }
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                self.load_input();
            }
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.input_line = format_values(self.cursor.input());
                self.set_status("Edit cancelled");
            }
            KeyCode::Backspace => {
                self.input_line.pop();
            }
            KeyCode::Char(c) => {
                self.input_line.push(c);
            }
            _ => {}
        }
    }

    fn toggle_play(&mut self) {
        if self.cursor.is_playing() {
            self.cursor.pause();
            self.set_status("Paused");
        } else if self.cursor.is_at_end() {
            self.set_status("Already at the last step");
        } else {
            self.cursor.play();
            self.set_status("Playing...");
        }
    }

    /// Load the input line; on failure the current run stays on screen
    fn load_input(&mut self) {
        match self.cursor.load(&self.input_line) {
            Ok(()) => {
                self.input_line = format_values(self.cursor.input());
                self.set_status(format!("Loaded {} numbers", self.cursor.input().len()));
            }
            Err(e) => {
                tracing::warn!(error = %e, "rejected input");
                self.status_message = e.to_string();
                self.status_is_error = true;
            }
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app() -> App {
        App::new(Cursor::with_default(), Duration::from_millis(50))
    }

    fn screen_text(app: &App) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn arrows_step_through_run() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor.position(), 1);
        assert_eq!(app.status_message, "Stepped backward");
    }

    #[test]
    fn editing_and_loading_input() {
        let mut app = app();
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.input_mode, InputMode::Editing);

        app.input_line.clear();
        type_text(&mut app, "3, , 2");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.cursor.input(), &[3, 2]);
        assert_eq!(app.input_line, "3, 2");
        assert!(!app.status_is_error);
    }

    #[test]
    fn invalid_input_keeps_visualization() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, ", abc");
        press(&mut app, KeyCode::Enter);

        assert!(app.status_is_error);
        assert!(app.status_message.contains("\"abc\""));
        assert_eq!(app.cursor.position(), 1);
        assert_eq!(app.cursor.input().len(), 10);
    }

    #[test]
    fn escape_restores_input_line() {
        let mut app = app();
        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, "99");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_line, "7, 8, 5, 10, 6, 3, 2, 4, 1, 9");
    }

    #[test]
    fn space_toggles_playback() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        assert!(app.cursor.is_playing());
        app.last_space_press = Instant::now() - Duration::from_secs(1);
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.cursor.is_playing());
    }

    #[test]
    fn speed_keys_saturate() {
        let mut app = app();
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('+'));
        }
        assert_eq!(app.cursor.speed().level(), 5);
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('-'));
        }
        assert_eq!(app.cursor.speed().level(), 1);
    }

    #[test]
    fn render_shows_panes() {
        let mut app = app();
        let text = screen_text(&app);
        assert!(text.contains("Selection Sort Visualizer"));
        assert!(text.contains("Initial array"));
        assert!(text.contains("Total Comparisons"));

        press(&mut app, KeyCode::Enter);
        let text = screen_text(&app);
        assert!(text.contains("Sorting complete"));
    }

    #[test]
    fn render_handles_extreme_values() {
        let mut app = app();
        app.cursor.load_values(&[i64::MAX, 0, i64::MIN, -1]).unwrap();
        loop {
            let text = screen_text(&app);
            assert!(text.contains("Selection Sort Visualizer"));
            if !app.cursor.step_forward() {
                break;
            }
        }
        assert_eq!(
            app.cursor.current_step().unwrap().values(),
            vec![i64::MIN, -1, 0, i64::MAX]
        );
    }
}

// Playback cursor over a generated sort run

use super::speed::{Speed, TickSchedule};
use crate::parser::{parse_input, validate, InputError, DEFAULT_VALUES};
use crate::snapshot::{RunStats, SortRun, Step};
use crate::sorter::generate;
use std::time::Instant;

/// Position and play state over one run's steps
#[derive(Debug, Clone)]
pub struct Cursor {
    /// Current run (replaced wholesale on load)
    run: SortRun,

    /// Index of the displayed step, always `< run.history.len()`
    position: usize,

    /// Whether auto-advance is active
    playing: bool,

    speed: Speed,

    /// Pending auto-advance, only present while playing
    schedule: Option<TickSchedule>,
}

impl Cursor {
    /// Create a cursor at the first step of `run`
    pub fn new(run: SortRun) -> Self {
        Cursor {
            run,
            position: 0,
            playing: false,
            speed: Speed::default(),
            schedule: None,
        }
    }

    /// Create a cursor over the built-in default input
    pub fn with_default() -> Self {
        Cursor::new(generate(&DEFAULT_VALUES))
    }

    /// Parse `text` and replace the run with its steps.
    ///
    /// On error nothing changes: the current run, position and play state
    /// stay as they were.
    pub fn load(&mut self, text: &str) -> Result<(), InputError> {
        let values = parse_input(text)?;
        self.replace_run(generate(&values));
        Ok(())
    }

    /// Same as [`Cursor::load`] for already-parsed values
    pub fn load_values(&mut self, values: &[i64]) -> Result<(), InputError> {
        validate(values)?;
        self.replace_run(generate(values));
        Ok(())
    }

    /// Restore the default input
    pub fn reset(&mut self) {
        self.replace_run(generate(&DEFAULT_VALUES));
    }

    fn replace_run(&mut self, run: SortRun) {
        tracing::info!(
            elements = run.input.len(),
            steps = run.history.len(),
            "loaded new run"
        );
        self.run = run;
        self.position = 0;
        self.halt();
    }

    /// Start auto-advance unless already at the last step
    pub fn play(&mut self) {
        if self.is_at_end() {
            return;
        }
        self.playing = true;
        self.reschedule(Instant::now());
        tracing::debug!(position = self.position, speed = self.speed.level(), "play");
    }

    pub fn pause(&mut self) {
        self.halt();
        tracing::debug!(position = self.position, "pause");
    }

    /// Pause and rewind to the first step
    pub fn stop(&mut self) {
        self.halt();
        self.position = 0;
        tracing::debug!("stop");
    }

    /// Pause and move to the last step
    pub fn jump_to_end(&mut self) {
        self.halt();
        self.position = self.last_position();
    }

    /// Advance one step; returns `false` at the last step
    pub fn step_forward(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Go back one step; returns `false` at the first step
    pub fn step_backward(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Change the auto-advance speed.
    ///
    /// While playing, the pending tick is replaced by one using the new delay.
    pub fn set_speed(&mut self, level: u8) {
        self.speed = Speed::new(level);
        if self.playing {
            self.reschedule(Instant::now());
        }
        tracing::debug!(speed = self.speed.level(), "speed changed");
    }

    /// One auto-advance. Stops playback once the last step is shown.
    pub fn tick(&mut self) -> bool {
        let moved = self.step_forward();
        if self.is_at_end() {
            self.halt();
            tracing::debug!("playback complete");
        }
        moved
    }

    /// Fire the scheduled tick if it is due at `now`.
    ///
    /// Returns `true` when the position changed. A new tick is scheduled from
    /// `now` while playback continues.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = self.schedule.is_some_and(|s| s.is_due(now));
        if !self.playing || !due {
            return false;
        }

        self.schedule = None;
        let moved = self.tick();
        if self.playing {
            self.reschedule(now);
        }
        moved
    }

    /// When the pending tick fires, if any
    pub fn next_due(&self) -> Option<Instant> {
        self.schedule.map(|s| s.due())
    }

    fn reschedule(&mut self, now: Instant) {
        self.schedule = Some(TickSchedule::after(now, self.speed));
    }

    /// Stop auto-advance and cancel the pending tick
    fn halt(&mut self) {
        self.playing = false;
        self.schedule = None;
    }

    fn last_position(&self) -> usize {
        self.run.history.len().saturating_sub(1)
    }

    // ========== Read-only accessors for the UI ==========

    /// The step at the current position
    pub fn current_step(&self) -> Option<&Step> {
        self.run.history.get(self.position)
    }

    pub fn stats(&self) -> RunStats {
        self.run.stats
    }

    pub fn run(&self) -> &SortRun {
        &self.run
    }

    /// Values the current run was generated from
    pub fn input(&self) -> &[i64] {
        &self.run.input
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of steps in the current run
    pub fn len(&self) -> usize {
        self.run.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.run.history.is_empty()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.last_position()
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::with_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn starts_idle_at_first_step() {
        let cursor = Cursor::with_default();
        assert_eq!(cursor.position(), 0);
        assert!(!cursor.is_playing());
        assert!(cursor.next_due().is_none());
        assert_eq!(cursor.speed().level(), 3);
        assert_eq!(cursor.current_step().unwrap().sorted_boundary, 0);
    }

    #[test]
    fn stepping_saturates() {
        let mut cursor = Cursor::with_default();
        assert!(!cursor.step_backward());
        assert_eq!(cursor.position(), 0);

        while cursor.step_forward() {}
        assert_eq!(cursor.position(), cursor.len() - 1);
        assert!(!cursor.step_forward());
        assert!(cursor.step_backward());
        assert_eq!(cursor.position(), cursor.len() - 2);
    }

    #[test]
    fn play_schedules_one_tick() {
        let mut cursor = Cursor::with_default();
        cursor.set_speed(5);
        let before = Instant::now();
        cursor.play();
        assert!(cursor.is_playing());

        let due = cursor.next_due().unwrap();
        assert!(due >= before + Duration::from_millis(1000));
    }

    #[test]
    fn play_at_end_is_noop() {
        let mut cursor = Cursor::with_default();
        cursor.jump_to_end();
        cursor.play();
        assert!(!cursor.is_playing());
        assert!(cursor.next_due().is_none());
    }

    #[test]
    fn poll_before_due_does_nothing() {
        let mut cursor = Cursor::with_default();
        cursor.play();
        let due = cursor.next_due().unwrap();
        assert!(!cursor.poll(due - Duration::from_millis(1)));
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.next_due(), Some(due));
    }

    #[test]
    fn poll_advances_and_reschedules() {
        let mut cursor = Cursor::with_default();
        cursor.set_speed(4);
        cursor.play();
        let due = cursor.next_due().unwrap();

        assert!(cursor.poll(due));
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.next_due(), Some(due + Duration::from_millis(1500)));
    }

    #[test]
    fn pause_and_stop_cancel_schedule() {
        let mut cursor = Cursor::with_default();
        cursor.play();
        cursor.step_forward();
        cursor.pause();
        assert!(!cursor.is_playing());
        assert!(cursor.next_due().is_none());
        assert_eq!(cursor.position(), 1);

        cursor.play();
        cursor.stop();
        assert!(!cursor.is_playing());
        assert!(cursor.next_due().is_none());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn speed_change_while_paused_does_not_schedule() {
        let mut cursor = Cursor::with_default();
        cursor.set_speed(1);
        assert!(cursor.next_due().is_none());
        assert_eq!(cursor.speed().level(), 1);
    }

    #[test]
    fn speed_change_while_playing_replaces_pending_tick() {
        let mut cursor = Cursor::with_default();
        cursor.play();
        let old_due = cursor.next_due().unwrap();

        let before = Instant::now();
        cursor.set_speed(5);
        let after = Instant::now();
        let new_due = cursor.next_due().unwrap();

        assert!(cursor.is_playing());
        assert_ne!(new_due, old_due);
        assert!(new_due >= before + Duration::from_millis(1000));
        assert!(new_due <= after + Duration::from_millis(1000));

        // One tick only: firing at the later instant advances a single step
        assert!(cursor.poll(old_due.max(new_due)));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn slowing_down_cancels_the_earlier_tick() {
        let mut cursor = Cursor::with_default();
        cursor.set_speed(5);
        cursor.play();
        let old_due = cursor.next_due().unwrap();

        cursor.set_speed(1);
        let new_due = cursor.next_due().unwrap();
        assert!(new_due > old_due);

        assert!(!cursor.poll(old_due));
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.next_due(), Some(new_due));

        assert!(cursor.poll(new_due));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn tick_reaching_end_stops_playback() {
        let mut cursor = Cursor::new(generate(&[2, 1]));
        cursor.play();
        while cursor.is_playing() {
            cursor.tick();
        }
        assert!(cursor.is_at_end());
        assert!(cursor.next_due().is_none());
        assert!(!cursor.tick());
    }

    #[test]
    fn failed_load_keeps_state() {
        let mut cursor = Cursor::with_default();
        cursor.step_forward();
        cursor.step_forward();
        cursor.play();
        let due = cursor.next_due();

        assert!(cursor.load("1, x").is_err());
        assert_eq!(cursor.position(), 2);
        assert!(cursor.is_playing());
        assert_eq!(cursor.next_due(), due);
        assert_eq!(cursor.input(), &DEFAULT_VALUES);
    }

    #[test]
    fn load_values_validates_bounds() {
        let mut cursor = Cursor::with_default();
        assert_eq!(cursor.load_values(&[]), Err(InputError::Empty));
        assert_eq!(
            cursor.load_values(&[0; 21]),
            Err(InputError::TooManyElements { count: 21, max: 20 })
        );
        assert!(cursor.load_values(&[9, 8]).is_ok());
        assert_eq!(cursor.input(), &[9, 8]);
    }
}

// Playback speed and tick scheduling

use std::time::{Duration, Instant};

/// Auto-advance speed level, always within `1..=5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Speed(u8);

impl Speed {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Build a speed level, clamping into `1..=5`
    pub fn new(level: u8) -> Self {
        Speed(level.clamp(Self::MIN, Self::MAX))
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Time between automatic steps: `3000 - (level - 1) * 500` ms, so 3000ms at
    /// level 1 down to 1000ms at level 5
    pub fn delay(self) -> Duration {
        Duration::from_millis(3000 - (u64::from(self.0) - 1) * 500)
    }

    pub fn faster(self) -> Self {
        Speed::new(self.0.saturating_add(1))
    }

    pub fn slower(self) -> Self {
        Speed::new(self.0.saturating_sub(1))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed(3)
    }
}

/// The one outstanding auto-advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSchedule {
    due: Instant,
}

impl TickSchedule {
    /// Schedule a tick `speed.delay()` after `now`
    pub fn after(now: Instant, speed: Speed) -> Self {
        TickSchedule {
            due: now + speed.delay(),
        }
    }

    pub fn due(&self) -> Instant {
        self.due
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }

    /// Time left before the tick fires (zero once due)
    pub fn remaining(&self, now: Instant) -> Duration {
        self.due.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_per_level() {
        let delays: Vec<u64> = (1..=5)
            .map(|level| Speed::new(level).delay().as_millis() as u64)
            .collect();
        assert_eq!(delays, vec![3000, 2500, 2000, 1500, 1000]);
    }

    #[test]
    fn levels_are_clamped() {
        assert_eq!(Speed::new(0).level(), 1);
        assert_eq!(Speed::new(9).level(), 5);
        assert_eq!(Speed::new(5).faster().level(), 5);
        assert_eq!(Speed::new(1).slower().level(), 1);
        assert_eq!(Speed::default().faster().level(), 4);
    }

    #[test]
    fn schedule_becomes_due() {
        let now = Instant::now();
        let schedule = TickSchedule::after(now, Speed::new(5));
        assert!(!schedule.is_due(now));
        assert_eq!(schedule.remaining(now), Duration::from_millis(1000));
        assert!(!schedule.is_due(now + Duration::from_millis(999)));
        assert!(schedule.is_due(now + Duration::from_millis(1000)));
        assert_eq!(
            schedule.remaining(now + Duration::from_secs(2)),
            Duration::ZERO
        );
    }
}

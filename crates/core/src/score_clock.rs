//! Score clock - time-driven score and the per-minute difficulty ratchet
//!
//! Every tick adds the current time increment to the score. Every
//! [`SECONDS_PER_MINUTE`] ticks the clock rolls over a minute, which doubles the
//! line-clear base points and raises the time increment by one. Neither value
//! ever decreases during a session.
//!
//! All arithmetic saturates.

use crate::line_clear::line_clear_points;
use crate::snapshot::ScoreUpdate;
use crate::types::{INITIAL_LINE_BASE_POINTS, INITIAL_TIME_INCREMENT, SECONDS_PER_MINUTE};

/// Session-scoped score and timer state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreClock {
    score: u64,
    elapsed_seconds: u64,
    elapsed_minutes: u64,
    line_base_points: u64,
    time_increment: u64,
}

impl ScoreClock {
    pub fn new() -> Self {
        Self {
            score: 0,
            elapsed_seconds: 0,
            elapsed_minutes: 0,
            line_base_points: INITIAL_LINE_BASE_POINTS,
            time_increment: INITIAL_TIME_INCREMENT,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn elapsed_minutes(&self) -> u64 {
        self.elapsed_minutes
    }

    pub fn line_base_points(&self) -> u64 {
        self.line_base_points
    }

    pub fn time_increment(&self) -> u64 {
        self.time_increment
    }

    /// Advance one second.
    ///
    /// The increment is added before the rollover check, so the tick that
    /// completes a minute still pays the old increment.
    /// Returns true if this tick rolled over a minute.
    pub fn tick(&mut self) -> bool {
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        self.score = self.score.saturating_add(self.time_increment);

        if self.elapsed_seconds % SECONDS_PER_MINUTE != 0 {
            return false;
        }

        self.elapsed_minutes = self.elapsed_minutes.saturating_add(1);
        self.line_base_points = self.line_base_points.saturating_mul(2);
        self.time_increment = self.time_increment.saturating_add(1);
        true
    }

    /// Add the points for `lines` rows cleared by one lock and return them
    pub fn award_lines(&mut self, lines: usize) -> u64 {
        let points = line_clear_points(self.line_base_points, lines);
        self.score = self.score.saturating_add(points);
        points
    }

    /// Score/timer snapshot for display collaborators
    pub fn update(&self) -> ScoreUpdate {
        ScoreUpdate {
            elapsed_seconds: self.elapsed_seconds,
            elapsed_minutes: self.elapsed_minutes,
            score: self.score,
        }
    }
}

impl Default for ScoreClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_clock_defaults() {
        let clock = ScoreClock::new();
        assert_eq!(clock.score(), 0);
        assert_eq!(clock.elapsed_seconds(), 0);
        assert_eq!(clock.elapsed_minutes(), 0);
        assert_eq!(clock.line_base_points(), 10);
        assert_eq!(clock.time_increment(), 1);
    }

    #[test]
    fn second_minute_pays_the_raised_increment() {
        let mut clock = ScoreClock::new();
        for _ in 0..60 {
            clock.tick();
        }
        assert_eq!(clock.score(), 60);

        assert!(!clock.tick());
        assert_eq!(clock.score(), 62);

        for _ in 0..59 {
            clock.tick();
        }
        assert_eq!(clock.elapsed_minutes(), 2);
        assert_eq!(clock.line_base_points(), 40);
        assert_eq!(clock.time_increment(), 3);
        assert_eq!(clock.score(), 60 + 60 * 2);
    }

    #[test]
    fn award_uses_current_base_points() {
        let mut clock = ScoreClock::new();
        assert_eq!(clock.award_lines(0), 0);
        assert_eq!(clock.award_lines(3), 40);
        for _ in 0..60 {
            clock.tick();
        }
        assert_eq!(clock.award_lines(1), 20);
        assert_eq!(clock.score(), 40 + 60 + 20);
    }
}

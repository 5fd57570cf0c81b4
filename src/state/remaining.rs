//! Remaining time structure and arithmetic

use crate::config::Labels;

pub const MILLIS_PER_DAY: i64 = 86_400_000;
pub const MILLIS_PER_HOUR: i64 = 3_600_000;
pub const MILLIS_PER_MINUTE: i64 = 60_000;

/// Time left until the target, split into calendar-free units
///
/// `seconds` keeps its fractional part so drift correction can subtract
/// partial seconds between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemainingDuration {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: f64,
}

/// Split a signed millisecond duration using floor division with the
/// remainder carried into the next unit
pub fn decompose(milliseconds: i64) -> RemainingDuration {
    let days = milliseconds.div_euclid(MILLIS_PER_DAY);
    let rest = milliseconds.rem_euclid(MILLIS_PER_DAY);

    let hours = rest / MILLIS_PER_HOUR;
    let rest = rest % MILLIS_PER_HOUR;

    let minutes = rest / MILLIS_PER_MINUTE;
    let rest = rest % MILLIS_PER_MINUTE;

    RemainingDuration {
        days,
        hours,
        minutes,
        seconds: rest as f64 / 1000.0,
    }
}

impl RemainingDuration {
    /// All-zero duration, used for the final render
    pub fn zero() -> Self {
        Self {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0.0,
        }
    }

    /// Borrow from the larger units until seconds is non-negative again
    ///
    /// Stops early once days goes negative, which marks the countdown as over.
    pub fn rollover(&mut self) {
        while self.seconds < 0.0 && !self.is_expired() {
            self.seconds += 60.0;
            self.minutes -= 1;

            if self.minutes < 0 {
                self.minutes = 59;
                self.hours -= 1;

                if self.hours < 0 {
                    self.hours = 23;
                    self.days -= 1;
                }
            }
        }
    }

    /// Subtract elapsed wall-clock seconds
    pub fn elapse(&mut self, seconds: f64) {
        self.seconds -= seconds;
    }

    /// The target has passed
    pub fn is_expired(&self) -> bool {
        self.days < 0
    }

    /// Total milliseconds represented, mostly useful for diagnostics
    pub fn total_millis(&self) -> f64 {
        (self.days * MILLIS_PER_DAY + self.hours * MILLIS_PER_HOUR + self.minutes * MILLIS_PER_MINUTE)
            as f64
            + self.seconds * 1000.0
    }

    /// Render as `<dd><label><hh><label><mm><label><ss><label>`
    ///
    /// Seconds are floored for display only.
    pub fn render(&self, labels: &Labels) -> String {
        format!(
            "{:02}{}{:02}{}{:02}{}{:02}{}",
            self.days,
            labels.days,
            self.hours,
            labels.hours,
            self.minutes,
            labels.minutes,
            self.seconds.floor() as i64,
            labels.seconds,
        )
    }
}

impl Default for RemainingDuration {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decompose_reassembles_and_stays_in_range() {
        let samples = [
            0,
            1,
            999,
            1_000,
            59_999,
            60_000,
            3_599_999,
            3_600_000,
            86_399_999,
            86_400_000,
            90_061_001,
            123_456_789_012,
        ];

        for ms in samples {
            let d = decompose(ms);
            assert!((0..24).contains(&d.hours), "hours out of range for {ms}");
            assert!((0..60).contains(&d.minutes), "minutes out of range for {ms}");
            assert!((0.0..60.0).contains(&d.seconds), "seconds out of range for {ms}");
            assert!((d.total_millis() - ms as f64).abs() < 1e-3, "{ms} did not reassemble");
        }
    }

    #[test]
    fn decompose_keeps_fractional_seconds() {
        let d = decompose(90_061_250);
        assert_eq!((d.days, d.hours, d.minutes), (1, 1, 1));
        assert!((d.seconds - 1.25).abs() < 1e-9);
    }

    #[test]
    fn decompose_negative_floors_days() {
        let d = decompose(-1);
        assert_eq!((d.days, d.hours, d.minutes), (-1, 23, 59));
        assert!((d.seconds - 59.999).abs() < 1e-9);
        assert!(d.is_expired());
    }

    #[test]
    fn rollover_cascades_through_every_unit() {
        let mut d = RemainingDuration {
            days: 1,
            hours: 0,
            minutes: 0,
            seconds: -0.5,
        };
        d.rollover();
        assert_eq!(
            d,
            RemainingDuration {
                days: 0,
                hours: 23,
                minutes: 59,
                seconds: 59.5,
            }
        );
    }

    #[test]
    fn rollover_only_borrows_what_it_needs() {
        let mut d = RemainingDuration {
            days: 0,
            hours: 2,
            minutes: 10,
            seconds: -0.25,
        };
        d.rollover();
        assert_eq!((d.days, d.hours, d.minutes), (0, 2, 9));
        assert!((d.seconds - 59.75).abs() < 1e-9);
    }

    #[test]
    fn rollover_catches_up_after_a_long_stall() {
        let mut d = RemainingDuration {
            days: 0,
            hours: 1,
            minutes: 0,
            seconds: -125.0,
        };
        d.rollover();
        assert_eq!((d.days, d.hours, d.minutes), (0, 0, 57));
        assert!((d.seconds - 55.0).abs() < 1e-9);
    }

    #[test]
    fn rollover_past_zero_expires() {
        let mut d = RemainingDuration {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: -0.5,
        };
        d.rollover();
        assert!(d.is_expired());
    }

    #[test]
    fn render_pads_and_floors() {
        let labels = Labels::default();
        let d = RemainingDuration {
            days: 3,
            hours: 4,
            minutes: 5,
            seconds: 6.9,
        };
        assert_eq!(d.render(&labels), "03:04:05:06");

        let d = RemainingDuration {
            days: 123,
            hours: 23,
            minutes: 59,
            seconds: 59.999,
        };
        assert_eq!(d.render(&labels), "123:23:59:59");
    }
}

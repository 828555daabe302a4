use crate::clock::Clock;
use chrono_tz::Tz;

/// Default hour (local to the reference zone) after which the stop-working cue shows
pub const DEFAULT_SHUTDOWN_HOUR: u32 = 19;

/// Whether to show the stop-working cue
pub fn should_show_shutdown(is_day_complete: bool, hour: u32, cutoff_hour: u32) -> bool {
    is_day_complete || hour >= cutoff_hour
}

/// Decides when to nudge the user to stop for the day
#[derive(Debug, Clone, Copy)]
pub struct ShutdownAdvisor {
    pub zone: Tz,
    pub cutoff_hour: u32,
}

impl Default for ShutdownAdvisor {
    fn default() -> Self {
        Self {
            zone: chrono_tz::America::New_York,
            cutoff_hour: DEFAULT_SHUTDOWN_HOUR,
        }
    }
}

impl ShutdownAdvisor {
    pub fn new(zone: Tz, cutoff_hour: u32) -> Self {
        Self { zone, cutoff_hour }
    }

    /// Evaluate against the clock's current hour in the reference zone
    pub fn evaluate(&self, is_day_complete: bool, clock: &dyn Clock) -> bool {
        should_show_shutdown(is_day_complete, clock.zoned_hour(self.zone), self.cutoff_hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_should_show_shutdown_truth_table() {
        assert!(should_show_shutdown(true, 9, 19));
        assert!(should_show_shutdown(true, 0, 19));
        assert!(should_show_shutdown(false, 19, 19));
        assert!(should_show_shutdown(false, 23, 19));
        assert!(!should_show_shutdown(false, 18, 19));
        assert!(!should_show_shutdown(false, 0, 19));
    }

    #[test]
    fn test_advisor_uses_reference_zone() {
        let advisor = ShutdownAdvisor::default();

        // 22:00 UTC is 18:00 EDT
        let before = FixedClock(Utc.with_ymd_and_hms(2026, 10, 14, 22, 0, 0).unwrap());
        assert!(!advisor.evaluate(false, &before));
        assert!(advisor.evaluate(true, &before));

        // 23:00 UTC is 19:00 EDT
        let after = FixedClock(Utc.with_ymd_and_hms(2026, 10, 14, 23, 0, 0).unwrap());
        assert!(advisor.evaluate(false, &after));
    }

    #[test]
    fn test_advisor_custom_cutoff() {
        let advisor = ShutdownAdvisor::new(chrono_tz::UTC, 17);
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 10, 14, 17, 5, 0).unwrap());
        assert!(advisor.evaluate(false, &clock));
    }
}

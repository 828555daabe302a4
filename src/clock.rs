use chrono::{DateTime, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;

/// Source of "now" for everything date or time dependent, so tests can pin the time
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Hour of day (0-23) in `zone`
    fn zoned_hour(&self, zone: Tz) -> u32 {
        self.now().with_timezone(&zone).hour()
    }

    /// Calendar date in `zone`
    fn today_in(&self, zone: Tz) -> NaiveDate {
        self.now().with_timezone(&zone).date_naive()
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_zoned_hour_new_york() {
        // 23:30 UTC on Oct 14 is 19:30 EDT
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 10, 14, 23, 30, 0).unwrap());
        assert_eq!(clock.zoned_hour(chrono_tz::America::New_York), 19);
        assert_eq!(clock.zoned_hour(chrono_tz::UTC), 23);
    }

    #[test]
    fn test_today_in_crosses_midnight() {
        // 02:00 UTC on Oct 15 is still Oct 14 in New York
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 10, 15, 2, 0, 0).unwrap());
        assert_eq!(
            clock.today_in(chrono_tz::America::New_York),
            NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
        );
    }
}

use time::{Date, OffsetDateTime};
use time_tz::{ToTimezone, timezones};

/// Source of the current date used to anchor the rendered calendar window.
pub trait Clock: Send + Sync {
    fn today(&self) -> Date;
}

#[derive(Debug, Clone)]
pub struct SystemClock {
    timezone: String,
}

impl SystemClock {
    pub fn new(timezone: impl Into<String>) -> Self {
        Self {
            timezone: timezone.into(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new("UTC")
    }
}

impl Clock for SystemClock {
    fn today(&self) -> Date {
        let mut now = OffsetDateTime::now_utc();

        match timezones::get_by_name(&self.timezone) {
            Some(tz) => now = now.to_timezone(tz),
            None => tracing::warn!(timezone = %self.timezone, "unknown timezone, using UTC"),
        }

        now.date()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock(date!(2024-02-29)).today(), date!(2024-02-29));
    }

    #[test]
    fn test_system_clock_with_unknown_timezone_falls_back_to_utc() {
        let clock = SystemClock::new("Nowhere/Atlantis");
        let utc = OffsetDateTime::now_utc().date();

        // Tolerate a midnight rollover between the two reads.
        let today = clock.today();
        assert!(today == utc || today == utc.next_day().unwrap());
    }
}

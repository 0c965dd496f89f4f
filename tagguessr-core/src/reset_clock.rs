use chrono::{DateTime, Duration, Local, TimeZone};

use tagguessr_types::{DateKey, ResetCountdown};

pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Source of "today" and of the countdown to the next daily reset
pub trait ResetClock: Send + Sync {
    fn today(&self) -> DateKey;
    fn time_until_next_reset(&self) -> ResetCountdown;
}

/// Wall clock in the device's local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl ResetClock for LocalClock {
    fn today(&self) -> DateKey {
        date_key_for(&Local::now())
    }

    fn time_until_next_reset(&self) -> ResetCountdown {
        time_until_next_reset(&Local::now())
    }
}

/// Calendar day of `now` in its own time zone
pub fn date_key_for<Tz: TimeZone>(now: &DateTime<Tz>) -> DateKey {
    DateKey::new(now.date_naive().format(DATE_KEY_FORMAT).to_string())
}

/// Whole hours, minutes and seconds until the next midnight in `now`'s time zone
pub fn time_until_next_reset<Tz: TimeZone>(now: &DateTime<Tz>) -> ResetCountdown {
    let secs = until_next_midnight(now).num_seconds().max(0);

    ResetCountdown {
        hours: (secs / 3600) as u32,
        minutes: ((secs / 60) % 60) as u32,
        seconds: (secs % 60) as u32,
    }
}

fn until_next_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> Duration {
    let naive_now = now.naive_local();
    let Some(midnight) = naive_now
        .date()
        .succ_opt()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
    else {
        return Duration::zero();
    };

    match now.timezone().from_local_datetime(&midnight).earliest() {
        Some(reset) => reset.signed_duration_since(now.clone()),
        // Midnight skipped by a DST jump; fall back to wall-clock difference
        None => midnight - naive_now,
    }
}

//! Wall-clock time of day (`HH:MM`)
//!
//! Shift and lunch boundaries carry no date and no time zone. They are
//! compared against the local time of the business time zone.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes in a day
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Parse failure for [`ClockTime`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time '{0}', expected HH:MM")]
pub struct InvalidClockTime(pub String);

/// Time of day with minute precision, serialized as `"HH:MM"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    minutes: u16,
}

/// Default shift start
pub const DEFAULT_SHIFT_START: ClockTime = ClockTime::at(9, 0);
/// Default shift end
pub const DEFAULT_SHIFT_END: ClockTime = ClockTime::at(18, 0);
/// Default lunch start
pub const DEFAULT_LUNCH_START: ClockTime = ClockTime::at(13, 0);
/// Default lunch end
pub const DEFAULT_LUNCH_END: ClockTime = ClockTime::at(14, 0);

impl ClockTime {
    const fn at(hour: u16, minute: u16) -> Self {
        Self {
            minutes: hour * 60 + minute,
        }
    }

    /// Build from hour and minute, `None` when out of range
    pub const fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self {
                minutes: (hour * 60 + minute) as u16,
            })
        } else {
            None
        }
    }

    /// Minutes since midnight, `0..1440`
    pub const fn total_minutes(self) -> i32 {
        self.minutes as i32
    }

    pub const fn hour(self) -> u32 {
        (self.minutes / 60) as u32
    }

    pub const fn minute(self) -> u32 {
        (self.minutes % 60) as u32
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        Self {
            minutes: (time.hour() * 60 + time.minute()) as u16,
        }
    }
}

impl FromStr for ClockTime {
    type Err = InvalidClockTime;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map(ClockTime::from)
            .map_err(|_| InvalidClockTime(s.to_string()))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = InvalidClockTime;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Render a minute offset as `HH:MM`, wrapping around midnight
///
/// `-10` renders as `23:50`, `1445` as `00:05`.
pub fn format_minutes(total_minutes: i32) -> String {
    let normalized = total_minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", normalized / 60, normalized % 60)
}

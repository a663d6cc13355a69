//! Day-of-week and time-of-day value types.
//!
//! Days travel on the wire as 1..=7 (Monday = 1) and times as "HH:MM",
//! matching the catalog data format. Both types validate at construction
//! so every value in the system is well-formed.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from constructing or parsing schedule time values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    /// Day-of-week outside 1..=7
    #[error("day of week must be 1..=7, got {0}")]
    InvalidDay(u8),

    /// Hour outside 0..=23
    #[error("hour must be 0..=23, got {0}")]
    InvalidHour(u32),

    /// Minute outside 0..=59
    #[error("minute must be 0..=59, got {0}")]
    InvalidMinute(u32),

    /// Time string not in HH:MM form
    #[error("malformed time {0:?}, expected HH:MM")]
    MalformedTime(String),

    /// Slot interval with start >= end
    #[error("time slot must start before it ends ({start} >= {end})")]
    EmptyInterval { start: TimeOfDay, end: TimeOfDay },
}

/// Day of the week a time slot occurs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Wire representation (Monday = 1 .. Sunday = 7).
    pub fn number(&self) -> u8 {
        match self {
            DayOfWeek::Monday => 1,
            DayOfWeek::Tuesday => 2,
            DayOfWeek::Wednesday => 3,
            DayOfWeek::Thursday => 4,
            DayOfWeek::Friday => 5,
            DayOfWeek::Saturday => 6,
            DayOfWeek::Sunday => 7,
        }
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = TimeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DayOfWeek::Monday),
            2 => Ok(DayOfWeek::Tuesday),
            3 => Ok(DayOfWeek::Wednesday),
            4 => Ok(DayOfWeek::Thursday),
            5 => Ok(DayOfWeek::Friday),
            6 => Ok(DayOfWeek::Saturday),
            7 => Ok(DayOfWeek::Sunday),
            other => Err(TimeError::InvalidDay(other)),
        }
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> u8 {
        day.number()
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DayOfWeek::Monday => "Mon",
            DayOfWeek::Tuesday => "Tue",
            DayOfWeek::Wednesday => "Wed",
            DayOfWeek::Thursday => "Thu",
            DayOfWeek::Friday => "Fri",
            DayOfWeek::Saturday => "Sat",
            DayOfWeek::Sunday => "Sun",
        };
        write!(f, "{}", name)
    }
}

/// Minutes since midnight.
///
/// Total order matches clock order, so interval comparisons are plain
/// integer comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Create a time of day from hour and minute components.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::InvalidHour(hour));
        }
        if minute > 59 {
            return Err(TimeError::InvalidMinute(minute));
        }
        Ok(TimeOfDay((hour * 60 + minute) as u16))
    }

    /// Parse from "HH:MM" form.
    pub fn parse(text: &str) -> Result<Self, TimeError> {
        let malformed = || TimeError::MalformedTime(text.to_string());
        let (hh, mm) = text.split_once(':').ok_or_else(malformed)?;
        let hour: u32 = hh.parse().map_err(|_| malformed())?;
        let minute: u32 = mm.parse().map_err(|_| malformed())?;
        TimeOfDay::new(hour, minute)
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u16 {
        self.0
    }

    /// Hour component (0..=23).
    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    /// Minute component (0..=59).
    pub fn minute(&self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TimeOfDay::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> String {
        time.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_construction_bounds() {
        assert!(TimeOfDay::new(0, 0).is_ok());
        assert!(TimeOfDay::new(23, 59).is_ok());
        assert_eq!(TimeOfDay::new(24, 0), Err(TimeError::InvalidHour(24)));
        assert_eq!(TimeOfDay::new(10, 60), Err(TimeError::InvalidMinute(60)));
    }

    #[test]
    fn test_time_parse_round_trip() {
        let time = TimeOfDay::parse("09:05").unwrap();
        assert_eq!(time.hour(), 9);
        assert_eq!(time.minute(), 5);
        assert_eq!(time.to_string(), "09:05");
    }

    #[test]
    fn test_time_parse_rejects_garbage() {
        assert!(TimeOfDay::parse("").is_err());
        assert!(TimeOfDay::parse("1030").is_err());
        assert!(TimeOfDay::parse("ab:cd").is_err());
        assert!(TimeOfDay::parse("25:00").is_err());
    }

    #[test]
    fn test_time_ordering_is_clock_order() {
        let early = TimeOfDay::new(8, 30).unwrap();
        let late = TimeOfDay::new(14, 0).unwrap();
        assert!(early < late);
    }

    #[test]
    fn test_day_wire_mapping() {
        assert_eq!(DayOfWeek::try_from(1), Ok(DayOfWeek::Monday));
        assert_eq!(DayOfWeek::try_from(7), Ok(DayOfWeek::Sunday));
        assert_eq!(DayOfWeek::try_from(0), Err(TimeError::InvalidDay(0)));
        assert_eq!(DayOfWeek::try_from(8), Err(TimeError::InvalidDay(8)));
        assert_eq!(u8::from(DayOfWeek::Wednesday), 3);
    }
}

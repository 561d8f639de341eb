//! Weekly meeting times for course sections.
//!
//! A section meets at fixed wall-clock times on fixed days of the week.
//! Times are carried in HHMM form exactly as the registrar publishes them
//! (e.g. `1420` = 2:20 PM); no timezone handling is applied.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Day-of-week index, 0 = Sunday through 6 = Saturday.
pub type DayIndex = u8;

/// Number of days covered by one weekly schedule.
pub const DAYS_PER_WEEK: usize = 7;

/// A single weekly meeting block of a section.
///
/// Multi-day meetings share one time range across all listed days: a block
/// with `days = [1, 3, 5]` and `1000`–`1050` meets Monday, Wednesday and
/// Friday from 10:00 to 10:50.
///
/// # Examples
///
/// ```
/// use planner_rust::models::MeetingTime;
///
/// let lecture = MeetingTime::new(vec![1, 3, 5], 1000, 1050);
/// assert_eq!(lecture.start_minutes(), 600);
/// assert_eq!(lecture.end_minutes(), 650);
/// assert!(lecture.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingTime {
    /// Days this meeting occurs on, 0 = Sunday through 6 = Saturday.
    pub days: Vec<DayIndex>,
    /// Start of the meeting in HHMM form, inclusive.
    pub start_time: u16,
    /// End of the meeting in HHMM form, exclusive.
    pub end_time: u16,
    /// Room reference, when the term data carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Why a meeting time failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MeetingTimeDefect {
    #[error("day index {0} is outside 0..=6")]
    DayOutOfRange(DayIndex),

    #[error("{0:04} is not a valid HHMM wall-clock time")]
    NotWallClock(u16),

    #[error("start {start:04} is after end {end:04}")]
    Inverted { start: u16, end: u16 },
}

impl MeetingTime {
    /// Create a meeting time with no room reference.
    pub fn new(days: Vec<DayIndex>, start_time: u16, end_time: u16) -> Self {
        Self {
            days,
            start_time,
            end_time,
            location: None,
        }
    }

    /// Minutes since midnight at which the meeting starts.
    pub fn start_minutes(&self) -> u32 {
        hhmm_to_minutes(self.start_time)
    }

    /// Minutes since midnight at which the meeting ends.
    pub fn end_minutes(&self) -> u32 {
        hhmm_to_minutes(self.end_time)
    }

    /// Check that the meeting is well-formed.
    ///
    /// Rejects day indices outside `0..=6`, HHMM values that do not encode a
    /// real wall-clock time (hours ≥ 24 or minutes ≥ 60), and ranges whose
    /// start lies after their end. Provider rows are expected to be clean;
    /// anything that fails here is surfaced to the caller rather than
    /// silently encoded into a wrong occupancy pattern.
    pub fn validate(&self) -> Result<(), MeetingTimeDefect> {
        for &day in &self.days {
            if day as usize >= DAYS_PER_WEEK {
                return Err(MeetingTimeDefect::DayOutOfRange(day));
            }
        }
        for time in [self.start_time, self.end_time] {
            if !is_wall_clock(time) {
                return Err(MeetingTimeDefect::NotWallClock(time));
            }
        }
        if self.start_time > self.end_time {
            return Err(MeetingTimeDefect::Inverted {
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(())
    }
}

/// Convert an HHMM time to minutes since midnight.
pub fn hhmm_to_minutes(time: u16) -> u32 {
    (time as u32 / 100) * 60 + (time as u32 % 100)
}

/// Whether an HHMM value encodes a real wall-clock time.
fn is_wall_clock(time: u16) -> bool {
    let hours = time / 100;
    let minutes = time % 100;
    chrono::NaiveTime::from_hms_opt(hours as u32, minutes as u32, 0).is_some()
}

/// Map a day index to its calendar weekday, 0 = Sunday through 6 = Saturday.
pub fn weekday(day: DayIndex) -> Option<Weekday> {
    match day {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

use std::fmt;

pub const MINUTES_PER_HOUR: u32 = 60;
pub const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeParseError {
    #[error("expected HH:mm")]
    Format,
    #[error("hour {0} is outside 00-23")]
    HourOutOfRange(u32),
    #[error("minute {0} is outside 00-59")]
    MinuteOutOfRange(u32),
    #[error("offset {0} is past the end of the day")]
    OffsetOutOfRange(u32),
}

/// Convert an `HH:mm` string into minutes since midnight.
///
/// Only the shape is checked here: two colon-separated unsigned integers.
/// Ranges are left to [`TimeOfDay::parse`], so `"25:00"` converts to `1500`.
pub fn hour_string_to_minutes(value: &str) -> Result<u32, TimeParseError> {
    let (hours, minutes) = split_segments(value)?;
    hours
        .checked_mul(MINUTES_PER_HOUR)
        .and_then(|total| total.checked_add(minutes))
        .ok_or(TimeParseError::Format)
}

/// Render minutes since midnight as a zero-padded `HH:mm` string.
///
/// Offsets past the end of the day are not wrapped: `1500` renders as `"25:00"`.
pub fn minutes_to_hour_string(total: u32) -> String {
    let hours = total / MINUTES_PER_HOUR;
    let minutes = total % MINUTES_PER_HOUR;
    format!("{hours:02}:{minutes:02}")
}

fn split_segments(value: &str) -> Result<(u32, u32), TimeParseError> {
    let (hours, minutes) = value.split_once(':').ok_or(TimeParseError::Format)?;
    Ok((parse_segment(hours)?, parse_segment(minutes)?))
}

fn parse_segment(segment: &str) -> Result<u32, TimeParseError> {
    // A second colon lands in the minute segment and fails the digit check.
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeParseError::Format);
    }
    segment.parse().map_err(|_| TimeParseError::Format)
}

/// A validated wall-clock time within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub fn parse(value: &str) -> Result<Self, TimeParseError> {
        // Check the segments, not the sum: "10:75" adds up to a valid offset.
        let (hours, minutes) = split_segments(value)?;
        if hours >= 24 {
            return Err(TimeParseError::HourOutOfRange(hours));
        }
        if minutes >= MINUTES_PER_HOUR {
            return Err(TimeParseError::MinuteOutOfRange(minutes));
        }

        Ok(Self(hours * MINUTES_PER_HOUR + minutes))
    }

    pub fn from_minutes(total: u32) -> Result<Self, TimeParseError> {
        if total >= MINUTES_PER_DAY {
            return Err(TimeParseError::OffsetOutOfRange(total));
        }
        Ok(Self(total))
    }

    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&minutes_to_hour_string(self.0))
    }
}

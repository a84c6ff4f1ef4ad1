use crate::domain::errors::AdError;

// Weekday tokens are persisted as one delimited string rather than a list column.
pub const WEEK_DAY_DELIMITER: &str = ",";

pub fn join_week_days(days: &[String]) -> String {
    days.join(WEEK_DAY_DELIMITER)
}

pub fn split_week_days(stored: &str) -> Vec<String> {
    if stored.is_empty() {
        return Vec::new();
    }
    stored.split(WEEK_DAY_DELIMITER).map(str::to_string).collect()
}

// Trim tokens and reject anything that would not survive a join/split cycle.
pub fn validate_week_days(days: Vec<String>) -> Result<Vec<String>, AdError> {
    if days.is_empty() {
        return Err(AdError::InvalidWeekDays);
    }

    days.into_iter()
        .map(|day| {
            let day = day.trim();
            if day.is_empty() || day.contains(WEEK_DAY_DELIMITER) {
                return Err(AdError::InvalidWeekDays);
            }
            Ok(day.to_string())
        })
        .collect()
}

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

use crate::model::InterviewKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScheduleError {
    #[error("pick a date")]
    MissingDate,
    #[error("pick a time")]
    MissingTime,
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("invalid time: {0}")]
    InvalidTime(String),
}

/// A validated request to book a mock interview slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRequest {
    kind: InterviewKind,
    date: NaiveDate,
    time: NaiveTime,
}

impl ScheduleRequest {
    /// Parse the date (`YYYY-MM-DD`) and time (`HH:MM`) picker values.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError` when either value is blank or malformed.
    pub fn new(kind: InterviewKind, date: &str, time: &str) -> Result<Self, ScheduleError> {
        let date = date.trim();
        let time = time.trim();
        if date.is_empty() {
            return Err(ScheduleError::MissingDate);
        }
        if time.is_empty() {
            return Err(ScheduleError::MissingTime);
        }
        let parsed_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ScheduleError::InvalidDate(date.to_string()))?;
        let parsed_time = NaiveTime::parse_from_str(time, "%H:%M")
            .map_err(|_| ScheduleError::InvalidTime(time.to_string()))?;
        Ok(Self {
            kind,
            date: parsed_date,
            time: parsed_time,
        })
    }

    #[must_use]
    pub fn kind(&self) -> InterviewKind {
        self.kind
    }

    #[must_use]
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    #[must_use]
    pub fn confirmation(&self) -> String {
        format!(
            "Interview scheduled for {} at {}",
            self.date.format("%Y-%m-%d"),
            self.time.format("%H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_picker_values() {
        let request = ScheduleRequest::new(InterviewKind::Peer, "2025-03-25", "14:00").unwrap();
        assert_eq!(request.kind(), InterviewKind::Peer);
        assert_eq!(
            request.starts_at(),
            NaiveDate::from_ymd_opt(2025, 3, 25)
                .unwrap()
                .and_hms_opt(14, 0, 0)
                .unwrap()
        );
        assert_eq!(
            request.confirmation(),
            "Interview scheduled for 2025-03-25 at 14:00"
        );
    }

    #[test]
    fn blank_values_are_reported_first() {
        assert_eq!(
            ScheduleRequest::new(InterviewKind::Ai, " ", "10:00").unwrap_err(),
            ScheduleError::MissingDate
        );
        assert_eq!(
            ScheduleRequest::new(InterviewKind::Ai, "2025-03-25", "").unwrap_err(),
            ScheduleError::MissingTime
        );
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(matches!(
            ScheduleRequest::new(InterviewKind::Ai, "25/03/2025", "10:00"),
            Err(ScheduleError::InvalidDate(_))
        ));
        assert!(matches!(
            ScheduleRequest::new(InterviewKind::Ai, "2025-03-25", "25:61"),
            Err(ScheduleError::InvalidTime(_))
        ));
    }
}

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use careforge_core::{DomainError, DomainResult, ValueObject};

/// Daily window during which appointments may be booked.
///
/// The end is exclusive: an 08:00–18:00 window admits 17:30 but not 18:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    start: NaiveTime,
    end: NaiveTime,
}

impl WorkingHours {
    pub fn new(start: NaiveTime, end: NaiveTime) -> DomainResult<Self> {
        if start >= end {
            return Err(DomainError::validation(
                "working hours must start before they end",
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time < self.end
    }
}

impl Default for WorkingHours {
    /// The standard consultation window, 08:00–18:00.
    fn default() -> Self {
        let start = NaiveTime::from_hms_opt(8, 0, 0).expect("literal in range");
        let end = NaiveTime::from_hms_opt(18, 0, 0).expect("literal in range");
        Self { start, end }
    }
}

impl ValueObject for WorkingHours {}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn default_window_is_eight_to_six() {
        let hours = WorkingHours::default();
        assert_eq!(hours.start(), time(8, 0));
        assert_eq!(hours.end(), time(18, 0));
    }

    #[test]
    fn end_is_exclusive() {
        let hours = WorkingHours::default();
        assert!(hours.contains(time(8, 0)));
        assert!(hours.contains(time(17, 30)));
        assert!(!hours.contains(time(18, 0)));
        assert!(!hours.contains(time(7, 59)));
    }

    #[test]
    fn rejects_inverted_window() {
        assert!(WorkingHours::new(time(18, 0), time(8, 0)).is_err());
        assert!(WorkingHours::new(time(9, 0), time(9, 0)).is_err());
    }
}

//! Rolling Time Windows
//!
//! A period maps to a lower-bound cutoff timestamp computed in Rust and
//! bound into the query, so the window logic is testable without a
//! database.

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregation window, rolling back from "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
    #[default]
    AllTime,
}

impl Period {
    /// Lower bound for the window, or None for the unbounded all-time
    /// view. Calendar months are used for the month-based windows, not
    /// 30-day approximations.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Period::Weekly => Some(now - Duration::days(7)),
            Period::Monthly => Some(now - Months::new(1)),
            Period::Quarterly => Some(now - Months::new(3)),
            Period::Yearly => Some(now - Months::new(12)),
            Period::AllTime => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::Quarterly => "quarterly",
            Period::Yearly => "yearly",
            Period::AllTime => "all_time",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_weekly_cutoff_is_exactly_seven_days() {
        let now = Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap();
        let cutoff = Period::Weekly.cutoff(now).unwrap();

        assert_eq!(cutoff, Utc.with_ymd_and_hms(2026, 8, 16, 12, 0, 0).unwrap());

        // a kudos 8 days old falls outside the window
        let eight_days_ago = now - Duration::days(8);
        assert!(eight_days_ago < cutoff);
        // one 6 days old falls inside
        let six_days_ago = now - Duration::days(6);
        assert!(six_days_ago >= cutoff);
    }

    #[test]
    fn test_month_windows_use_calendar_months() {
        let now = Utc.with_ymd_and_hms(2026, 3, 31, 0, 0, 0).unwrap();

        // chrono clamps to the last valid day of the target month
        assert_eq!(
            Period::Monthly.cutoff(now).unwrap(),
            Utc.with_ymd_and_hms(2026, 2, 28, 0, 0, 0).unwrap()
        );
        assert_eq!(
            Period::Quarterly.cutoff(now).unwrap(),
            Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap()
        );
        assert_eq!(
            Period::Yearly.cutoff(now).unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 31, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_all_time_has_no_cutoff() {
        assert_eq!(Period::AllTime.cutoff(Utc::now()), None);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Period::AllTime).unwrap(), "\"all_time\"");
        let parsed: Period = serde_json::from_str("\"quarterly\"").unwrap();
        assert_eq!(parsed, Period::Quarterly);
    }
}

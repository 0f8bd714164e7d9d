//! Day-keyed record persistence contract
//!
//! One record per calendar day, stored under the literal key pattern
//! `habits-YYYY-MM-DD`. The contract is deliberately absorbing: callers
//! never see storage errors, only empty records and a durability flag.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::habit::DailyRecord;

/// Prefix of every record key
pub const RECORD_KEY_PREFIX: &str = "habits-";

/// Key for the record of a given day
pub fn record_key(date: NaiveDate) -> String {
    format!("{}{}", RECORD_KEY_PREFIX, date.format("%Y-%m-%d"))
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Load the record stored under `key`.
    ///
    /// A missing key and an unavailable backend both come back as an
    /// empty record; callers cannot tell the two apart.
    async fn get(&self, key: &str) -> DailyRecord;

    /// Persist the record under `key`.
    ///
    /// Returns false when a non-durable fallback took the write. That is
    /// a degraded result, not a hard failure.
    async fn set(&self, key: &str, record: &DailyRecord) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_follows_the_date_pattern() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 14).unwrap();
        assert_eq!(record_key(date), "habits-2025-07-14");
    }

    #[test]
    fn key_zero_pads_month_and_day() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        assert_eq!(record_key(date), "habits-2025-01-03");
        assert!(record_key(date).starts_with(RECORD_KEY_PREFIX));
    }
}

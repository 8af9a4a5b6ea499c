use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotDate(NaiveDate);

impl SnapshotDate {
    /// Calendar date of `date_time` as seen from `offset`.
    pub fn in_zone(date_time: DateTime<Utc>, offset: &FixedOffset) -> Self {
        SnapshotDate(date_time.with_timezone(offset).date_naive())
    }
}

impl Display for SnapshotDate {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use crate::config::SnapshotConfig;
    use crate::snapshot_date::SnapshotDate;
    use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
    use std::str::FromStr;

    fn tokyo() -> FixedOffset {
        FixedOffset::east_opt(9 * 3600).unwrap()
    }

    #[test]
    fn test_in_zone() {
        let date_time = DateTime::<Utc>::from_str("2025-06-01T03:00:00.0+00:00").unwrap();

        let date = SnapshotDate::in_zone(date_time, &tokyo());
        assert_eq!(date, SnapshotDate(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()));
        assert_eq!(date.to_string(), "2025-06-01");
    }

    #[test]
    fn test_in_zone_crosses_midnight() {
        let date_time = DateTime::<Utc>::from_str("2025-05-31T15:00:00.0+00:00").unwrap();

        assert_eq!(SnapshotDate::in_zone(date_time, &tokyo()).to_string(), "2025-06-01");
        assert_eq!(
            SnapshotDate::in_zone(date_time, &FixedOffset::east_opt(0).unwrap()).to_string(),
            "2025-05-31"
        );
    }

    #[test]
    fn test_zero_padded() {
        let date_time = DateTime::<Utc>::from_str("2026-01-05T00:00:00.0+00:00").unwrap();

        assert_eq!(SnapshotDate::in_zone(date_time, &tokyo()).to_string(), "2026-01-05");
    }

    #[test]
    fn test_default_zone_keeps_utc_day() {
        let date_time = DateTime::<Utc>::from_str("2025-06-01T20:00:00.0+00:00").unwrap();
        let config = SnapshotConfig::default();

        assert_eq!(
            SnapshotDate::in_zone(date_time, &config.utc_offset).to_string(),
            "2025-06-01"
        );
    }
}

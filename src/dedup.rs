//! Time-windowed deduplication of position reports
//!
//! AIS transponders emit position reports every few seconds; for plotting,
//! one report per vessel per window is enough. Reports are bucketed by
//! flooring the timestamp to a multiple of the window measured from the Unix
//! epoch, and only the earliest report per `(MMSI, bucket)` survives.

use crate::types::PositionReport;
use chrono::Duration;
use std::collections::HashSet;

/// Deduplicate position reports to one per vessel per time window
///
/// Sorts by timestamp ascending (stable, so the earliest-arriving report
/// wins a timestamp tie) and keeps the first report in each
/// `(MMSI, bucket)` group. Output stays in ascending timestamp order.
///
/// A zero or negative window disables bucketing: the result is the sorted
/// input unchanged.
pub fn dedupe(mut reports: Vec<PositionReport>, window: Duration) -> Vec<PositionReport> {
    reports.sort_by_key(|r| r.timestamp);
    dedupe_sorted(reports, window)
}

/// Deduplicate already-sorted position reports
///
/// Precondition: `reports` is sorted ascending by timestamp. The
/// first-in-group-wins rule only selects the earliest report under that
/// order; callers with unsorted data must use [`dedupe`] instead.
pub fn dedupe_sorted(reports: Vec<PositionReport>, window: Duration) -> Vec<PositionReport> {
    debug_assert!(
        reports.windows(2).all(|w| w[0].timestamp <= w[1].timestamp),
        "dedupe_sorted requires ascending timestamps"
    );

    let window_ms = window.num_milliseconds();
    if window_ms <= 0 {
        return reports;
    }

    let mut seen: HashSet<(String, i64)> = HashSet::new();
    reports
        .into_iter()
        .filter(|report| {
            let bucket = report.timestamp.timestamp_millis().div_euclid(window_ms);
            seen.insert((report.mmsi.clone(), bucket))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn report(mmsi: &str, minute: u32) -> PositionReport {
        PositionReport {
            mmsi: mmsi.to_string(),
            latitude: 30.0,
            longitude: -60.0,
            speed_over_ground: Some(8.5),
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 12, minute, 0).unwrap(),
            vessel_name: format!("Vessel {}", mmsi),
        }
    }

    #[test]
    fn test_same_window_keeps_earliest() {
        let out = dedupe(
            vec![report("367001234", 3), report("367001234", 0)],
            Duration::minutes(10),
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].timestamp.format("%M").to_string(), "00");
    }

    #[test]
    fn test_reports_eleven_minutes_apart_both_survive() {
        let out = dedupe(
            vec![report("367001234", 0), report("367001234", 11)],
            Duration::minutes(10),
        );
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_vessels_do_not_collide() {
        let out = dedupe(
            vec![report("367001234", 0), report("367005678", 0)],
            Duration::minutes(10),
        );
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_zero_window_is_identity_after_sort() {
        let input = vec![report("367001234", 5), report("367001234", 2)];
        let out = dedupe(input, Duration::zero());
        assert_eq!(out.len(), 2);
        assert!(out[0].timestamp < out[1].timestamp);
    }
}

use crate::core::calculator::week::bounds;
use crate::models::interval::validate_row;
use crate::models::report::{Report, SkippedRow};
use crate::models::row::RawRow;
use crate::utils::time::Timestamp;
use chrono::Weekday;
use tracing::warn;

/// Sum worked time into today / this week / last week.
///
/// Each interval is placed by its end timestamp only. An interval ending in
/// last week counts there and nowhere else; otherwise it may count for both
/// today and this week. Rows that do not validate are returned in
/// `Report::skipped` and never abort the scan.
pub fn compute_totals(rows: &[RawRow], now: Timestamp, week_start_day: Weekday) -> Report {
    let b = bounds(now, week_start_day);
    let mut report = Report::default();

    for row in rows {
        let interval = match validate_row(row.fields.as_slice()) {
            Ok(iv) => iv,
            Err(reason) => {
                warn!(line = row.line, %reason, "skipping row");
                report.skipped.push(SkippedRow {
                    line: row.line,
                    reason,
                });
                continue;
            }
        };

        let (Some(end), Some(dur)) = (interval.end, interval.duration()) else {
            continue;
        };

        let totals = &mut report.totals;

        if end >= b.last_week_start && end < b.week_start {
            totals.last_week += dur;
            continue;
        }
        if end >= b.today_start {
            totals.today += dur;
        }
        if end >= b.week_start && end < b.week_end {
            totals.this_week += dur;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RowError;
    use crate::utils::time::parse_timestamp;
    use chrono::TimeDelta;

    fn rows(data: &[&[&str]]) -> Vec<RawRow> {
        data.iter()
            .enumerate()
            .map(|(i, f)| RawRow::new(i as u64 + 2, f.iter().map(|s| s.to_string()).collect()))
            .collect()
    }

    fn now(s: &str) -> Timestamp {
        parse_timestamp(s).unwrap()
    }

    #[test]
    fn no_rows_means_zero_everywhere() {
        let report = compute_totals(&[], now("12:00:00 2024/01/03"), Weekday::Mon);
        assert_eq!(report.totals.today_hm(), "00:00");
        assert_eq!(report.totals.this_week_hm(), "00:00");
        assert_eq!(report.totals.last_week_hm(), "00:00");
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn single_morning_interval_counts_for_today() {
        let data = rows(&[&["09:00:00 2024/01/01", "10:30:00 2024/01/01"]]);
        let report = compute_totals(&data, now("12:00:00 2024/01/01"), Weekday::Mon);

        assert_eq!(report.totals.today_hm(), "01:30");
        assert_eq!(report.totals.this_week_hm(), "01:30");
        assert_eq!(report.totals.last_week_hm(), "00:00");
    }

    #[test]
    fn interval_ending_previous_sunday_is_last_week_only() {
        // Wednesday 2024-01-10, week starting Monday 2024-01-08.
        let data = rows(&[
            &["22:00:00 2024/01/07", "23:30:00 2024/01/07"],
            // starts last week, ends this week: belongs to this week
            &["23:00:00 2024/01/07", "01:00:00 2024/01/08"],
        ]);
        let report = compute_totals(&data, now("15:00:00 2024/01/10"), Weekday::Mon);

        assert_eq!(report.totals.last_week, TimeDelta::minutes(90));
        assert_eq!(report.totals.this_week, TimeDelta::hours(2));
        assert_eq!(report.totals.today, TimeDelta::zero());
    }

    #[test]
    fn last_week_is_exclusive_even_when_week_start_is_today() {
        // Today is Monday 2024-01-08 and the week starts today; an interval
        // ending Sunday night is last week's, never today's.
        let data = rows(&[&["20:00:00 2024/01/07", "21:00:00 2024/01/07"]]);
        let report = compute_totals(&data, now("10:00:00 2024/01/08"), Weekday::Mon);

        assert_eq!(report.totals.last_week, TimeDelta::hours(1));
        assert_eq!(report.totals.today, TimeDelta::zero());
        assert_eq!(report.totals.this_week, TimeDelta::zero());
    }

    #[test]
    fn older_intervals_count_nowhere() {
        let data = rows(&[&["09:00:00 2023/12/01", "10:00:00 2023/12/01"]]);
        let report = compute_totals(&data, now("15:00:00 2024/01/10"), Weekday::Mon);
        assert_eq!(report.totals, Default::default());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn bad_rows_are_skipped_with_reasons() {
        let data = rows(&[
            &["09:00:00 2024/01/10", "10:00:00 2024/01/10"],
            &["11:00:00 2024/01/10", "10:00:00 2024/01/10"],
            &["garbage", "10:00:00 2024/01/10"],
            &["a", "b", "c"],
            &["12:00:00 2024/01/10"],
        ]);
        let report = compute_totals(&data, now("15:00:00 2024/01/10"), Weekday::Mon);

        assert_eq!(report.totals.today_hm(), "01:00");
        assert_eq!(report.totals.this_week_hm(), "01:00");

        let lines: Vec<u64> = report.skipped.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![3, 4, 5, 6]);
        assert!(matches!(report.skipped[0].reason, RowError::InvalidField(_)));
        assert!(matches!(report.skipped[1].reason, RowError::InvalidField(_)));
        assert_eq!(report.skipped[2].reason, RowError::IncompleteRow);
        assert_eq!(report.skipped[3].reason, RowError::IncompleteRow);
    }

    #[test]
    fn minutes_are_truncated_per_total_not_per_interval() {
        let data = rows(&[
            &["09:00:00 2024/01/10", "09:00:40 2024/01/10"],
            &["10:00:00 2024/01/10", "10:00:40 2024/01/10"],
        ]);
        let report = compute_totals(&data, now("15:00:00 2024/01/10"), Weekday::Mon);
        assert_eq!(report.totals.today, TimeDelta::seconds(80));
        assert_eq!(report.totals.today_hm(), "00:01");
    }

    #[test]
    fn future_end_inside_week_counts_for_today_and_week() {
        // Ends later today: still today and this week.
        let data = rows(&[&["14:00:00 2024/01/10", "18:00:00 2024/01/10"]]);
        let report = compute_totals(&data, now("15:00:00 2024/01/10"), Weekday::Mon);
        assert_eq!(report.totals.today_hm(), "04:00");
        assert_eq!(report.totals.this_week_hm(), "04:00");
    }
}

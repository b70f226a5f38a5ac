//! The log filter: date-range filtering and result limiting.
//!
//! This module is the read-side view logic for a user's exercise log. It is
//! pure: it takes an in-memory log snapshot plus parsed query parameters and
//! produces the view returned to the client, without touching the store.

use crate::{Error, Exercise, ExerciseLog, LogQuery, LogView, Result};
use chrono::NaiveDate;

/// Display format for exercise dates, e.g. "Mon Jan 01 2023"
pub const DISPLAY_DATE_FORMAT: &str = "%a %b %d %Y";

/// Query-parameter date format for `from`/`to`, e.g. "2023-01-01"
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Render a calendar date as its stored display string
pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Parse a `from`/`to` query value as a calendar date
pub fn parse_query_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), QUERY_DATE_FORMAT)
        .map_err(|_| Error::InvalidDate(value.to_string()))
}

/// Reparse a stored display date string back into a calendar date
pub fn parse_display_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DISPLAY_DATE_FORMAT)
        .map_err(|_| Error::InvalidDate(value.to_string()))
}

impl LogQuery {
    /// Parse raw query strings into a [`LogQuery`]
    ///
    /// Malformed values are rejected as distinguished errors
    /// ([`Error::InvalidDate`] / [`Error::InvalidLimit`]) rather than
    /// silently producing a filter that matches nothing.
    pub fn parse(
        from: Option<&str>,
        to: Option<&str>,
        limit: Option<&str>,
    ) -> Result<Self> {
        let from = from.map(parse_query_date).transpose()?;
        let to = to.map(parse_query_date).transpose()?;
        let limit = limit
            .map(|raw| {
                raw.trim()
                    .parse::<i64>()
                    .map_err(|_| Error::InvalidLimit(raw.to_string()))
            })
            .transpose()?;

        Ok(Self { from, to, limit })
    }
}

/// Compute the client-facing view of a log under the given query
///
/// Filtering semantics:
/// - both bounds present: keep entries with `from <= date <= to` (inclusive)
/// - only `from`: keep entries with `date >= from`
/// - only `to`: keep entries with `date <= to`
/// - neither: keep all entries
///
/// If `limit` is present, the filtered sequence truncates to its first
/// `limit` entries in append order; zero or negative limits truncate to
/// empty. The reported `count` is always the log's stored total.
///
/// A stored entry whose display date fails to reparse is skipped from
/// date-filtered views (with a warning) and kept in unfiltered views, so one
/// bad row never hides the rest of the log.
pub fn filter_log(log: &ExerciseLog, query: &LogQuery) -> LogView {
    let mut entries: Vec<Exercise> = match (query.from, query.to) {
        (None, None) => log.entries.clone(),
        (from, to) => log
            .entries
            .iter()
            .filter(|entry| match parse_display_date(&entry.date) {
                Ok(date) => {
                    from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t)
                }
                Err(_) => {
                    tracing::warn!(
                        "Skipping entry with unparseable date {:?} in log {}",
                        entry.date,
                        log.id
                    );
                    false
                }
            })
            .cloned()
            .collect(),
    };

    if let Some(limit) = query.limit {
        // Negative limits clamp to zero, oversized ones are a no-op.
        entries.truncate(usize::try_from(limit).unwrap_or(0));
    }

    LogView {
        id: log.id,
        username: log.username.clone(),
        count: log.count,
        log: entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn entry(description: &str, date: NaiveDate) -> Exercise {
        Exercise {
            description: description.into(),
            duration: 30,
            date: display_date(date),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Jan/Feb/Mar 2023 log with count 3
    fn three_month_log() -> ExerciseLog {
        ExerciseLog {
            id: Uuid::new_v4(),
            username: "ada".into(),
            count: 3,
            entries: vec![
                entry("jan", date(2023, 1, 1)),
                entry("feb", date(2023, 2, 1)),
                entry("mar", date(2023, 3, 1)),
            ],
        }
    }

    #[test]
    fn test_display_date_format() {
        assert_eq!(display_date(date(2023, 1, 1)), "Sun Jan 01 2023");
        assert_eq!(
            parse_display_date("Sun Jan 01 2023").unwrap(),
            date(2023, 1, 1)
        );
    }

    #[test]
    fn test_no_params_returns_all_entries_unchanged() {
        let log = three_month_log();
        let view = filter_log(&log, &LogQuery::default());

        assert_eq!(view.log, log.entries);
        assert_eq!(view.count, 3);
    }

    #[test]
    fn test_from_only_keeps_later_entries() {
        let log = three_month_log();
        let query = LogQuery {
            from: Some(date(2023, 1, 15)),
            ..Default::default()
        };

        let view = filter_log(&log, &query);
        assert_eq!(view.log.len(), 2);
        assert_eq!(view.log[0].description, "feb");
        assert_eq!(view.log[1].description, "mar");
        assert_eq!(view.count, 3);
    }

    #[test]
    fn test_to_only_keeps_earlier_entries() {
        let log = three_month_log();
        let query = LogQuery {
            to: Some(date(2023, 2, 15)),
            ..Default::default()
        };

        let view = filter_log(&log, &query);
        assert_eq!(view.log.len(), 2);
        assert_eq!(view.log[0].description, "jan");
        assert_eq!(view.log[1].description, "feb");
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let log = three_month_log();
        let query = LogQuery {
            from: Some(date(2023, 1, 1)),
            to: Some(date(2023, 3, 1)),
            ..Default::default()
        };

        assert_eq!(filter_log(&log, &query).log.len(), 3);
    }

    #[test]
    fn test_from_after_to_matches_nothing() {
        let log = three_month_log();
        let query = LogQuery {
            from: Some(date(2023, 3, 1)),
            to: Some(date(2023, 1, 1)),
            ..Default::default()
        };

        let view = filter_log(&log, &query);
        assert!(view.log.is_empty());
        assert_eq!(view.count, 3);
    }

    #[test]
    fn test_limit_keeps_first_entries_in_append_order() {
        let log = three_month_log();
        let query = LogQuery {
            limit: Some(1),
            ..Default::default()
        };

        let view = filter_log(&log, &query);
        assert_eq!(view.log.len(), 1);
        assert_eq!(view.log[0].description, "jan");
        assert_eq!(view.count, 3);
    }

    #[test]
    fn test_limit_law() {
        let log = three_month_log();
        for n in 0..6 {
            let query = LogQuery {
                limit: Some(n),
                ..Default::default()
            };
            let view = filter_log(&log, &query);
            assert_eq!(view.log.len(), (n as usize).min(log.entries.len()));
            assert_eq!(view.log[..], log.entries[..view.log.len()]);
        }
    }

    #[test]
    fn test_zero_and_negative_limits_truncate_to_empty() {
        let log = three_month_log();
        for n in [0, -1, -100] {
            let query = LogQuery {
                limit: Some(n),
                ..Default::default()
            };
            assert!(filter_log(&log, &query).log.is_empty());
        }
    }

    #[test]
    fn test_combined_bounds_and_limit() {
        let log = three_month_log();
        let query = LogQuery {
            from: Some(date(2023, 1, 15)),
            to: Some(date(2023, 2, 15)),
            limit: Some(1),
        };

        let view = filter_log(&log, &query);
        assert_eq!(view.log.len(), 1);
        assert_eq!(view.log[0].description, "feb");
    }

    #[test]
    fn test_filter_is_pure_and_idempotent() {
        let log = three_month_log();
        let before = log.entries.clone();
        let query = LogQuery {
            from: Some(date(2023, 1, 15)),
            limit: Some(1),
            ..Default::default()
        };

        let first = filter_log(&log, &query);
        let second = filter_log(&log, &query);

        assert_eq!(log.entries, before);
        assert_eq!(first.log, second.log);
        assert_eq!(first.count, second.count);
    }

    #[test]
    fn test_unparseable_stored_date_skipped_from_filtered_view() {
        let mut log = three_month_log();
        log.entries.insert(
            1,
            Exercise {
                description: "bad".into(),
                duration: 10,
                date: "not a date".into(),
            },
        );
        log.count = 4;

        // Unfiltered view keeps the bad row
        let all = filter_log(&log, &LogQuery::default());
        assert_eq!(all.log.len(), 4);

        // Date-filtered view skips it
        let query = LogQuery {
            from: Some(date(2022, 1, 1)),
            ..Default::default()
        };
        let view = filter_log(&log, &query);
        assert_eq!(view.log.len(), 3);
        assert!(view.log.iter().all(|e| e.description != "bad"));
    }

    #[test]
    fn test_parse_query_accepts_valid_values() {
        let query = LogQuery::parse(Some("2023-01-15"), Some("2023-02-15"), Some("5")).unwrap();
        assert_eq!(query.from, Some(date(2023, 1, 15)));
        assert_eq!(query.to, Some(date(2023, 2, 15)));
        assert_eq!(query.limit, Some(5));
    }

    #[test]
    fn test_parse_query_rejects_bad_date() {
        let err = LogQuery::parse(Some("January 2023"), None, None).unwrap_err();
        assert!(matches!(err, Error::InvalidDate(_)));

        let err = LogQuery::parse(None, Some("2023-13-99"), None).unwrap_err();
        assert!(matches!(err, Error::InvalidDate(_)));
    }

    #[test]
    fn test_parse_query_rejects_bad_limit() {
        let err = LogQuery::parse(None, None, Some("many")).unwrap_err();
        assert!(matches!(err, Error::InvalidLimit(_)));
    }

    #[test]
    fn test_parse_query_all_absent() {
        assert_eq!(LogQuery::parse(None, None, None).unwrap(), LogQuery::default());
    }
}

use std::collections::BTreeMap;

use time::{Date, Duration};

/// Expands a sparse, date-keyed record set into one entry per calendar day
/// of the half-open range `[start, end)`.
///
/// Days without a stored record are filled with `empty(day)`. When two
/// records carry the same date the later one wins. Returns an empty Vec
/// when `end <= start`.
pub fn fill_date_range<T>(
    start: Date,
    end: Date,
    records: Vec<T>,
    date_of: impl Fn(&T) -> Date,
    empty: impl Fn(Date) -> T,
) -> Vec<T> {
    if end <= start {
        return Vec::new();
    }

    let mut by_date: BTreeMap<Date, T> = BTreeMap::new();
    for record in records {
        by_date.insert(date_of(&record), record);
    }

    let days = (end - start).whole_days();
    let mut filled = Vec::with_capacity(days as usize);
    for offset in 0..days {
        let day = start + Duration::days(offset);
        match by_date.remove(&day) {
            Some(record) => filled.push(record),
            None => filled.push(empty(day)),
        }
    }

    filled
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Entry {
        date: Date,
        note: &'static str,
    }

    fn entry(date: Date, note: &'static str) -> Entry {
        Entry { date, note }
    }

    fn blank(date: Date) -> Entry {
        Entry { date, note: "" }
    }

    #[test]
    fn fills_every_missing_day_in_order() {
        let stored = vec![
            entry(date!(2024 - 07 - 03), "soup"),
            entry(date!(2024 - 07 - 05), "stew"),
        ];

        let filled = fill_date_range(
            date!(2024 - 07 - 02),
            date!(2024 - 07 - 06),
            stored,
            |e| e.date,
            blank,
        );

        assert_eq!(
            filled,
            vec![
                blank(date!(2024 - 07 - 02)),
                entry(date!(2024 - 07 - 03), "soup"),
                blank(date!(2024 - 07 - 04)),
                entry(date!(2024 - 07 - 05), "stew"),
            ]
        );
    }

    #[test]
    fn orders_unsorted_records_ascending() {
        let stored = vec![
            entry(date!(2024 - 07 - 05), "later"),
            entry(date!(2024 - 07 - 03), "earlier"),
        ];

        let filled = fill_date_range(
            date!(2024 - 07 - 03),
            date!(2024 - 07 - 06),
            stored,
            |e| e.date,
            blank,
        );

        let dates: Vec<Date> = filled.iter().map(|e| e.date).collect();
        assert_eq!(
            dates,
            vec![date!(2024 - 07 - 03), date!(2024 - 07 - 04), date!(2024 - 07 - 05)]
        );
    }

    #[test]
    fn empty_when_start_equals_end() {
        let filled = fill_date_range(
            date!(2024 - 07 - 02),
            date!(2024 - 07 - 02),
            vec![entry(date!(2024 - 07 - 02), "ignored")],
            |e| e.date,
            blank,
        );

        assert!(filled.is_empty());
    }

    #[test]
    fn empty_when_end_before_start() {
        let filled =
            fill_date_range(date!(2024 - 07 - 06), date!(2024 - 07 - 02), vec![], |e: &Entry| e.date, blank);

        assert!(filled.is_empty());
    }

    #[test]
    fn end_date_is_excluded() {
        let stored = vec![entry(date!(2024 - 07 - 06), "excluded")];

        let filled = fill_date_range(
            date!(2024 - 07 - 04),
            date!(2024 - 07 - 06),
            stored,
            |e| e.date,
            blank,
        );

        assert_eq!(
            filled,
            vec![blank(date!(2024 - 07 - 04)), blank(date!(2024 - 07 - 05))]
        );
    }

    #[test]
    fn later_record_wins_on_duplicate_date() {
        let stored = vec![
            entry(date!(2024 - 07 - 03), "first"),
            entry(date!(2024 - 07 - 03), "second"),
        ];

        let filled = fill_date_range(
            date!(2024 - 07 - 03),
            date!(2024 - 07 - 04),
            stored,
            |e| e.date,
            blank,
        );

        assert_eq!(filled, vec![entry(date!(2024 - 07 - 03), "second")]);
    }
}

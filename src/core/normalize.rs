use crate::domain::model::TimetableEntry;

/// Orders timetable rows ascending by period. Rows with a missing or
/// non-numeric period sort as period 0; the sort is stable, so duplicate
/// periods keep their upstream order.
pub fn sort_by_period(mut entries: Vec<TimetableEntry>) -> Vec<TimetableEntry> {
    entries.sort_by_key(TimetableEntry::period_number);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(period: &str, subject: &str) -> TimetableEntry {
        serde_json::from_value(serde_json::json!({
            "PERIO": period,
            "ITRT_CNTNT": subject
        }))
        .unwrap()
    }

    fn periods(entries: &[TimetableEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.period.as_str()).collect()
    }

    #[test]
    fn test_sorts_out_of_order_periods() {
        let sorted = sort_by_period(vec![entry("3", "수학"), entry("1", "국어")]);
        assert_eq!(periods(&sorted), vec!["1", "3"]);
        assert_eq!(sorted[0].subject, "국어");
    }

    #[test]
    fn test_empty_list_stays_empty() {
        assert!(sort_by_period(Vec::new()).is_empty());
    }

    #[test]
    fn test_sorted_input_is_unchanged() {
        let input = vec![entry("1", "국어"), entry("2", "영어"), entry("5", "체육")];
        let sorted = sort_by_period(input.clone());
        assert_eq!(periods(&sorted), periods(&input));
    }

    #[test]
    fn test_idempotent() {
        let once = sort_by_period(vec![entry("4", "a"), entry("2", "b"), entry("7", "c")]);
        let twice = sort_by_period(once.clone());
        assert_eq!(periods(&once), periods(&twice));
    }

    #[test]
    fn test_non_numeric_periods_sort_first() {
        let sorted = sort_by_period(vec![entry("2", "영어"), entry("", "조회"), entry("1", "국어")]);
        assert_eq!(periods(&sorted), vec!["", "1", "2"]);
    }

    #[test]
    fn test_duplicate_periods_keep_input_order() {
        let sorted = sort_by_period(vec![entry("1", "first"), entry("1", "second")]);
        assert_eq!(sorted[0].subject, "first");
        assert_eq!(sorted[1].subject, "second");
    }
}

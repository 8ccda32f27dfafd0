use crate::date_key::DateKey;
use crate::models::UserProgress;
use crate::records::DayRecords;

/// Recomputes `current_streak` for the given day and raises `best_streak`
/// when the new value beats it. Sorts the success list as a side effect.
///
/// Missed days play no part here; only gaps in the success list break a
/// streak. A streak that is broken never lowers `best_streak`.
pub fn calculate_streak(progress: &mut UserProgress, today: DateKey) {
    if progress.records.success_days.is_empty() {
        progress.current_streak = 0;
        return;
    }

    progress.records.sort_success_days();

    let yesterday = today.pred();
    let has_yesterday = progress.records.is_success(yesterday);

    if progress.records.is_success(today) || has_yesterday {
        // The walk always starts at today, so a streak that ends yesterday
        // counts as 0 until today is marked as well.
        progress.current_streak = walk_back(&progress.records, today);
        if progress.current_streak > progress.best_streak {
            progress.best_streak = progress.current_streak;
        }
    } else {
        progress.current_streak = 0;
    }
}

/// Number of consecutive success days ending at `from`, inclusive.
pub fn walk_back(records: &DayRecords, from: DateKey) -> u32 {
    let mut streak = 0;
    let mut cursor = from;
    while records.is_success(cursor) {
        streak += 1;
        cursor = cursor.pred();
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> DateKey {
        DateKey::from_ymd(2024, 1, d).unwrap()
    }

    fn progress_with(days: &[u32]) -> UserProgress {
        let mut progress = UserProgress::default();
        for d in days {
            progress.records.add_success(day(*d));
        }
        progress
    }

    #[test]
    fn three_consecutive_days_ending_today() {
        let mut progress = progress_with(&[1, 2, 3]);
        calculate_streak(&mut progress, day(3));
        assert_eq!(progress.current_streak, 3);
        assert_eq!(progress.best_streak, 3);
    }

    #[test]
    fn gap_breaks_streak_and_keeps_best() {
        let mut progress = progress_with(&[1]);
        progress.current_streak = 4;
        progress.best_streak = 7;
        calculate_streak(&mut progress, day(3));
        assert_eq!(progress.current_streak, 0);
        assert_eq!(progress.best_streak, 7);
    }

    #[test]
    fn yesterday_only_counts_as_zero() {
        let mut progress = progress_with(&[2]);
        calculate_streak(&mut progress, day(3));
        assert_eq!(progress.current_streak, 0);
        assert_eq!(progress.best_streak, 0);
    }

    #[test]
    fn empty_success_list_leaves_best_untouched() {
        let mut progress = UserProgress {
            current_streak: 2,
            best_streak: 9,
            ..UserProgress::default()
        };
        calculate_streak(&mut progress, day(3));
        assert_eq!(progress.current_streak, 0);
        assert_eq!(progress.best_streak, 9);
    }

    #[test]
    fn best_is_not_lowered_by_a_shorter_streak() {
        let mut progress = progress_with(&[10, 11, 12, 13, 14]);
        calculate_streak(&mut progress, day(14));
        assert_eq!(progress.best_streak, 5);

        progress.records.remove_success(day(12));
        calculate_streak(&mut progress, day(14));
        assert_eq!(progress.current_streak, 2);
        assert_eq!(progress.best_streak, 5);
    }

    #[test]
    fn sorts_success_days_ascending() {
        let mut progress = progress_with(&[3, 1, 2]);
        calculate_streak(&mut progress, day(3));
        assert_eq!(progress.records.success_days, vec![day(1), day(2), day(3)]);
    }

    #[test]
    fn missed_days_are_ignored() {
        let mut progress = progress_with(&[2, 3]);
        progress.records.add_missed(day(1));
        calculate_streak(&mut progress, day(3));
        assert_eq!(progress.current_streak, 2);
    }

    #[test]
    fn walk_crosses_month_boundary() {
        let mut progress = UserProgress::default();
        progress.records.add_success(DateKey::from_ymd(2024, 1, 31).unwrap());
        progress.records.add_success(DateKey::from_ymd(2024, 2, 1).unwrap());
        let today = DateKey::from_ymd(2024, 2, 1).unwrap();
        calculate_streak(&mut progress, today);
        assert_eq!(progress.current_streak, 2);
    }
}

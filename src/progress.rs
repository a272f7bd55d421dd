//! Progress tracking - current day pointer and completed days

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::routine::{DayRoutine, DAYS_PER_WEEK};

/// Progress record, stored as `{ "currentDay": n, "completedDays": [..] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    #[serde(default)]
    pub current_day: usize,
    /// Stored as an array; duplicates collapse on load
    #[serde(default)]
    pub completed_days: BTreeSet<usize>,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip completion of a day. Returns the new state.
    /// Out-of-range days are ignored.
    pub fn toggle_day(&mut self, day: usize) -> bool {
        if day >= DAYS_PER_WEEK {
            return false;
        }
        if !self.completed_days.remove(&day) {
            self.completed_days.insert(day);
            return true;
        }
        false
    }

    pub fn is_completed(&self, day: usize) -> bool {
        self.completed_days.contains(&day)
    }

    /// Move the pointer. Does not touch completion.
    pub fn set_current_day(&mut self, day: usize) -> bool {
        if day >= DAYS_PER_WEEK {
            return false;
        }
        self.current_day = day;
        true
    }

    pub fn next_day(&mut self) -> bool {
        if self.current_day + 1 < DAYS_PER_WEEK {
            self.current_day += 1;
            return true;
        }
        false
    }

    pub fn previous_day(&mut self) -> bool {
        if self.current_day > 0 {
            self.current_day -= 1;
            return true;
        }
        false
    }

    /// Completed share of the schedule, rounded to whole percent
    pub fn completion_percentage(&self, schedule_len: usize) -> u32 {
        if schedule_len == 0 {
            return 0;
        }
        (self.completed_days.len() as f64 / schedule_len as f64 * 100.0).round() as u32
    }

    /// Completed days up to and including the current one
    pub fn streak(&self) -> usize {
        self.completed_days.range(..=self.current_day).count()
    }

    pub fn completed_workouts(&self, schedule: &[DayRoutine]) -> usize {
        schedule
            .iter()
            .filter(|d| !d.is_rest_day() && self.is_completed(d.day))
            .count()
    }

    pub fn completed_rest_days(&self, schedule: &[DayRoutine]) -> usize {
        schedule
            .iter()
            .filter(|d| d.is_rest_day() && self.is_completed(d.day))
            .count()
    }

    /// Drop out-of-range entries from a loaded record
    pub fn normalize(&mut self) {
        self.completed_days.retain(|d| *d < DAYS_PER_WEEK);
        self.current_day = self.current_day.min(DAYS_PER_WEEK - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Equipment, FitnessLevel, Goal, UserProfile};
    use crate::routine::generate;

    #[test]
    fn test_progress_new() {
        let progress = Progress::new();
        assert_eq!(progress.current_day, 0);
        assert!(progress.completed_days.is_empty());
    }

    #[test]
    fn test_toggle_day_flips_membership() {
        let mut progress = Progress::new();
        assert!(progress.toggle_day(3));
        assert!(progress.is_completed(3));
        assert!(!progress.toggle_day(3));
        assert!(!progress.is_completed(3));
    }

    #[test]
    fn test_toggle_day_out_of_range_ignored() {
        let mut progress = Progress::new();
        assert!(!progress.toggle_day(7));
        assert!(progress.completed_days.is_empty());
    }

    #[test]
    fn test_toggle_does_not_move_pointer() {
        let mut progress = Progress::new();
        progress.set_current_day(5);
        progress.toggle_day(3);
        assert_eq!(progress.current_day, 5);
    }

    #[test]
    fn test_pointer_does_not_change_completion() {
        let mut progress = Progress::new();
        progress.toggle_day(1);
        progress.toggle_day(3);
        let before = progress.completed_days.clone();
        progress.set_current_day(4);
        progress.next_day();
        progress.previous_day();
        assert_eq!(progress.completed_days, before);
        assert_eq!(progress.current_day, 4);
    }

    #[test]
    fn test_set_current_day_rejects_out_of_range() {
        let mut progress = Progress::new();
        progress.set_current_day(2);
        assert!(!progress.set_current_day(9));
        assert_eq!(progress.current_day, 2);
    }

    #[test]
    fn test_next_and_previous_are_bounded() {
        let mut progress = Progress::new();
        assert!(!progress.previous_day());
        assert_eq!(progress.current_day, 0);

        for _ in 0..6 {
            assert!(progress.next_day());
        }
        assert_eq!(progress.current_day, 6);
        assert!(!progress.next_day());
        assert_eq!(progress.current_day, 6);
    }

    #[test]
    fn test_completion_percentage() {
        let mut progress = Progress::new();
        assert_eq!(progress.completion_percentage(7), 0);
        progress.toggle_day(0);
        assert_eq!(progress.completion_percentage(7), 14);
        progress.toggle_day(1);
        progress.toggle_day(2);
        assert_eq!(progress.completion_percentage(7), 43);
        for day in 3..7 {
            progress.toggle_day(day);
        }
        assert_eq!(progress.completion_percentage(7), 100);
    }

    #[test]
    fn test_completion_percentage_empty_schedule() {
        let progress = Progress::new();
        assert_eq!(progress.completion_percentage(0), 0);
    }

    #[test]
    fn test_streak_counts_days_up_to_current() {
        let mut progress = Progress::new();
        progress.toggle_day(0);
        progress.toggle_day(2);
        progress.toggle_day(5);
        progress.set_current_day(2);
        assert_eq!(progress.streak(), 2);
        progress.set_current_day(6);
        assert_eq!(progress.streak(), 3);
    }

    #[test]
    fn test_completed_split_by_kind() {
        let profile = UserProfile::new(FitnessLevel::Beginner, Goal::Strength, Equipment::None, 5);
        let schedule = generate(&profile);
        let mut progress = Progress::new();
        progress.toggle_day(0);
        progress.toggle_day(1); // rest
        progress.toggle_day(2);
        assert_eq!(progress.completed_workouts(&schedule), 2);
        assert_eq!(progress.completed_rest_days(&schedule), 1);
    }

    #[test]
    fn test_load_deduplicates_and_normalizes() {
        let json = r#"{"currentDay": 11, "completedDays": [4, 1, 4, 9]}"#;
        let mut progress: Progress = serde_json::from_str(json).unwrap();
        progress.normalize();
        assert_eq!(progress.current_day, 6);
        assert_eq!(progress.completed_days.into_iter().collect::<Vec<_>>(), vec![1, 4]);
    }

    #[test]
    fn test_serialized_shape() {
        let mut progress = Progress::new();
        progress.toggle_day(2);
        progress.set_current_day(3);
        let json = serde_json::to_value(&progress).unwrap();
        assert_eq!(json["currentDay"], 3);
        assert_eq!(json["completedDays"][0], 2);
    }
}

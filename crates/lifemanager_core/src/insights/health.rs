//! Workout log figures.

use crate::model::record::Record;
use crate::model::workout::Workout;
use chrono::{DateTime, Duration, Utc};

/// Rough energy estimate used by the workout list.
pub const KCAL_PER_MINUTE: u32 = 5;

pub fn estimated_kcal(workout: &Workout) -> u32 {
    workout.duration.saturating_mul(KCAL_PER_MINUTE)
}

pub fn total_minutes(workouts: &[Record<Workout>]) -> u64 {
    workouts
        .iter()
        .map(|record| u64::from(record.fields.duration))
        .sum()
}

/// Workouts dated within `window` before `now` (inclusive), ignoring future entries.
pub fn workouts_within(
    workouts: &[Record<Workout>],
    now: DateTime<Utc>,
    window: Duration,
) -> usize {
    let since = now - window;
    workouts
        .iter()
        .filter(|record| record.fields.date >= since && record.fields.date <= now)
        .count()
}

/// Workouts logged during the trailing seven days.
pub fn workouts_this_week(workouts: &[Record<Workout>]) -> usize {
    workouts_within(workouts, Utc::now(), Duration::days(7))
}

pub fn sort_newest_first(workouts: &mut [Record<Workout>]) {
    workouts.sort_by(|left, right| right.fields.date.cmp(&left.fields.date));
}

#[cfg(test)]
mod tests {
    use super::{estimated_kcal, sort_newest_first, total_minutes, workouts_within};
    use crate::model::record::Record;
    use crate::model::workout::Workout;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn window_counts_recent_past_entries_only() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        let mut workouts = vec![
            Record::new(None, Workout::new("Yoga", 45, now - Duration::days(1))),
            Record::new(None, Workout::default_at(now - Duration::days(8))),
            Record::new(None, Workout::new("HIIT", 20, now + Duration::hours(2))),
            Record::new(None, Workout::new("Cardio", 25, now)),
        ];

        assert_eq!(workouts_within(&workouts, now, Duration::days(7)), 2);
        assert_eq!(total_minutes(&workouts), 120);

        sort_newest_first(&mut workouts);
        let kinds: Vec<&str> = workouts.iter().map(|r| r.fields.kind.as_str()).collect();
        assert_eq!(kinds, vec!["HIIT", "Cardio", "Yoga", "Strength"]);
    }

    #[test]
    fn kcal_estimate_is_five_per_minute() {
        let workout = Workout::default_at(Utc::now());
        assert_eq!(estimated_kcal(&workout), 150);
    }
}

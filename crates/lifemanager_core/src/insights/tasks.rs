//! Task list orderings and counts.

use crate::model::record::Record;
use crate::model::task::Task;
use std::cmp::Ordering;

/// Orders tasks for the pending view.
///
/// Open tasks come before done tasks. Within each group tasks are ordered by
/// due date ascending, with undated tasks after dated ones. The sort is
/// stable, so equal keys keep their stored order.
pub fn sort_pending_first(tasks: &mut [Record<Task>]) {
    tasks.sort_by(|left, right| compare_pending(&left.fields, &right.fields));
}

fn compare_pending(left: &Task, right: &Task) -> Ordering {
    left.is_done()
        .cmp(&right.is_done())
        .then_with(|| match (left.due_date, right.due_date) {
            (Some(left_due), Some(right_due)) => left_due.cmp(&right_due),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

/// Number of tasks not yet done.
pub fn active_task_count(tasks: &[Record<Task>]) -> usize {
    tasks.iter().filter(|record| !record.fields.is_done()).count()
}

#[cfg(test)]
mod tests {
    use super::{active_task_count, sort_pending_first};
    use crate::model::record::Record;
    use crate::model::task::{Task, TaskStatus};
    use chrono::{Days, NaiveDate};

    fn record(task: Task) -> Record<Task> {
        Record::new(None, task)
    }

    #[test]
    fn done_last_then_due_date_then_undated() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let plus = |days| today.checked_add_days(Days::new(days)).unwrap();

        let mut done = Task::new("done").with_due_date(today);
        done.status = TaskStatus::Done;
        let mut tasks = vec![
            record(done),
            record(Task::new("t+2").with_due_date(plus(2))),
            record(Task::new("t+1").with_due_date(plus(1))),
            record(Task::new("undated")),
        ];

        sort_pending_first(&mut tasks);

        let titles: Vec<&str> = tasks.iter().map(|r| r.fields.title.as_str()).collect();
        assert_eq!(titles, vec!["t+1", "t+2", "undated", "done"]);
        assert_eq!(active_task_count(&tasks), 3);
    }

    #[test]
    fn undated_open_tasks_keep_stored_order() {
        let mut tasks = vec![
            record(Task::new("first")),
            record(Task::new("second")),
            record(Task::new("third")),
        ];

        sort_pending_first(&mut tasks);

        let titles: Vec<&str> = tasks.iter().map(|r| r.fields.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }
}

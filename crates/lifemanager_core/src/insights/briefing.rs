//! Morning briefing figures for the dashboard.

use super::ledger::daily_spend_on;
use super::tasks::active_task_count;
use crate::model::record::Record;
use crate::model::task::Task;
use crate::model::transaction::Transaction;
use chrono::{Local, NaiveDate, TimeZone};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MorningBriefing {
    pub active_tasks: usize,
    pub spent_today: f64,
}

impl MorningBriefing {
    /// Briefing for calendar `day` as observed in `tz`.
    pub fn on<Tz: TimeZone>(
        tasks: &[Record<Task>],
        transactions: &[Record<Transaction>],
        day: NaiveDate,
        tz: &Tz,
    ) -> Self {
        Self {
            active_tasks: active_task_count(tasks),
            spent_today: daily_spend_on(transactions, day, tz),
        }
    }

    /// Briefing for today in local time.
    pub fn today(tasks: &[Record<Task>], transactions: &[Record<Transaction>]) -> Self {
        Self::on(tasks, transactions, Local::now().date_naive(), &Local)
    }
}

//! Workout log entity.

use super::record::{Collection, Entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const WORKOUT_TYPES: &[&str] = &["Strength", "Cardio", "HIIT", "Yoga", "Sports"];
pub const DEFAULT_WORKOUT_TYPE: &str = "Strength";
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Free text; `WORKOUT_TYPES` lists the suggested values.
    #[serde(rename = "type")]
    pub kind: String,
    /// Minutes.
    pub duration: u32,
    #[serde(default)]
    pub notes: String,
    pub date: DateTime<Utc>,
}

impl Workout {
    pub fn new(kind: impl Into<String>, duration: u32, date: DateTime<Utc>) -> Self {
        Self {
            kind: kind.into(),
            duration,
            notes: String::new(),
            date,
        }
    }

    /// Default log entry: a 30 minute strength session.
    pub fn default_at(date: DateTime<Utc>) -> Self {
        Self::new(DEFAULT_WORKOUT_TYPE, DEFAULT_DURATION_MINUTES, date)
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorkoutPatch {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

impl Entity for Workout {
    const COLLECTION: Collection = Collection::Workouts;
    type Patch = WorkoutPatch;

    fn apply_patch(&mut self, patch: WorkoutPatch) {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
    }
}

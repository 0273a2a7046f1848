use std::fmt;

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RoutineCategory {
    Exercise,
    Nutrition,
    Water,
    Sleep,
    Medication,
}

impl RoutineCategory {
    pub const ALL: [RoutineCategory; 5] = [
        RoutineCategory::Exercise,
        RoutineCategory::Nutrition,
        RoutineCategory::Water,
        RoutineCategory::Sleep,
        RoutineCategory::Medication,
    ];
}

impl fmt::Display for RoutineCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RoutineCategory::Exercise => "Exercise",
            RoutineCategory::Nutrition => "Nutrition",
            RoutineCategory::Water => "Water",
            RoutineCategory::Sleep => "Sleep",
            RoutineCategory::Medication => "Medication",
        };
        write!(f, "{}", label)
    }
}

/// One step of the user's daily plan.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct RoutineEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub time_of_day: NaiveTime,
    pub activity: String,
    pub category: RoutineCategory,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Raw form input for a new routine step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineDraft {
    pub time_of_day: Option<NaiveTime>,
    pub activity: String,
    pub category: RoutineCategory,
}

impl Default for RoutineDraft {
    fn default() -> Self {
        Self {
            time_of_day: None,
            activity: String::new(),
            category: RoutineCategory::Exercise,
        }
    }
}

impl RoutineDraft {
    pub fn with_time_of_day(mut self, time_of_day: Option<NaiveTime>) -> Self {
        self.time_of_day = time_of_day;
        self
    }

    pub fn with_activity(mut self, activity: impl Into<String>) -> Self {
        self.activity = activity.into();
        self
    }

    /// Switch category. A previously chosen activity only makes sense within
    /// its own category's option list, so it is cleared on any change.
    pub fn with_category(mut self, category: RoutineCategory) -> Self {
        if category != self.category {
            self.activity.clear();
        }
        self.category = category;
        self
    }
}

/// A routine step that passed validation, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRoutine {
    pub time_of_day: NaiveTime,
    pub activity: String,
    pub category: RoutineCategory,
}

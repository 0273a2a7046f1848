use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct SleepRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub duration_minutes: i32,
    /// 1 (very poor) to 5 (very good).
    pub quality_rating: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepDraft {
    pub duration_minutes: Option<i32>,
    pub quality_rating: Option<i32>,
}

impl SleepDraft {
    pub fn with_duration_minutes(mut self, value: Option<i32>) -> Self {
        self.duration_minutes = value;
        self
    }

    pub fn with_quality_rating(mut self, value: Option<i32>) -> Self {
        self.quality_rating = value;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewSleepSession {
    pub duration_minutes: i32,
    pub quality_rating: i32,
}

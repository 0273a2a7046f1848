use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct WaterIntakeRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount_ml: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterIntakeDraft {
    pub amount_ml: Option<i32>,
}

impl WaterIntakeDraft {
    pub fn with_amount_ml(mut self, value: Option<i32>) -> Self {
        self.amount_ml = value;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewWaterIntake {
    pub amount_ml: i32,
}

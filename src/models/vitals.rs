use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored vital-sign measurement. Append-only: every submission is a new row.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct VitalSignRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub systolic: i32,
    pub diastolic: i32,
    pub heart_rate: i32,
    pub oxygen_level: i32,
    pub created_at: DateTime<Utc>,
}

/// Raw form input for a vital-sign measurement. `None` means the field was
/// left empty or did not parse as a number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalSignDraft {
    pub systolic: Option<i32>,
    pub diastolic: Option<i32>,
    pub heart_rate: Option<i32>,
    pub oxygen_level: Option<i32>,
}

impl VitalSignDraft {
    pub fn with_systolic(mut self, value: Option<i32>) -> Self {
        self.systolic = value;
        self
    }

    pub fn with_diastolic(mut self, value: Option<i32>) -> Self {
        self.diastolic = value;
        self
    }

    pub fn with_heart_rate(mut self, value: Option<i32>) -> Self {
        self.heart_rate = value;
        self
    }

    pub fn with_oxygen_level(mut self, value: Option<i32>) -> Self {
        self.oxygen_level = value;
        self
    }
}

/// A vital-sign measurement that passed validation, ready to insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewVitalSigns {
    pub systolic: i32,
    pub diastolic: i32,
    pub heart_rate: i32,
    pub oxygen_level: i32,
}

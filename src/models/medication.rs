use std::fmt;

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// How often a medication is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    TwiceDaily,
    ThreeTimesDaily,
    FourTimesDaily,
    Weekly,
    Monthly,
    AsNeeded,
}

impl Frequency {
    pub const ALL: [Frequency; 7] = [
        Frequency::Daily,
        Frequency::TwiceDaily,
        Frequency::ThreeTimesDaily,
        Frequency::FourTimesDaily,
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::AsNeeded,
    ];
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::Daily => "Once a day",
            Frequency::TwiceDaily => "Twice a day",
            Frequency::ThreeTimesDaily => "Three times a day",
            Frequency::FourTimesDaily => "Four times a day",
            Frequency::Weekly => "Once a week",
            Frequency::Monthly => "Once a month",
            Frequency::AsNeeded => "As needed",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MedicationCategory {
    Prescription,
    Vitamin,
    Supplement,
    Chronic,
    Temporary,
}

impl MedicationCategory {
    pub const ALL: [MedicationCategory; 5] = [
        MedicationCategory::Prescription,
        MedicationCategory::Vitamin,
        MedicationCategory::Supplement,
        MedicationCategory::Chronic,
        MedicationCategory::Temporary,
    ];
}

impl fmt::Display for MedicationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MedicationCategory::Prescription => "Prescription medications",
            MedicationCategory::Vitamin => "Vitamins",
            MedicationCategory::Supplement => "Supplements",
            MedicationCategory::Chronic => "Chronic medications",
            MedicationCategory::Temporary => "Temporary medications",
        };
        write!(f, "{}", label)
    }
}

/// A medication in the user's schedule.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct MedicationEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub dosage: String,
    pub frequency: Frequency,
    pub time_of_day: NaiveTime,
    pub category: MedicationCategory,
    pub notes: Option<String>,
    /// Stored but inert: no delivery mechanism is wired up.
    pub reminder_enabled: bool,
    pub created_at: DateTime<Utc>,
}

/// Read-only reference data the user picks medications from.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct MedicationCatalogOption {
    pub id: Uuid,
    pub name: String,
    pub category: MedicationCategory,
    pub default_dosage: String,
    pub default_frequency: Frequency,
    pub notes: Option<String>,
}

/// Raw form input for a new medication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationDraft {
    pub name: String,
    pub dosage: String,
    pub frequency: Frequency,
    pub time_of_day: Option<NaiveTime>,
    pub category: MedicationCategory,
    pub notes: String,
    pub reminder_enabled: bool,
}

impl Default for MedicationDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            dosage: String::new(),
            frequency: Frequency::Daily,
            time_of_day: None,
            category: MedicationCategory::Prescription,
            notes: String::new(),
            reminder_enabled: true,
        }
    }
}

impl MedicationDraft {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_dosage(mut self, dosage: impl Into<String>) -> Self {
        self.dosage = dosage.into();
        self
    }

    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_time_of_day(mut self, time_of_day: Option<NaiveTime>) -> Self {
        self.time_of_day = time_of_day;
        self
    }

    pub fn with_category(mut self, category: MedicationCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_reminder_enabled(mut self, enabled: bool) -> Self {
        self.reminder_enabled = enabled;
        self
    }

    /// Fill the draft from a catalog option. Overwrites name, dosage,
    /// frequency, notes and category; the time of day and reminder flag
    /// stay whatever the user set.
    pub fn apply_option(mut self, option: &MedicationCatalogOption) -> Self {
        self.name = option.name.clone();
        self.dosage = option.default_dosage.clone();
        self.frequency = option.default_frequency;
        self.notes = option.notes.clone().unwrap_or_default();
        self.category = option.category;
        self
    }
}

/// A medication that passed validation, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMedication {
    pub name: String,
    pub dosage: String,
    pub frequency: Frequency,
    pub time_of_day: NaiveTime,
    pub category: MedicationCategory,
    pub notes: Option<String>,
    pub reminder_enabled: bool,
}

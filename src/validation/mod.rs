//! Pure validators for user-submitted drafts. No I/O, no side effects.
//!
//! Each validator checks fields in a fixed, documented order and returns the
//! first violation found, so the UI shows a single error message at a time.
//! All bounds are inclusive. On success the validator hands back the typed
//! insert payload so nothing unvalidated reaches the store.

pub mod error;

pub use error::{Field, ValidationError, Violation};

use crate::models::medication::{MedicationDraft, NewMedication};
use crate::models::routine::{NewRoutine, RoutineDraft};
use crate::models::sleep::{NewSleepSession, SleepDraft};
use crate::models::vitals::{NewVitalSigns, VitalSignDraft};
use crate::models::water::{NewWaterIntake, WaterIntakeDraft};

/// Check order: systolic, diastolic, heart rate, oxygen level.
pub fn validate_vital_signs(draft: &VitalSignDraft) -> Result<NewVitalSigns, ValidationError> {
    let systolic = require_in_range(draft.systolic, Field::Systolic, 70, 200)?;
    let diastolic = require_in_range(draft.diastolic, Field::Diastolic, 40, 130)?;
    let heart_rate = require_in_range(draft.heart_rate, Field::HeartRate, 40, 200)?;
    let oxygen_level = require_in_range(draft.oxygen_level, Field::OxygenLevel, 80, 100)?;
    Ok(NewVitalSigns {
        systolic,
        diastolic,
        heart_rate,
        oxygen_level,
    })
}

pub fn validate_water_intake(draft: &WaterIntakeDraft) -> Result<NewWaterIntake, ValidationError> {
    let amount_ml = require_in_range(draft.amount_ml, Field::AmountMl, 0, 5000)?;
    Ok(NewWaterIntake { amount_ml })
}

/// Check order: duration, quality rating.
pub fn validate_sleep_session(draft: &SleepDraft) -> Result<NewSleepSession, ValidationError> {
    let duration_minutes = require_in_range(draft.duration_minutes, Field::DurationMinutes, 0, 1440)?;
    let quality_rating = require_in_range(draft.quality_rating, Field::QualityRating, 1, 5)?;
    Ok(NewSleepSession {
        duration_minutes,
        quality_rating,
    })
}

/// Check order: name, dosage, time of day. Frequency and category are closed
/// enums and need no checking.
pub fn validate_medication(draft: &MedicationDraft) -> Result<NewMedication, ValidationError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(ValidationError::new(Field::Name, Violation::Missing));
    }
    if name.chars().count() < 2 {
        return Err(ValidationError::new(
            Field::Name,
            Violation::TooShort { min_len: 2 },
        ));
    }
    let dosage = draft.dosage.trim();
    if dosage.is_empty() {
        return Err(ValidationError::new(Field::Dosage, Violation::Missing));
    }
    let time_of_day = draft
        .time_of_day
        .ok_or_else(|| ValidationError::new(Field::TimeOfDay, Violation::Missing))?;
    let notes = draft.notes.trim();
    Ok(NewMedication {
        name: name.to_string(),
        dosage: dosage.to_string(),
        frequency: draft.frequency,
        time_of_day,
        category: draft.category,
        notes: (!notes.is_empty()).then(|| notes.to_string()),
        reminder_enabled: draft.reminder_enabled,
    })
}

/// Check order: time of day, activity.
pub fn validate_routine(draft: &RoutineDraft) -> Result<NewRoutine, ValidationError> {
    let time_of_day = draft
        .time_of_day
        .ok_or_else(|| ValidationError::new(Field::TimeOfDay, Violation::Missing))?;
    let activity = draft.activity.trim();
    if activity.is_empty() {
        return Err(ValidationError::new(Field::Activity, Violation::Missing));
    }
    Ok(NewRoutine {
        time_of_day,
        activity: activity.to_string(),
        category: draft.category,
    })
}

fn require_in_range(
    value: Option<i32>,
    field: Field,
    min: i32,
    max: i32,
) -> Result<i32, ValidationError> {
    let value = value.ok_or_else(|| ValidationError::new(field, Violation::Missing))?;
    if value < min || value > max {
        return Err(ValidationError::new(field, Violation::OutOfRange { min, max }));
    }
    Ok(value)
}

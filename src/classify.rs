//! Display-side classification of stored vitals against clinical-normal
//! bands. Independent of the write-path validators: a measurement can be
//! accepted for storage (survival bounds) and still be flagged here
//! (attention bounds). Nothing in this module blocks a write or persists.

use crate::models::vitals::VitalSignRecord;
use crate::models::water::WaterIntakeRecord;

/// Normal bands: systolic 90-140 / diastolic 60-90, heart rate 60-100,
/// oxygen >= 95.
pub const NORMAL_SYSTOLIC: (i32, i32) = (90, 140);
pub const NORMAL_DIASTOLIC: (i32, i32) = (60, 90);
pub const NORMAL_HEART_RATE: (i32, i32) = (60, 100);
pub const NORMAL_OXYGEN_MIN: i32 = 95;

/// Daily water intake target in millilitres.
pub const DAILY_WATER_GOAL_ML: i32 = 2500;

/// Per-metric attention flags for the latest vitals snapshot. `true` means
/// the metric is outside its normal band and the UI should mark it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct VitalFlags {
    pub blood_pressure: bool,
    pub heart_rate: bool,
    pub oxygen_level: bool,
}

impl VitalFlags {
    pub fn any(&self) -> bool {
        self.blood_pressure || self.heart_rate || self.oxygen_level
    }
}

pub fn classify_vitals(record: &VitalSignRecord) -> VitalFlags {
    VitalFlags {
        blood_pressure: outside(record.systolic, NORMAL_SYSTOLIC)
            || outside(record.diastolic, NORMAL_DIASTOLIC),
        heart_rate: outside(record.heart_rate, NORMAL_HEART_RATE),
        oxygen_level: record.oxygen_level < NORMAL_OXYGEN_MIN,
    }
}

/// Percentage of the daily water goal covered by the latest intake, capped
/// at 100.
pub fn water_goal_progress(record: &WaterIntakeRecord) -> u8 {
    let percent = record.amount_ml.max(0) * 100 / DAILY_WATER_GOAL_ML;
    percent.min(100) as u8
}

fn outside(value: i32, (min, max): (i32, i32)) -> bool {
    value < min || value > max
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn record(systolic: i32, diastolic: i32, heart_rate: i32, oxygen_level: i32) -> VitalSignRecord {
        VitalSignRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            systolic,
            diastolic,
            heart_rate,
            oxygen_level,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn normal_snapshot_has_no_flags() {
        let flags = classify_vitals(&record(120, 80, 70, 98));
        assert_eq!(flags, VitalFlags::default());
        assert!(!flags.any());
    }

    #[test]
    fn valid_measurement_can_still_be_flagged() {
        // 150 mmHg passes the write-path validator (<= 200) but sits outside
        // the 90-140 normal band.
        let flags = classify_vitals(&record(150, 80, 70, 98));
        assert!(flags.blood_pressure);
        assert!(!flags.heart_rate);
        assert!(!flags.oxygen_level);
    }

    #[test]
    fn flags_are_independent_per_metric() {
        let flags = classify_vitals(&record(120, 80, 55, 93));
        assert!(!flags.blood_pressure);
        assert!(flags.heart_rate);
        assert!(flags.oxygen_level);
    }

    #[test]
    fn band_edges_are_normal() {
        assert!(!classify_vitals(&record(90, 60, 60, 95)).any());
        assert!(!classify_vitals(&record(140, 90, 100, 100)).any());
        assert!(classify_vitals(&record(141, 90, 100, 100)).blood_pressure);
        assert!(classify_vitals(&record(140, 59, 100, 100)).blood_pressure);
        assert!(classify_vitals(&record(140, 90, 101, 100)).heart_rate);
        assert!(classify_vitals(&record(140, 90, 100, 94)).oxygen_level);
    }

    #[test]
    fn water_progress_caps_at_hundred() {
        let water = |amount_ml| WaterIntakeRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            amount_ml,
            created_at: Utc::now(),
        };
        assert_eq!(water_goal_progress(&water(0)), 0);
        assert_eq!(water_goal_progress(&water(1250)), 50);
        assert_eq!(water_goal_progress(&water(2500)), 100);
        assert_eq!(water_goal_progress(&water(5000)), 100);
    }
}

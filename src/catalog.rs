//! Category-scoped option catalogs. Medication options are reference data
//! fetched from the store; routine activities are a fixed catalog keyed by
//! the closed category enum, so an unmapped category cannot exist.

use crate::models::medication::{MedicationCatalogOption, MedicationCategory};
use crate::models::routine::RoutineCategory;

/// Options permissible under `category`, in the order the full catalog was
/// fetched (the store orders by name). Recomputed from the full catalog on
/// every call, never cached.
pub fn medication_options_for(
    catalog: &[MedicationCatalogOption],
    category: MedicationCategory,
) -> Vec<&MedicationCatalogOption> {
    catalog
        .iter()
        .filter(|option| option.category == category)
        .collect()
}

impl RoutineCategory {
    /// The activities offered for this category. Total over the enum.
    pub fn activities(&self) -> &'static [&'static str] {
        match self {
            RoutineCategory::Exercise => &[
                "Morning walk (30 minutes)",
                "Yoga and stretching (20 minutes)",
                "Cardio workout (45 minutes)",
                "Strength training (40 minutes)",
                "Evening walk (30 minutes)",
            ],
            RoutineCategory::Nutrition => &[
                "Breakfast (protein-rich)",
                "Snack (fruit and nuts)",
                "Lunch (vegetable-rich)",
                "Afternoon snack (yogurt and fruit)",
                "Dinner (light protein)",
            ],
            RoutineCategory::Water => &[
                "2 glasses of water in the morning",
                "3 glasses of water before noon",
                "2 glasses of water after lunch",
                "2 glasses of water in the afternoon",
                "1 glass of water in the evening",
            ],
            RoutineCategory::Sleep => &[
                "Start of evening routine",
                "Switch off electronic devices",
                "Light exercise and stretching",
                "Meditation and breathing exercise",
                "Bedtime",
            ],
            RoutineCategory::Medication => &[
                "Morning vitamin supplement",
                "Midday medication doses",
                "Evening vitamin supplement",
                "Night medication doses",
                "Weekly medication organisation",
            ],
        }
    }
}

use std::fmt;

/// Machine-checkable identifier of the field a validator rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Systolic,
    Diastolic,
    HeartRate,
    OxygenLevel,
    AmountMl,
    DurationMinutes,
    QualityRating,
    Name,
    Dosage,
    TimeOfDay,
    Activity,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Systolic => "Systolic blood pressure",
            Field::Diastolic => "Diastolic blood pressure",
            Field::HeartRate => "Heart rate",
            Field::OxygenLevel => "Oxygen level",
            Field::AmountMl => "Water amount",
            Field::DurationMinutes => "Sleep duration",
            Field::QualityRating => "Sleep quality",
            Field::Name => "Medication name",
            Field::Dosage => "Dosage",
            Field::TimeOfDay => "Time",
            Field::Activity => "Activity",
        }
    }

    fn unit(&self) -> Option<&'static str> {
        match self {
            Field::Systolic | Field::Diastolic => Some("mmHg"),
            Field::HeartRate => Some("bpm"),
            Field::OxygenLevel => Some("%"),
            Field::AmountMl => Some("ml"),
            Field::DurationMinutes => Some("minutes"),
            _ => None,
        }
    }
}

/// Which bound a field violated. Missing/invalid input is deliberately
/// distinct from a value outside its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Missing,
    OutOfRange { min: i32, max: i32 },
    TooShort { min_len: usize },
}

/// Rejection of a draft: the first violation found in the documented
/// field-check order for its record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    pub violation: Violation,
}

impl ValidationError {
    pub fn new(field: Field, violation: Violation) -> Self {
        Self { field, violation }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.violation {
            Violation::Missing => write!(f, "{} is required", self.field.label()),
            Violation::OutOfRange { min, max } => match self.field.unit() {
                Some(unit) => write!(
                    f,
                    "{} must be between {} and {} {}",
                    self.field.label(),
                    min,
                    max,
                    unit
                ),
                None => write!(f, "{} must be between {} and {}", self.field.label(), min, max),
            },
            Violation::TooShort { min_len } => write!(
                f,
                "{} must be at least {} characters",
                self.field.label(),
                min_len
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

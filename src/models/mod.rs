pub mod medication;
pub mod routine;
pub mod sleep;
pub mod vitals;
pub mod water;

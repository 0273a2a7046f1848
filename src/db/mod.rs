pub mod catalog;
pub mod medications;
pub mod routines;
pub mod sleep;
pub mod vitals;
pub mod water;

//! Core domain layer. No external I/O dependencies.
//!
//! Form entities, bedtime arithmetic and errors live here. Dependencies flow inward.

pub mod bedtime;
pub mod entities;
pub mod errors;

pub use bedtime::bedtime_for;
pub use entities::{
    BedtimeAnswer, ClockFormat, CoffeeIntake, EstimatorInputs, Notice, PredictionResult,
    SleepAmount, WakeTime,
};
pub use errors::DomainError;

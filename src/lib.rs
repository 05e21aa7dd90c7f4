//! better-rest: bedtime recommendation from wake time, desired sleep and coffee intake.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;

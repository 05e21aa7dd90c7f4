//! Infrastructure adapters. Implement ports.
//!
//! Sleep models (outbound) and the terminal form (inbound). Map errors to DomainError.

pub mod model;
pub mod ui;

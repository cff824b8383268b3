//! Core library for the QAP comparison service: rubric scoring engines,
//! the amenity lookup boundary, and the side-by-side comparison workflow.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

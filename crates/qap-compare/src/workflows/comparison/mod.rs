//! Side-by-side comparison of a California and an Ohio LIHTC project.
//!
//! The rubric engines are pure functions over value types; the only
//! asynchronous boundary is the amenity lookup, which runs once per project
//! per comparison. The service retains nothing between runs.

pub mod amenities;
pub mod domain;
pub mod router;
pub mod rubric;
pub mod samples;
pub mod service;

#[cfg(test)]
mod tests;

pub use amenities::{AmenityLookup, AmenityLookupError, AmenitySnapshot, StaticAmenityCatalog};
pub use domain::{
    AmenityCounts, CaliforniaProjectProfile, Coordinates, OhioProjectProfile, ProjectState,
};
pub use router::comparison_router;
pub use rubric::{
    composite_score, score_california_project, score_location, score_ohio_project, ScoreBreakdown,
    ScoreEntry,
};
pub use samples::SampleError;
pub use service::{
    ComparisonError, ComparisonReport, ComparisonRequest, ComparisonService, ProjectScorecard,
};

mod catalog;

pub use catalog::{zip_codes_for, StaticAmenityCatalog, CALIFORNIA_CITIES, OHIO_CITIES};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::workflows::comparison::domain::{AmenityCounts, Coordinates};

/// Neighborhood data resolved for one project location. Coordinates are
/// absent when the backend cannot place the city on a map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmenitySnapshot {
    pub counts: AmenityCounts,
    pub coordinates: Option<Coordinates>,
}

/// Error raised by amenity backends.
#[derive(Debug, thiserror::Error)]
pub enum AmenityLookupError {
    #[error("amenity service unavailable: {0}")]
    Unavailable(String),
}

/// Boundary to the geodata backend, kept asynchronous so the static catalog
/// can be swapped for a real service without touching the scoring engine.
///
/// Implementations must resolve for any `(city, state)` pair — an unknown
/// location falls back to default data rather than erroring.
#[async_trait]
pub trait AmenityLookup: Send + Sync {
    async fn lookup(&self, city: &str, state: &str)
        -> Result<AmenitySnapshot, AmenityLookupError>;
}

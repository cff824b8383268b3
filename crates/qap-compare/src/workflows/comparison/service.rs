use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::amenities::{AmenityLookup, AmenityLookupError, AmenitySnapshot};
use super::domain::{
    AmenityCounts, CaliforniaProjectProfile, Coordinates, OhioProjectProfile, ProjectState,
};
use super::rubric::{
    composite_score, score_california_project, score_location, score_ohio_project, ScoreBreakdown,
};

/// Pair of projects submitted for a side-by-side run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRequest {
    pub california: CaliforniaProjectProfile,
    pub ohio: OhioProjectProfile,
}

/// Scores and supporting data for one project within a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectScorecard {
    pub state: ProjectState,
    pub city: String,
    pub rubric: ScoreBreakdown,
    pub location: ScoreBreakdown,
    pub rubric_total: f64,
    pub location_total: f64,
    pub composite: f64,
    pub amenities: AmenityCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// Comparison output consumed by the API, the CLI demo, and the map/export
/// collaborators. Echoes the submitted profiles so exporters need no second
/// source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub generated_at: DateTime<Utc>,
    pub projects: ComparisonRequest,
    pub california: ProjectScorecard,
    pub ohio: ProjectScorecard,
}

/// Error raised while assembling a comparison. The rubric engines are total,
/// so the amenity boundary is the only failure source.
#[derive(Debug, thiserror::Error)]
pub enum ComparisonError {
    #[error(transparent)]
    Lookup(#[from] AmenityLookupError),
}

/// Stateless orchestrator joining the amenity boundary with the rubric
/// engines. Each run is independent; nothing is retained between calls.
pub struct ComparisonService<L> {
    lookup: Arc<L>,
}

impl<L> ComparisonService<L>
where
    L: AmenityLookup + 'static,
{
    pub fn new(lookup: Arc<L>) -> Self {
        Self { lookup }
    }

    /// Run both amenity lookups concurrently and score both projects.
    ///
    /// Fail-fast: if either lookup errors, the whole comparison fails and no
    /// partial scores are produced.
    pub async fn compare(
        &self,
        request: ComparisonRequest,
    ) -> Result<ComparisonReport, ComparisonError> {
        let (california_snapshot, ohio_snapshot) = tokio::try_join!(
            self.lookup
                .lookup(&request.california.city, ProjectState::California.label()),
            self.lookup
                .lookup(&request.ohio.city, ProjectState::Ohio.label()),
        )?;

        let california = scorecard(
            ProjectState::California,
            request.california.city.clone(),
            score_california_project(&request.california),
            california_snapshot,
        );
        let ohio = scorecard(
            ProjectState::Ohio,
            request.ohio.city.clone(),
            score_ohio_project(&request.ohio),
            ohio_snapshot,
        );

        info!(
            california = california.composite,
            ohio = ohio.composite,
            "comparison scored"
        );

        Ok(ComparisonReport {
            generated_at: Utc::now(),
            projects: request,
            california,
            ohio,
        })
    }
}

fn scorecard(
    state: ProjectState,
    city: String,
    rubric: ScoreBreakdown,
    snapshot: AmenitySnapshot,
) -> ProjectScorecard {
    let location = score_location(&snapshot.counts);
    let rubric_total = rubric.total_percentage();
    let location_total = location.total_percentage();
    let composite = composite_score(&rubric, &location);

    ProjectScorecard {
        state,
        city,
        rubric,
        location,
        rubric_total,
        location_total,
        composite,
        amenities: snapshot.counts,
        coordinates: snapshot.coordinates,
    }
}

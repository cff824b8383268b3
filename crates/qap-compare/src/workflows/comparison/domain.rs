use serde::{Deserialize, Serialize};

/// States whose QAP rubrics the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectState {
    California,
    Ohio,
}

impl ProjectState {
    pub const fn label(self) -> &'static str {
        match self {
            ProjectState::California => "California",
            ProjectState::Ohio => "Ohio",
        }
    }
}

/// Project attributes captured by the intake form for the California rubric.
///
/// Categorical fields arrive as free text and are matched exactly by the
/// rubric; unrecognized values score the documented floor rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaliforniaProjectProfile {
    pub housing_type: String,
    pub construction_type: String,
    pub tax_credit_type: String,
    pub developer: String,
    pub management_company: String,
    pub address: String,
    pub city: String,
    pub zip: String,
}

/// Project attributes captured for the Ohio rubric.
///
/// Numeric fields default to zero when absent so a sparse submission scores
/// the rubric floor. Clamping to the documented ranges is the form layer's
/// job; the engine passes values through unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OhioProjectProfile {
    pub project_name: String,
    #[serde(default)]
    pub total_units: u32,
    #[serde(default)]
    pub li_units: u32,
    #[serde(default)]
    pub opportunity_index: f64,
    #[serde(default)]
    pub building_amenities: f64,
    #[serde(default)]
    pub discount_to_market_rent: f64,
    #[serde(default)]
    pub proximity_to_amenities: f64,
    #[serde(default)]
    pub pra811: f64,
    #[serde(default)]
    pub lihtc_request_per_unit: f64,
    pub address: String,
    pub city: String,
    pub zip: String,
}

/// Neighborhood amenity counts for one project location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmenityCounts {
    pub schools: u32,
    pub hospitals: u32,
    pub grocery_stores: u32,
    pub public_transport: u32,
    #[serde(rename = "commercialPOIs")]
    pub commercial_pois: u32,
}

/// Map coordinates for the embedded map collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

use async_trait::async_trait;

use crate::workflows::comparison::amenities::{
    AmenityLookup, AmenityLookupError, AmenitySnapshot,
};
use crate::workflows::comparison::domain::{
    AmenityCounts, CaliforniaProjectProfile, OhioProjectProfile,
};
use crate::workflows::comparison::service::ComparisonRequest;

/// California profile that scores the maximum in every rubric category.
pub(super) fn full_marks_california_profile() -> CaliforniaProjectProfile {
    CaliforniaProjectProfile {
        housing_type: "Large Family".to_string(),
        construction_type: "New Construction".to_string(),
        tax_credit_type: "9%".to_string(),
        developer: "Related".to_string(),
        management_company: "Related Management".to_string(),
        address: "123 Grand Ave".to_string(),
        city: "Los Angeles".to_string(),
        zip: "90012".to_string(),
    }
}

pub(super) fn ohio_profile() -> OhioProjectProfile {
    OhioProjectProfile {
        project_name: "AspireCOLUMBUS".to_string(),
        total_units: 120,
        li_units: 100,
        opportunity_index: 6.0,
        building_amenities: 10.0,
        discount_to_market_rent: 0.0,
        proximity_to_amenities: 17.0,
        pra811: 0.0,
        lihtc_request_per_unit: 10.0,
        address: "100 Main St".to_string(),
        city: "Columbus".to_string(),
        zip: "43215".to_string(),
    }
}

pub(super) fn comparison_request() -> ComparisonRequest {
    ComparisonRequest {
        california: full_marks_california_profile(),
        ohio: ohio_profile(),
    }
}

/// Amenity counts that hit the top tier in every location category.
pub(super) fn top_tier_counts() -> AmenityCounts {
    AmenityCounts {
        schools: 7,
        hospitals: 3,
        grocery_stores: 5,
        public_transport: 12,
        commercial_pois: 25,
    }
}

pub(super) fn counts(
    schools: u32,
    hospitals: u32,
    grocery_stores: u32,
    public_transport: u32,
    commercial_pois: u32,
) -> AmenityCounts {
    AmenityCounts {
        schools,
        hospitals,
        grocery_stores,
        public_transport,
        commercial_pois,
    }
}

/// Lookup double that always fails, for exercising the fail-fast path.
pub(super) struct FailingAmenityLookup;

#[async_trait]
impl AmenityLookup for FailingAmenityLookup {
    async fn lookup(
        &self,
        _city: &str,
        _state: &str,
    ) -> Result<AmenitySnapshot, AmenityLookupError> {
        Err(AmenityLookupError::Unavailable(
            "geodata backend offline".to_string(),
        ))
    }
}

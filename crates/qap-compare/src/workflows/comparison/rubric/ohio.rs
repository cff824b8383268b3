use super::ScoreBreakdown;
use crate::workflows::comparison::domain::OhioProjectProfile;

/// Score a project against the six self-scored Ohio QAP categories.
///
/// The Ohio rubric is a pass-through: the submitted value is the score, and
/// the ceiling is fixed by the rubric table. Values above a ceiling are not
/// clamped here — the form layer owns range validation — so the per-category
/// percentage can exceed 100 for out-of-range input.
pub fn score_ohio_project(project: &OhioProjectProfile) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();
    breakdown.insert("opportunityIndex", project.opportunity_index, 10.0);
    breakdown.insert("buildingAmenities", project.building_amenities, 10.0);
    breakdown.insert("discountToMarketRent", project.discount_to_market_rent, 5.0);
    breakdown.insert(
        "proximityToAmenities",
        project.proximity_to_amenities,
        17.0,
    );
    breakdown.insert("pra811", project.pra811, 5.0);
    breakdown.insert("lihtcRequestPerUnit", project.lihtc_request_per_unit, 10.0);
    breakdown
}

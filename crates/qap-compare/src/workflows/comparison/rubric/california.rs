use tracing::warn;

use super::ScoreBreakdown;
use crate::workflows::comparison::domain::CaliforniaProjectProfile;

/// Developers granted the experience incentive.
const KNOWN_DEVELOPERS: [&str; 5] = [
    "Related",
    "Bridge Housing",
    "Mercy Housing",
    "EAH Housing",
    "Meta Housing",
];

const TIER_TWO_CITIES: [&str; 3] = ["San Francisco", "San Diego", "San Jose"];
const TIER_THREE_CITIES: [&str; 3] = ["Sacramento", "Oakland", "Fresno"];

/// Score a project against the five California QAP categories.
///
/// Unrecognized categorical values score the documented floor instead of
/// failing; they usually indicate a data-entry problem upstream, so the
/// unmatched value is logged.
pub fn score_california_project(project: &CaliforniaProjectProfile) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();
    breakdown.insert("housingType", housing_type_points(&project.housing_type), 20.0);
    breakdown.insert(
        "constructionType",
        construction_type_points(&project.construction_type),
        15.0,
    );
    breakdown.insert(
        "taxCreditType",
        tax_credit_type_points(&project.tax_credit_type),
        25.0,
    );
    breakdown.insert(
        "locationIncentive",
        location_incentive_points(&project.city),
        20.0,
    );
    breakdown.insert("knownDeveloper", developer_points(&project.developer), 20.0);
    breakdown
}

fn housing_type_points(value: &str) -> f64 {
    match value {
        "Large Family" => 20.0,
        "Seniors" => 15.0,
        "Homeless" => 18.0,
        other => {
            warn!(housing_type = other, "unrecognized housing type scored zero");
            0.0
        }
    }
}

fn construction_type_points(value: &str) -> f64 {
    match value {
        "New Construction" => 15.0,
        "Rehab" => 12.0,
        other => {
            warn!(
                construction_type = other,
                "unrecognized construction type scored zero"
            );
            0.0
        }
    }
}

fn tax_credit_type_points(value: &str) -> f64 {
    match value {
        "9%" => 25.0,
        "4%" => 20.0,
        other => {
            warn!(
                tax_credit_type = other,
                "unrecognized tax credit type scored zero"
            );
            0.0
        }
    }
}

// Every city has a floor of 10 points, so no unmatched-value logging here.
fn location_incentive_points(city: &str) -> f64 {
    if city == "Los Angeles" {
        20.0
    } else if TIER_TWO_CITIES.contains(&city) {
        18.0
    } else if TIER_THREE_CITIES.contains(&city) {
        15.0
    } else {
        10.0
    }
}

fn developer_points(developer: &str) -> f64 {
    if KNOWN_DEVELOPERS.contains(&developer) {
        20.0
    } else {
        10.0
    }
}

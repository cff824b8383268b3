use super::ScoreBreakdown;
use crate::workflows::comparison::domain::AmenityCounts;

/// Every location category carries the same weight.
const CATEGORY_MAX: f64 = 20.0;

/// Score an amenity count record against the five location categories.
///
/// Tiers are ordered highest first with inclusive lower bounds, so a count
/// sitting exactly on a boundary resolves to the higher tier.
pub fn score_location(counts: &AmenityCounts) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();
    breakdown.insert("schools", schools_points(counts.schools), CATEGORY_MAX);
    breakdown.insert("hospitals", hospitals_points(counts.hospitals), CATEGORY_MAX);
    breakdown.insert(
        "groceryStores",
        grocery_stores_points(counts.grocery_stores),
        CATEGORY_MAX,
    );
    breakdown.insert(
        "publicTransport",
        public_transport_points(counts.public_transport),
        CATEGORY_MAX,
    );
    breakdown.insert(
        "commercialPOIs",
        commercial_pois_points(counts.commercial_pois),
        CATEGORY_MAX,
    );
    breakdown
}

fn schools_points(count: u32) -> f64 {
    match count {
        c if c >= 5 => 20.0,
        c if c >= 3 => 15.0,
        c if c >= 1 => 10.0,
        _ => 0.0,
    }
}

fn hospitals_points(count: u32) -> f64 {
    match count {
        c if c >= 3 => 20.0,
        2 => 15.0,
        1 => 10.0,
        _ => 0.0,
    }
}

fn grocery_stores_points(count: u32) -> f64 {
    match count {
        c if c >= 4 => 20.0,
        c if c >= 2 => 15.0,
        1 => 10.0,
        _ => 0.0,
    }
}

fn public_transport_points(count: u32) -> f64 {
    match count {
        c if c >= 10 => 20.0,
        c if c >= 5 => 15.0,
        c if c >= 1 => 10.0,
        _ => 0.0,
    }
}

fn commercial_pois_points(count: u32) -> f64 {
    match count {
        c if c >= 20 => 20.0,
        c if c >= 10 => 15.0,
        c if c >= 1 => 10.0,
        _ => 0.0,
    }
}

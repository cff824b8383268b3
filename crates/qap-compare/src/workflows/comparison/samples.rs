//! Canned example projects so the form, CLI, and demos can load a realistic
//! comparison without manual data entry.

use serde::{Deserialize, Serialize};

use super::domain::{CaliforniaProjectProfile, OhioProjectProfile};

/// Error raised when a caller asks for a sample outside the fixed set.
#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    #[error("no California sample project at index {0}")]
    UnknownCaliforniaSample(usize),
    #[error("no Ohio sample project at index {0}")]
    UnknownOhioSample(usize),
}

/// Both sample sets, shaped for the samples endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleProjects {
    pub california: Vec<CaliforniaProjectProfile>,
    pub ohio: Vec<OhioProjectProfile>,
}

pub fn sample_projects() -> SampleProjects {
    SampleProjects {
        california: california_samples(),
        ohio: ohio_samples(),
    }
}

pub fn california_sample(index: usize) -> Result<CaliforniaProjectProfile, SampleError> {
    california_samples()
        .into_iter()
        .nth(index)
        .ok_or(SampleError::UnknownCaliforniaSample(index))
}

pub fn ohio_sample(index: usize) -> Result<OhioProjectProfile, SampleError> {
    ohio_samples()
        .into_iter()
        .nth(index)
        .ok_or(SampleError::UnknownOhioSample(index))
}

#[allow(clippy::too_many_arguments)]
fn california_project(
    housing_type: &str,
    construction_type: &str,
    tax_credit_type: &str,
    developer: &str,
    management_company: &str,
    city: &str,
    zip: &str,
    address: &str,
) -> CaliforniaProjectProfile {
    CaliforniaProjectProfile {
        housing_type: housing_type.to_string(),
        construction_type: construction_type.to_string(),
        tax_credit_type: tax_credit_type.to_string(),
        developer: developer.to_string(),
        management_company: management_company.to_string(),
        address: address.to_string(),
        city: city.to_string(),
        zip: zip.to_string(),
    }
}

pub fn california_samples() -> Vec<CaliforniaProjectProfile> {
    vec![
        california_project(
            "Large Family",
            "New Construction",
            "9%",
            "Related",
            "Related Management",
            "Los Angeles",
            "90012",
            "123 Grand Ave",
        ),
        california_project(
            "Seniors",
            "New Construction",
            "9%",
            "Bridge Housing",
            "Bridge Property Management",
            "San Francisco",
            "94103",
            "456 Mission St",
        ),
        california_project(
            "Homeless",
            "Rehab",
            "4%",
            "Mercy Housing",
            "Mercy Management",
            "San Diego",
            "92101",
            "789 Harbor Dr",
        ),
        california_project(
            "Large Family",
            "New Construction",
            "9%",
            "EAH Housing",
            "EAH Management",
            "San Jose",
            "95112",
            "101 First St",
        ),
        california_project(
            "Seniors",
            "Rehab",
            "4%",
            "Meta Housing",
            "Meta Management",
            "Sacramento",
            "95814",
            "202 Capitol Mall",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn ohio_project(
    project_name: &str,
    total_units: u32,
    li_units: u32,
    opportunity_index: f64,
    building_amenities: f64,
    discount_to_market_rent: f64,
    proximity_to_amenities: f64,
    pra811: f64,
    lihtc_request_per_unit: f64,
    city: &str,
    zip: &str,
    address: &str,
) -> OhioProjectProfile {
    OhioProjectProfile {
        project_name: project_name.to_string(),
        total_units,
        li_units,
        opportunity_index,
        building_amenities,
        discount_to_market_rent,
        proximity_to_amenities,
        pra811,
        lihtc_request_per_unit,
        address: address.to_string(),
        city: city.to_string(),
        zip: zip.to_string(),
    }
}

pub fn ohio_samples() -> Vec<OhioProjectProfile> {
    vec![
        ohio_project(
            "AspireCOLUMBUS",
            120,
            100,
            10.0,
            10.0,
            5.0,
            17.0,
            5.0,
            10.0,
            "Columbus",
            "43215",
            "100 Main St",
        ),
        ohio_project(
            "SunriseCLEVELAND",
            85,
            75,
            8.0,
            9.0,
            4.0,
            15.0,
            4.0,
            9.0,
            "Cleveland",
            "44114",
            "200 Euclid Ave",
        ),
        ohio_project(
            "RiverfrontCINCINNATI",
            95,
            80,
            9.0,
            8.0,
            5.0,
            14.0,
            5.0,
            8.0,
            "Cincinnati",
            "45202",
            "300 River Rd",
        ),
        ohio_project(
            "MeadowbrookTOLEDO",
            70,
            60,
            7.0,
            7.0,
            4.0,
            12.0,
            4.0,
            7.0,
            "Toledo",
            "43604",
            "400 Summit St",
        ),
        ohio_project(
            "HighlandAKRON",
            65,
            55,
            6.0,
            8.0,
            3.0,
            11.0,
            3.0,
            8.0,
            "Akron",
            "44303",
            "500 Market St",
        ),
        ohio_project(
            "RiversideDAYTON",
            60,
            50,
            7.0,
            7.0,
            4.0,
            10.0,
            4.0,
            7.0,
            "Dayton",
            "45402",
            "600 Miami Blvd",
        ),
        ohio_project(
            "MapleviewPARMA",
            55,
            45,
            6.0,
            6.0,
            3.0,
            9.0,
            3.0,
            6.0,
            "Parma",
            "44129",
            "700 Ridge Rd",
        ),
        ohio_project(
            "OakParkCANTON",
            50,
            40,
            5.0,
            6.0,
            3.0,
            8.0,
            2.0,
            6.0,
            "Canton",
            "44702",
            "800 Market Ave",
        ),
        ohio_project(
            "WillowGlenYOUNGSTOWN",
            45,
            35,
            5.0,
            5.0,
            2.0,
            7.0,
            2.0,
            5.0,
            "Youngstown",
            "44502",
            "900 Federal St",
        ),
        ohio_project(
            "LakeviewLORAIN",
            40,
            30,
            4.0,
            5.0,
            2.0,
            6.0,
            1.0,
            5.0,
            "Lorain",
            "44052",
            "1000 Erie Ave",
        ),
    ]
}

use std::sync::Arc;

use qap_compare::workflows::comparison::{
    samples, score_california_project, score_location, score_ohio_project, AmenityCounts,
    ComparisonRequest, ComparisonService, ProjectState, StaticAmenityCatalog,
};

fn sample_request() -> ComparisonRequest {
    ComparisonRequest {
        california: samples::california_sample(0).expect("first CA sample"),
        ohio: samples::ohio_sample(0).expect("first OH sample"),
    }
}

#[tokio::test]
async fn sample_comparison_end_to_end() {
    let service = ComparisonService::new(Arc::new(StaticAmenityCatalog));

    let report = service
        .compare(sample_request())
        .await
        .expect("sample comparison succeeds");

    // First California sample is the documented full-marks Los Angeles project.
    assert_eq!(report.california.state, ProjectState::California);
    assert_eq!(report.california.rubric_total, 100.0);
    assert_eq!(report.california.location_total, 100.0);
    assert_eq!(report.california.composite, 100.0);

    // First Ohio sample self-scores every category at its ceiling; Columbus
    // amenities land on 85 for location.
    assert_eq!(report.ohio.rubric_total, 100.0);
    assert_eq!(report.ohio.location_total, 85.0);
    assert_eq!(report.ohio.composite, 92.5);

    let coordinates = report
        .california
        .coordinates
        .expect("Los Angeles has coordinates");
    assert!((coordinates.latitude - 34.0522).abs() < 1e-9);
}

#[tokio::test]
async fn report_serializes_with_form_facing_field_names() {
    let service = ComparisonService::new(Arc::new(StaticAmenityCatalog));
    let report = service
        .compare(sample_request())
        .await
        .expect("sample comparison succeeds");

    let json = serde_json::to_value(&report).expect("report serializes");

    assert!(json["california"]["rubric"]["housingType"]["maxScore"].is_number());
    assert!(json["ohio"]["rubric"]["lihtcRequestPerUnit"]["percentage"].is_number());
    assert_eq!(json["projects"]["california"]["taxCreditType"], "9%");
    assert_eq!(json["projects"]["ohio"]["liUnits"], 100);
}

#[test]
fn rubric_engines_are_pure_and_total() {
    // Scoring the same inputs twice yields identical breakdowns, and no input
    // shape can make the engines fail.
    let california = samples::california_sample(2).expect("third CA sample");
    assert_eq!(
        score_california_project(&california),
        score_california_project(&california)
    );

    let ohio = samples::ohio_sample(4).expect("fifth OH sample");
    assert_eq!(score_ohio_project(&ohio), score_ohio_project(&ohio));

    let empty = AmenityCounts {
        schools: 0,
        hospitals: 0,
        grocery_stores: 0,
        public_transport: 0,
        commercial_pois: 0,
    };
    assert_eq!(score_location(&empty).total_percentage(), 0.0);
}

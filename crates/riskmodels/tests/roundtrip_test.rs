//! Round-trip tests across the full schema surface.

use chrono::NaiveDate;
use riskmodels::{
    Factor, RiskModel, RiskModelAssetData, RiskModelCoverage, RiskModelCoverageRequest,
    RiskModelData, RiskModelDataMeasure, RiskModelEventType, RiskModelFactorData,
    RiskModelFactorExposure, RiskModelFactorPortfolio, RiskModelFactorPortfoliosData,
    RiskModelIssuerSpecificCovarianceData, RiskModelLogicalDb, RiskModelTerm,
    RiskModelUniverseIdentifier, RiskModelUniverseIdentifierRequest,
};
use std::collections::HashMap;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn exposure(pairs: &[(&str, f64)]) -> RiskModelFactorExposure {
    pairs
        .iter()
        .map(|(factor, weight)| (factor.to_string(), *weight))
        .collect()
}

fn full_asset_data() -> RiskModelAssetData {
    RiskModelAssetData::new(
        vec!["A".to_string(), "B".to_string(), "C".to_string()],
        vec![0.12, 0.3, 0.25],
        vec![
            exposure(&[("F1", 0.5), ("F2", -0.2)]),
            exposure(&[("F1", 1.1)]),
            exposure(&[]),
        ],
    )
    .unwrap()
    .with_specific_return(vec![0.001, -0.002, 0.0])
    .unwrap()
    .with_residual_variance(vec![0.01, 0.02, 0.015])
    .unwrap()
    .with_historical_beta(vec![1.1, 0.9, 1.0])
    .unwrap()
    .with_total_risk(vec![0.2, 0.4, 0.3])
    .unwrap()
    .with_r_squared(vec![0.8, 0.7, 0.75])
    .unwrap()
    .with_fair_value_gap_percent(vec![5.0, -3.0, 0.0])
    .unwrap()
    .with_fair_value_gap_standard_deviation(vec![1.5, -0.8, 0.0])
    .unwrap()
}

fn full_data() -> RiskModelData {
    let factor_data = vec![
        RiskModelFactorData {
            factor_id: "F1".to_string(),
            factor_name: "Value".to_string(),
            factor_category_id: "C1".to_string(),
            factor_category: "Style".to_string(),
            factor_return: 0.0125,
            factor_standard_deviation: Some(0.04),
            factor_z_score: Some(0.31),
            name: None,
        },
        RiskModelFactorData::new("F2", "Momentum", "C1", "Style", -0.002),
    ];

    let isc = RiskModelIssuerSpecificCovarianceData::new(
        vec!["A".to_string(), "B".to_string()],
        vec!["B".to_string(), "C".to_string()],
        vec![0.0004, -0.0001],
    )
    .unwrap();

    let portfolios = RiskModelFactorPortfoliosData::new(
        vec!["A".to_string(), "B".to_string(), "C".to_string()],
        vec![
            RiskModelFactorPortfolio::new("F1", vec![0.5, 0.3, 0.2]),
            RiskModelFactorPortfolio::new("F2", vec![-0.1, 0.6, 0.5]),
        ],
    )
    .unwrap();

    RiskModelData::new(date(2021, 1, 4))
        .with_asset_data(full_asset_data())
        .with_factor_data(factor_data)
        .unwrap()
        .with_covariance_matrix(vec![vec![1.0, 0.35], vec![0.35, 1.0]])
        .unwrap()
        .with_issuer_specific_covariance(isc)
        .with_factor_portfolios(portfolios)
        .with_name("us-medium-2021-01-04")
}

#[test]
fn test_fully_populated_data_round_trip() {
    let data = full_data();
    let json = riskmodels::json::to_string(&data).unwrap();
    let back: RiskModelData = riskmodels::json::from_str(&json).unwrap();
    assert_eq!(back, data);
}

#[test]
fn test_all_optionals_absent_round_trip() {
    let data = RiskModelData::new(date(2021, 1, 4));
    let json = riskmodels::json::to_string(&data).unwrap();
    let back: RiskModelData = riskmodels::json::from_str(&json).unwrap();
    assert_eq!(back, data);

    let factor = Factor::new("F1");
    let back: Factor =
        riskmodels::json::from_str(&riskmodels::json::to_string(&factor).unwrap()).unwrap();
    assert_eq!(back, factor);

    let request = RiskModelCoverageRequest::default();
    let back: RiskModelCoverageRequest =
        riskmodels::json::from_str(&riskmodels::json::to_string(&request).unwrap()).unwrap();
    assert_eq!(back, request);
}

#[test]
fn test_risk_model_round_trip_both_ways() {
    let mut model = RiskModel::new(
        RiskModelCoverage::RegionExcludingCountries,
        "Europe ex UK",
        RiskModelTerm::Long,
        RiskModelUniverseIdentifier::Sedol,
        "Barra",
        2.5,
    )
    .with_id("MODEL_EU_XUK");
    model.type_ = Some("Factor".to_string());
    model.universe_size = Some(4200);

    let value = riskmodels::json::to_value(&model).unwrap();
    assert_eq!(value["coverage"], "Region Excluding Countries");
    assert_eq!(value["universeIdentifier"], "sedol");

    let back: RiskModel = riskmodels::json::from_value(value).unwrap();
    assert_eq!(back, model);
}

#[test]
fn test_every_enum_literal_round_trips() {
    for v in RiskModelCoverage::all() {
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, format!("\"{}\"", v.as_str()));
        assert_eq!(serde_json::from_str::<RiskModelCoverage>(&json).unwrap(), v);
    }
    for v in RiskModelDataMeasure::all() {
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(
            serde_json::from_str::<RiskModelDataMeasure>(&json).unwrap(),
            v
        );
    }
    for v in RiskModelEventType::all() {
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(serde_json::from_str::<RiskModelEventType>(&json).unwrap(), v);
    }
    for v in RiskModelLogicalDb::all() {
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(serde_json::from_str::<RiskModelLogicalDb>(&json).unwrap(), v);
    }
    for v in RiskModelTerm::all() {
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(serde_json::from_str::<RiskModelTerm>(&json).unwrap(), v);
    }
    for v in RiskModelUniverseIdentifier::all() {
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(
            serde_json::from_str::<RiskModelUniverseIdentifier>(&json).unwrap(),
            v
        );
    }
    for v in RiskModelUniverseIdentifierRequest::all() {
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(
            serde_json::from_str::<RiskModelUniverseIdentifierRequest>(&json).unwrap(),
            v
        );
    }
}

#[test]
fn test_unknown_keys_ignored() {
    let parsed: RiskModelFactorData = riskmodels::json::from_str(
        r#"{"factorId": "F1", "factorName": "Value", "factorCategoryId": "C1",
            "factorCategory": "Style", "factorReturn": 0.01,
            "introducedNextQuarter": {"nested": true}}"#,
    )
    .unwrap();
    assert_eq!(parsed.factor_id, "F1");
}

#[test]
fn test_snake_case_payload_accepted() {
    let camel: RiskModelData = riskmodels::json::from_str(
        r#"{"date": "2021-01-04",
            "assetData": {"universe": ["A"], "specificRisk": [0.1],
                          "factorExposure": [{"F1": 0.5}]},
            "issuerSpecificCovariance": {"universeId1": ["A"], "universeId2": ["B"],
                                         "covariance": [0.01]}}"#,
    )
    .unwrap();
    let snake: RiskModelData = riskmodels::json::from_str(
        r#"{"date": "2021-01-04",
            "asset_data": {"universe": ["A"], "specific_risk": [0.1],
                           "factor_exposure": [{"F1": 0.5}]},
            "issuer_specific_covariance": {"universe_id1": ["A"], "universe_id2": ["B"],
                                           "covariance": [0.01]}}"#,
    )
    .unwrap();
    assert_eq!(camel, snake);
}

#[test]
fn test_floats_round_trip_exactly() {
    let values = [
        0.1,
        -0.000_000_123_456_789,
        1.0e300,
        std::f64::consts::PI,
        f64::MIN_POSITIVE,
    ];
    let mut exposures = HashMap::new();
    for (i, v) in values.iter().enumerate() {
        exposures.insert(format!("F{i}"), *v);
    }
    let data = RiskModelAssetData::new(
        vec!["A".to_string()],
        vec![values[3]],
        vec![exposures],
    )
    .unwrap();

    let json = riskmodels::json::to_string(&data).unwrap();
    let back: RiskModelAssetData = riskmodels::json::from_str(&json).unwrap();
    assert_eq!(back, data);
}

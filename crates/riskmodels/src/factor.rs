//! Factor metadata and per-factor model data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from factor identifier to exposure weight for a single asset.
pub type RiskModelFactorExposure = HashMap<String, f64>;

/// Metadata describing a single risk factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Factor {
    /// Factor identifier.
    pub identifier: String,

    /// Factor kind tag. Omitted from the wire form when unset.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// Long-form description.
    pub description: Option<String>,

    /// Glossary entry shown alongside the factor.
    #[serde(alias = "glossary_description")]
    pub glossary_description: Option<String>,

    /// Short tooltip text.
    pub tooltip: Option<String>,

    /// Identifier of the user who created the factor.
    #[serde(alias = "created_by_id")]
    pub created_by_id: Option<String>,

    /// Creation timestamp.
    #[serde(alias = "created_time")]
    pub created_time: Option<DateTime<Utc>>,

    /// Identifier of the user who last updated the factor.
    #[serde(alias = "last_updated_by_id")]
    pub last_updated_by_id: Option<String>,

    /// Last update timestamp.
    #[serde(alias = "last_updated_time")]
    pub last_updated_time: Option<DateTime<Utc>>,

    /// Display name.
    pub name: Option<String>,
}

impl Factor {
    /// Create a factor with the given identifier and no metadata.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            type_: None,
            description: None,
            glossary_description: None,
            tooltip: None,
            created_by_id: None,
            created_time: None,
            last_updated_by_id: None,
            last_updated_time: None,
            name: None,
        }
    }
}

/// Returns, category and dispersion statistics for one factor on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskModelFactorData {
    /// Factor identifier.
    #[serde(alias = "factor_id")]
    pub factor_id: String,

    /// Factor display name.
    #[serde(alias = "factor_name")]
    pub factor_name: String,

    /// Identifier of the factor's category.
    #[serde(alias = "factor_category_id")]
    pub factor_category_id: String,

    /// Display name of the factor's category.
    #[serde(alias = "factor_category")]
    pub factor_category: String,

    /// Factor return on the date.
    #[serde(alias = "factor_return")]
    pub factor_return: f64,

    /// Standard deviation of the factor return.
    #[serde(alias = "factor_standard_deviation")]
    pub factor_standard_deviation: Option<f64>,

    /// Z-score of the factor return.
    #[serde(alias = "factor_z_score")]
    pub factor_z_score: Option<f64>,

    /// Display name.
    pub name: Option<String>,
}

impl RiskModelFactorData {
    /// Create factor data from its required fields.
    pub fn new(
        factor_id: impl Into<String>,
        factor_name: impl Into<String>,
        factor_category_id: impl Into<String>,
        factor_category: impl Into<String>,
        factor_return: f64,
    ) -> Self {
        Self {
            factor_id: factor_id.into(),
            factor_name: factor_name.into(),
            factor_category_id: factor_category_id.into(),
            factor_category: factor_category.into(),
            factor_return,
            factor_standard_deviation: None,
            factor_z_score: None,
            name: None,
        }
    }
}

/// Replicating portfolio of asset weights tracking a single factor.
///
/// Weights are parallel to the universe ordering of the owning
/// [`RiskModelFactorPortfoliosData`](crate::asset::RiskModelFactorPortfoliosData);
/// the length check lives there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskModelFactorPortfolio {
    /// Factor this portfolio replicates.
    #[serde(alias = "factor_id")]
    pub factor_id: String,

    /// Asset weights, one per universe entry.
    pub weights: Vec<f64>,

    /// Display name.
    pub name: Option<String>,
}

impl RiskModelFactorPortfolio {
    /// Create a factor portfolio.
    pub fn new(factor_id: impl Into<String>, weights: Vec<f64>) -> Self {
        Self {
            factor_id: factor_id.into(),
            weights,
            name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_type_omitted_when_unset() {
        let factor = Factor::new("F1");
        let value = serde_json::to_value(&factor).unwrap();
        assert!(value.get("type").is_none());
        // Other absent optionals serialize as explicit null.
        assert!(value.get("description").unwrap().is_null());
    }

    #[test]
    fn test_factor_type_present_when_set() {
        let mut factor = Factor::new("F1");
        factor.type_ = Some("Style".to_string());
        let value = serde_json::to_value(&factor).unwrap();
        assert_eq!(value["type"], "Style");
    }

    #[test]
    fn test_factor_data_accepts_camel_and_snake_keys() {
        let camel: RiskModelFactorData = serde_json::from_str(
            r#"{"factorId": "F1", "factorName": "Value", "factorCategoryId": "C1",
                "factorCategory": "Style", "factorReturn": 0.01}"#,
        )
        .unwrap();
        let snake: RiskModelFactorData = serde_json::from_str(
            r#"{"factor_id": "F1", "factor_name": "Value", "factor_category_id": "C1",
                "factor_category": "Style", "factor_return": 0.01}"#,
        )
        .unwrap();
        assert_eq!(camel, snake);
    }

    #[test]
    fn test_factor_data_missing_required_field() {
        let err = serde_json::from_str::<RiskModelFactorData>(
            r#"{"factorId": "F1", "factorName": "Value", "factorCategoryId": "C1",
                "factorCategory": "Style"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("factorReturn"));
    }

    #[test]
    fn test_factor_data_duplicate_camel_snake_key_rejected() {
        let err = serde_json::from_str::<RiskModelFactorData>(
            r#"{"factorId": "F1", "factor_id": "F2", "factorName": "Value",
                "factorCategoryId": "C1", "factorCategory": "Style", "factorReturn": 0.01}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_factor_round_trip_with_timestamps() {
        let mut factor = Factor::new("F42");
        factor.created_time = Some("2021-03-01T09:30:00Z".parse().unwrap());
        factor.name = Some("Momentum".to_string());

        let json = serde_json::to_string(&factor).unwrap();
        assert!(json.contains("\"createdTime\":\"2021-03-01T09:30:00Z\""));

        let back: Factor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, factor);
    }
}

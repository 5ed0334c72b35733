//! Risk model identity and metadata.

use crate::enums::{RiskModelCoverage, RiskModelTerm, RiskModelUniverseIdentifier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access-control metadata attached to a risk model.
///
/// Owned by the entitlements service; carried through this schema verbatim.
pub type Entitlements = serde_json::Value;

/// Vendor/category tag of a risk model.
///
/// Owned by the model catalog; carried through this schema verbatim.
pub type RiskModelType = String;

/// Identity and metadata of a risk model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskModel {
    /// Coverage level of the model's universe.
    pub coverage: RiskModelCoverage,

    /// Service-assigned model identifier. Absent until the service assigns
    /// one; omitted from the wire form when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Model name.
    pub name: String,

    /// Estimation horizon.
    pub term: RiskModelTerm,

    /// Identifier scheme the universe is uploaded under.
    #[serde(alias = "universe_identifier")]
    pub universe_identifier: RiskModelUniverseIdentifier,

    /// Model vendor.
    pub vendor: String,

    /// Model version.
    pub version: f64,

    /// Identifier of the user who created the model.
    #[serde(alias = "created_by_id")]
    pub created_by_id: Option<String>,

    /// Creation timestamp.
    #[serde(alias = "created_time")]
    pub created_time: Option<DateTime<Utc>>,

    /// Long-form description.
    pub description: Option<String>,

    /// Access-control metadata, passed through verbatim.
    pub entitlements: Option<Entitlements>,

    /// Identifier of the user who last updated the model.
    #[serde(alias = "last_updated_by_id")]
    pub last_updated_by_id: Option<String>,

    /// Last update timestamp.
    #[serde(alias = "last_updated_time")]
    pub last_updated_time: Option<DateTime<Utc>>,

    /// Time of day new data is expected, as published by the service.
    #[serde(alias = "expected_update_time")]
    pub expected_update_time: Option<String>,

    /// Identifier of the owning user or team.
    #[serde(alias = "owner_id")]
    pub owner_id: Option<String>,

    /// Number of assets covered.
    #[serde(alias = "universe_size")]
    pub universe_size: Option<u64>,

    /// Model category tag. Omitted from the wire form when unset.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<RiskModelType>,
}

impl RiskModel {
    /// Create a model from its required identity fields.
    pub fn new(
        coverage: RiskModelCoverage,
        name: impl Into<String>,
        term: RiskModelTerm,
        universe_identifier: RiskModelUniverseIdentifier,
        vendor: impl Into<String>,
        version: f64,
    ) -> Self {
        Self {
            coverage,
            id: None,
            name: name.into(),
            term,
            universe_identifier,
            vendor: vendor.into(),
            version,
            created_by_id: None,
            created_time: None,
            description: None,
            entitlements: None,
            last_updated_by_id: None,
            last_updated_time: None,
            expected_update_time: None,
            owner_id: None,
            universe_size: None,
            type_: None,
        }
    }

    /// Attach the service-assigned identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> RiskModel {
        RiskModel::new(
            RiskModelCoverage::Country,
            "US Medium Horizon",
            RiskModelTerm::Medium,
            RiskModelUniverseIdentifier::Gsid,
            "Axioma",
            4.0,
        )
    }

    #[test]
    fn test_type_and_id_omitted_when_unset() {
        let value = serde_json::to_value(model()).unwrap();
        assert!(value.get("type").is_none());
        assert!(value.get("id").is_none());
        // Non-exempt absent optionals are explicit nulls.
        assert!(value.get("ownerId").unwrap().is_null());
        assert!(value.get("description").unwrap().is_null());
    }

    #[test]
    fn test_type_and_id_present_when_set() {
        let mut m = model().with_id("MODEL_US_MH");
        m.type_ = Some("Factor".to_string());
        let value = serde_json::to_value(&m).unwrap();
        assert_eq!(value["id"], "MODEL_US_MH");
        assert_eq!(value["type"], "Factor");
    }

    #[test]
    fn test_enum_fields_use_wire_literals() {
        let value = serde_json::to_value(model()).unwrap();
        assert_eq!(value["coverage"], "Country");
        assert_eq!(value["term"], "Medium");
        assert_eq!(value["universeIdentifier"], "gsid");
    }

    #[test]
    fn test_round_trip_with_entitlements() {
        let mut m = model().with_id("MODEL_US_MH");
        m.entitlements = Some(serde_json::json!({
            "view": ["group:risk"],
            "admin": ["user:ops"]
        }));
        m.universe_size = Some(12000);

        let json = serde_json::to_string(&m).unwrap();
        let back: RiskModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_missing_required_field_names_it() {
        let err = serde_json::from_str::<RiskModel>(
            r#"{"coverage": "Global", "name": "World", "term": "Long",
                "universeIdentifier": "sedol", "version": 1.0}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("vendor"));
    }

    #[test]
    fn test_unknown_coverage_literal_rejected() {
        let err = serde_json::from_str::<RiskModel>(
            r#"{"coverage": "Continental", "name": "World", "term": "Long",
                "universeIdentifier": "sedol", "vendor": "Axioma", "version": 1.0}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Continental"));
    }
}

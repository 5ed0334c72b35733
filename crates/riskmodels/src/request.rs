//! Query records sent to the risk model service.

use crate::enums::{RiskModelDataMeasure, RiskModelTerm, RiskModelUniverseIdentifierRequest};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query for the risk models covering a set of assets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskModelCoverageRequest {
    /// Assets the models must cover.
    #[serde(alias = "asset_ids")]
    pub asset_ids: Option<Vec<String>>,

    /// Coverage date; the service defaults to the latest date.
    #[serde(alias = "as_of_date")]
    pub as_of_date: Option<NaiveDate>,

    /// Term to sort the matching models by.
    #[serde(alias = "sort_by_term")]
    pub sort_by_term: Option<RiskModelTerm>,

    /// Display name.
    pub name: Option<String>,
}

/// Asset filter for a data query: which identifier scheme the listed
/// universe is expressed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskModelDataAssetsRequest {
    /// Identifier scheme of the listed assets.
    pub identifier: RiskModelUniverseIdentifierRequest,

    /// Assets to restrict the query to.
    pub universe: Vec<String>,

    /// Display name.
    pub name: Option<String>,
}

impl RiskModelDataAssetsRequest {
    /// Create an asset filter.
    pub fn new(identifier: RiskModelUniverseIdentifierRequest, universe: Vec<String>) -> Self {
        Self {
            identifier,
            universe,
            name: None,
        }
    }
}

fn default_limit_factors() -> Option<bool> {
    Some(true)
}

fn default_format() -> Option<String> {
    Some("Json".to_string())
}

/// Query for risk model data over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskModelDataRequest {
    /// First requested date, inclusive.
    #[serde(alias = "start_date")]
    pub start_date: NaiveDate,

    /// Last requested date, inclusive.
    #[serde(alias = "end_date")]
    pub end_date: NaiveDate,

    /// Optional asset filter; the full universe is returned when absent.
    pub assets: Option<RiskModelDataAssetsRequest>,

    /// Measures to return; the service's default set when absent.
    pub measures: Option<Vec<RiskModelDataMeasure>>,

    /// Whether to restrict factor measures to factors the filtered assets
    /// are exposed to. Defaults to `true`.
    #[serde(alias = "limit_factors", default = "default_limit_factors")]
    pub limit_factors: Option<bool>,

    /// Response payload format. Defaults to `"Json"`; omitted from the wire
    /// form when unset.
    #[serde(
        rename = "format",
        default = "default_format",
        skip_serializing_if = "Option::is_none"
    )]
    pub format_: Option<String>,

    /// Display name.
    pub name: Option<String>,
}

impl RiskModelDataRequest {
    /// Create a data request for an inclusive date range.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            assets: None,
            measures: None,
            limit_factors: default_limit_factors(),
            format_: default_format(),
            name: None,
        }
    }

    /// Restrict the query to a set of assets.
    pub fn with_assets(mut self, assets: RiskModelDataAssetsRequest) -> Self {
        self.assets = Some(assets);
        self
    }

    /// Select the measures to return.
    pub fn with_measures(mut self, measures: Vec<RiskModelDataMeasure>) -> Self {
        self.measures = Some(measures);
        self
    }

    /// All calendar dates the request covers, in order.
    ///
    /// Empty when `start_date` is after `end_date`; date-order policy is the
    /// service's to enforce.
    pub fn requested_dates(&self) -> Vec<NaiveDate> {
        self.start_date
            .iter_days()
            .take_while(|d| *d <= self.end_date)
            .collect()
    }
}

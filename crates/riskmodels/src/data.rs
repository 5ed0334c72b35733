//! Per-date risk model data and the data query response.

use crate::asset::{
    RiskModelAssetData, RiskModelFactorPortfoliosData, RiskModelIssuerSpecificCovarianceData,
};
use crate::error::{Result, SchemaError};
use crate::factor::RiskModelFactorData;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Checks that a covariance matrix is square and, when the factor count is
/// known, that its dimension matches.
fn check_covariance(matrix: &[Vec<f64>], factors: Option<usize>) -> Result<()> {
    let dimension = matrix.len();
    for (row, entries) in matrix.iter().enumerate() {
        if entries.len() != dimension {
            return Err(SchemaError::CovarianceNotSquare {
                row,
                expected: dimension,
                actual: entries.len(),
            });
        }
    }
    if let Some(factors) = factors {
        if dimension != factors {
            return Err(SchemaError::CovarianceDimensionMismatch { dimension, factors });
        }
    }
    Ok(())
}

/// Everything a risk model published for one date.
///
/// The covariance matrix, when present, is square and symmetric over the
/// factor ordering of `factor_data`; its dimension equals the factor count
/// whenever both are populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawRiskModelData")]
pub struct RiskModelData {
    date: NaiveDate,
    asset_data: Option<RiskModelAssetData>,
    factor_data: Option<Vec<RiskModelFactorData>>,
    covariance_matrix: Option<Vec<Vec<f64>>>,
    issuer_specific_covariance: Option<RiskModelIssuerSpecificCovarianceData>,
    factor_portfolios: Option<RiskModelFactorPortfoliosData>,
    name: Option<String>,
}

impl RiskModelData {
    /// Create an empty record for one date.
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            asset_data: None,
            factor_data: None,
            covariance_matrix: None,
            issuer_specific_covariance: None,
            factor_portfolios: None,
            name: None,
        }
    }

    /// Attach per-asset data.
    pub fn with_asset_data(mut self, asset_data: RiskModelAssetData) -> Self {
        self.asset_data = Some(asset_data);
        self
    }

    /// Attach per-factor data.
    ///
    /// # Errors
    /// Returns [`SchemaError::CovarianceDimensionMismatch`] if a covariance
    /// matrix is already attached and its dimension differs from the factor
    /// count.
    pub fn with_factor_data(mut self, factor_data: Vec<RiskModelFactorData>) -> Result<Self> {
        if let Some(matrix) = &self.covariance_matrix {
            check_covariance(matrix, Some(factor_data.len()))?;
        }
        self.factor_data = Some(factor_data);
        Ok(self)
    }

    /// Attach the factor covariance matrix.
    ///
    /// # Errors
    /// Returns [`SchemaError::CovarianceNotSquare`] for a ragged matrix, or
    /// [`SchemaError::CovarianceDimensionMismatch`] if factor data is
    /// already attached and the dimensions disagree.
    pub fn with_covariance_matrix(mut self, matrix: Vec<Vec<f64>>) -> Result<Self> {
        check_covariance(&matrix, self.factor_data.as_ref().map(Vec::len))?;
        self.covariance_matrix = Some(matrix);
        Ok(self)
    }

    /// Attach issuer-specific covariance data.
    pub fn with_issuer_specific_covariance(
        mut self,
        isc: RiskModelIssuerSpecificCovarianceData,
    ) -> Self {
        self.issuer_specific_covariance = Some(isc);
        self
    }

    /// Attach factor portfolio data.
    pub fn with_factor_portfolios(mut self, portfolios: RiskModelFactorPortfoliosData) -> Self {
        self.factor_portfolios = Some(portfolios);
        self
    }

    /// Attach a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The date this record covers.
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Per-asset data, if populated.
    pub const fn asset_data(&self) -> Option<&RiskModelAssetData> {
        self.asset_data.as_ref()
    }

    /// Per-factor data, if populated.
    pub fn factor_data(&self) -> Option<&[RiskModelFactorData]> {
        self.factor_data.as_deref()
    }

    /// Factor covariance matrix, if populated.
    pub fn covariance_matrix(&self) -> Option<&[Vec<f64>]> {
        self.covariance_matrix.as_deref()
    }

    /// Issuer-specific covariance data, if populated.
    pub const fn issuer_specific_covariance(
        &self,
    ) -> Option<&RiskModelIssuerSpecificCovarianceData> {
        self.issuer_specific_covariance.as_ref()
    }

    /// Factor portfolio data, if populated.
    pub const fn factor_portfolios(&self) -> Option<&RiskModelFactorPortfoliosData> {
        self.factor_portfolios.as_ref()
    }

    /// Display name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRiskModelData {
    date: NaiveDate,
    #[serde(alias = "asset_data")]
    asset_data: Option<RiskModelAssetData>,
    #[serde(alias = "factor_data")]
    factor_data: Option<Vec<RiskModelFactorData>>,
    #[serde(alias = "covariance_matrix")]
    covariance_matrix: Option<Vec<Vec<f64>>>,
    #[serde(alias = "issuer_specific_covariance")]
    issuer_specific_covariance: Option<RiskModelIssuerSpecificCovarianceData>,
    #[serde(alias = "factor_portfolios")]
    factor_portfolios: Option<RiskModelFactorPortfoliosData>,
    name: Option<String>,
}

impl TryFrom<RawRiskModelData> for RiskModelData {
    type Error = SchemaError;

    fn try_from(raw: RawRiskModelData) -> Result<Self> {
        let mut data = Self::new(raw.date);
        if let Some(factor_data) = raw.factor_data {
            data = data.with_factor_data(factor_data)?;
        }
        if let Some(matrix) = raw.covariance_matrix {
            data = data.with_covariance_matrix(matrix)?;
        }
        if let Some(asset_data) = raw.asset_data {
            data = data.with_asset_data(asset_data);
        }
        if let Some(isc) = raw.issuer_specific_covariance {
            data = data.with_issuer_specific_covariance(isc);
        }
        if let Some(portfolios) = raw.factor_portfolios {
            data = data.with_factor_portfolios(portfolios);
        }
        data.name = raw.name;
        Ok(data)
    }
}

/// Response to a [`RiskModelDataRequest`](crate::request::RiskModelDataRequest).
///
/// `results` holds one entry per requested date with published data;
/// `missing_dates` enumerates requested dates without data, and
/// `total_results` equals `results.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskModelDataResponse {
    /// Per-date results.
    pub results: Vec<RiskModelData>,

    /// Number of entries in `results`.
    #[serde(alias = "total_results")]
    pub total_results: usize,

    /// Requested dates with no published data.
    #[serde(alias = "missing_dates")]
    pub missing_dates: Option<Vec<NaiveDate>>,

    /// Display name.
    pub name: Option<String>,
}

impl RiskModelDataResponse {
    /// Assemble a response from the requested dates and the per-date results
    /// that exist.
    ///
    /// Results for dates outside the requested set are dropped;
    /// `missing_dates` is the requested dates without a result, in requested
    /// order.
    pub fn from_results(requested: &[NaiveDate], results: Vec<RiskModelData>) -> Self {
        let requested_set: HashSet<NaiveDate> = requested.iter().copied().collect();
        let results: Vec<RiskModelData> = results
            .into_iter()
            .filter(|data| requested_set.contains(&data.date()))
            .collect();
        let present: HashSet<NaiveDate> = results.iter().map(RiskModelData::date).collect();
        let missing: Vec<NaiveDate> = requested
            .iter()
            .copied()
            .filter(|date| !present.contains(date))
            .collect();
        Self {
            total_results: results.len(),
            results,
            missing_dates: if missing.is_empty() {
                None
            } else {
                Some(missing)
            },
            name: None,
        }
    }

    /// Check that the reported count matches the result sequence.
    ///
    /// # Errors
    /// Returns [`SchemaError::TotalResultsMismatch`] when they disagree.
    pub fn validate(&self) -> Result<()> {
        if self.total_results == self.results.len() {
            Ok(())
        } else {
            Err(SchemaError::TotalResultsMismatch {
                total: self.total_results,
                actual: self.results.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factor::RiskModelFactorData;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn two_factors() -> Vec<RiskModelFactorData> {
        vec![
            RiskModelFactorData::new("F1", "Value", "C1", "Style", 0.01),
            RiskModelFactorData::new("F2", "Momentum", "C1", "Style", -0.02),
        ]
    }

    #[test]
    fn test_ragged_covariance_rejected() {
        let err = RiskModelData::new(date(2021, 1, 4))
            .with_covariance_matrix(vec![vec![1.0, 0.5], vec![0.5]])
            .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::CovarianceNotSquare {
                row: 1,
                expected: 2,
                actual: 1,
            }
        ));
    }

    #[test]
    fn test_covariance_dimension_must_match_factor_count() {
        let err = RiskModelData::new(date(2021, 1, 4))
            .with_factor_data(two_factors())
            .unwrap()
            .with_covariance_matrix(vec![vec![1.0]])
            .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::CovarianceDimensionMismatch {
                dimension: 1,
                factors: 2,
            }
        ));
    }

    #[test]
    fn test_covariance_checked_at_deserialization() {
        let err = serde_json::from_str::<RiskModelData>(
            r#"{"date": "2021-01-04",
                "factorData": [
                    {"factorId": "F1", "factorName": "Value", "factorCategoryId": "C1",
                     "factorCategory": "Style", "factorReturn": 0.01}
                ],
                "covarianceMatrix": [[1.0, 0.5], [0.5, 1.0]]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("dimension"));
    }

    #[test]
    fn test_data_round_trip() {
        let data = RiskModelData::new(date(2021, 1, 4))
            .with_factor_data(two_factors())
            .unwrap()
            .with_covariance_matrix(vec![vec![1.0, 0.5], vec![0.5, 1.0]])
            .unwrap();

        let json = serde_json::to_string(&data).unwrap();
        let back: RiskModelData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_from_results_computes_missing_dates() {
        // Requested 2021-01-01..=2021-01-03; data exists for 01-01 and for
        // 01-04 which was never requested.
        let requested = vec![date(2021, 1, 1), date(2021, 1, 2), date(2021, 1, 3)];
        let results = vec![
            RiskModelData::new(date(2021, 1, 1)),
            RiskModelData::new(date(2021, 1, 4)),
        ];

        let response = RiskModelDataResponse::from_results(&requested, results);
        assert_eq!(response.total_results, 1);
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].date(), date(2021, 1, 1));
        assert_eq!(
            response.missing_dates,
            Some(vec![date(2021, 1, 2), date(2021, 1, 3)])
        );
        response.validate().unwrap();
    }

    #[test]
    fn test_from_results_no_missing_dates() {
        let requested = vec![date(2021, 1, 1)];
        let results = vec![RiskModelData::new(date(2021, 1, 1))];
        let response = RiskModelDataResponse::from_results(&requested, results);
        assert_eq!(response.missing_dates, None);
        assert_eq!(response.total_results, 1);
    }

    #[test]
    fn test_validate_rejects_count_mismatch() {
        let response = RiskModelDataResponse {
            results: vec![RiskModelData::new(date(2021, 1, 1))],
            total_results: 3,
            missing_dates: None,
            name: None,
        };
        assert!(matches!(
            response.validate().unwrap_err(),
            SchemaError::TotalResultsMismatch {
                total: 3,
                actual: 1,
            }
        ));
    }
}

//! Column-oriented asset tables.
//!
//! The wire format encodes per-asset tables as sibling arrays: one column
//! per measure, all parallel to the `universe` ordering. JSON does not
//! self-describe that contract, so these records validate it at
//! construction and at deserialization; a value you hold is always
//! structurally sound.

use crate::error::{Result, SchemaError};
use crate::factor::{RiskModelFactorExposure, RiskModelFactorPortfolio};
use serde::{Deserialize, Serialize};

/// Checks that a column lines up with the column defining the record length.
fn check_column(
    record: &'static str,
    field: &'static str,
    reference: &'static str,
    expected: usize,
    actual: usize,
) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(SchemaError::ParallelLengthMismatch {
            record,
            field,
            reference,
            expected,
            actual,
        })
    }
}

/// Per-asset model data for one date.
///
/// `universe` defines the row ordering. `specific_risk` and
/// `factor_exposure` are always populated; the remaining columns are
/// optional. Every populated column has exactly `universe.len()` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawAssetData")]
pub struct RiskModelAssetData {
    universe: Vec<String>,
    specific_risk: Vec<f64>,
    factor_exposure: Vec<RiskModelFactorExposure>,
    specific_return: Option<Vec<f64>>,
    residual_variance: Option<Vec<f64>>,
    historical_beta: Option<Vec<f64>>,
    total_risk: Option<Vec<f64>>,
    r_squared: Option<Vec<f64>>,
    fair_value_gap_percent: Option<Vec<f64>>,
    fair_value_gap_standard_deviation: Option<Vec<f64>>,
    name: Option<String>,
}

impl RiskModelAssetData {
    const RECORD: &'static str = "RiskModelAssetData";

    /// Create asset data from its required columns.
    ///
    /// # Errors
    /// Returns [`SchemaError::ParallelLengthMismatch`] if `specific_risk` or
    /// `factor_exposure` does not match the universe length.
    pub fn new(
        universe: Vec<String>,
        specific_risk: Vec<f64>,
        factor_exposure: Vec<RiskModelFactorExposure>,
    ) -> Result<Self> {
        let len = universe.len();
        check_column(
            Self::RECORD,
            "specificRisk",
            "universe",
            len,
            specific_risk.len(),
        )?;
        check_column(
            Self::RECORD,
            "factorExposure",
            "universe",
            len,
            factor_exposure.len(),
        )?;
        Ok(Self {
            universe,
            specific_risk,
            factor_exposure,
            specific_return: None,
            residual_variance: None,
            historical_beta: None,
            total_risk: None,
            r_squared: None,
            fair_value_gap_percent: None,
            fair_value_gap_standard_deviation: None,
            name: None,
        })
    }

    fn check(&self, field: &'static str, actual: usize) -> Result<()> {
        check_column(Self::RECORD, field, "universe", self.universe.len(), actual)
    }

    /// Attach the specific return column.
    pub fn with_specific_return(mut self, column: Vec<f64>) -> Result<Self> {
        self.check("specificReturn", column.len())?;
        self.specific_return = Some(column);
        Ok(self)
    }

    /// Attach the residual variance column.
    pub fn with_residual_variance(mut self, column: Vec<f64>) -> Result<Self> {
        self.check("residualVariance", column.len())?;
        self.residual_variance = Some(column);
        Ok(self)
    }

    /// Attach the historical beta column.
    pub fn with_historical_beta(mut self, column: Vec<f64>) -> Result<Self> {
        self.check("historicalBeta", column.len())?;
        self.historical_beta = Some(column);
        Ok(self)
    }

    /// Attach the total risk column.
    pub fn with_total_risk(mut self, column: Vec<f64>) -> Result<Self> {
        self.check("totalRisk", column.len())?;
        self.total_risk = Some(column);
        Ok(self)
    }

    /// Attach the R-squared column.
    pub fn with_r_squared(mut self, column: Vec<f64>) -> Result<Self> {
        self.check("rSquared", column.len())?;
        self.r_squared = Some(column);
        Ok(self)
    }

    /// Attach the fair value gap percent column.
    pub fn with_fair_value_gap_percent(mut self, column: Vec<f64>) -> Result<Self> {
        self.check("fairValueGapPercent", column.len())?;
        self.fair_value_gap_percent = Some(column);
        Ok(self)
    }

    /// Attach the fair value gap standard deviation column.
    pub fn with_fair_value_gap_standard_deviation(mut self, column: Vec<f64>) -> Result<Self> {
        self.check("fairValueGapStandardDeviation", column.len())?;
        self.fair_value_gap_standard_deviation = Some(column);
        Ok(self)
    }

    /// Attach a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Number of assets in the universe.
    pub fn len(&self) -> usize {
        self.universe.len()
    }

    /// Whether the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.universe.is_empty()
    }

    /// Ordered asset identifiers.
    pub fn universe(&self) -> &[String] {
        &self.universe
    }

    /// Specific risk per asset.
    pub fn specific_risk(&self) -> &[f64] {
        &self.specific_risk
    }

    /// Factor exposure mapping per asset.
    pub fn factor_exposure(&self) -> &[RiskModelFactorExposure] {
        &self.factor_exposure
    }

    /// Specific return per asset, if populated.
    pub fn specific_return(&self) -> Option<&[f64]> {
        self.specific_return.as_deref()
    }

    /// Residual variance per asset, if populated.
    pub fn residual_variance(&self) -> Option<&[f64]> {
        self.residual_variance.as_deref()
    }

    /// Historical beta per asset, if populated.
    pub fn historical_beta(&self) -> Option<&[f64]> {
        self.historical_beta.as_deref()
    }

    /// Total risk per asset, if populated.
    pub fn total_risk(&self) -> Option<&[f64]> {
        self.total_risk.as_deref()
    }

    /// R-squared per asset, if populated.
    pub fn r_squared(&self) -> Option<&[f64]> {
        self.r_squared.as_deref()
    }

    /// Fair value gap percent per asset, if populated.
    pub fn fair_value_gap_percent(&self) -> Option<&[f64]> {
        self.fair_value_gap_percent.as_deref()
    }

    /// Fair value gap standard deviation per asset, if populated.
    pub fn fair_value_gap_standard_deviation(&self) -> Option<&[f64]> {
        self.fair_value_gap_standard_deviation.as_deref()
    }

    /// Display name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAssetData {
    universe: Vec<String>,
    #[serde(alias = "specific_risk")]
    specific_risk: Vec<f64>,
    #[serde(alias = "factor_exposure")]
    factor_exposure: Vec<RiskModelFactorExposure>,
    #[serde(alias = "specific_return")]
    specific_return: Option<Vec<f64>>,
    #[serde(alias = "residual_variance")]
    residual_variance: Option<Vec<f64>>,
    #[serde(alias = "historical_beta")]
    historical_beta: Option<Vec<f64>>,
    #[serde(alias = "total_risk")]
    total_risk: Option<Vec<f64>>,
    #[serde(alias = "r_squared")]
    r_squared: Option<Vec<f64>>,
    #[serde(alias = "fair_value_gap_percent")]
    fair_value_gap_percent: Option<Vec<f64>>,
    #[serde(alias = "fair_value_gap_standard_deviation")]
    fair_value_gap_standard_deviation: Option<Vec<f64>>,
    name: Option<String>,
}

impl TryFrom<RawAssetData> for RiskModelAssetData {
    type Error = SchemaError;

    fn try_from(raw: RawAssetData) -> Result<Self> {
        let mut data = Self::new(raw.universe, raw.specific_risk, raw.factor_exposure)?;
        if let Some(column) = raw.specific_return {
            data = data.with_specific_return(column)?;
        }
        if let Some(column) = raw.residual_variance {
            data = data.with_residual_variance(column)?;
        }
        if let Some(column) = raw.historical_beta {
            data = data.with_historical_beta(column)?;
        }
        if let Some(column) = raw.total_risk {
            data = data.with_total_risk(column)?;
        }
        if let Some(column) = raw.r_squared {
            data = data.with_r_squared(column)?;
        }
        if let Some(column) = raw.fair_value_gap_percent {
            data = data.with_fair_value_gap_percent(column)?;
        }
        if let Some(column) = raw.fair_value_gap_standard_deviation {
            data = data.with_fair_value_gap_standard_deviation(column)?;
        }
        data.name = raw.name;
        Ok(data)
    }
}

/// Covariance between pairs of assets' specific returns, stored sparsely.
///
/// Entry `i` of `universe_id1`, `universe_id2` and `covariance` together
/// describe one issuer pair. The three columns always have equal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawIssuerSpecificCovariance")]
pub struct RiskModelIssuerSpecificCovarianceData {
    universe_id1: Vec<String>,
    universe_id2: Vec<String>,
    covariance: Vec<f64>,
    name: Option<String>,
}

impl RiskModelIssuerSpecificCovarianceData {
    const RECORD: &'static str = "RiskModelIssuerSpecificCovarianceData";

    /// Create issuer-specific covariance data from its three columns.
    ///
    /// # Errors
    /// Returns [`SchemaError::ParallelLengthMismatch`] if the columns do not
    /// share one length.
    pub fn new(
        universe_id1: Vec<String>,
        universe_id2: Vec<String>,
        covariance: Vec<f64>,
    ) -> Result<Self> {
        let len = universe_id1.len();
        check_column(
            Self::RECORD,
            "universeId2",
            "universeId1",
            len,
            universe_id2.len(),
        )?;
        check_column(
            Self::RECORD,
            "covariance",
            "universeId1",
            len,
            covariance.len(),
        )?;
        Ok(Self {
            universe_id1,
            universe_id2,
            covariance,
            name: None,
        })
    }

    /// Attach a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Number of issuer pairs.
    pub fn len(&self) -> usize {
        self.universe_id1.len()
    }

    /// Whether the record holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.universe_id1.is_empty()
    }

    /// First asset of each pair.
    pub fn universe_id1(&self) -> &[String] {
        &self.universe_id1
    }

    /// Second asset of each pair.
    pub fn universe_id2(&self) -> &[String] {
        &self.universe_id2
    }

    /// Covariance of each pair.
    pub fn covariance(&self) -> &[f64] {
        &self.covariance
    }

    /// Display name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Iterate the pairs as `(asset1, asset2, covariance)` rows.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str, f64)> + '_ {
        self.universe_id1
            .iter()
            .zip(&self.universe_id2)
            .zip(&self.covariance)
            .map(|((a, b), cov)| (a.as_str(), b.as_str(), *cov))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawIssuerSpecificCovariance {
    #[serde(alias = "universe_id1")]
    universe_id1: Vec<String>,
    #[serde(alias = "universe_id2")]
    universe_id2: Vec<String>,
    covariance: Vec<f64>,
    name: Option<String>,
}

impl TryFrom<RawIssuerSpecificCovariance> for RiskModelIssuerSpecificCovarianceData {
    type Error = SchemaError;

    fn try_from(raw: RawIssuerSpecificCovariance) -> Result<Self> {
        let mut data = Self::new(raw.universe_id1, raw.universe_id2, raw.covariance)?;
        data.name = raw.name;
        Ok(data)
    }
}

/// Factor portfolios over a shared universe.
///
/// Every portfolio's weight sequence is parallel to `universe`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawFactorPortfolios")]
pub struct RiskModelFactorPortfoliosData {
    universe: Vec<String>,
    portfolio: Vec<RiskModelFactorPortfolio>,
    name: Option<String>,
}

impl RiskModelFactorPortfoliosData {
    const RECORD: &'static str = "RiskModelFactorPortfoliosData";

    /// Create a factor portfolio set over the given universe.
    ///
    /// # Errors
    /// Returns [`SchemaError::ParallelLengthMismatch`] if any portfolio's
    /// weights do not match the universe length.
    pub fn new(universe: Vec<String>, portfolio: Vec<RiskModelFactorPortfolio>) -> Result<Self> {
        for entry in &portfolio {
            check_column(
                Self::RECORD,
                "weights",
                "universe",
                universe.len(),
                entry.weights.len(),
            )?;
        }
        Ok(Self {
            universe,
            portfolio,
            name: None,
        })
    }

    /// Attach a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Ordered asset identifiers the weights are parallel to.
    pub fn universe(&self) -> &[String] {
        &self.universe
    }

    /// The factor portfolios.
    pub fn portfolio(&self) -> &[RiskModelFactorPortfolio] {
        &self.portfolio
    }

    /// Display name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFactorPortfolios {
    universe: Vec<String>,
    portfolio: Vec<RiskModelFactorPortfolio>,
    name: Option<String>,
}

impl TryFrom<RawFactorPortfolios> for RiskModelFactorPortfoliosData {
    type Error = SchemaError;

    fn try_from(raw: RawFactorPortfolios) -> Result<Self> {
        let mut data = Self::new(raw.universe, raw.portfolio)?;
        data.name = raw.name;
        Ok(data)
    }
}

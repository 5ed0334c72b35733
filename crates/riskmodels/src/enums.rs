//! Closed string vocabularies of the risk model service.
//!
//! Every variant maps to exactly one wire literal; unrecognized literals are
//! rejected rather than silently defaulted.

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coverage level of a risk model's asset universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskModelCoverage {
    /// Global coverage
    Global,

    /// Single-region coverage
    Region,

    /// Regional coverage with named countries carved out
    #[serde(rename = "Region Excluding Countries")]
    RegionExcludingCountries,

    /// Single-country coverage
    Country,
}

impl RiskModelCoverage {
    /// Returns all coverage levels.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Global,
            Self::Region,
            Self::RegionExcludingCountries,
            Self::Country,
        ]
    }

    /// Returns the wire literal for this coverage level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::Region => "Region",
            Self::RegionExcludingCountries => "Region Excluding Countries",
            Self::Country => "Country",
        }
    }
}

impl fmt::Display for RiskModelCoverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskModelCoverage {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownLiteral {
                enum_name: "RiskModelCoverage",
                literal: s.to_string(),
            })
    }
}

/// Data measures that can be requested from the risk model service.
///
/// Asset-level measures align with the universe ordering; factor-level
/// measures align with the factor data sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskModelDataMeasure {
    /// Ordered asset identifiers covered on a date
    #[serde(rename = "Asset Universe")]
    AssetUniverse,

    /// Historical beta per asset
    #[serde(rename = "Historical Beta")]
    HistoricalBeta,

    /// Total volatility per asset
    #[serde(rename = "Total Risk")]
    TotalRisk,

    /// Idiosyncratic volatility per asset
    #[serde(rename = "Specific Risk")]
    SpecificRisk,

    /// Idiosyncratic return per asset
    #[serde(rename = "Specific Return")]
    SpecificReturn,

    /// Residual variance per asset
    #[serde(rename = "Residual Variance")]
    ResidualVariance,

    /// Factor exposure mapping per asset
    #[serde(rename = "Universe Factor Exposure")]
    UniverseFactorExposure,

    /// Regression R-squared per asset
    #[serde(rename = "R Squared")]
    RSquared,

    /// Fair value gap in percent per asset
    #[serde(rename = "Fair Value Gap Percent")]
    FairValueGapPercent,

    /// Fair value gap in standard deviations per asset
    #[serde(rename = "Fair Value Gap Standard Deviation")]
    FairValueGapStandardDeviation,

    /// Factor identifier
    #[serde(rename = "Factor Id")]
    FactorId,

    /// Factor display name
    #[serde(rename = "Factor Name")]
    FactorName,

    /// Factor category identifier
    #[serde(rename = "Factor Category Id")]
    FactorCategoryId,

    /// Factor category display name
    #[serde(rename = "Factor Category")]
    FactorCategory,

    /// Factor return
    #[serde(rename = "Factor Return")]
    FactorReturn,

    /// Factor return standard deviation
    #[serde(rename = "Factor Standard Deviation")]
    FactorStandardDeviation,

    /// Factor z-score
    #[serde(rename = "Factor Z Score")]
    FactorZScore,

    /// Factor covariance matrix
    #[serde(rename = "Covariance Matrix")]
    CovarianceMatrix,

    /// Sparse issuer-pair specific covariance
    #[serde(rename = "Issuer Specific Covariance")]
    IssuerSpecificCovariance,

    /// Single-factor replicating portfolios
    #[serde(rename = "Factor Portfolios")]
    FactorPortfolios,
}

impl RiskModelDataMeasure {
    /// Returns all data measures.
    pub fn all() -> Vec<Self> {
        vec![
            Self::AssetUniverse,
            Self::HistoricalBeta,
            Self::TotalRisk,
            Self::SpecificRisk,
            Self::SpecificReturn,
            Self::ResidualVariance,
            Self::UniverseFactorExposure,
            Self::RSquared,
            Self::FairValueGapPercent,
            Self::FairValueGapStandardDeviation,
            Self::FactorId,
            Self::FactorName,
            Self::FactorCategoryId,
            Self::FactorCategory,
            Self::FactorReturn,
            Self::FactorStandardDeviation,
            Self::FactorZScore,
            Self::CovarianceMatrix,
            Self::IssuerSpecificCovariance,
            Self::FactorPortfolios,
        ]
    }

    /// Returns the wire literal for this measure.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AssetUniverse => "Asset Universe",
            Self::HistoricalBeta => "Historical Beta",
            Self::TotalRisk => "Total Risk",
            Self::SpecificRisk => "Specific Risk",
            Self::SpecificReturn => "Specific Return",
            Self::ResidualVariance => "Residual Variance",
            Self::UniverseFactorExposure => "Universe Factor Exposure",
            Self::RSquared => "R Squared",
            Self::FairValueGapPercent => "Fair Value Gap Percent",
            Self::FairValueGapStandardDeviation => "Fair Value Gap Standard Deviation",
            Self::FactorId => "Factor Id",
            Self::FactorName => "Factor Name",
            Self::FactorCategoryId => "Factor Category Id",
            Self::FactorCategory => "Factor Category",
            Self::FactorReturn => "Factor Return",
            Self::FactorStandardDeviation => "Factor Standard Deviation",
            Self::FactorZScore => "Factor Z Score",
            Self::CovarianceMatrix => "Covariance Matrix",
            Self::IssuerSpecificCovariance => "Issuer Specific Covariance",
            Self::FactorPortfolios => "Factor Portfolios",
        }
    }
}

impl fmt::Display for RiskModelDataMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskModelDataMeasure {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownLiteral {
                enum_name: "RiskModelDataMeasure",
                literal: s.to_string(),
            })
    }
}

/// Event classes published for a risk model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskModelEventType {
    /// Core model data event
    #[serde(rename = "Risk Model")]
    RiskModel,

    /// Factor portfolio (PFP) data event
    #[serde(rename = "Risk Model PFP Data")]
    RiskModelPfpData,

    /// Issuer-specific covariance (ISC) data event
    #[serde(rename = "Risk Model ISC Data")]
    RiskModelIscData,
}

impl RiskModelEventType {
    /// Returns all event types.
    pub fn all() -> Vec<Self> {
        vec![
            Self::RiskModel,
            Self::RiskModelPfpData,
            Self::RiskModelIscData,
        ]
    }

    /// Returns the wire literal for this event type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RiskModel => "Risk Model",
            Self::RiskModelPfpData => "Risk Model PFP Data",
            Self::RiskModelIscData => "Risk Model ISC Data",
        }
    }
}

impl fmt::Display for RiskModelEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskModelEventType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownLiteral {
                enum_name: "RiskModelEventType",
                literal: s.to_string(),
            })
    }
}

/// Logical database a risk model is served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskModelLogicalDb {
    /// QSAR_AX_NYC database
    #[serde(rename = "QSAR_AX_NYC")]
    QsarAxNyc,

    /// STUDIO_DAILY database
    #[serde(rename = "STUDIO_DAILY")]
    StudioDaily,
}

impl RiskModelLogicalDb {
    /// Returns all logical databases.
    pub fn all() -> Vec<Self> {
        vec![Self::QsarAxNyc, Self::StudioDaily]
    }

    /// Returns the wire literal for this database.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::QsarAxNyc => "QSAR_AX_NYC",
            Self::StudioDaily => "STUDIO_DAILY",
        }
    }
}

impl fmt::Display for RiskModelLogicalDb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskModelLogicalDb {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownLiteral {
                enum_name: "RiskModelLogicalDb",
                literal: s.to_string(),
            })
    }
}

/// Horizon a risk model is estimated over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskModelTerm {
    /// Intraday trading horizon
    Trading,

    /// One-day horizon
    Day,

    /// Short horizon
    Short,

    /// Medium horizon
    Medium,

    /// Long horizon
    Long,
}

impl RiskModelTerm {
    /// Returns all terms.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Trading,
            Self::Day,
            Self::Short,
            Self::Medium,
            Self::Long,
        ]
    }

    /// Returns the wire literal for this term.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Trading => "Trading",
            Self::Day => "Day",
            Self::Short => "Short",
            Self::Medium => "Medium",
            Self::Long => "Long",
        }
    }
}

impl fmt::Display for RiskModelTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskModelTerm {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownLiteral {
                enum_name: "RiskModelTerm",
                literal: s.to_string(),
            })
    }
}

/// Identifier scheme a risk model universe is uploaded under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskModelUniverseIdentifier {
    /// SEDOL identifier
    Sedol,

    /// Bloomberg company identifier
    Bcid,

    /// CUSIP identifier
    Cusip,

    /// Service-assigned security identifier
    Gsid,
}

impl RiskModelUniverseIdentifier {
    /// Returns all upload identifier schemes.
    pub fn all() -> Vec<Self> {
        vec![Self::Sedol, Self::Bcid, Self::Cusip, Self::Gsid]
    }

    /// Returns the wire literal for this identifier scheme.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedol => "sedol",
            Self::Bcid => "bcid",
            Self::Cusip => "cusip",
            Self::Gsid => "gsid",
        }
    }
}

impl fmt::Display for RiskModelUniverseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskModelUniverseIdentifier {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownLiteral {
                enum_name: "RiskModelUniverseIdentifier",
                literal: s.to_string(),
            })
    }
}

/// Identifier scheme a risk model universe can be queried by.
///
/// Overlaps with [`RiskModelUniverseIdentifier`] but is a distinct set; the
/// query side accepts market identifiers the upload side does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskModelUniverseIdentifierRequest {
    /// Service-assigned security identifier
    Gsid,

    /// Bloomberg identifier
    Bbid,

    /// CUSIP identifier
    Cusip,

    /// SEDOL identifier
    Sedol,

    /// Reuters instrument code
    Ric,

    /// Exchange ticker
    Ticker,

    /// Prime brokerage identifier
    PrimeId,
}

impl RiskModelUniverseIdentifierRequest {
    /// Returns all query identifier schemes.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Gsid,
            Self::Bbid,
            Self::Cusip,
            Self::Sedol,
            Self::Ric,
            Self::Ticker,
            Self::PrimeId,
        ]
    }

    /// Returns the wire literal for this identifier scheme.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gsid => "gsid",
            Self::Bbid => "bbid",
            Self::Cusip => "cusip",
            Self::Sedol => "sedol",
            Self::Ric => "ric",
            Self::Ticker => "ticker",
            Self::PrimeId => "primeId",
        }
    }
}

impl fmt::Display for RiskModelUniverseIdentifierRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskModelUniverseIdentifierRequest {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownLiteral {
                enum_name: "RiskModelUniverseIdentifierRequest",
                literal: s.to_string(),
            })
    }
}

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/quantarc/riskmodels/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod asset;
pub mod calendar;
pub mod data;
pub mod enums;
pub mod error;
pub mod factor;
pub mod json;
pub mod model;
pub mod request;

pub use asset::{
    RiskModelAssetData, RiskModelFactorPortfoliosData, RiskModelIssuerSpecificCovarianceData,
};
pub use calendar::RiskModelCalendar;
pub use data::{RiskModelData, RiskModelDataResponse};
pub use enums::{
    RiskModelCoverage, RiskModelDataMeasure, RiskModelEventType, RiskModelLogicalDb,
    RiskModelTerm, RiskModelUniverseIdentifier, RiskModelUniverseIdentifierRequest,
};
pub use error::{Result, SchemaError};
pub use factor::{Factor, RiskModelFactorData, RiskModelFactorExposure, RiskModelFactorPortfolio};
pub use model::{Entitlements, RiskModel, RiskModelType};
pub use request::{RiskModelCoverageRequest, RiskModelDataAssetsRequest, RiskModelDataRequest};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

//! Business-date calendar attached to a risk model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Ordered business dates a risk model publishes data for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskModelCalendar {
    /// Business dates, in ascending order.
    #[serde(alias = "business_dates")]
    pub business_dates: Vec<NaiveDate>,

    /// Identifier of the user who created the calendar.
    #[serde(alias = "created_by_id")]
    pub created_by_id: Option<String>,

    /// Creation timestamp.
    #[serde(alias = "created_time")]
    pub created_time: Option<DateTime<Utc>>,

    /// Identifier of the user who last updated the calendar.
    #[serde(alias = "last_updated_by_id")]
    pub last_updated_by_id: Option<String>,

    /// Last update timestamp.
    #[serde(alias = "last_updated_time")]
    pub last_updated_time: Option<DateTime<Utc>>,

    /// Display name.
    pub name: Option<String>,
}

impl RiskModelCalendar {
    /// Create a calendar from its business dates.
    pub fn new(business_dates: Vec<NaiveDate>) -> Self {
        Self {
            business_dates,
            created_by_id: None,
            created_time: None,
            last_updated_by_id: None,
            last_updated_time: None,
            name: None,
        }
    }
}

//! Filter criteria and request decoding.
//!
//! `RecommendationRequest` mirrors the inbound JSON body exactly, with
//! every field optional so that a missing `city` is reported as an
//! `InvalidRequest` instead of a generic decode failure.

use crate::error::{EngineError, Result};
use catalog::BudgetCategory;
use serde::{Deserialize, Serialize};

/// Raw inbound body: `{ "city", "budget_category"?, "halal_required"? }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_category: Option<BudgetCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub halal_required: Option<bool>,
}

/// Validated, request-scoped filter criteria
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub city: String,
    pub budget_category: Option<BudgetCategory>,
    pub halal_required: bool,
}

impl FilterCriteria {
    /// Criteria for a city with no tier and no halal requirement
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            budget_category: None,
            halal_required: false,
        }
    }

    pub fn with_budget(mut self, budget: BudgetCategory) -> Self {
        self.budget_category = Some(budget);
        self
    }

    pub fn with_halal(mut self, required: bool) -> Self {
        self.halal_required = required;
        self
    }

    /// Fails when the city is empty or whitespace
    pub fn validate(&self) -> Result<()> {
        if self.city.trim().is_empty() {
            return Err(EngineError::invalid("city must not be empty"));
        }
        Ok(())
    }

    /// Decode and validate a JSON request body.
    ///
    /// Syntax errors, wrong field types, unknown tier names and a missing
    /// or blank city all become `InvalidRequest`.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let request: RecommendationRequest =
            serde_json::from_slice(body).map_err(|e| EngineError::invalid(e.to_string()))?;
        Self::try_from(request)
    }
}

impl TryFrom<RecommendationRequest> for FilterCriteria {
    type Error = EngineError;

    fn try_from(request: RecommendationRequest) -> Result<Self> {
        let city = request
            .city
            .ok_or_else(|| EngineError::invalid("missing field `city`"))?;
        let criteria = FilterCriteria {
            city,
            budget_category: request.budget_category,
            halal_required: request.halal_required.unwrap_or(false),
        };
        criteria.validate()?;
        Ok(criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_full_body() {
        let body = br#"{"city":"Makkah","budget_category":"Ultra-Luxury","halal_required":true}"#;
        let criteria = FilterCriteria::from_json(body).unwrap();
        assert_eq!(criteria.city, "Makkah");
        assert_eq!(criteria.budget_category, Some(BudgetCategory::UltraLuxury));
        assert!(criteria.halal_required);
    }

    #[test]
    fn test_from_json_defaults() {
        let criteria = FilterCriteria::from_json(br#"{"city":"Medina"}"#).unwrap();
        assert_eq!(criteria, FilterCriteria::new("Medina"));
    }

    #[test]
    fn test_from_json_rejects_missing_city() {
        let err = FilterCriteria::from_json(br#"{"halal_required":true}"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidRequest(_)));
    }

    #[test]
    fn test_from_json_rejects_blank_city() {
        let err = FilterCriteria::from_json(br#"{"city":"   "}"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidRequest(_)));
    }

    #[test]
    fn test_from_json_rejects_wrong_types() {
        let bodies: [&[u8]; 4] = [
            br#"{"city":42}"#,
            br#"{"city":"Makkah","halal_required":"yes"}"#,
            br#"{"city":"Makkah","budget_category":"Cheap"}"#,
            b"not json",
        ];
        for body in bodies {
            let err = FilterCriteria::from_json(body).unwrap_err();
            assert!(matches!(err, EngineError::InvalidRequest(_)), "{err:?}");
        }
    }
}

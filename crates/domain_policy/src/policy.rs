//! Policy record

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::{
    parse_iso_date, require_positive_amount, require_storable_json, require_text, PolicyId,
    PolicyholderId, ValidationError,
};

use crate::coverage::CoverageDetails;

/// An insurance contract owned by a policyholder
///
/// Start and end dates are each required to be valid calendar dates; no
/// ordering between them is enforced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Policy {
    id: Option<PolicyId>,
    policyholder_id: PolicyholderId,
    policy_type: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    premium_amount: Decimal,
    coverage_details: CoverageDetails,
}

impl Policy {
    /// Entity name used in error messages and logs
    pub const ENTITY: &'static str = "Policy";

    /// Creates a new, not yet persisted policy
    ///
    /// # Arguments
    ///
    /// * `policyholder_id` - Owning policyholder, must be positive
    /// * `policy_type` - Product line such as "Health" or "Car", must not be blank
    /// * `start_date` - ISO `YYYY-MM-DD`
    /// * `end_date` - ISO `YYYY-MM-DD`
    /// * `premium_amount` - Positive amount with at most two decimal places
    /// * `coverage_details` - Free-form coverage terms
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming the first field that fails
    pub fn new(
        policyholder_id: PolicyholderId,
        policy_type: impl Into<String>,
        start_date: &str,
        end_date: &str,
        premium_amount: Decimal,
        coverage_details: CoverageDetails,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: None,
            policyholder_id: policyholder_id.validated()?,
            policy_type: require_text("policy_type", policy_type)?,
            start_date: parse_iso_date("start_date", start_date)?,
            end_date: parse_iso_date("end_date", end_date)?,
            premium_amount: require_positive_amount("premium_amount", premium_amount)?,
            coverage_details: check_coverage(coverage_details)?,
        })
    }

    /// Rebuilds a policy from a stored row without validation
    pub fn from_storage(
        id: PolicyId,
        policyholder_id: PolicyholderId,
        policy_type: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        premium_amount: Decimal,
        coverage_details: CoverageDetails,
    ) -> Self {
        Self {
            id: Some(id),
            policyholder_id,
            policy_type,
            start_date,
            end_date,
            premium_amount,
            coverage_details,
        }
    }

    /// Returns the store-assigned id, or `None` before the first create
    pub fn id(&self) -> Option<PolicyId> {
        self.id
    }

    /// Records the id the store assigned on insert
    pub fn assign_id(&mut self, id: PolicyId) {
        self.id = Some(id);
    }

    pub fn policyholder_id(&self) -> PolicyholderId {
        self.policyholder_id
    }

    pub fn policy_type(&self) -> &str {
        &self.policy_type
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn premium_amount(&self) -> Decimal {
        self.premium_amount
    }

    pub fn coverage_details(&self) -> &CoverageDetails {
        &self.coverage_details
    }

    /// Moves the policy to another policyholder
    pub fn set_policyholder_id(
        &mut self,
        policyholder_id: PolicyholderId,
    ) -> Result<(), ValidationError> {
        self.policyholder_id = policyholder_id.validated()?;
        Ok(())
    }

    pub fn set_policy_type(&mut self, policy_type: impl Into<String>) -> Result<(), ValidationError> {
        self.policy_type = require_text("policy_type", policy_type)?;
        Ok(())
    }

    pub fn set_start_date(&mut self, start_date: &str) -> Result<(), ValidationError> {
        self.start_date = parse_iso_date("start_date", start_date)?;
        Ok(())
    }

    pub fn set_end_date(&mut self, end_date: &str) -> Result<(), ValidationError> {
        self.end_date = parse_iso_date("end_date", end_date)?;
        Ok(())
    }

    pub fn set_premium_amount(&mut self, premium_amount: Decimal) -> Result<(), ValidationError> {
        self.premium_amount = require_positive_amount("premium_amount", premium_amount)?;
        Ok(())
    }

    pub fn set_coverage_details(
        &mut self,
        coverage_details: CoverageDetails,
    ) -> Result<(), ValidationError> {
        self.coverage_details = check_coverage(coverage_details)?;
        Ok(())
    }
}

fn check_coverage(coverage_details: CoverageDetails) -> Result<CoverageDetails, ValidationError> {
    require_storable_json("coverage_details", &coverage_details.to_json_value())?;
    Ok(coverage_details)
}

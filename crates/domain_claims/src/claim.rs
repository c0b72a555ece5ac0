//! Claim record

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::{
    parse_iso_date, require_positive_amount, require_storable_json, require_text, ClaimId,
    PolicyId, ValidationError,
};

use crate::documents::Documents;
use crate::status::ClaimStatus;

/// A request for payout under a policy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Claim {
    id: Option<ClaimId>,
    policy_id: PolicyId,
    claim_date: NaiveDate,
    claim_amount: Decimal,
    claim_status: ClaimStatus,
    description: String,
    documents: Documents,
}

impl Claim {
    /// Entity name used in error messages and logs
    pub const ENTITY: &'static str = "Claim";

    /// Creates a new, not yet persisted claim
    ///
    /// # Arguments
    ///
    /// * `policy_id` - Policy the claim is made under, must be positive
    /// * `claim_date` - ISO `YYYY-MM-DD`
    /// * `claim_amount` - Positive amount with at most two decimal places
    /// * `claim_status` - Initial status
    /// * `description` - What happened, must not be blank
    /// * `documents` - Supporting document references
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming the first field that fails
    pub fn new(
        policy_id: PolicyId,
        claim_date: &str,
        claim_amount: Decimal,
        claim_status: ClaimStatus,
        description: impl Into<String>,
        documents: Documents,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: None,
            policy_id: policy_id.validated()?,
            claim_date: parse_iso_date("claim_date", claim_date)?,
            claim_amount: require_positive_amount("claim_amount", claim_amount)?,
            claim_status,
            description: require_text("description", description)?,
            documents: check_documents(documents)?,
        })
    }

    /// Rebuilds a claim from a stored row without validation
    pub fn from_storage(
        id: ClaimId,
        policy_id: PolicyId,
        claim_date: NaiveDate,
        claim_amount: Decimal,
        claim_status: ClaimStatus,
        description: String,
        documents: Documents,
    ) -> Self {
        Self {
            id: Some(id),
            policy_id,
            claim_date,
            claim_amount,
            claim_status,
            description,
            documents,
        }
    }

    /// Returns the store-assigned id, or `None` before the first create
    pub fn id(&self) -> Option<ClaimId> {
        self.id
    }

    /// Records the id the store assigned on insert
    pub fn assign_id(&mut self, id: ClaimId) {
        self.id = Some(id);
    }

    pub fn policy_id(&self) -> PolicyId {
        self.policy_id
    }

    pub fn claim_date(&self) -> NaiveDate {
        self.claim_date
    }

    pub fn claim_amount(&self) -> Decimal {
        self.claim_amount
    }

    pub fn claim_status(&self) -> ClaimStatus {
        self.claim_status
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn documents(&self) -> &Documents {
        &self.documents
    }

    pub fn set_policy_id(&mut self, policy_id: PolicyId) -> Result<(), ValidationError> {
        self.policy_id = policy_id.validated()?;
        Ok(())
    }

    pub fn set_claim_date(&mut self, claim_date: &str) -> Result<(), ValidationError> {
        self.claim_date = parse_iso_date("claim_date", claim_date)?;
        Ok(())
    }

    pub fn set_claim_amount(&mut self, claim_amount: Decimal) -> Result<(), ValidationError> {
        self.claim_amount = require_positive_amount("claim_amount", claim_amount)?;
        Ok(())
    }

    pub fn set_claim_status(&mut self, claim_status: ClaimStatus) {
        self.claim_status = claim_status;
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), ValidationError> {
        self.description = require_text("description", description)?;
        Ok(())
    }

    pub fn set_documents(&mut self, documents: Documents) -> Result<(), ValidationError> {
        self.documents = check_documents(documents)?;
        Ok(())
    }
}

fn check_documents(documents: Documents) -> Result<Documents, ValidationError> {
    require_storable_json("documents", &documents.to_json_value())?;
    Ok(documents)
}

//! PostgreSQL claim port

use async_trait::async_trait;
use tracing::{debug, instrument};

use core_kernel::{ClaimId, PolicyId, StoreError};
use domain_claims::{Claim, ClaimPort, ClaimStatus, Documents};

use super::{corrupt_row, db_to_store_error, PostgresStore};
use crate::repositories::{ClaimRecord, ClaimRow};

const ENTITY: &str = Claim::ENTITY;

#[async_trait]
impl ClaimPort for PostgresStore {
    #[instrument(skip(self, claim), fields(policy_id = %claim.policy_id()))]
    async fn create_claim(&self, claim: &mut Claim) -> Result<ClaimId, StoreError> {
        debug!("Inserting claim");

        let id = self
            .claims
            .insert(&claim_record(claim))
            .await
            .map_err(|e| db_to_store_error(ENTITY, e))?;

        let id = ClaimId::from_raw(id);
        claim.assign_id(id);
        debug!(claim_id = %id, "Claim stored");
        Ok(id)
    }

    #[instrument(skip(self), fields(claim_id = %id))]
    async fn read_claim(&self, id: ClaimId) -> Result<Option<Claim>, StoreError> {
        debug!("Fetching claim by ID");

        let row = self
            .claims
            .get_by_id(id.value())
            .await
            .map_err(|e| db_to_store_error(ENTITY, e))?;

        row.map(row_to_claim).transpose()
    }

    #[instrument(skip(self, claim), fields(claim_id = ?claim.id()))]
    async fn update_claim(&self, claim: &Claim) -> Result<bool, StoreError> {
        let id = claim
            .id()
            .ok_or_else(|| StoreError::missing_identifier(ENTITY))?;
        debug!(status = %claim.claim_status(), "Updating claim");

        self.claims
            .update(id.value(), &claim_record(claim))
            .await
            .map_err(|e| db_to_store_error(ENTITY, e))
    }

    #[instrument(skip(self), fields(claim_id = %id))]
    async fn delete_claim(&self, id: ClaimId) -> Result<bool, StoreError> {
        debug!("Deleting claim");

        self.claims
            .delete(id.value())
            .await
            .map_err(|e| db_to_store_error(ENTITY, e))
    }
}

fn claim_record(claim: &Claim) -> ClaimRecord {
    ClaimRecord {
        policy_id: claim.policy_id().value(),
        claim_date: claim.claim_date(),
        claim_amount: claim.claim_amount(),
        claim_status: claim.claim_status().as_str().to_string(),
        description: claim.description().to_string(),
        documents: claim.documents().to_json_value(),
    }
}

fn row_to_claim(row: ClaimRow) -> Result<Claim, StoreError> {
    let claim_status: ClaimStatus = row
        .claim_status
        .parse()
        .map_err(|e| corrupt_row(ENTITY, row.id, e))?;
    let documents = Documents::from_json_value(row.documents.0)
        .map_err(|e| corrupt_row(ENTITY, row.id, format!("documents: {}", e)))?;

    Ok(Claim::from_storage(
        ClaimId::from_raw(row.id),
        PolicyId::from_raw(row.policy_id),
        row.claim_date,
        row.claim_amount,
        claim_status,
        row.description,
        documents,
    ))
}

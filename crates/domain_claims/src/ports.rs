//! Claims Domain Port

use async_trait::async_trait;

use core_kernel::{ClaimId, DomainPort, StoreError};

use crate::claim::Claim;

/// Port for claim persistence
///
/// Writes that reference a policy id with no stored row fail with a
/// foreign-key `StoreError::ConstraintViolation`. A stored status outside
/// the `ClaimStatus` set reads back as `StoreError::CorruptData`.
#[async_trait]
pub trait ClaimPort: DomainPort {
    /// Inserts a new claim row and writes the assigned id onto `claim`
    async fn create_claim(&self, claim: &mut Claim) -> Result<ClaimId, StoreError>;

    /// Reads a claim by id, `Ok(None)` when absent
    async fn read_claim(&self, id: ClaimId) -> Result<Option<Claim>, StoreError>;

    /// Overwrites every non-key column, `Ok(false)` when no row has the id
    async fn update_claim(&self, claim: &Claim) -> Result<bool, StoreError>;

    /// Deletes a claim by id, `Ok(false)` when absent
    async fn delete_claim(&self, id: ClaimId) -> Result<bool, StoreError>;
}

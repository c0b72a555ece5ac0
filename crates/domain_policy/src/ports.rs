//! Policy Domain Port

use async_trait::async_trait;

use core_kernel::{DomainPort, PolicyId, StoreError};

use crate::policy::Policy;

/// Port for policy persistence
///
/// Writes that reference a policyholder id with no stored row fail with a
/// foreign-key `StoreError::ConstraintViolation`.
#[async_trait]
pub trait PolicyPort: DomainPort {
    /// Inserts a new policy row and writes the assigned id onto `policy`
    async fn create_policy(&self, policy: &mut Policy) -> Result<PolicyId, StoreError>;

    /// Reads a policy by id, `Ok(None)` when absent
    async fn read_policy(&self, id: PolicyId) -> Result<Option<Policy>, StoreError>;

    /// Overwrites every non-key column, `Ok(false)` when no row has the id
    async fn update_policy(&self, policy: &Policy) -> Result<bool, StoreError>;

    /// Deletes a policy by id, `Ok(false)` when absent
    ///
    /// Fails with a foreign-key violation while claims reference the policy.
    async fn delete_policy(&self, id: PolicyId) -> Result<bool, StoreError>;
}

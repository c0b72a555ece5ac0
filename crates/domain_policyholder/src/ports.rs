//! Policyholder Domain Port
//!
//! The `PolicyholderPort` trait lists the persistence operations the
//! policyholder domain needs. `infra_db` implements it on PostgreSQL and
//! `test_utils` provides an in-memory implementation.

use async_trait::async_trait;

use core_kernel::{DomainPort, PolicyholderId, StoreError};

use crate::policyholder::Policyholder;

/// Port for policyholder persistence
///
/// Ids are assigned by the store. A lookup that matches nothing is not an
/// error.
#[async_trait]
pub trait PolicyholderPort: DomainPort {
    /// Inserts a new policyholder row
    ///
    /// The store-assigned id is written onto `policyholder` and returned.
    /// An id already present on the entity is replaced.
    async fn create_policyholder(
        &self,
        policyholder: &mut Policyholder,
    ) -> Result<PolicyholderId, StoreError>;

    /// Reads a policyholder by id
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no row has this id
    async fn read_policyholder(
        &self,
        id: PolicyholderId,
    ) -> Result<Option<Policyholder>, StoreError>;

    /// Overwrites every non-key column of the row with the entity's id
    ///
    /// # Returns
    ///
    /// `Ok(false)` when no row has this id
    ///
    /// # Errors
    ///
    /// `StoreError::MissingIdentifier` when the entity was never created
    async fn update_policyholder(&self, policyholder: &Policyholder) -> Result<bool, StoreError>;

    /// Deletes a policyholder by id
    ///
    /// # Returns
    ///
    /// `Ok(false)` when no row has this id
    ///
    /// # Errors
    ///
    /// A foreign-key `StoreError::ConstraintViolation` while policies still
    /// reference the policyholder
    async fn delete_policyholder(&self, id: PolicyholderId) -> Result<bool, StoreError>;
}

//! PostgreSQL policyholder port

use async_trait::async_trait;
use tracing::{debug, instrument};

use core_kernel::{PolicyholderId, StoreError};
use domain_policyholder::{Policyholder, PolicyholderPort};

use super::{db_to_store_error, PostgresStore};
use crate::repositories::{PolicyholderRecord, PolicyholderRow};

const ENTITY: &str = Policyholder::ENTITY;

#[async_trait]
impl PolicyholderPort for PostgresStore {
    #[instrument(skip(self, policyholder))]
    async fn create_policyholder(
        &self,
        policyholder: &mut Policyholder,
    ) -> Result<PolicyholderId, StoreError> {
        debug!("Inserting policyholder");

        let id = self
            .policyholders
            .insert(&policyholder_record(policyholder))
            .await
            .map_err(|e| db_to_store_error(ENTITY, e))?;

        let id = PolicyholderId::from_raw(id);
        policyholder.assign_id(id);
        debug!(policyholder_id = %id, "Policyholder stored");
        Ok(id)
    }

    #[instrument(skip(self), fields(policyholder_id = %id))]
    async fn read_policyholder(
        &self,
        id: PolicyholderId,
    ) -> Result<Option<Policyholder>, StoreError> {
        debug!("Fetching policyholder by ID");

        let row = self
            .policyholders
            .get_by_id(id.value())
            .await
            .map_err(|e| db_to_store_error(ENTITY, e))?;

        Ok(row.map(row_to_policyholder))
    }

    #[instrument(skip(self, policyholder), fields(policyholder_id = ?policyholder.id()))]
    async fn update_policyholder(&self, policyholder: &Policyholder) -> Result<bool, StoreError> {
        let id = policyholder
            .id()
            .ok_or_else(|| StoreError::missing_identifier(ENTITY))?;
        debug!("Updating policyholder");

        self.policyholders
            .update(id.value(), &policyholder_record(policyholder))
            .await
            .map_err(|e| db_to_store_error(ENTITY, e))
    }

    #[instrument(skip(self), fields(policyholder_id = %id))]
    async fn delete_policyholder(&self, id: PolicyholderId) -> Result<bool, StoreError> {
        debug!("Deleting policyholder");

        self.policyholders
            .delete(id.value())
            .await
            .map_err(|e| db_to_store_error(ENTITY, e))
    }
}

fn policyholder_record(policyholder: &Policyholder) -> PolicyholderRecord {
    PolicyholderRecord {
        name: policyholder.name().to_string(),
        address: policyholder.address().to_string(),
        phone: policyholder.contact().phone().to_string(),
        email: policyholder.contact().email().to_string(),
    }
}

fn row_to_policyholder(row: PolicyholderRow) -> Policyholder {
    Policyholder::from_storage(
        PolicyholderId::from_raw(row.id),
        row.name,
        row.address,
        row.phone,
        row.email,
    )
}

//! Orchestration facade

use std::sync::Arc;

use tracing::info;

use core_kernel::{
    ClaimId, HealthCheckResult, HealthCheckable, PolicyId, PolicyholderId, StoreError,
};
use domain_claims::{Claim, ClaimPort};
use domain_policy::{Policy, PolicyPort};
use domain_policyholder::{Policyholder, PolicyholderPort};
use infra_db::{create_pool, ensure_schema, PostgresStore};

use crate::config::CmsConfig;
use crate::error::CmsError;
use crate::store::InsuranceStore;

/// Entry point for recording policyholders, policies, and claims
///
/// Holds one shared store handle and forwards every call to it. Each call
/// completes before it returns; the facade adds no caching or locking.
#[derive(Clone)]
pub struct ClaimsManagementSystem {
    store: Arc<dyn InsuranceStore>,
}

impl ClaimsManagementSystem {
    /// Wraps an existing store
    pub fn new(store: Arc<dyn InsuranceStore>) -> Self {
        Self { store }
    }

    /// Connects to PostgreSQL, creates any missing tables, and wraps a
    /// `PostgresStore`
    ///
    /// # Errors
    ///
    /// Returns `CmsError::Database` if the pool cannot connect or the schema
    /// bootstrap fails
    pub async fn connect(config: &CmsConfig) -> Result<Self, CmsError> {
        let database = config.database_config();
        info!(max_connections = database.max_connections, "Connecting claims store");

        let pool = create_pool(database).await?;
        ensure_schema(&pool).await?;

        Ok(Self::new(Arc::new(PostgresStore::new(pool))))
    }

    /// Returns the underlying store handle
    pub fn store(&self) -> &Arc<dyn InsuranceStore> {
        &self.store
    }

    /// Stores a new policyholder and writes the assigned id onto it
    pub async fn create_policyholder(
        &self,
        policyholder: &mut Policyholder,
    ) -> Result<PolicyholderId, StoreError> {
        self.store.create_policyholder(policyholder).await
    }

    pub async fn read_policyholder(
        &self,
        id: PolicyholderId,
    ) -> Result<Option<Policyholder>, StoreError> {
        self.store.read_policyholder(id).await
    }

    pub async fn update_policyholder(&self, policyholder: &Policyholder) -> Result<bool, StoreError> {
        self.store.update_policyholder(policyholder).await
    }

    /// Deletes a policyholder; fails while policies still reference it
    pub async fn delete_policyholder(&self, id: PolicyholderId) -> Result<bool, StoreError> {
        self.store.delete_policyholder(id).await
    }

    /// Stores a new policy and writes the assigned id onto it
    pub async fn create_policy(&self, policy: &mut Policy) -> Result<PolicyId, StoreError> {
        self.store.create_policy(policy).await
    }

    pub async fn read_policy(&self, id: PolicyId) -> Result<Option<Policy>, StoreError> {
        self.store.read_policy(id).await
    }

    pub async fn update_policy(&self, policy: &Policy) -> Result<bool, StoreError> {
        self.store.update_policy(policy).await
    }

    /// Deletes a policy; fails while claims still reference it
    pub async fn delete_policy(&self, id: PolicyId) -> Result<bool, StoreError> {
        self.store.delete_policy(id).await
    }

    /// Stores a new claim and writes the assigned id onto it
    pub async fn create_claim(&self, claim: &mut Claim) -> Result<ClaimId, StoreError> {
        self.store.create_claim(claim).await
    }

    pub async fn read_claim(&self, id: ClaimId) -> Result<Option<Claim>, StoreError> {
        self.store.read_claim(id).await
    }

    pub async fn update_claim(&self, claim: &Claim) -> Result<bool, StoreError> {
        self.store.update_claim(claim).await
    }

    pub async fn delete_claim(&self, id: ClaimId) -> Result<bool, StoreError> {
        self.store.delete_claim(id).await
    }

    /// Reports whether the store is reachable
    pub async fn health_check(&self) -> HealthCheckResult {
        self.store.health_check().await
    }
}

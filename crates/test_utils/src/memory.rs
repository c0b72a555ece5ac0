//! In-Memory Store
//!
//! An implementation of the policyholder, policy, and claim ports that keeps
//! rows in process memory. It follows the PostgreSQL store's contract:
//! sequential store-assigned keys, structured fields kept as serialized JSON
//! text, and foreign keys without cascade. Writes that reference a missing
//! parent, and deletes of a referenced parent, fail with a foreign-key
//! constraint violation and leave every table unchanged.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use core_kernel::{
    AdapterHealth, ClaimId, ConstraintKind, DomainPort, HealthCheckResult, HealthCheckable,
    PolicyId, PolicyholderId, StoreError,
};
use domain_claims::{Claim, ClaimPort, ClaimStatus, Documents};
use domain_policy::{CoverageDetails, Policy, PolicyPort};
use domain_policyholder::{Policyholder, PolicyholderPort};

const ADAPTER_ID: &str = "in-memory-store";

#[derive(Debug, Clone)]
struct PolicyholderRow {
    name: String,
    address: String,
    phone: String,
    email: String,
}

#[derive(Debug, Clone)]
struct PolicyRow {
    policyholder_id: i32,
    policy_type: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    premium_amount: Decimal,
    coverage_details: String,
}

#[derive(Debug, Clone)]
struct ClaimRow {
    policy_id: i32,
    claim_date: NaiveDate,
    claim_amount: Decimal,
    claim_status: String,
    description: String,
    documents: String,
}

/// One serial counter per table, starting at 1 like PostgreSQL `SERIAL`
#[derive(Debug, Default)]
struct Tables {
    policyholder_seq: i32,
    policy_seq: i32,
    claim_seq: i32,
    policyholders: BTreeMap<i32, PolicyholderRow>,
    policies: BTreeMap<i32, PolicyRow>,
    claims: BTreeMap<i32, ClaimRow>,
}

impl Tables {
    fn policy_references_holder(&self, policyholder_id: i32) -> bool {
        self.policies
            .values()
            .any(|p| p.policyholder_id == policyholder_id)
    }

    fn claim_references_policy(&self, policy_id: i32) -> bool {
        self.claims.values().any(|c| c.policy_id == policy_id)
    }
}

/// Row counts per table, for asserting that a failed write left nothing behind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCounts {
    pub policyholders: usize,
    pub policies: usize,
    pub claims: usize,
}

/// In-memory implementation of the domain ports
///
/// # Example
///
/// ```rust
/// use domain_policyholder::PolicyholderPort;
/// use test_utils::{InMemoryStore, PolicyholderFixtures};
///
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// rt.block_on(async {
///     let store = InMemoryStore::new();
///     let mut jane = PolicyholderFixtures::jane_doe();
///     let id = store.create_policyholder(&mut jane).await.unwrap();
///     assert_eq!(id.value(), 1);
/// });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of rows in each table
    pub async fn row_counts(&self) -> RowCounts {
        let tables = self.tables.read().await;
        RowCounts {
            policyholders: tables.policyholders.len(),
            policies: tables.policies.len(),
            claims: tables.claims.len(),
        }
    }

    /// Overwrites the stored status text of a claim, bypassing validation
    ///
    /// Returns false when no claim has the id.
    pub async fn overwrite_claim_status(&self, id: ClaimId, status: &str) -> bool {
        let mut tables = self.tables.write().await;
        match tables.claims.get_mut(&id.value()) {
            Some(row) => {
                row.claim_status = status.to_string();
                true
            }
            None => false,
        }
    }

    /// Overwrites the stored coverage JSON text of a policy, bypassing validation
    pub async fn overwrite_coverage_details(&self, id: PolicyId, json: &str) -> bool {
        let mut tables = self.tables.write().await;
        match tables.policies.get_mut(&id.value()) {
            Some(row) => {
                row.coverage_details = json.to_string();
                true
            }
            None => false,
        }
    }

    /// Overwrites the stored documents JSON text of a claim, bypassing validation
    pub async fn overwrite_documents(&self, id: ClaimId, json: &str) -> bool {
        let mut tables = self.tables.write().await;
        match tables.claims.get_mut(&id.value()) {
            Some(row) => {
                row.documents = json.to_string();
                true
            }
            None => false,
        }
    }
}

fn fk_insert_violation(table: &str, column: &str, parent: &str, key: i32) -> StoreError {
    StoreError::constraint(
        ConstraintKind::ForeignKey,
        format!(
            "insert or update on table \"{}\" violates foreign key constraint \"{}_{}_fkey\": key ({})=({}) is not present in table \"{}\"",
            table, table, column, column, key, parent
        ),
    )
}

fn fk_delete_violation(table: &str, child: &str, column: &str) -> StoreError {
    StoreError::constraint(
        ConstraintKind::ForeignKey,
        format!(
            "update or delete on table \"{}\" violates foreign key constraint \"{}_{}_fkey\" on table \"{}\"",
            table, child, column, child
        ),
    )
}

impl DomainPort for InMemoryStore {}

#[async_trait]
impl HealthCheckable for InMemoryStore {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult {
            adapter_id: ADAPTER_ID.to_string(),
            status: AdapterHealth::Healthy,
            latency_ms: 0,
            message: None,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl PolicyholderPort for InMemoryStore {
    async fn create_policyholder(
        &self,
        policyholder: &mut Policyholder,
    ) -> Result<PolicyholderId, StoreError> {
        let mut tables = self.tables.write().await;
        tables.policyholder_seq += 1;
        let id = tables.policyholder_seq;
        tables.policyholders.insert(id, policyholder_row(policyholder));

        let id = PolicyholderId::from_raw(id);
        policyholder.assign_id(id);
        Ok(id)
    }

    async fn read_policyholder(
        &self,
        id: PolicyholderId,
    ) -> Result<Option<Policyholder>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.policyholders.get(&id.value()).map(|row| {
            Policyholder::from_storage(
                id,
                row.name.clone(),
                row.address.clone(),
                row.phone.clone(),
                row.email.clone(),
            )
        }))
    }

    async fn update_policyholder(&self, policyholder: &Policyholder) -> Result<bool, StoreError> {
        let id = policyholder
            .id()
            .ok_or_else(|| StoreError::missing_identifier(Policyholder::ENTITY))?;

        let mut tables = self.tables.write().await;
        match tables.policyholders.get_mut(&id.value()) {
            Some(row) => {
                *row = policyholder_row(policyholder);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_policyholder(&self, id: PolicyholderId) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.policyholders.contains_key(&id.value()) {
            return Ok(false);
        }
        if tables.policy_references_holder(id.value()) {
            return Err(fk_delete_violation("policyholders", "policies", "policyholder_id"));
        }
        Ok(tables.policyholders.remove(&id.value()).is_some())
    }
}

#[async_trait]
impl PolicyPort for InMemoryStore {
    async fn create_policy(&self, policy: &mut Policy) -> Result<PolicyId, StoreError> {
        let mut tables = self.tables.write().await;
        let holder = policy.policyholder_id().value();
        if !tables.policyholders.contains_key(&holder) {
            return Err(fk_insert_violation("policies", "policyholder_id", "policyholders", holder));
        }

        tables.policy_seq += 1;
        let id = tables.policy_seq;
        tables.policies.insert(id, policy_row(policy));

        let id = PolicyId::from_raw(id);
        policy.assign_id(id);
        Ok(id)
    }

    async fn read_policy(&self, id: PolicyId) -> Result<Option<Policy>, StoreError> {
        let tables = self.tables.read().await;
        let Some(row) = tables.policies.get(&id.value()) else {
            return Ok(None);
        };

        let coverage_details = CoverageDetails::from_json_str(&row.coverage_details).map_err(|e| {
            StoreError::corrupt(
                Policy::ENTITY,
                format!("row {}: coverage_details: {}", id, e),
            )
        })?;

        Ok(Some(Policy::from_storage(
            id,
            PolicyholderId::from_raw(row.policyholder_id),
            row.policy_type.clone(),
            row.start_date,
            row.end_date,
            row.premium_amount,
            coverage_details,
        )))
    }

    async fn update_policy(&self, policy: &Policy) -> Result<bool, StoreError> {
        let id = policy
            .id()
            .ok_or_else(|| StoreError::missing_identifier(Policy::ENTITY))?;

        let mut tables = self.tables.write().await;
        if !tables.policies.contains_key(&id.value()) {
            return Ok(false);
        }
        let holder = policy.policyholder_id().value();
        if !tables.policyholders.contains_key(&holder) {
            return Err(fk_insert_violation("policies", "policyholder_id", "policyholders", holder));
        }

        tables.policies.insert(id.value(), policy_row(policy));
        Ok(true)
    }

    async fn delete_policy(&self, id: PolicyId) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.policies.contains_key(&id.value()) {
            return Ok(false);
        }
        if tables.claim_references_policy(id.value()) {
            return Err(fk_delete_violation("policies", "claims", "policy_id"));
        }
        Ok(tables.policies.remove(&id.value()).is_some())
    }
}

#[async_trait]
impl ClaimPort for InMemoryStore {
    async fn create_claim(&self, claim: &mut Claim) -> Result<ClaimId, StoreError> {
        let mut tables = self.tables.write().await;
        let policy = claim.policy_id().value();
        if !tables.policies.contains_key(&policy) {
            return Err(fk_insert_violation("claims", "policy_id", "policies", policy));
        }

        tables.claim_seq += 1;
        let id = tables.claim_seq;
        tables.claims.insert(id, claim_row(claim));

        let id = ClaimId::from_raw(id);
        claim.assign_id(id);
        Ok(id)
    }

    async fn read_claim(&self, id: ClaimId) -> Result<Option<Claim>, StoreError> {
        let tables = self.tables.read().await;
        let Some(row) = tables.claims.get(&id.value()) else {
            return Ok(None);
        };

        let claim_status: ClaimStatus = row
            .claim_status
            .parse()
            .map_err(|e| StoreError::corrupt(Claim::ENTITY, format!("row {}: {}", id, e)))?;
        let documents = Documents::from_json_str(&row.documents).map_err(|e| {
            StoreError::corrupt(Claim::ENTITY, format!("row {}: documents: {}", id, e))
        })?;

        Ok(Some(Claim::from_storage(
            id,
            PolicyId::from_raw(row.policy_id),
            row.claim_date,
            row.claim_amount,
            claim_status,
            row.description.clone(),
            documents,
        )))
    }

    async fn update_claim(&self, claim: &Claim) -> Result<bool, StoreError> {
        let id = claim
            .id()
            .ok_or_else(|| StoreError::missing_identifier(Claim::ENTITY))?;

        let mut tables = self.tables.write().await;
        if !tables.claims.contains_key(&id.value()) {
            return Ok(false);
        }
        let policy = claim.policy_id().value();
        if !tables.policies.contains_key(&policy) {
            return Err(fk_insert_violation("claims", "policy_id", "policies", policy));
        }

        tables.claims.insert(id.value(), claim_row(claim));
        Ok(true)
    }

    async fn delete_claim(&self, id: ClaimId) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        Ok(tables.claims.remove(&id.value()).is_some())
    }
}

fn policyholder_row(policyholder: &Policyholder) -> PolicyholderRow {
    PolicyholderRow {
        name: policyholder.name().to_string(),
        address: policyholder.address().to_string(),
        phone: policyholder.contact().phone().to_string(),
        email: policyholder.contact().email().to_string(),
    }
}

fn policy_row(policy: &Policy) -> PolicyRow {
    PolicyRow {
        policyholder_id: policy.policyholder_id().value(),
        policy_type: policy.policy_type().to_string(),
        start_date: policy.start_date(),
        end_date: policy.end_date(),
        premium_amount: policy.premium_amount(),
        coverage_details: policy.coverage_details().to_json_string(),
    }
}

fn claim_row(claim: &Claim) -> ClaimRow {
    ClaimRow {
        policy_id: claim.policy_id().value(),
        claim_date: claim.claim_date(),
        claim_amount: claim.claim_amount(),
        claim_status: claim.claim_status().as_str().to_string(),
        description: claim.description().to_string(),
        documents: claim.documents().to_json_string(),
    }
}

//! PostgreSQL policy port

use async_trait::async_trait;
use tracing::{debug, instrument};

use core_kernel::{PolicyId, PolicyholderId, StoreError};
use domain_policy::{CoverageDetails, Policy, PolicyPort};

use super::{corrupt_row, db_to_store_error, PostgresStore};
use crate::repositories::{PolicyRecord, PolicyRow};

const ENTITY: &str = Policy::ENTITY;

#[async_trait]
impl PolicyPort for PostgresStore {
    #[instrument(skip(self, policy), fields(policyholder_id = %policy.policyholder_id()))]
    async fn create_policy(&self, policy: &mut Policy) -> Result<PolicyId, StoreError> {
        debug!("Inserting policy");

        let id = self
            .policies
            .insert(&policy_record(policy))
            .await
            .map_err(|e| db_to_store_error(ENTITY, e))?;

        let id = PolicyId::from_raw(id);
        policy.assign_id(id);
        debug!(policy_id = %id, "Policy stored");
        Ok(id)
    }

    #[instrument(skip(self), fields(policy_id = %id))]
    async fn read_policy(&self, id: PolicyId) -> Result<Option<Policy>, StoreError> {
        debug!("Fetching policy by ID");

        let row = self
            .policies
            .get_by_id(id.value())
            .await
            .map_err(|e| db_to_store_error(ENTITY, e))?;

        row.map(row_to_policy).transpose()
    }

    #[instrument(skip(self, policy), fields(policy_id = ?policy.id()))]
    async fn update_policy(&self, policy: &Policy) -> Result<bool, StoreError> {
        let id = policy
            .id()
            .ok_or_else(|| StoreError::missing_identifier(ENTITY))?;
        debug!("Updating policy");

        self.policies
            .update(id.value(), &policy_record(policy))
            .await
            .map_err(|e| db_to_store_error(ENTITY, e))
    }

    #[instrument(skip(self), fields(policy_id = %id))]
    async fn delete_policy(&self, id: PolicyId) -> Result<bool, StoreError> {
        debug!("Deleting policy");

        self.policies
            .delete(id.value())
            .await
            .map_err(|e| db_to_store_error(ENTITY, e))
    }
}

fn policy_record(policy: &Policy) -> PolicyRecord {
    PolicyRecord {
        policyholder_id: policy.policyholder_id().value(),
        policy_type: policy.policy_type().to_string(),
        start_date: policy.start_date(),
        end_date: policy.end_date(),
        premium_amount: policy.premium_amount(),
        coverage_details: policy.coverage_details().to_json_value(),
    }
}

fn row_to_policy(row: PolicyRow) -> Result<Policy, StoreError> {
    let coverage_details = CoverageDetails::from_json_value(row.coverage_details.0)
        .map_err(|e| corrupt_row(ENTITY, row.id, format!("coverage_details: {}", e)))?;

    Ok(Policy::from_storage(
        PolicyId::from_raw(row.id),
        PolicyholderId::from_raw(row.policyholder_id),
        row.policy_type,
        row.start_date,
        row.end_date,
        row.premium_amount,
        coverage_details,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use sqlx::types::Json;

    fn row(coverage_details: serde_json::Value) -> PolicyRow {
        PolicyRow {
            id: 7,
            policyholder_id: 1,
            policy_type: "Health".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            premium_amount: dec!(1200.50),
            coverage_details: Json(coverage_details),
        }
    }

    #[test]
    fn test_row_decodes_coverage_object() {
        let policy = row_to_policy(row(json!({"coverage": "Full"}))).unwrap();
        assert_eq!(policy.id(), Some(PolicyId::from_raw(7)));
        assert_eq!(
            policy.coverage_details().get("coverage").and_then(|v| v.as_str()),
            Some("Full")
        );
    }

    #[test]
    fn test_non_object_coverage_is_corrupt() {
        let error = row_to_policy(row(json!(["Full"]))).unwrap_err();
        assert!(error.is_corrupt_data());
    }

    #[test]
    fn test_record_serializes_coverage() {
        let policy = row_to_policy(row(json!({"coverage": "Full"}))).unwrap();
        let record = policy_record(&policy);
        assert_eq!(record.coverage_details, json!({"coverage": "Full"}));
        assert_eq!(record.policyholder_id, 1);
    }
}

//! Facade tests over the in-memory store
//!
//! These run without a database and exercise the full create, read,
//! update, and delete contract through `ClaimsManagementSystem`.

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal_macros::dec;

use core_kernel::{ClaimId, PolicyId, PolicyholderId};
use domain_claims::{Claim, ClaimStatus, Documents};
use domain_policy::{CoverageDetails, Policy};
use domain_policyholder::{ContactInfo, Policyholder};
use interface_cms::ClaimsManagementSystem;
use test_utils::{
    assert_corrupt_data, assert_foreign_key_violation, assert_invalid_field,
    assert_missing_identifier, policyholder_strategy, ClaimFixtures, InMemoryStore,
    PolicyFixtures, PolicyholderFixtures,
};

fn system() -> (ClaimsManagementSystem, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    (ClaimsManagementSystem::new(store.clone()), store)
}

mod scenario {
    use super::*;

    #[tokio::test]
    async fn test_jane_doe_end_to_end() {
        let (cms, _) = system();

        let mut jane = Policyholder::new(
            "Jane Doe",
            "456 Elm St",
            ContactInfo::new("5551234567", "jane@example.com").unwrap(),
        )
        .unwrap();
        let holder_id = cms.create_policyholder(&mut jane).await.unwrap();
        assert_eq!(jane.id(), Some(holder_id));

        let mut policy = Policy::new(
            holder_id,
            "Health",
            "2024-01-01",
            "2024-12-31",
            dec!(1200.50),
            CoverageDetails::new().with("coverage", "Full"),
        )
        .unwrap();
        let policy_id = cms.create_policy(&mut policy).await.unwrap();

        let mut claim = Claim::new(
            policy_id,
            "2024-06-01",
            dec!(5000.00),
            ClaimStatus::Open,
            "Car accident",
            Documents::from(vec!["report.pdf".to_string(), "photo.jpg".to_string()]),
        )
        .unwrap();
        let claim_id = cms.create_claim(&mut claim).await.unwrap();

        let stored_holder = cms.read_policyholder(holder_id).await.unwrap().unwrap();
        assert_eq!(stored_holder, jane);
        assert_eq!(stored_holder.contact().phone(), "5551234567");
        assert_eq!(stored_holder.contact().email(), "jane@example.com");

        let stored_policy = cms.read_policy(policy_id).await.unwrap().unwrap();
        assert_eq!(stored_policy, policy);
        assert_eq!(stored_policy.policyholder_id(), holder_id);

        let stored_claim = cms.read_claim(claim_id).await.unwrap().unwrap();
        assert_eq!(stored_claim, claim);
        assert_eq!(stored_claim.claim_status(), ClaimStatus::Open);

        let result = cms.delete_policyholder(holder_id).await;
        assert_foreign_key_violation(&result);
        assert!(cms.read_policyholder(holder_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_teardown_in_child_first_order() {
        let (cms, store) = system();
        let mut jane = PolicyholderFixtures::jane_doe();
        let holder_id = cms.create_policyholder(&mut jane).await.unwrap();
        let mut policy = PolicyFixtures::health(holder_id);
        let policy_id = cms.create_policy(&mut policy).await.unwrap();
        let mut claim = ClaimFixtures::car_accident(policy_id);
        let claim_id = cms.create_claim(&mut claim).await.unwrap();

        assert!(cms.delete_claim(claim_id).await.unwrap());
        assert!(cms.delete_policy(policy_id).await.unwrap());
        assert!(cms.delete_policyholder(holder_id).await.unwrap());

        let counts = store.row_counts().await;
        assert_eq!((counts.policyholders, counts.policies, counts.claims), (0, 0, 0));
    }
}

mod policyholders {
    use super::*;

    #[tokio::test]
    async fn test_update_changes_only_that_field() {
        let (cms, _) = system();
        let mut jane = PolicyholderFixtures::jane_doe();
        let id = cms.create_policyholder(&mut jane).await.unwrap();

        jane.set_address("789 Oak Ave").unwrap();
        assert!(cms.update_policyholder(&jane).await.unwrap());

        let stored = cms.read_policyholder(id).await.unwrap().unwrap();
        assert_eq!(stored.address(), "789 Oak Ave");
        assert_eq!(stored.name(), "Jane Doe");
        assert_eq!(stored.contact(), jane.contact());
    }

    #[tokio::test]
    async fn test_delete_then_read_is_none() {
        let (cms, _) = system();
        let mut jane = PolicyholderFixtures::jane_doe();
        let id = cms.create_policyholder(&mut jane).await.unwrap();

        assert!(cms.delete_policyholder(id).await.unwrap());
        assert!(cms.read_policyholder(id).await.unwrap().is_none());
        assert!(!cms.delete_policyholder(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_read_of_unknown_id_is_none() {
        let (cms, _) = system();
        let result = cms.read_policyholder(PolicyholderId::from_raw(999)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_create_overwrites_existing_id() {
        let (cms, _) = system();
        let mut first = PolicyholderFixtures::jane_doe();
        cms.create_policyholder(&mut first).await.unwrap();

        let mut copy = first.clone();
        let new_id = cms.create_policyholder(&mut copy).await.unwrap();

        assert_ne!(Some(new_id), first.id());
        assert_eq!(copy.id(), Some(new_id));
    }

    #[tokio::test]
    async fn test_update_of_unsaved_entity_is_refused() {
        let (cms, _) = system();
        let jane = PolicyholderFixtures::jane_doe();
        let result = cms.update_policyholder(&jane).await;
        assert_missing_identifier(&result);
    }

    #[tokio::test]
    async fn test_update_of_deleted_row_is_false() {
        let (cms, _) = system();
        let mut jane = PolicyholderFixtures::jane_doe();
        let id = cms.create_policyholder(&mut jane).await.unwrap();
        cms.delete_policyholder(id).await.unwrap();

        assert!(!cms.update_policyholder(&jane).await.unwrap());
    }

    #[test]
    fn test_bad_contact_info_names_field() {
        assert_invalid_field(&ContactInfo::new("555123456", "jane@example.com"), "phone");
        assert_invalid_field(&ContactInfo::new("555-123-4567", "jane@example.com"), "phone");
        assert_invalid_field(&ContactInfo::new("5551234567", "jane.example.com"), "email");
        assert_invalid_field(&ContactInfo::new("5551234567", "jane@example"), "email");
    }
}

mod policies {
    use super::*;

    #[tokio::test]
    async fn test_policy_for_missing_holder_is_refused() {
        let (cms, store) = system();
        let mut policy = PolicyFixtures::health(PolicyholderId::from_raw(77));

        let result = cms.create_policy(&mut policy).await;

        assert_foreign_key_violation(&result);
        assert_eq!(policy.id(), None);
        assert_eq!(store.row_counts().await.policies, 0);
    }

    #[tokio::test]
    async fn test_nested_coverage_round_trips() {
        let (cms, _) = system();
        let mut jane = PolicyholderFixtures::jane_doe();
        let holder_id = cms.create_policyholder(&mut jane).await.unwrap();
        let mut policy = PolicyFixtures::car(holder_id);
        let id = cms.create_policy(&mut policy).await.unwrap();

        let stored = cms.read_policy(id).await.unwrap().unwrap();
        assert_eq!(
            stored.coverage_details().get("limits"),
            Some(&serde_json::json!({"collision": 25000, "theft": true}))
        );
    }

    #[tokio::test]
    async fn test_premium_update() {
        let (cms, _) = system();
        let mut jane = PolicyholderFixtures::jane_doe();
        let holder_id = cms.create_policyholder(&mut jane).await.unwrap();
        let mut policy = PolicyFixtures::health(holder_id);
        let id = cms.create_policy(&mut policy).await.unwrap();

        policy.set_premium_amount(dec!(1350.00)).unwrap();
        assert!(cms.update_policy(&policy).await.unwrap());

        let stored = cms.read_policy(id).await.unwrap().unwrap();
        assert_eq!(stored.premium_amount(), dec!(1350.00));
        assert_eq!(stored.policy_type(), "Health");
    }

    #[tokio::test]
    async fn test_reassign_to_missing_holder_is_refused() {
        let (cms, _) = system();
        let mut jane = PolicyholderFixtures::jane_doe();
        let holder_id = cms.create_policyholder(&mut jane).await.unwrap();
        let mut policy = PolicyFixtures::health(holder_id);
        let id = cms.create_policy(&mut policy).await.unwrap();

        policy.set_policyholder_id(PolicyholderId::from_raw(500)).unwrap();
        let result = cms.update_policy(&policy).await;

        assert_foreign_key_violation(&result);
        let stored = cms.read_policy(id).await.unwrap().unwrap();
        assert_eq!(stored.policyholder_id(), holder_id);
    }

    #[tokio::test]
    async fn test_corrupt_coverage_is_reported() {
        let (cms, store) = system();
        let mut jane = PolicyholderFixtures::jane_doe();
        let holder_id = cms.create_policyholder(&mut jane).await.unwrap();
        let mut policy = PolicyFixtures::health(holder_id);
        let id = cms.create_policy(&mut policy).await.unwrap();

        assert!(store.overwrite_coverage_details(id, "[\"Full\"]").await);

        let result = cms.read_policy(id).await;
        assert_corrupt_data(&result);
    }

    #[tokio::test]
    async fn test_read_of_unknown_policy_is_none() {
        let (cms, _) = system();
        assert!(cms.read_policy(PolicyId::from_raw(3)).await.unwrap().is_none());
    }
}

mod claims {
    use super::*;

    async fn seeded() -> (ClaimsManagementSystem, Arc<InMemoryStore>, PolicyId) {
        let (cms, store) = system();
        let mut jane = PolicyholderFixtures::jane_doe();
        let holder_id = cms.create_policyholder(&mut jane).await.unwrap();
        let mut policy = PolicyFixtures::health(holder_id);
        let policy_id = cms.create_policy(&mut policy).await.unwrap();
        (cms, store, policy_id)
    }

    #[tokio::test]
    async fn test_status_update_round_trips() {
        let (cms, _, policy_id) = seeded().await;
        let mut claim = ClaimFixtures::car_accident(policy_id);
        let id = cms.create_claim(&mut claim).await.unwrap();

        claim.set_claim_status(ClaimStatus::Approved);
        assert!(cms.update_claim(&claim).await.unwrap());

        let stored = cms.read_claim(id).await.unwrap().unwrap();
        assert_eq!(stored.claim_status(), ClaimStatus::Approved);
        assert_eq!(stored.documents(), claim.documents());
        assert_eq!(stored.claim_amount(), dec!(5000.00));
    }

    #[tokio::test]
    async fn test_pending_status_text_is_rejected() {
        let result = ClaimStatus::parse_field("Pending");
        assert_invalid_field(&result, "claim_status");
    }

    #[tokio::test]
    async fn test_pending_in_store_is_corrupt() {
        let (cms, store, policy_id) = seeded().await;
        let mut claim = ClaimFixtures::car_accident(policy_id);
        let id = cms.create_claim(&mut claim).await.unwrap();

        assert!(store.overwrite_claim_status(id, "Pending").await);

        let result = cms.read_claim(id).await;
        assert_corrupt_data(&result);
    }

    #[tokio::test]
    async fn test_corrupt_documents_are_reported() {
        let (cms, store, policy_id) = seeded().await;
        let mut claim = ClaimFixtures::hospital_stay(policy_id);
        let id = cms.create_claim(&mut claim).await.unwrap();

        assert!(store.overwrite_documents(id, "{\"file\": 1}").await);

        let result = cms.read_claim(id).await;
        assert_corrupt_data(&result);
    }

    #[tokio::test]
    async fn test_unknown_claim_delete_is_false() {
        let (cms, _, _) = seeded().await;
        assert!(!cms.delete_claim(ClaimId::from_raw(1)).await.unwrap());
        assert!(cms.read_claim(ClaimId::from_raw(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_of_unsaved_claim_is_refused() {
        let (cms, _, policy_id) = seeded().await;
        let claim = ClaimFixtures::car_accident(policy_id);
        let result = cms.update_claim(&claim).await;
        assert_missing_identifier(&result);
    }
}

#[tokio::test]
async fn test_health_check_reports_store() {
    let (cms, _) = system();
    let health = cms.health_check().await;
    assert!(health.is_healthy());
    assert_eq!(health.adapter_id, "in-memory-store");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_policyholder_round_trips(mut holder in policyholder_strategy()) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (cms, _) = system();

        let stored = runtime.block_on(async {
            let id = cms.create_policyholder(&mut holder).await.unwrap();
            cms.read_policyholder(id).await.unwrap()
        });

        prop_assert_eq!(stored, Some(holder));
    }
}

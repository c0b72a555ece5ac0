//! Unit tests for the Claims domain
//!
//! Tests cover claim construction, status parsing, and field mutation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{ClaimId, PolicyId};
use domain_claims::{Claim, ClaimStatus, Documents};

fn policy_id() -> PolicyId {
    PolicyId::try_from(1).unwrap()
}

/// Helper function to create the standard accident claim
fn create_accident_claim() -> Claim {
    Claim::new(
        policy_id(),
        "2024-06-01",
        dec!(5000.00),
        ClaimStatus::Open,
        "Car accident",
        Documents::from(vec!["report.pdf".to_string(), "photo.jpg".to_string()]),
    )
    .unwrap()
}

mod claim_creation {
    use super::*;

    #[test]
    fn test_fields_read_back_unchanged() {
        let claim = create_accident_claim();

        assert_eq!(claim.id(), None);
        assert_eq!(claim.policy_id(), policy_id());
        assert_eq!(claim.claim_date(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(claim.claim_amount(), dec!(5000.00));
        assert_eq!(claim.claim_status(), ClaimStatus::Open);
        assert_eq!(claim.description(), "Car accident");
        assert_eq!(
            claim.documents().iter().collect::<Vec<_>>(),
            vec!["report.pdf", "photo.jpg"]
        );
    }

    #[test]
    fn test_empty_documents_allowed() {
        let claim = Claim::new(
            policy_id(),
            "2024-06-01",
            dec!(10),
            ClaimStatus::Approved,
            "Windscreen",
            Documents::new(),
        )
        .unwrap();
        assert!(claim.documents().is_empty());
    }

    #[test]
    fn test_bad_claim_date_rejected() {
        let error = Claim::new(
            policy_id(),
            "06/01/2024",
            dec!(10),
            ClaimStatus::Open,
            "Windscreen",
            Documents::new(),
        )
        .unwrap_err();
        assert_eq!(error.field(), "claim_date");
    }

    #[test]
    fn test_negative_amount_rejected() {
        let error = Claim::new(
            policy_id(),
            "2024-06-01",
            dec!(-5),
            ClaimStatus::Open,
            "Windscreen",
            Documents::new(),
        )
        .unwrap_err();
        assert_eq!(error.field(), "claim_amount");
    }

    #[test]
    fn test_fractional_cents_rejected() {
        let error = Claim::new(
            policy_id(),
            "2024-06-01",
            dec!(10.005),
            ClaimStatus::Open,
            "Windscreen",
            Documents::new(),
        )
        .unwrap_err();
        assert_eq!(error.field(), "claim_amount");
    }

    #[test]
    fn test_blank_description_rejected() {
        let error = Claim::new(
            policy_id(),
            "2024-06-01",
            dec!(10),
            ClaimStatus::Open,
            "",
            Documents::new(),
        )
        .unwrap_err();
        assert_eq!(error.field(), "description");
    }

    #[test]
    fn test_from_storage_keeps_id() {
        let claim = Claim::from_storage(
            ClaimId::from_raw(9),
            policy_id(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            dec!(5000.00),
            ClaimStatus::Rejected,
            "Car accident".to_string(),
            Documents::new(),
        );
        assert_eq!(claim.id(), Some(ClaimId::from_raw(9)));
        assert_eq!(claim.claim_status(), ClaimStatus::Rejected);
    }
}

mod parent_and_payload_checks {
    use super::*;

    #[test]
    fn test_raw_negative_policy_id_rejected() {
        let error = Claim::new(
            PolicyId::from_raw(-5),
            "2024-06-01",
            dec!(5000.00),
            ClaimStatus::Open,
            "Car accident",
            Documents::new(),
        )
        .unwrap_err();
        assert_eq!(error.field(), "policy_id");
        assert_eq!(error.field(), PolicyId::field_name());
    }

    #[test]
    fn test_raw_zero_policy_id_rejected() {
        let error = Claim::new(
            PolicyId::from_raw(0),
            "2024-06-01",
            dec!(5000.00),
            ClaimStatus::Open,
            "Car accident",
            Documents::new(),
        )
        .unwrap_err();
        assert_eq!(error.field(), PolicyId::field_name());
    }

    #[test]
    fn test_nul_in_document_reference_rejected() {
        let error = Claim::new(
            policy_id(),
            "2024-06-01",
            dec!(5000.00),
            ClaimStatus::Open,
            "Car accident",
            Documents::from(vec!["report\0.pdf".to_string()]),
        )
        .unwrap_err();
        assert_eq!(error.field(), "documents");
    }

    #[test]
    fn test_nul_in_description_rejected() {
        let error = Claim::new(
            policy_id(),
            "2024-06-01",
            dec!(5000.00),
            ClaimStatus::Open,
            "Car\0accident",
            Documents::new(),
        )
        .unwrap_err();
        assert_eq!(error.field(), "description");
    }
}

mod claim_status {
    use super::*;

    #[test]
    fn test_pending_rejected_as_validation_error() {
        let error = ClaimStatus::parse_field("Pending").unwrap_err();
        assert_eq!(error.field(), "claim_status");
    }

    #[test]
    fn test_known_statuses_parse() {
        assert_eq!(ClaimStatus::parse_field("Open").unwrap(), ClaimStatus::Open);
        assert_eq!(ClaimStatus::parse_field("Approved").unwrap(), ClaimStatus::Approved);
        assert_eq!(ClaimStatus::parse_field("Rejected").unwrap(), ClaimStatus::Rejected);
    }
}

mod claim_mutation {
    use super::*;

    #[test]
    fn test_approve_changes_only_status() {
        let mut claim = create_accident_claim();
        let before = claim.clone();

        claim.set_claim_status(ClaimStatus::Approved);

        assert_eq!(claim.claim_status(), ClaimStatus::Approved);
        assert_eq!(claim.claim_amount(), before.claim_amount());
        assert_eq!(claim.description(), before.description());
        assert_eq!(claim.documents(), before.documents());
    }

    #[test]
    fn test_rejected_amount_leaves_value() {
        let mut claim = create_accident_claim();
        assert!(claim.set_claim_amount(Decimal::ZERO).is_err());
        assert_eq!(claim.claim_amount(), dec!(5000.00));
    }

    #[test]
    fn test_documents_replace() {
        let mut claim = create_accident_claim();
        let mut docs = Documents::new();
        docs.push("invoice.pdf");
        claim.set_documents(docs).unwrap();
        assert_eq!(claim.documents().as_slice(), ["invoice.pdf".to_string()]);
    }

    #[test]
    fn test_set_documents_with_nul_rejected() {
        let mut claim = create_accident_claim();
        let error = claim
            .set_documents(Documents::from(vec!["scan\0.pdf".to_string()]))
            .unwrap_err();
        assert_eq!(error.field(), "documents");
        assert_eq!(claim.documents().len(), 2);
    }

    #[test]
    fn test_set_non_positive_policy_id_rejected() {
        let mut claim = create_accident_claim();
        let error = claim.set_policy_id(PolicyId::from_raw(0)).unwrap_err();
        assert_eq!(error.field(), PolicyId::field_name());
        assert_eq!(claim.policy_id(), policy_id());

        claim.set_policy_id(PolicyId::from_raw(9)).unwrap();
        assert_eq!(claim.policy_id().value(), 9);
    }
}

proptest! {
    #[test]
    fn prop_unknown_status_text_rejected(text in "[A-Za-z]{1,12}") {
        prop_assume!(!matches!(text.as_str(), "Open" | "Approved" | "Rejected"));
        prop_assert!(ClaimStatus::parse_field(&text).is_err());
    }

    #[test]
    fn prop_valid_dates_accepted(year in 1900i32..2100, month in 1u32..=12, day in 1u32..=28) {
        let text = format!("{:04}-{:02}-{:02}", year, month, day);
        let claim = Claim::new(
            policy_id(),
            &text,
            dec!(1),
            ClaimStatus::Open,
            "x",
            Documents::new(),
        ).unwrap();
        prop_assert_eq!(claim.claim_date().to_string(), text);
    }
}

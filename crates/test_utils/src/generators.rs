//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data that
//! satisfies the entity field rules.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{PolicyId, PolicyholderId};
use domain_claims::{Claim, ClaimStatus, Documents};
use domain_policy::{CoverageDetails, Policy};
use domain_policyholder::{ContactInfo, Policyholder};

/// Strategy for generating non-blank display text
pub fn text_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,15}( [A-Z][a-z]{1,15}){0,2}"
}

/// Strategy for generating ten-digit phone numbers
pub fn phone_strategy() -> impl Strategy<Value = String> {
    "[0-9]{10}"
}

/// Strategy for generating email addresses with a dotted domain
pub fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{1,10}", "[a-z]{2,10}", prop_oneof![Just("com"), Just("org"), Just("net")])
        .prop_map(|(local, domain, tld)| format!("{}@{}.{}", local, domain, tld))
}

/// Strategy for generating positive amounts that fit `NUMERIC(10, 2)`
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating calendar dates between 1990 and 2060
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1990i32..2060, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Strategy for generating ISO `YYYY-MM-DD` text
pub fn iso_date_strategy() -> impl Strategy<Value = String> {
    date_strategy().prop_map(|d| d.format("%Y-%m-%d").to_string())
}

/// Strategy for generating claim statuses
pub fn claim_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Open),
        Just(ClaimStatus::Approved),
        Just(ClaimStatus::Rejected),
    ]
}

/// Strategy for generating coverage details with string and number values
pub fn coverage_details_strategy() -> impl Strategy<Value = CoverageDetails> {
    prop::collection::btree_map("[a-z_]{1,12}", prop_oneof![
        "[A-Za-z ]{0,16}".prop_map(serde_json::Value::from),
        (0i64..1_000_000).prop_map(serde_json::Value::from),
        any::<bool>().prop_map(serde_json::Value::from),
    ], 0..5)
    .prop_map(|entries| {
        let mut details = CoverageDetails::new();
        for (key, value) in entries {
            details.insert(key, value);
        }
        details
    })
}

/// Strategy for generating document reference lists
pub fn documents_strategy() -> impl Strategy<Value = Documents> {
    prop::collection::vec("[a-z]{1,10}\\.(pdf|jpg|png)", 0..4).prop_map(Documents::from)
}

/// Strategy for generating valid, unsaved policyholders
pub fn policyholder_strategy() -> impl Strategy<Value = Policyholder> {
    (text_strategy(), text_strategy(), phone_strategy(), email_strategy()).prop_map(
        |(name, address, phone, email)| {
            let contact = ContactInfo::new(phone, email).unwrap();
            Policyholder::new(name, address, contact).unwrap()
        },
    )
}

/// Strategy for generating valid, unsaved policies for the given owner
pub fn policy_strategy(policyholder_id: PolicyholderId) -> impl Strategy<Value = Policy> {
    (
        text_strategy(),
        iso_date_strategy(),
        iso_date_strategy(),
        amount_strategy(),
        coverage_details_strategy(),
    )
        .prop_map(move |(policy_type, start, end, premium, coverage)| {
            Policy::new(policyholder_id, policy_type, &start, &end, premium, coverage).unwrap()
        })
}

/// Strategy for generating valid, unsaved claims against the given policy
pub fn claim_strategy(policy_id: PolicyId) -> impl Strategy<Value = Claim> {
    (
        iso_date_strategy(),
        amount_strategy(),
        claim_status_strategy(),
        text_strategy(),
        documents_strategy(),
    )
        .prop_map(move |(date, amount, status, description, documents)| {
            Claim::new(policy_id, &date, amount, status, description, documents).unwrap()
        })
}

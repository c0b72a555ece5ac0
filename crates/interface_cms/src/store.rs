//! Composite store port

use core_kernel::HealthCheckable;
use domain_claims::ClaimPort;
use domain_policy::PolicyPort;
use domain_policyholder::PolicyholderPort;

/// A store that persists every entity type
///
/// Implemented automatically for any type that implements the three domain
/// ports and health checking, e.g. `infra_db::PostgresStore`.
pub trait InsuranceStore: PolicyholderPort + PolicyPort + ClaimPort + HealthCheckable {}

impl<T> InsuranceStore for T where T: PolicyholderPort + PolicyPort + ClaimPort + HealthCheckable {}

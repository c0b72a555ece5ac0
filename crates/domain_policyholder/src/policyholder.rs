//! Policyholder record
//!
//! A `Policyholder` can only be built from values that pass the field rules.
//! Rows read back from the store take the `from_storage` path instead, which
//! trusts the stored values.

use serde::Serialize;

use core_kernel::{require_text, PolicyholderId, ValidationError};

use crate::validation::{validate_email, validate_phone};

/// Phone and email for a policyholder
///
/// Both fields are always present and validated together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    phone: String,
    email: String,
}

impl ContactInfo {
    /// Creates validated contact details
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming `phone` or `email`
    pub fn new(phone: impl Into<String>, email: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            phone: validate_phone(phone.into())?,
            email: validate_email(email.into())?,
        })
    }

    /// Rebuilds contact details from the separate phone and email columns
    pub fn from_storage(phone: String, email: String) -> Self {
        Self { phone, email }
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// A person who owns insurance policies
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Policyholder {
    id: Option<PolicyholderId>,
    name: String,
    address: String,
    contact: ContactInfo,
}

impl Policyholder {
    /// Entity name used in error messages and logs
    pub const ENTITY: &'static str = "Policyholder";

    /// Creates a new, not yet persisted policyholder
    ///
    /// # Arguments
    ///
    /// * `name` - Full name, must not be blank
    /// * `address` - Postal address, must not be blank
    /// * `contact` - Validated phone and email
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming `name` or `address`
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        contact: ContactInfo,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: None,
            name: require_text("name", name)?,
            address: require_text("address", address)?,
            contact,
        })
    }

    /// Rebuilds a policyholder from a stored row without validation
    pub fn from_storage(
        id: PolicyholderId,
        name: String,
        address: String,
        phone: String,
        email: String,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            address,
            contact: ContactInfo::from_storage(phone, email),
        }
    }

    /// Returns the store-assigned id, or `None` before the first create
    pub fn id(&self) -> Option<PolicyholderId> {
        self.id
    }

    /// Records the id the store assigned on insert
    pub fn assign_id(&mut self, id: PolicyholderId) {
        self.id = Some(id);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    /// Replaces the name
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        self.name = require_text("name", name)?;
        Ok(())
    }

    /// Replaces the address
    pub fn set_address(&mut self, address: impl Into<String>) -> Result<(), ValidationError> {
        self.address = require_text("address", address)?;
        Ok(())
    }

    /// Replaces the contact details
    pub fn set_contact(&mut self, contact: ContactInfo) {
        self.contact = contact;
    }
}

//! Supplier record.

use serde::{Deserialize, Serialize};

use crate::domain::identifiers::SupplierId;
use crate::domain::store::Entity;
use crate::domain::validation::{Validate, ValidationError, require_non_empty};

/// A supplier of products. Products and deliveries reference it by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    /// Unique identifier (caller-chosen).
    pub supplier_id: SupplierId,
    /// Display name.
    pub name: String,
    /// Longer description.
    pub description: String,
    /// Primary contact person.
    pub contact_person: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
}

impl Entity for Supplier {
    type Id = SupplierId;
    const KIND: &'static str = "supplier";

    fn id(&self) -> SupplierId {
        self.supplier_id
    }
}

impl Validate for Supplier {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)
    }
}

//! Headquarters record.

use serde::{Deserialize, Serialize};

use crate::domain::identifiers::HeadquartersId;
use crate::domain::store::Entity;
use crate::domain::validation::{Validate, ValidationError, require_non_empty};

/// A company headquarters. Branches reference it by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Headquarters {
    /// Unique identifier (caller-chosen).
    pub headquarters_id: HeadquartersId,
    /// Display name.
    pub name: String,
    /// Longer description.
    pub description: String,
    /// Street address.
    pub address: String,
    /// Primary contact person.
    pub contact_person: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
}

impl Entity for Headquarters {
    type Id = HeadquartersId;
    const KIND: &'static str = "headquarters";

    fn id(&self) -> HeadquartersId {
        self.headquarters_id
    }
}

impl Validate for Headquarters {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("address", &self.address)
    }
}

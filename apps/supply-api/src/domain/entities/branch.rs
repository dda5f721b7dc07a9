//! Branch record.

use serde::{Deserialize, Serialize};

use crate::domain::identifiers::{BranchId, HeadquartersId};
use crate::domain::store::Entity;
use crate::domain::validation::{Validate, ValidationError, require_non_empty};

/// A branch location belonging to a headquarters.
///
/// `headquarters_id` is an informational reference; the store does not
/// enforce that the headquarters exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    /// Unique identifier (caller-chosen).
    pub branch_id: BranchId,
    /// Headquarters this branch belongs to.
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

impl Entity for Branch {
    type Id = BranchId;
    const KIND: &'static str = "branch";

    fn id(&self) -> BranchId {
        self.branch_id
    }
}

impl Validate for Branch {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("address", &self.address)
    }
}

//! Order record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::identifiers::{BranchId, OrderId};
use crate::domain::store::Entity;
use crate::domain::validation::{Validate, ValidationError, require_non_empty};

/// An order placed by a branch. Line items live in separate
/// [`OrderDetail`](super::OrderDetail) records that reference this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier (caller-chosen).
    pub order_id: OrderId,
    /// Branch that placed the order.
    pub branch_id: BranchId,
    /// Date the order was placed.
    pub order_date: NaiveDate,
    /// Display name.
    pub name: String,
    /// Longer description.
    pub description: String,
    /// Free-form status label ("pending", "shipped", ...).
    pub status: String,
}

impl Entity for Order {
    type Id = OrderId;
    const KIND: &'static str = "order";

    fn id(&self) -> OrderId {
        self.order_id
    }
}

impl Validate for Order {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("status", &self.status)
    }
}

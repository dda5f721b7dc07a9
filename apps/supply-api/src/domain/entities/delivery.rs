//! Delivery record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::identifiers::{DeliveryId, SupplierId};
use crate::domain::store::Entity;
use crate::domain::validation::{Validate, ValidationError, require_non_empty};

/// A delivery from a supplier. Which order lines it fulfills is recorded in
/// [`OrderDetailDelivery`](super::OrderDetailDelivery) junction records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    /// Unique identifier (caller-chosen).
    pub delivery_id: DeliveryId,
    /// Supplier making the delivery.
    pub supplier_id: SupplierId,
    /// Scheduled or actual delivery date.
    pub delivery_date: NaiveDate,
    /// Display name.
    pub name: String,
    /// Longer description.
    pub description: String,
    /// Free-form status label ("scheduled", "in transit", "delivered", ...).
    pub status: String,
}

impl Entity for Delivery {
    type Id = DeliveryId;
    const KIND: &'static str = "delivery";

    fn id(&self) -> DeliveryId {
        self.delivery_id
    }
}

impl Validate for Delivery {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("status", &self.status)
    }
}

//! Order-detail/delivery junction record.

use serde::{Deserialize, Serialize};

use crate::domain::identifiers::{DeliveryId, OrderDetailDeliveryId, OrderDetailId};
use crate::domain::store::Entity;
use crate::domain::validation::{Validate, ValidationError};

/// Junction between an order detail and a delivery: how many units of one
/// order line a given delivery carries. Order details and deliveries are
/// many-to-many through these records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailDelivery {
    /// Unique identifier (caller-chosen).
    pub order_detail_delivery_id: OrderDetailDeliveryId,
    /// Order line being fulfilled.
    pub order_detail_id: OrderDetailId,
    /// Delivery carrying the units.
    pub delivery_id: DeliveryId,
    /// Units carried by this delivery for this order line.
    pub quantity: u32,
    /// Free-form notes.
    pub notes: String,
}

impl Entity for OrderDetailDelivery {
    type Id = OrderDetailDeliveryId;
    const KIND: &'static str = "order detail delivery";

    fn id(&self) -> OrderDetailDeliveryId {
        self.order_detail_delivery_id
    }
}

impl Validate for OrderDetailDelivery {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.quantity == 0 {
            return Err(ValidationError::invalid_field(
                "quantity",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

//! Order detail (line item) record.

use serde::{Deserialize, Serialize};

use crate::domain::identifiers::{OrderDetailId, OrderId, ProductId};
use crate::domain::store::Entity;
use crate::domain::validation::{Validate, ValidationError};

/// One line of an order: a product and a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    /// Unique identifier (caller-chosen).
    pub order_detail_id: OrderDetailId,
    /// Order this line belongs to.
    pub order_id: OrderId,
    /// Product being ordered.
    pub product_id: ProductId,
    /// Quantity ordered.
    pub quantity: u32,
    /// Free-form notes.
    pub notes: String,
}

impl Entity for OrderDetail {
    type Id = OrderDetailId;
    const KIND: &'static str = "order detail";

    fn id(&self) -> OrderDetailId {
        self.order_detail_id
    }
}

impl Validate for OrderDetail {
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

//! Product catalog record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::identifiers::{ProductId, SupplierId};
use crate::domain::store::Entity;
use crate::domain::validation::{Validate, ValidationError, require_non_empty};

/// A product offered by a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (caller-chosen).
    pub product_id: ProductId,
    /// Supplier that provides this product.
    pub supplier_id: SupplierId,
    /// Display name.
    pub name: String,
    /// Longer description.
    pub description: String,
    /// Unit price.
    pub price: Decimal,
    /// Stock-keeping unit code.
    pub sku: String,
    /// Unit of sale ("each", "box", ...).
    pub unit: String,
}

impl Entity for Product {
    type Id = ProductId;
    const KIND: &'static str = "product";

    fn id(&self) -> ProductId {
        self.product_id
    }
}

impl Validate for Product {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("sku", &self.sku)?;
        if self.price < Decimal::ZERO {
            return Err(ValidationError::invalid_field(
                "price",
                "must not be negative",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_product(price: Decimal) -> Product {
        Product {
            product_id: ProductId::new(10),
            supplier_id: SupplierId::new(1),
            name: "Box Sealer".to_string(),
            description: "Tabletop carton sealer".to_string(),
            price,
            sku: "SEAL-010".to_string(),
            unit: "each".to_string(),
        }
    }

    #[test]
    fn price_serializes_as_string() {
        let json = serde_json::to_value(make_product(dec!(129.95))).unwrap();
        assert_eq!(json["price"], "129.95");
        assert_eq!(json["supplierId"], 1);
    }

    #[test]
    fn validate_rejects_negative_price() {
        let err = make_product(dec!(-1)).validate().unwrap_err();
        assert!(err.to_string().contains("price"));
    }
}

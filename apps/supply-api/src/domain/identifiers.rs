//! Strongly-typed identifiers for domain entities.
//!
//! These prevent mixing up IDs from different collections. Identifiers are
//! chosen by the caller, never generated by a store.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create an identifier from its raw numeric value.
            #[must_use]
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            /// Get the raw numeric value.
            #[must_use]
            pub const fn value(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(HeadquartersId, "Unique identifier for a headquarters.");
define_id!(BranchId, "Unique identifier for a branch.");
define_id!(SupplierId, "Unique identifier for a supplier.");
define_id!(ProductId, "Unique identifier for a product.");
define_id!(OrderId, "Unique identifier for an order.");
define_id!(OrderDetailId, "Unique identifier for an order detail line.");
define_id!(DeliveryId, "Unique identifier for a delivery.");
define_id!(
    OrderDetailDeliveryId,
    "Unique identifier for an order-detail/delivery junction record."
);

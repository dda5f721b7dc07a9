//! Entity records served by the API.
//!
//! Each record has a caller-chosen numeric identifier, unique within its own
//! collection by convention. Reference attributes (e.g. `Order::branch_id`)
//! are informational labels, not enforced foreign keys: deleting a branch
//! does not cascade to its orders.

mod branch;
mod delivery;
mod headquarters;
mod order;
mod order_detail;
mod order_detail_delivery;
mod product;
mod supplier;

pub use branch::Branch;
pub use delivery::Delivery;
pub use headquarters::Headquarters;
pub use order::Order;
pub use order_detail::OrderDetail;
pub use order_detail_delivery::OrderDetailDelivery;
pub use product::Product;
pub use supplier::Supplier;

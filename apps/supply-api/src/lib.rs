// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value
    )
)]

//! Supply API - Rust Core Library
//!
//! In-memory REST API for the supply-chain demo dataset. Eight entity types
//! (headquarters, branches, suppliers, products, orders, order details,
//! deliveries, and their junction records) live in per-type entity stores
//! seeded once at startup; nothing is persisted past process exit.
//!
//! # Architecture
//!
//! - **Domain**: entity records, typed identifiers, the generic
//!   [`EntityStore`], and the validation seam. No HTTP concerns.
//! - **Infrastructure**: static seed data and the axum HTTP adapter that maps
//!   verbs onto the store operations.
//! - **Config**: environment-sourced server settings.
//!
//! Stores are explicitly constructed ([`Stores::seeded`]) and injected into
//! the router; there are no process-wide singletons.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - records, identifiers, store, validation.
pub mod domain;

/// Infrastructure layer - seed data and HTTP adapter.
pub mod infrastructure;

/// Runtime configuration.
pub mod config;

pub use config::ServerConfig;
pub use domain::entities::{
    Branch, Delivery, Headquarters, Order, OrderDetail, OrderDetailDelivery, Product, Supplier,
};
pub use domain::store::{Entity, EntityStore, StoreError};
pub use domain::validation::{Validate, ValidationError};
pub use infrastructure::http::{ApiError, create_router};
pub use infrastructure::seed::Stores;

//! Infrastructure layer: seed data and the HTTP adapter.

pub mod http;
pub mod seed;

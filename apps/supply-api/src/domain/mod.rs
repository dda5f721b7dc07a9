//! Domain layer: entity records, identifiers, the entity store, and the
//! validation seam. No HTTP or runtime concerns here.

pub mod entities;
pub mod identifiers;
pub mod store;
pub mod validation;

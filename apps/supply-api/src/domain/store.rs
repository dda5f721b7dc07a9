//! Generic in-memory entity store.
//!
//! One store per entity type holds the authoritative in-process copy of that
//! type's records. Records live in an ordered `Vec` so that listing reflects
//! insertion order and replace keeps a record's position. Lookup is a linear
//! scan by identifier equality; data volumes are tens of records, so no index
//! is needed.
//!
//! Stores are constructed explicitly and shared by `Arc` handle; there is no
//! process-wide singleton. Each store guards its live collection with a single
//! `RwLock`, so every operation is atomic with respect to the others.

use std::fmt;
use std::sync::RwLock;

use thiserror::Error;

/// A record held by an [`EntityStore`].
pub trait Entity: Clone + Send + Sync + 'static {
    /// Identifier type. Chosen by the caller, never generated by the store.
    type Id: Copy + Eq + fmt::Display + Send + Sync;

    /// Entity name used in diagnostics ("branch", "product", ...).
    const KIND: &'static str;

    /// The record's identifier.
    fn id(&self) -> Self::Id;
}

/// Errors from store operations.
///
/// The only business-logic outcome a store can report is [`NotFound`]; it is
/// a normal result, never a panic, so the caller can map it to a
/// domain-appropriate response.
///
/// [`NotFound`]: StoreError::NotFound
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the given identifier.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity name ([`Entity::KIND`]).
        entity: &'static str,
        /// The identifier that matched no record.
        id: String,
    },
}

impl StoreError {
    fn not_found<T: Entity>(id: T::Id) -> Self {
        Self::NotFound {
            entity: T::KIND,
            id: id.to_string(),
        }
    }
}

/// In-memory collection of one entity type's records.
///
/// Keeps the original seed collection distinct from the live one so
/// [`reset`](Self::reset) can restore it. The store performs no validation
/// and no uniqueness check; a duplicate identifier is accepted silently and
/// lookups act on the first match.
#[derive(Debug)]
pub struct EntityStore<T: Entity> {
    seed: Vec<T>,
    live: RwLock<Vec<T>>,
}

impl<T: Entity> EntityStore<T> {
    /// Create a store populated from seed data.
    #[must_use]
    pub fn new(seed: Vec<T>) -> Self {
        Self {
            live: RwLock::new(seed.clone()),
            seed,
        }
    }

    /// Get the number of live records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.read().unwrap().len()
    }

    /// Check if the store has no live records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.read().unwrap().is_empty()
    }

    /// List all records in current insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<T> {
        self.live.read().unwrap().clone()
    }

    /// Find the first record whose identifier matches.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record matches.
    pub fn get(&self, id: T::Id) -> Result<T, StoreError> {
        let records = self.live.read().unwrap();
        records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found::<T>(id))
    }

    /// Append a fully-formed record and return it.
    ///
    /// The record is accepted verbatim: no field validation and no
    /// uniqueness check on the identifier.
    pub fn insert(&self, record: T) -> T {
        let mut records = self.live.write().unwrap();
        records.push(record.clone());
        record
    }

    /// Overwrite the first matching record in place and return the new value.
    ///
    /// The replacement occupies the matched record's position, not the end of
    /// the collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record matches; the collection
    /// is left unchanged.
    pub fn replace(&self, id: T::Id, record: T) -> Result<T, StoreError> {
        let mut records = self.live.write().unwrap();
        let position = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found::<T>(id))?;
        records[position] = record.clone();
        Ok(record)
    }

    /// Delete the first matching record in place and return it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record matches; the collection
    /// is left unchanged.
    pub fn remove(&self, id: T::Id) -> Result<T, StoreError> {
        let mut records = self.live.write().unwrap();
        let position = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found::<T>(id))?;
        Ok(records.remove(position))
    }

    /// Discard all mutations and restore the original seed contents.
    ///
    /// Used to give each test a clean starting state.
    pub fn reset(&self) {
        let mut records = self.live.write().unwrap();
        records.clone_from(&self.seed);
    }
}

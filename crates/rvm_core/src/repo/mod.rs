//! Participant storage and queries.
//!
//! # Responsibility
//! - Own registered participants and expose keyed lookup plus sorted views.
//!
//! # Invariants
//! - Storage is in-memory only; there is no persistence layer.
//! - Unknown IDs surface as `RegistryError::NotFound` and are never masked.

pub mod participant_registry;

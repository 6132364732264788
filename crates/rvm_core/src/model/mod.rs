//! Roster domain model.
//!
//! # Responsibility
//! - Define the vocabularies, participant record and adjustment values used
//!   by registry and adjuster logic.
//!
//! # Invariants
//! - Every participant is identified by a stable `ParticipantId`.
//! - Participants are never deleted; only objectives and status change.

pub mod adjustment;
pub mod classification;
pub mod participant;
pub mod permission;

//! In-memory participant registry.
//!
//! # Responsibility
//! - Own every registered `Participant`, keyed by its stable ID.
//! - Provide lookup, status updates and the canonical sorted roster views.
//!
//! # Invariants
//! - Listings are ordered by `(classification priority ASC, lowercase name ASC)`,
//!   ties in registration order; every filtered view preserves that order.
//! - Lookups of unknown IDs fail with `RegistryError::NotFound`.
//! - Registering an existing ID replaces the stored participant and keeps its
//!   original registration position.

use crate::model::classification::{Objective, ParticipationStatus};
use crate::model::participant::{NewParticipant, Participant, ParticipantId};
use log::{debug, warn};
use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry lookup error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    NotFound(ParticipantId),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "participant not found: {id}"),
        }
    }
}

impl Error for RegistryError {}

/// Display row produced by `ParticipantRegistry::participants_summary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantSummary {
    pub full_name: String,
    pub classification: &'static str,
    pub status: &'static str,
}

/// Keyed participant collection with derived sorted views.
///
/// Not designed for concurrent mutation; callers sharing one registry must
/// serialize access themselves.
#[derive(Debug, Default)]
pub struct ParticipantRegistry {
    participants: BTreeMap<ParticipantId, Entry>,
    next_sequence: u64,
}

#[derive(Debug)]
struct Entry {
    sequence: u64,
    participant: Participant,
}

impl ParticipantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an already constructed participant and returns its ID.
    ///
    /// An existing entry with the same ID is overwritten.
    pub fn register(&mut self, participant: Participant) -> ParticipantId {
        let id = participant.participant_id();
        if let Some(entry) = self.participants.get_mut(&id) {
            entry.participant = participant;
            warn!(
                "event=participant_register module=registry status=overwritten participant_id={id}"
            );
        } else {
            let sequence = self.next_sequence;
            self.next_sequence += 1;
            self.participants.insert(
                id,
                Entry {
                    sequence,
                    participant,
                },
            );
            debug!("event=participant_register module=registry status=ok participant_id={id}");
        }
        id
    }

    /// Creates a participant from `request` and registers it.
    pub fn register_participant(&mut self, request: NewParticipant) -> ParticipantId {
        self.register(Participant::from_request(request))
    }

    /// Gets one participant by ID.
    ///
    /// # Errors
    /// - `RegistryError::NotFound` when `id` is not registered.
    pub fn get(&self, id: ParticipantId) -> RegistryResult<&Participant> {
        self.participants
            .get(&id)
            .map(|entry| &entry.participant)
            .ok_or_else(|| not_found(id))
    }

    /// Gets one participant by ID for in-place mutation.
    ///
    /// # Errors
    /// - `RegistryError::NotFound` when `id` is not registered.
    pub fn get_mut(&mut self, id: ParticipantId) -> RegistryResult<&mut Participant> {
        self.participants
            .get_mut(&id)
            .map(|entry| &mut entry.participant)
            .ok_or_else(|| not_found(id))
    }

    pub fn contains(&self, id: ParticipantId) -> bool {
        self.participants.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Returns every participant in canonical roster order.
    pub fn list_all(&self) -> Vec<&Participant> {
        let mut entries: Vec<&Entry> = self.participants.values().collect();
        entries.sort_by_cached_key(|entry| {
            let p = &entry.participant;
            (
                p.classification.priority(),
                p.full_name.to_lowercase(),
                entry.sequence,
            )
        });
        entries.into_iter().map(|entry| &entry.participant).collect()
    }

    /// Lists participants holding `objective`, in roster order.
    pub fn list_by_objective(&self, objective: Objective) -> Vec<&Participant> {
        self.list_all()
            .into_iter()
            .filter(|p| p.has_objective(objective))
            .collect()
    }

    /// Lists participants whose current status is `status`, in roster order.
    pub fn list_by_status(&self, status: ParticipationStatus) -> Vec<&Participant> {
        self.list_all()
            .into_iter()
            .filter(|p| p.status == status)
            .collect()
    }

    /// Updates the status of one registered participant.
    ///
    /// # Errors
    /// - `RegistryError::NotFound` when `id` is not registered.
    pub fn update_status(
        &mut self,
        id: ParticipantId,
        new_status: ParticipationStatus,
    ) -> RegistryResult<()> {
        self.get_mut(id)?.update_status(new_status);
        debug!(
            "event=participant_status module=registry status=ok participant_id={id} new_status={}",
            new_status.as_str()
        );
        Ok(())
    }

    /// Returns `(name, classification label, status label)` rows in roster order.
    pub fn participants_summary(&self) -> Vec<ParticipantSummary> {
        self.list_all()
            .into_iter()
            .map(|p| ParticipantSummary {
                full_name: p.full_name.clone(),
                classification: p.classification.label(),
                status: p.status.label(),
            })
            .collect()
    }
}

fn not_found(id: ParticipantId) -> RegistryError {
    warn!(
        "event=participant_lookup module=registry status=error error_code=not_found participant_id={id}"
    );
    RegistryError::NotFound(id)
}

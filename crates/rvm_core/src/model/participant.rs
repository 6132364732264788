//! Participant domain model.
//!
//! # Responsibility
//! - Define the roster record for one meeting participant.
//! - Fill objectives and permissions from classification defaults.
//!
//! # Invariants
//! - `participant_id` is generated at creation and never reassigned.
//! - After construction, `objectives` and `permissions` are never empty
//!   unless a caller later revokes every objective.

use crate::model::classification::{Classification, Objective, ParticipationStatus};
use crate::model::permission::{permission_matrix, Permission};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Stable identifier of a registered participant.
pub type ParticipantId = Uuid;

/// Field set for creating a participant.
///
/// Empty `objectives`/`permissions` are replaced by classification defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewParticipant {
    pub full_name: String,
    pub classification: Classification,
    pub objectives: BTreeSet<Objective>,
    pub status: ParticipationStatus,
    pub permissions: BTreeSet<Permission>,
    pub notes: Option<String>,
}

impl NewParticipant {
    /// Creates a request with only the required fields set.
    pub fn new(full_name: impl Into<String>, classification: Classification) -> Self {
        Self {
            full_name: full_name.into(),
            classification,
            objectives: BTreeSet::new(),
            status: ParticipationStatus::default(),
            permissions: BTreeSet::new(),
            notes: None,
        }
    }

    pub fn objectives(mut self, objectives: impl IntoIterator<Item = Objective>) -> Self {
        self.objectives = objectives.into_iter().collect();
        self
    }

    pub fn status(mut self, status: ParticipationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn permissions(mut self, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.permissions = permissions.into_iter().collect();
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Registered meeting participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    participant_id: ParticipantId,
    pub full_name: String,
    pub classification: Classification,
    pub objectives: BTreeSet<Objective>,
    pub status: ParticipationStatus,
    pub permissions: BTreeSet<Permission>,
    pub notes: Option<String>,
}

impl Participant {
    /// Creates an active participant with classification defaults.
    pub fn new(full_name: impl Into<String>, classification: Classification) -> Self {
        Self::from_request(NewParticipant::new(full_name, classification))
    }

    /// Creates a participant with a generated stable ID from a field set.
    pub fn from_request(request: NewParticipant) -> Self {
        Self::with_id(Uuid::new_v4(), request)
    }

    /// Creates a participant with a caller-provided ID.
    ///
    /// Used by import paths where identity already exists externally. The
    /// default-filling rules still apply.
    pub fn with_id(participant_id: ParticipantId, request: NewParticipant) -> Self {
        let NewParticipant {
            full_name,
            classification,
            mut objectives,
            status,
            mut permissions,
            notes,
        } = request;

        if objectives.is_empty() {
            objectives = classification.default_objectives();
        }
        if permissions.is_empty() {
            permissions = permission_matrix(classification);
        }

        Self {
            participant_id,
            full_name,
            classification,
            objectives,
            status,
            permissions,
            notes,
        }
    }

    pub fn participant_id(&self) -> ParticipantId {
        self.participant_id
    }

    /// Adds an objective. Idempotent.
    pub fn assign_objective(&mut self, objective: Objective) {
        self.objectives.insert(objective);
    }

    /// Removes an objective if present.
    pub fn revoke_objective(&mut self, objective: Objective) {
        self.objectives.remove(&objective);
    }

    /// Replaces the status. Any transition is allowed.
    pub fn update_status(&mut self, new_status: ParticipationStatus) {
        self.status = new_status;
    }

    pub fn has_objective(&self, objective: Objective) -> bool {
        self.objectives.contains(&objective)
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

//! Scheduling adjustment events and suggested actions.
//!
//! # Responsibility
//! - Describe occurrences that may require changing the meeting program.
//! - Carry the prioritized suggestions produced for those occurrences.
//!
//! # Invariants
//! - Events are immutable after construction; fields are read through accessors.
//! - Participant references are lookup keys only. They are validated against a
//!   registry lazily, when an adjuster resolves them.

use crate::model::participant::ParticipantId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of occurrence that triggers an adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentType {
    PeriodicEvent,
    Absence,
    Substitution,
    SpecialDemand,
}

impl AdjustmentType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PeriodicEvent => "periodic_event",
            Self::Absence => "absence",
            Self::Substitution => "substitution",
            Self::SpecialDemand => "special_demand",
        }
    }
}

/// Scheduling-relevant occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentEvent {
    event_type: AdjustmentType,
    description: String,
    effective_date: NaiveDate,
    participant_id: Option<ParticipantId>,
    substitute_participant_id: Option<ParticipantId>,
    /// Free-form label such as "monthly" or "quarterly".
    recurrence: Option<String>,
}

impl AdjustmentEvent {
    /// Creates an event without participant references or recurrence.
    pub fn new(
        event_type: AdjustmentType,
        description: impl Into<String>,
        effective_date: NaiveDate,
    ) -> Self {
        Self {
            event_type,
            description: description.into(),
            effective_date,
            participant_id: None,
            substitute_participant_id: None,
            recurrence: None,
        }
    }

    /// Sets the affected (absent) participant.
    pub fn with_participant(mut self, participant_id: ParticipantId) -> Self {
        self.participant_id = Some(participant_id);
        self
    }

    pub fn with_substitute(mut self, substitute_participant_id: ParticipantId) -> Self {
        self.substitute_participant_id = Some(substitute_participant_id);
        self
    }

    pub fn with_recurrence(mut self, recurrence: impl Into<String>) -> Self {
        self.recurrence = Some(recurrence.into());
        self
    }

    pub fn event_type(&self) -> AdjustmentType {
        self.event_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn effective_date(&self) -> NaiveDate {
        self.effective_date
    }

    pub fn participant_id(&self) -> Option<ParticipantId> {
        self.participant_id
    }

    pub fn substitute_participant_id(&self) -> Option<ParticipantId> {
        self.substitute_participant_id
    }

    pub fn recurrence(&self) -> Option<&str> {
        self.recurrence.as_deref()
    }

    /// Returns whether the event is still actionable at `reference`.
    ///
    /// Events dated on `reference` itself count as future.
    pub fn is_future_event(&self, reference: NaiveDate) -> bool {
        self.effective_date >= reference
    }
}

/// Suggested program change. Lower priority values are more urgent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentAction {
    pub message: String,
    pub priority: u8,
}

impl AdjustmentAction {
    pub const PRIORITY_HIGH: u8 = 0;
    pub const PRIORITY_MEDIUM: u8 = 1;
    pub const PRIORITY_LOW: u8 = 2;

    pub fn new(message: impl Into<String>, priority: u8) -> Self {
        Self {
            message: message.into(),
            priority,
        }
    }

    /// Creates a medium-priority action.
    pub fn medium(message: impl Into<String>) -> Self {
        Self::new(message, Self::PRIORITY_MEDIUM)
    }
}

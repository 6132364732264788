//! Program adjustment proposals.
//!
//! # Responsibility
//! - Map adjustment events to prioritized, human-readable suggestions.
//! - Resolve participant references through the registry.
//!
//! # Invariants
//! - Events dated before the reference date are ignored.
//! - Each retained event matches at most one rule; events missing the IDs a
//!   rule needs are skipped without error.
//! - A `NotFound` while resolving any event aborts the whole call.
//! - Output is stably sorted by priority, so equal priorities keep event order.

use crate::model::adjustment::{AdjustmentAction, AdjustmentEvent, AdjustmentType};
use crate::repo::participant_registry::{ParticipantRegistry, RegistryResult};
use chrono::{Local, NaiveDate};
use log::{info, warn};

const UNDEFINED_RECURRENCE: &str = "undefined";
const DATE_FORMAT: &str = "%d/%m/%Y";

/// Rule-based adjuster reading from one registry.
pub struct ProgramAdjuster<'reg> {
    registry: &'reg ParticipantRegistry,
}

impl<'reg> ProgramAdjuster<'reg> {
    pub fn new(registry: &'reg ParticipantRegistry) -> Self {
        Self { registry }
    }

    /// Proposes adjustments relative to today's local date.
    ///
    /// See `propose_adjustments_at` for the contract.
    pub fn propose_adjustments(
        &self,
        events: &[AdjustmentEvent],
    ) -> RegistryResult<Vec<AdjustmentAction>> {
        self.propose_adjustments_at(events, Local::now().date_naive())
    }

    /// Proposes adjustments for events effective on or after `reference_date`.
    ///
    /// # Errors
    /// - `RegistryError::NotFound` when an absence or substitution references
    ///   an unregistered participant. No partial result is returned.
    pub fn propose_adjustments_at(
        &self,
        events: &[AdjustmentEvent],
        reference_date: NaiveDate,
    ) -> RegistryResult<Vec<AdjustmentAction>> {
        let mut actions = Vec::new();
        let mut skipped = 0usize;

        for event in events.iter().filter(|e| e.is_future_event(reference_date)) {
            match self.apply_rule(event) {
                Ok(Some(action)) => actions.push(action),
                Ok(None) => skipped += 1,
                Err(err) => {
                    warn!(
                        "event=propose_adjustments module=adjuster status=error event_type={} error={err}",
                        event.event_type().as_str()
                    );
                    return Err(err);
                }
            }
        }

        actions.sort_by_key(|action| action.priority);

        info!(
            "event=propose_adjustments module=adjuster status=ok input={} actions={} skipped={} reference_date={reference_date}",
            events.len(),
            actions.len(),
            skipped
        );
        Ok(actions)
    }

    fn apply_rule(&self, event: &AdjustmentEvent) -> RegistryResult<Option<AdjustmentAction>> {
        let action = match (
            event.event_type(),
            event.participant_id(),
            event.substitute_participant_id(),
        ) {
            (AdjustmentType::Absence, Some(absent_id), _) => {
                let absent = self.registry.get(absent_id)?;
                AdjustmentAction::new(
                    format!(
                        "Reschedule {} (status: absent) and find a substitute.",
                        absent.full_name
                    ),
                    AdjustmentAction::PRIORITY_HIGH,
                )
            }
            (AdjustmentType::Substitution, Some(absent_id), Some(substitute_id)) => {
                let absent = self.registry.get(absent_id)?;
                let substitute = self.registry.get(substitute_id)?;
                AdjustmentAction::new(
                    format!(
                        "Confirm {} as substitute for {} on {}.",
                        substitute.full_name,
                        absent.full_name,
                        event.effective_date().format(DATE_FORMAT)
                    ),
                    AdjustmentAction::PRIORITY_HIGH,
                )
            }
            (AdjustmentType::PeriodicEvent, _, _) => AdjustmentAction::medium(format!(
                "Check recurrence '{}' and distribute parts among different participants to avoid overload.",
                event
                    .recurrence()
                    .filter(|label| !label.is_empty())
                    .unwrap_or(UNDEFINED_RECURRENCE)
            )),
            (AdjustmentType::SpecialDemand, _, _) => AdjustmentAction::medium(format!(
                "Evaluate special demand: {}. Adjust the program and notify the responsible elders.",
                event.description()
            )),
            (AdjustmentType::Absence, None, _) | (AdjustmentType::Substitution, _, _) => {
                return Ok(None)
            }
        };
        Ok(Some(action))
    }
}

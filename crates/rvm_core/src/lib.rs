//! Core roster logic for the midweek meeting program.
//! This crate is the single source of truth for participant and adjustment rules.

pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::adjustment::{AdjustmentAction, AdjustmentEvent, AdjustmentType};
pub use model::classification::{
    parse_classification, parse_objective, parse_status, Classification, Objective,
    ParticipationStatus, VocabularyError,
};
pub use model::participant::{NewParticipant, Participant, ParticipantId};
pub use model::permission::{permission_matrix, Permission};
pub use repo::participant_registry::{
    ParticipantRegistry, ParticipantSummary, RegistryError, RegistryResult,
};
pub use seed::load_demo_data;
pub use service::program_adjuster::ProgramAdjuster;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

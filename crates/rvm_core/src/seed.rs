//! Demo roster used by the CLI and tests.

use crate::model::classification::{Classification, Objective, ParticipationStatus};
use crate::model::participant::NewParticipant;
use crate::model::permission::Permission;
use crate::repo::participant_registry::ParticipantRegistry;

/// Builds a registry populated with four sample participants.
pub fn load_demo_data() -> ParticipantRegistry {
    let mut registry = ParticipantRegistry::new();

    registry.register_participant(
        NewParticipant::new("Fernando Silva", Classification::Elder)
            .objectives([Objective::Preletor, Objective::Auxiliar])
            .permissions([Permission::AssignTalks, Permission::SupportStudies])
            .notes("Coordinates the monthly program committee."),
    );

    registry.register_participant(
        NewParticipant::new("João Almeida", Classification::MinisterialServant)
            .objectives([Objective::Auxiliar, Objective::Demonstracao])
            .notes("Available for last-minute substitutions on Sundays."),
    );

    registry.register_participant(
        NewParticipant::new("Maria Costa", Classification::GeneralParticipant)
            .objectives([Objective::Leitura])
            .status(ParticipationStatus::Substitute)
            .notes("Training for public reading."),
    );

    registry.register_participant(
        NewParticipant::new("Ana Souza", Classification::GeneralParticipant)
            .objectives([Objective::Visitante, Objective::Demonstracao])
            .permissions([Permission::ParticipateAsStudent]),
    );

    registry
}

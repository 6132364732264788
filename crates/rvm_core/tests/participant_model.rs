use rvm_core::{
    permission_matrix, Classification, NewParticipant, Objective, Participant,
    ParticipationStatus, Permission,
};
use std::collections::BTreeSet;
use uuid::Uuid;

#[test]
fn participant_new_sets_defaults() {
    let participant = Participant::new("Fernando Silva", Classification::Elder);

    assert!(!participant.participant_id().is_nil());
    assert_eq!(participant.full_name, "Fernando Silva");
    assert_eq!(participant.status, ParticipationStatus::Active);
    assert_eq!(participant.notes, None);
    assert_eq!(
        participant.objectives,
        Classification::Elder.default_objectives()
    );
    assert_eq!(
        participant.permissions,
        permission_matrix(Classification::Elder)
    );
}

#[test]
fn empty_sets_receive_classification_defaults_for_every_classification() {
    for classification in Classification::ALL {
        let participant = Participant::from_request(
            NewParticipant::new("Someone", classification)
                .objectives(BTreeSet::<Objective>::new())
                .permissions(BTreeSet::<Permission>::new()),
        );
        assert_eq!(participant.objectives, classification.default_objectives());
        assert_eq!(participant.permissions, permission_matrix(classification));
    }
}

#[test]
fn generated_ids_are_unique() {
    let first = Participant::new("Ana", Classification::GeneralParticipant);
    let second = Participant::new("Ana", Classification::GeneralParticipant);
    assert_ne!(first.participant_id(), second.participant_id());
}

#[test]
fn assign_objective_is_idempotent() {
    let mut participant = Participant::new("João", Classification::MinisterialServant);
    participant.assign_objective(Objective::Leitura);
    participant.assign_objective(Objective::Leitura);

    assert_eq!(
        participant.objectives,
        BTreeSet::from([Objective::Auxiliar, Objective::Leitura])
    );
}

#[test]
fn revoke_missing_objective_is_a_no_op() {
    let mut participant = Participant::new("Maria", Classification::GeneralParticipant);
    participant.revoke_objective(Objective::Preletor);
    assert_eq!(participant.objectives, BTreeSet::from([Objective::Visitante]));

    participant.revoke_objective(Objective::Visitante);
    assert!(participant.objectives.is_empty());
}

#[test]
fn participant_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let participant = Participant::with_id(
        id,
        NewParticipant::new("Ana Souza", Classification::GeneralParticipant)
            .objectives([Objective::Demonstracao])
            .permissions([Permission::ParticipateAsStudent])
            .status(ParticipationStatus::Substitute)
            .notes("Prefers Tuesdays."),
    );

    let json = serde_json::to_value(&participant).unwrap();
    assert_eq!(json["participant_id"], id.to_string());
    assert_eq!(json["classification"], "general_participant");
    assert_eq!(json["status"], "substitute");
    assert_eq!(json["objectives"], serde_json::json!(["demonstracao"]));
    assert_eq!(
        json["permissions"],
        serde_json::json!(["participate_as_student"])
    );
    assert_eq!(json["notes"], "Prefers Tuesdays.");

    let decoded: Participant = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, participant);
}

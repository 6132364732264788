//! Descriptive participation permissions and the per-classification matrix.
//!
//! Permissions are labels, not an access-control mechanism. Nothing in core
//! refuses an operation based on them.

use crate::model::classification::Classification;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Participation permission granted to a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    AssignTalks,
    SupportStudies,
    HostVisitors,
    ParticipateAsStudent,
    ObserveOnly,
}

impl Permission {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AssignTalks => "assign_talks",
            Self::SupportStudies => "support_studies",
            Self::HostVisitors => "host_visitors",
            Self::ParticipateAsStudent => "participate_as_student",
            Self::ObserveOnly => "observe_only",
        }
    }

    /// User-facing short description.
    pub fn description(self) -> &'static str {
        match self {
            Self::AssignTalks => "May be assigned talks.",
            Self::SupportStudies => "May support student parts and studies.",
            Self::HostVisitors => "May host visiting speakers.",
            Self::ParticipateAsStudent => "May take student parts.",
            Self::ObserveOnly => "Attends without an assigned part.",
        }
    }
}

static PERMISSION_MATRIX: Lazy<BTreeMap<Classification, BTreeSet<Permission>>> =
    Lazy::new(|| {
        BTreeMap::from([
            (
                Classification::Elder,
                BTreeSet::from([
                    Permission::AssignTalks,
                    Permission::SupportStudies,
                    Permission::HostVisitors,
                ]),
            ),
            (
                Classification::MinisterialServant,
                BTreeSet::from([Permission::SupportStudies, Permission::HostVisitors]),
            ),
            (
                Classification::GeneralParticipant,
                BTreeSet::from([Permission::ParticipateAsStudent, Permission::ObserveOnly]),
            ),
        ])
    });

/// Returns the default permission set for `classification`.
///
/// The matrix is read-only; the returned set is an owned copy.
pub fn permission_matrix(classification: Classification) -> BTreeSet<Permission> {
    PERMISSION_MATRIX
        .get(&classification)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{permission_matrix, Permission};
    use crate::model::classification::Classification;
    use std::collections::BTreeSet;

    #[test]
    fn matrix_matches_classification_hierarchy() {
        assert_eq!(
            permission_matrix(Classification::Elder),
            BTreeSet::from([
                Permission::AssignTalks,
                Permission::SupportStudies,
                Permission::HostVisitors,
            ])
        );
        assert_eq!(
            permission_matrix(Classification::MinisterialServant),
            BTreeSet::from([Permission::SupportStudies, Permission::HostVisitors])
        );
        assert_eq!(
            permission_matrix(Classification::GeneralParticipant),
            BTreeSet::from([Permission::ParticipateAsStudent, Permission::ObserveOnly])
        );
    }

    #[test]
    fn every_classification_has_permissions() {
        for classification in Classification::ALL {
            assert!(!permission_matrix(classification).is_empty());
        }
    }

    #[test]
    fn returned_set_is_a_copy() {
        let mut granted = permission_matrix(Classification::Elder);
        granted.clear();
        assert_eq!(permission_matrix(Classification::Elder).len(), 3);
    }

    #[test]
    fn exposes_descriptions() {
        assert!(Permission::AssignTalks.description().contains("talks"));
        assert!(Permission::ObserveOnly.as_str().ends_with("only"));
    }
}

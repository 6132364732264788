//! Participant vocabularies: classification, status and objectives.
//!
//! # Responsibility
//! - Define the fixed vocabularies every roster record is built from.
//! - Attach ordering priority and default objectives to each classification.
//!
//! # Invariants
//! - Priority is `Elder (0) < MinisterialServant (1) < GeneralParticipant (2)`;
//!   lower values sort first in every roster listing.
//! - `as_str` ids are stable and match the serde wire names.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Organizational classification of a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Elder,
    MinisterialServant,
    GeneralParticipant,
}

/// Current participation state of one participant.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ParticipationStatus {
    #[default]
    Active,
    Absent,
    Substitute,
}

/// Meeting part a participant can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    /// Delivers talks.
    Preletor,
    /// Assists the conductor of a part.
    Auxiliar,
    Visitante,
    /// Public reading.
    Leitura,
    /// Demonstration parts.
    Demonstracao,
}

static DEFAULT_OBJECTIVES: Lazy<BTreeMap<Classification, BTreeSet<Objective>>> =
    Lazy::new(|| {
        BTreeMap::from([
            (
                Classification::Elder,
                BTreeSet::from([Objective::Preletor, Objective::Auxiliar]),
            ),
            (
                Classification::MinisterialServant,
                BTreeSet::from([Objective::Auxiliar]),
            ),
            (
                Classification::GeneralParticipant,
                BTreeSet::from([Objective::Visitante]),
            ),
        ])
    });

impl Classification {
    /// Every classification in priority order.
    pub const ALL: [Classification; 3] = [
        Self::Elder,
        Self::MinisterialServant,
        Self::GeneralParticipant,
    ];

    /// Sort priority used by roster listings. Lower sorts first.
    pub fn priority(self) -> u8 {
        match self {
            Self::Elder => 0,
            Self::MinisterialServant => 1,
            Self::GeneralParticipant => 2,
        }
    }

    /// Objectives most commonly taken by this classification.
    ///
    /// Returns an owned copy; callers may mutate it freely.
    pub fn default_objectives(self) -> BTreeSet<Objective> {
        DEFAULT_OBJECTIVES.get(&self).cloned().unwrap_or_default()
    }

    /// Stable string id used in wire formats and parsing.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Elder => "elder",
            Self::MinisterialServant => "ministerial_servant",
            Self::GeneralParticipant => "general_participant",
        }
    }

    /// User-facing label for summaries and reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Elder => "elders",
            Self::MinisterialServant => "ministerial servants",
            Self::GeneralParticipant => "general participants",
        }
    }
}

impl ParticipationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Absent => "absent",
            Self::Substitute => "substitute",
        }
    }

    /// User-facing label. Identical to the stable id for statuses.
    pub fn label(self) -> &'static str {
        self.as_str()
    }
}

impl Objective {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Preletor => "preletor",
            Self::Auxiliar => "auxiliar",
            Self::Visitante => "visitante",
            Self::Leitura => "leitura",
            Self::Demonstracao => "demonstracao",
        }
    }
}

/// Vocabulary parse errors raised at string boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    Empty,
    Unsupported(String),
}

impl Display for VocabularyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "vocabulary value must not be empty"),
            Self::Unsupported(value) => write!(f, "vocabulary value is unsupported: {value}"),
        }
    }
}

impl Error for VocabularyError {}

fn normalize(value: &str) -> Result<&str, VocabularyError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(VocabularyError::Empty);
    }
    Ok(normalized)
}

/// Parses a classification from its stable id.
pub fn parse_classification(value: &str) -> Result<Classification, VocabularyError> {
    let normalized = normalize(value)?;
    Classification::ALL
        .into_iter()
        .find(|candidate| candidate.as_str() == normalized)
        .ok_or_else(|| VocabularyError::Unsupported(normalized.to_string()))
}

/// Parses a participation status from its stable id.
pub fn parse_status(value: &str) -> Result<ParticipationStatus, VocabularyError> {
    match normalize(value)? {
        "active" => Ok(ParticipationStatus::Active),
        "absent" => Ok(ParticipationStatus::Absent),
        "substitute" => Ok(ParticipationStatus::Substitute),
        other => Err(VocabularyError::Unsupported(other.to_string())),
    }
}

/// Parses an objective from its stable id.
pub fn parse_objective(value: &str) -> Result<Objective, VocabularyError> {
    match normalize(value)? {
        "preletor" => Ok(Objective::Preletor),
        "auxiliar" => Ok(Objective::Auxiliar),
        "visitante" => Ok(Objective::Visitante),
        "leitura" => Ok(Objective::Leitura),
        "demonstracao" => Ok(Objective::Demonstracao),
        other => Err(VocabularyError::Unsupported(other.to_string())),
    }
}

use battle_core::{CombatError, ErrorSeverity};

/// Content lookups and party bookkeeping failures.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("no party member template named '{0}'")]
    UnknownPartyMember(String),

    #[error("no enemy template named '{0}'")]
    UnknownEnemy(String),

    #[error("encounter table has no entries")]
    EmptyEncounterTable,

    #[error("encounter table allows at most {0} enemies")]
    InvalidMaxEnemies(usize),

    #[error("encounter entry '{enemy}' has level range {min}..={max}")]
    InvalidLevelRange { enemy: String, min: u32, max: u32 },

    #[error("'{0}' cannot fight at level 0")]
    ZeroLevel(String),

    #[error("party has no member at index {0}")]
    MemberOutOfRange(usize),

    #[error("no party member fought in slot {0}")]
    UnknownSlot(usize),
}

impl CombatError for ContentError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MemberOutOfRange(_) | Self::UnknownSlot(_) => ErrorSeverity::Internal,
            _ => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownPartyMember(_) => "CONTENT_UNKNOWN_PARTY_MEMBER",
            Self::UnknownEnemy(_) => "CONTENT_UNKNOWN_ENEMY",
            Self::EmptyEncounterTable => "CONTENT_EMPTY_ENCOUNTER_TABLE",
            Self::InvalidMaxEnemies(_) => "CONTENT_INVALID_MAX_ENEMIES",
            Self::InvalidLevelRange { .. } => "CONTENT_INVALID_LEVEL_RANGE",
            Self::ZeroLevel(_) => "CONTENT_ZERO_LEVEL",
            Self::MemberOutOfRange(_) => "CONTENT_MEMBER_OUT_OF_RANGE",
            Self::UnknownSlot(_) => "CONTENT_UNKNOWN_SLOT",
        }
    }
}

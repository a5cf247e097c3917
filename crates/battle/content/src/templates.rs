//! Static templates that party members and enemies are instantiated from.

use crate::error::ContentError;

/// Base stats for a recruitable party member.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartyMemberTemplate {
    pub name: String,
    pub starting_level: u32,
    pub base_health: i32,
    pub base_strength: i32,
    pub base_initiative: i32,
}

/// Base stats for an enemy; scaled by level when spawned.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub name: String,
    pub base_health: i32,
    pub base_strength: i32,
    pub base_initiative: i32,
}

/// Every party member template, plus the one a new party starts with.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartyCatalog {
    pub default_member: String,
    pub members: Vec<PartyMemberTemplate>,
}

impl PartyCatalog {
    pub fn find(&self, name: &str) -> Result<&PartyMemberTemplate, ContentError> {
        self.members
            .iter()
            .find(|template| template.name == name)
            .ok_or_else(|| ContentError::UnknownPartyMember(name.to_owned()))
    }

    pub fn default_template(&self) -> Result<&PartyMemberTemplate, ContentError> {
        self.find(&self.default_member)
    }

    /// Every member starts at level 1 or above and the default member exists.
    pub fn validate(&self) -> Result<(), ContentError> {
        if let Some(template) = self.members.iter().find(|t| t.starting_level == 0) {
            return Err(ContentError::ZeroLevel(template.name.clone()));
        }
        self.default_template().map(|_| ())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyCatalog {
    pub enemies: Vec<EnemyTemplate>,
}

impl EnemyCatalog {
    pub fn find(&self, name: &str) -> Result<&EnemyTemplate, ContentError> {
        self.enemies
            .iter()
            .find(|template| template.name == name)
            .ok_or_else(|| ContentError::UnknownEnemy(name.to_owned()))
    }
}

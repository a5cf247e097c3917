//! The persistent party that survives from one encounter to the next.

use battle_core::CombatantSpec;

use crate::error::ContentError;
use crate::templates::{PartyCatalog, PartyMemberTemplate};

const STARTING_MAX_EXP: u32 = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartyMember {
    pub name: String,
    pub level: u32,
    pub max_health: i32,
    /// Never negative; a member at zero is knocked out and sits out encounters.
    pub current_health: i32,
    pub strength: i32,
    pub initiative: i32,
    pub current_exp: u32,
    pub max_exp: u32,
}

impl PartyMember {
    pub fn from_template(template: &PartyMemberTemplate) -> Self {
        Self {
            name: template.name.clone(),
            level: template.starting_level,
            max_health: template.base_health,
            current_health: template.base_health,
            strength: template.base_strength,
            initiative: template.base_initiative,
            current_exp: 0,
            max_exp: STARTING_MAX_EXP,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    /// Combat stats for this member, carrying over its current health.
    pub fn combatant_spec(&self) -> CombatantSpec {
        CombatantSpec::new(
            self.name.clone(),
            self.max_health,
            self.strength,
            self.initiative,
        )
        .with_current_health(self.current_health)
        .with_level(self.level)
    }
}

/// Ordered party members. Indices are stable; knocked-out members stay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Party {
    members: Vec<PartyMember>,
}

impl Party {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh party holding the catalog's default member twice.
    pub fn starting(catalog: &PartyCatalog) -> Result<Self, ContentError> {
        let mut party = Self::new();
        let name = catalog.default_member.clone();
        party.add_member_by_name(catalog, &name)?;
        party.add_member_by_name(catalog, &name)?;
        Ok(party)
    }

    /// Recruits a new member at full health. Returns its party index.
    pub fn add_member_by_name(
        &mut self,
        catalog: &PartyCatalog,
        name: &str,
    ) -> Result<usize, ContentError> {
        let template = catalog.find(name)?;
        if template.starting_level == 0 {
            return Err(ContentError::ZeroLevel(template.name.clone()));
        }
        self.members.push(PartyMember::from_template(template));
        Ok(self.members.len() - 1)
    }

    pub fn members(&self) -> &[PartyMember] {
        &self.members
    }

    pub fn get(&self, index: usize) -> Option<&PartyMember> {
        self.members.get(index)
    }

    /// Members that can still fight, paired with their party index.
    pub fn living_members(&self) -> impl Iterator<Item = (usize, &PartyMember)> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, member)| member.is_alive())
    }

    pub fn is_wiped(&self) -> bool {
        self.living_members().next().is_none()
    }

    /// Stores health reported by an encounter. Overkill is clamped to zero.
    pub fn save_health(&mut self, index: usize, health: i32) -> Result<(), ContentError> {
        let member = self
            .members
            .get_mut(index)
            .ok_or(ContentError::MemberOutOfRange(index))?;
        member.current_health = health.clamp(0, member.max_health);
        Ok(())
    }
}

//! Bridges the persistent party into a single encounter.

use battle_core::{RosterBuilder, RosterSpec};

use crate::enemy::Enemy;
use crate::error::ContentError;
use crate::party::Party;

/// The party across the encounters it fights.
///
/// Roster slots are positions among the members that are alive when a roster
/// is built, so they do not line up with party indices once anyone has been
/// knocked out. The session keeps that mapping, rebuilt for every roster, and
/// routes health reports to the right member.
#[derive(Clone, Debug)]
pub struct PartySession {
    party: Party,
    slots: Vec<usize>,
}

impl PartySession {
    pub fn new(party: Party) -> Self {
        let slots = party.living_members().map(|(index, _)| index).collect();
        Self { party, slots }
    }

    /// Roster builder for the currently living members against `enemies`.
    ///
    /// Remaps slots first, so a session reused after a knockout routes the
    /// next encounter's saves to the members that actually fight it.
    pub fn roster_builder(&mut self, enemies: &[Enemy]) -> PartyRosterBuilder {
        self.slots = self
            .party
            .living_members()
            .map(|(index, _)| index)
            .collect();
        let players = self
            .slots
            .iter()
            .filter_map(|&index| self.party.get(index))
            .map(|member| member.combatant_spec())
            .collect();
        let enemies = enemies.iter().map(Enemy::combatant_spec).collect();
        PartyRosterBuilder {
            spec: RosterSpec::new(players, enemies),
        }
    }

    /// Party index of the member fighting in `slot`.
    pub fn party_index(&self, slot: usize) -> Option<usize> {
        self.slots.get(slot).copied()
    }

    pub fn fighters(&self) -> usize {
        self.slots.len()
    }

    pub fn save_health(&mut self, slot: usize, health: i32) -> Result<(), ContentError> {
        let index = self
            .party_index(slot)
            .ok_or(ContentError::UnknownSlot(slot))?;
        self.party.save_health(index, health)
    }

    pub fn party(&self) -> &Party {
        &self.party
    }

    /// Ends the session and hands the updated party back.
    pub fn into_party(self) -> Party {
        self.party
    }
}

/// [`RosterBuilder`] over a party session and a rolled enemy group.
#[derive(Clone, Debug)]
pub struct PartyRosterBuilder {
    spec: RosterSpec,
}

impl RosterBuilder for PartyRosterBuilder {
    fn build_initial_roster(&mut self) -> RosterSpec {
        std::mem::take(&mut self.spec)
    }
}

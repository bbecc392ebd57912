use serde::Deserialize;
use std::collections::BTreeMap;

/// Battle-relevant stats. Kept as `f64` because damage is fractional and hp
/// is allowed to go below zero on the final hit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stats {
    pub hp: f64,
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
}

/// Type matchup lists. A missing list means the creature has no special
/// matchups, so both fields default to empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub weakness: Vec<String>,
    #[serde(default)]
    pub resistances: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Move {
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pokemon {
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(default)]
    pub ability: BTreeMap<String, String>,
    pub stats: Stats,
    #[serde(default)]
    pub moves: Vec<String>,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl Pokemon {
    /// Independent copy of the move list.
    pub fn move_pool(&self) -> Vec<String> {
        self.moves.clone()
    }

    /// The ability in the `primary` slot, or an empty string when the slot
    /// is missing.
    pub fn primary_ability(&self) -> String {
        self.ability.get("primary").cloned().unwrap_or_default()
    }

    pub fn weaknesses(&self) -> Vec<String> {
        self.modifiers.weakness.clone()
    }

    pub fn resistances(&self) -> Vec<String> {
        self.modifiers.resistances.clone()
    }

    /// True iff `type_tag` appears verbatim in the weakness list.
    pub fn is_weak_to(&self, type_tag: &str) -> bool {
        self.modifiers.weakness.iter().any(|t| t == type_tag)
    }

    /// True iff the move's type appears verbatim in the resistance list.
    pub fn resists_move(&self, attack: &Move) -> bool {
        self.modifiers.resistances.iter().any(|t| t == &attack.move_type)
    }

    /// Copy of this creature with `ability` set in the given slot. Existing
    /// slots are kept; a slot of the same name is overwritten.
    pub fn with_ability(&self, slot: &str, ability: &str) -> Pokemon {
        let mut updated = self.clone();
        updated
            .ability
            .insert(slot.to_string(), ability.to_string());
        updated
    }

    /// Copy of this creature with `name` appended to the move list.
    pub fn with_move(&self, name: &str) -> Pokemon {
        let mut updated = self.clone();
        updated.moves.push(name.to_string());
        updated
    }

    /// Copy of this creature with every occurrence of `name` removed from
    /// the move list.
    pub fn without_move(&self, name: &str) -> Pokemon {
        let mut updated = self.clone();
        updated.moves.retain(|m| m != name);
        updated
    }
}

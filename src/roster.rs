use crate::model::{Modifiers, Pokemon, Stats};
use phf::phf_map;

/// Built-in creature record, const-constructible so the roster can live in a
/// static table.
pub struct RosterEntry {
    pub name: &'static str,
    pub type_tag: &'static str,
    pub ability: &'static [(&'static str, &'static str)],
    pub stats: Stats,
    pub moves: &'static [&'static str],
    pub weakness: &'static [&'static str],
    pub resistances: &'static [&'static str],
}

impl RosterEntry {
    pub fn to_pokemon(&self) -> Pokemon {
        Pokemon {
            name: self.name.to_string(),
            type_tag: self.type_tag.to_string(),
            ability: self
                .ability
                .iter()
                .map(|(slot, name)| (slot.to_string(), name.to_string()))
                .collect(),
            stats: self.stats.clone(),
            moves: self.moves.iter().map(|m| m.to_string()).collect(),
            modifiers: Modifiers {
                weakness: self.weakness.iter().map(|t| t.to_string()).collect(),
                resistances: self.resistances.iter().map(|t| t.to_string()).collect(),
            },
        }
    }
}

const PIKACHU: RosterEntry = RosterEntry {
    name: "Pikachu",
    type_tag: "electric",
    ability: &[("primary", "Static"), ("hidden", "Lightning rod")],
    stats: Stats {
        hp: 35.0,
        attack: 55.0,
        defense: 40.0,
        speed: 90.0,
    },
    moves: &["Quick Attack", "Volt Tackle", "Iron Tail", "Thunderbolt"],
    weakness: &["ground"],
    resistances: &["electric", "flying", "water", "steel"],
};

const SQUIRTLE: RosterEntry = RosterEntry {
    name: "Squirtle",
    type_tag: "water",
    ability: &[("primary", "Torrent"), ("hidden", "Rain Dish")],
    stats: Stats {
        hp: 44.0,
        attack: 48.0,
        defense: 50.0,
        speed: 43.0,
    },
    moves: &["Tackle", "Tail Whip", "Water Gun", "Hydro Pump"],
    weakness: &["electric", "grass"],
    resistances: &["water", "fire", "ice", "steel"],
};

pub static ROSTER: phf::Map<&'static str, RosterEntry> = phf_map! {
    "pikachu" => PIKACHU,
    "squirtle" => SQUIRTLE,
};

fn normalize_id(name: &str) -> String {
    name.to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Look up a built-in creature by name, ignoring case and punctuation.
pub fn builtin(name: &str) -> Option<Pokemon> {
    ROSTER
        .get(normalize_id(name).as_str())
        .map(RosterEntry::to_pokemon)
}

/// Names of every built-in creature, sorted for stable error messages.
pub fn builtin_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = ROSTER.values().map(|entry| entry.name).collect();
    names.sort_unstable();
    names
}

pub fn pikachu() -> Pokemon {
    PIKACHU.to_pokemon()
}

pub fn squirtle() -> Pokemon {
    SQUIRTLE.to_pokemon()
}

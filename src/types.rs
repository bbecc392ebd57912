use crate::model::Pokemon;

/// Matchup between one attacker and one defender. There is no global type
/// chart; each creature record carries its own weakness list and the matchup
/// is read off those lists.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Effectiveness {
    Super,
    Neutral,
    NotVery,
}

impl Effectiveness {
    pub fn multiplier(self) -> f64 {
        match self {
            Effectiveness::Super => 2.0,
            Effectiveness::Neutral => 1.0,
            Effectiveness::NotVery => 0.5,
        }
    }
}

/// True iff the defender's weakness list contains the attacker's type.
pub fn is_weak_against(attacker: &Pokemon, defender: &Pokemon) -> bool {
    defender.is_weak_to(&attacker.type_tag)
}

/// True iff the attacker's own weakness list contains the defender's type.
/// Note the direction: this reads the attacker's list, not the defender's
/// resistances.
pub fn is_strong_against(attacker: &Pokemon, defender: &Pokemon) -> bool {
    attacker.is_weak_to(&defender.type_tag)
}

/// Matchup for one attack direction. A super-effective hit wins over the
/// not-very-effective check when a pair of records somehow satisfies both.
pub fn effectiveness(attacker: &Pokemon, defender: &Pokemon) -> Effectiveness {
    if is_weak_against(attacker, defender) {
        Effectiveness::Super
    } else if is_strong_against(attacker, defender) {
        Effectiveness::NotVery
    } else {
        Effectiveness::Neutral
    }
}

pub fn attack_modifier(attacker: &Pokemon, defender: &Pokemon) -> f64 {
    effectiveness(attacker, defender).multiplier()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Modifiers, Stats};
    use std::collections::BTreeMap;

    fn make_mon(name: &str, type_tag: &str, weakness: &[&str]) -> Pokemon {
        Pokemon {
            name: name.to_string(),
            type_tag: type_tag.to_string(),
            ability: BTreeMap::new(),
            stats: Stats {
                hp: 50.0,
                attack: 50.0,
                defense: 50.0,
                speed: 50.0,
            },
            moves: vec!["Tackle".to_string()],
            modifiers: Modifiers {
                weakness: weakness.iter().map(|t| t.to_string()).collect(),
                resistances: Vec::new(),
            },
        }
    }

    #[test]
    fn super_effective_when_defender_is_weak_to_the_attacker() {
        let sparks = make_mon("Sparks", "electric", &["ground"]);
        let shell = make_mon("Shell", "water", &["electric", "grass"]);
        assert!(is_weak_against(&sparks, &shell));
        assert!(!is_strong_against(&sparks, &shell));
        assert_eq!(effectiveness(&sparks, &shell), Effectiveness::Super);
        assert_eq!(attack_modifier(&sparks, &shell), 2.0);
    }

    #[test]
    fn not_very_effective_reads_the_attackers_own_weakness_list() {
        let shell = make_mon("Shell", "water", &["electric", "grass"]);
        let sparks = make_mon("Sparks", "electric", &["ground"]);
        assert!(!is_weak_against(&shell, &sparks));
        assert!(is_strong_against(&shell, &sparks));
        assert_eq!(effectiveness(&shell, &sparks), Effectiveness::NotVery);
        assert_eq!(attack_modifier(&shell, &sparks), 0.5);
    }

    #[test]
    fn unlisted_types_are_neutral() {
        let plain = make_mon("Plain", "normal", &[]);
        let shell = make_mon("Shell", "water", &["electric", "grass"]);
        assert_eq!(effectiveness(&plain, &shell), Effectiveness::Neutral);
        assert_eq!(attack_modifier(&plain, &shell), 1.0);
    }

    #[test]
    fn super_effective_wins_when_both_checks_fire() {
        // Mutually weak pair: both membership tests are true at once, the
        // modifier still resolves to 2.0.
        let ember = make_mon("Ember", "fire", &["water"]);
        let splash = make_mon("Splash", "water", &["fire"]);
        assert!(is_weak_against(&ember, &splash));
        assert!(is_strong_against(&ember, &splash));
        assert_eq!(effectiveness(&ember, &splash), Effectiveness::Super);
        assert_eq!(attack_modifier(&ember, &splash), 2.0);
    }

    #[test]
    fn matchup_is_case_sensitive() {
        let sparks = make_mon("Sparks", "Electric", &["ground"]);
        let shell = make_mon("Shell", "water", &["electric", "grass"]);
        assert_eq!(effectiveness(&sparks, &shell), Effectiveness::Neutral);
    }

    #[test]
    fn builtin_pair_never_triggers_both_checks_at_once() {
        let pikachu = crate::roster::pikachu();
        let squirtle = crate::roster::squirtle();
        for (attacker, defender) in [(&pikachu, &squirtle), (&squirtle, &pikachu)] {
            let both = is_weak_against(attacker, defender) && is_strong_against(attacker, defender);
            assert!(!both, "fixture pair must not be mutually weak");
        }
        assert_eq!(attack_modifier(&pikachu, &squirtle), 2.0);
        assert_eq!(attack_modifier(&squirtle, &pikachu), 0.5);
    }
}

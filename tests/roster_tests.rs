use pokemon_battle_sim::model::Move;
use pokemon_battle_sim::{load_roster, simulate_battle, RosterFile};

const CUSTOM_ROSTER: &str = r#"{
  "pokemon": [
    {
      "name": "Bulbasaur",
      "type": "grass",
      "ability": { "primary": "Overgrow" },
      "stats": { "hp": 45, "attack": 49, "defense": 49, "speed": 45 },
      "moves": ["Tackle", "Vine Whip"],
      "modifiers": { "weakness": ["fire", "ice"], "resistances": ["water", "grass"] }
    },
    {
      "name": "Charmander",
      "type": "fire",
      "ability": { "primary": "Blaze" },
      "stats": { "hp": 39, "attack": 52, "defense": 43, "speed": 65 },
      "moves": ["Scratch", "Ember"],
      "modifiers": { "weakness": ["water", "ground"], "resistances": ["fire", "grass"] }
    }
  ]
}"#;

#[test]
fn roster_files_parse_the_reference_record_shape() {
    let roster: RosterFile = serde_json::from_str(CUSTOM_ROSTER).unwrap();
    assert_eq!(roster.pokemon.len(), 2);

    let bulbasaur = &roster.pokemon[0];
    assert_eq!(bulbasaur.name, "Bulbasaur");
    assert_eq!(bulbasaur.type_tag, "grass");
    assert_eq!(bulbasaur.primary_ability(), "Overgrow");
    assert_eq!(bulbasaur.stats.hp, 45.0);
    assert_eq!(bulbasaur.moves, vec!["Tackle", "Vine Whip"]);
    assert_eq!(bulbasaur.weaknesses(), vec!["fire", "ice"]);
    assert_eq!(bulbasaur.resistances(), vec!["water", "grass"]);
}

#[test]
fn omitted_optional_fields_default_to_empty() {
    let minimal = r#"{
      "pokemon": [
        {
          "name": "Ditto",
          "type": "normal",
          "stats": { "hp": 48, "attack": 48, "defense": 48, "speed": 48 }
        }
      ]
    }"#;
    let roster: RosterFile = serde_json::from_str(minimal).unwrap();
    let ditto = &roster.pokemon[0];
    assert_eq!(ditto.primary_ability(), "");
    assert!(ditto.moves.is_empty());
    assert!(ditto.weaknesses().is_empty());
    assert!(ditto.resistances().is_empty());
}

#[test]
fn records_without_stats_are_rejected() {
    let broken = r#"{ "pokemon": [ { "name": "Ghost", "type": "ghost" } ] }"#;
    assert!(serde_json::from_str::<RosterFile>(broken).is_err());
}

#[test]
fn move_records_use_the_type_key() {
    let mv: Move = serde_json::from_str(r#"{ "name": "Water Gun", "type": "water" }"#).unwrap();
    assert_eq!(mv.name, "Water Gun");
    assert_eq!(mv.move_type, "water");
}

#[test]
fn parsed_records_battle_like_built_in_ones() {
    let roster: RosterFile = serde_json::from_str(CUSTOM_ROSTER).unwrap();
    let bulbasaur = &roster.pokemon[0];
    let charmander = &roster.pokemon[1];

    // Charmander is faster and Bulbasaur lists fire as a weakness.
    let outcome = simulate_battle(bulbasaur, charmander, 9).unwrap();
    assert_eq!(outcome.results.winner.name, "Charmander");
    assert!(outcome.history[0].starts_with("Charmander used "));
    assert!(outcome.history[0].ends_with(" It's super effective!"));
}

#[test]
fn load_roster_reads_a_file_from_disk() {
    let path = std::env::temp_dir().join("pokemon_battle_sim_roster_ok.json");
    std::fs::write(&path, CUSTOM_ROSTER).unwrap();
    let loaded = load_roster(&path);
    std::fs::remove_file(&path).ok();

    let roster = loaded.unwrap();
    assert_eq!(roster.pokemon.len(), 2);
}

#[test]
fn load_roster_rejects_duplicate_names() {
    let duplicated = r#"{
      "pokemon": [
        { "name": "Eevee", "type": "normal", "stats": { "hp": 55, "attack": 55, "defense": 50, "speed": 55 } },
        { "name": "EEVEE", "type": "normal", "stats": { "hp": 55, "attack": 55, "defense": 50, "speed": 55 } }
      ]
    }"#;
    let path = std::env::temp_dir().join("pokemon_battle_sim_roster_dup.json");
    std::fs::write(&path, duplicated).unwrap();
    let loaded = load_roster(&path);
    std::fs::remove_file(&path).ok();

    let err = loaded.unwrap_err();
    assert!(err.to_string().contains("more than once"), "got: {err}");
}

#[test]
fn load_roster_reports_a_missing_file() {
    let path = std::env::temp_dir().join("pokemon_battle_sim_roster_missing.json");
    let err = load_roster(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to read"), "got: {err}");
}

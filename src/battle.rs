use crate::damage::calculate_damage;
use crate::error::BattleError;
use crate::log::BattleLog;
use crate::model::Pokemon;
use crate::types::attack_modifier;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Which of the two battle inputs a result refers to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    First,
    Second,
}

/// Working copy of one side. Damage lands on `current_hp`; the input record
/// is never touched.
#[derive(Clone)]
struct Battler {
    pokemon: Pokemon,
    current_hp: f64,
}

impl Battler {
    fn new(pokemon: &Pokemon) -> Self {
        Battler {
            current_hp: pokemon.stats.hp,
            pokemon: pokemon.clone(),
        }
    }

    fn is_standing(&self) -> bool {
        self.current_hp > 0.0
    }

    fn summary(&self) -> BattlerSummary {
        BattlerSummary {
            name: self.pokemon.name.clone(),
            hp: self.current_hp,
        }
    }
}

struct BattleState {
    first: Battler,
    second: Battler,
}

/// Name and final hp of one side. Hp can be negative after the closing hit.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BattlerSummary {
    pub name: String,
    pub hp: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BattleResults {
    pub winner: BattlerSummary,
    pub loser: BattlerSummary,
}

/// Full report of one battle: how many rounds ran, who stands, and one
/// formatted line per attack.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BattleOutcome {
    pub rounds: u32,
    pub results: BattleResults,
    pub history: Vec<String>,
}

/// Run one battle with a private RNG seeded from `seed`. Equal seeds give
/// equal outcomes.
pub fn simulate_battle(
    first: &Pokemon,
    second: &Pokemon,
    seed: u64,
) -> Result<BattleOutcome, BattleError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    simulate_battle_with_rng(first, second, &mut rng)
}

/// Run one battle drawing move choices from the caller's RNG.
pub fn simulate_battle_with_rng(
    first: &Pokemon,
    second: &Pokemon,
    rng: &mut impl Rng,
) -> Result<BattleOutcome, BattleError> {
    run_battle(first, second, rng).map(|(_, outcome)| outcome)
}

pub(crate) fn run_battle(
    first: &Pokemon,
    second: &Pokemon,
    rng: &mut impl Rng,
) -> Result<(Side, BattleOutcome), BattleError> {
    let mut state = BattleState {
        first: Battler::new(first),
        second: Battler::new(second),
    };
    // A side that is already down means no round runs, so the round inputs
    // are only checked when the loop will actually execute.
    if state.first.is_standing() && state.second.is_standing() {
        validate_matchup(first, second)?;
    }

    let mut log = BattleLog::new();
    let mut rounds: u32 = 0;
    while state.first.is_standing() && state.second.is_standing() {
        rounds += 1;
        // Speeds never change mid-battle. Strict comparison sends the second
        // battler on a tie.
        let first_attacks = state.first.pokemon.stats.speed > state.second.pokemon.stats.speed;
        let (attacker, defender) = if first_attacks {
            (&mut state.first, &mut state.second)
        } else {
            (&mut state.second, &mut state.first)
        };
        let move_name =
            attacker.pokemon.moves[rng.gen_range(0..attacker.pokemon.moves.len())].clone();
        let modifier = attack_modifier(&attacker.pokemon, &defender.pokemon);
        let dealt = calculate_damage(
            attacker.pokemon.stats.attack,
            defender.pokemon.stats.defense,
            modifier,
        )?;
        defender.current_hp -= dealt;
        log.log_attack(
            &attacker.pokemon.name,
            &defender.pokemon.name,
            &move_name,
            dealt,
            modifier,
        );
    }

    let (winning_side, winner, loser) = if state.first.is_standing() {
        (Side::First, &state.first, &state.second)
    } else {
        (Side::Second, &state.second, &state.first)
    };
    Ok((
        winning_side,
        BattleOutcome {
            rounds,
            results: BattleResults {
                winner: winner.summary(),
                loser: loser.summary(),
            },
            history: log.into_lines(),
        },
    ))
}

/// The loop only ever reads the faster side's moves and attack stat and the
/// slower side's defense stat, so those are what get checked.
fn validate_matchup(first: &Pokemon, second: &Pokemon) -> Result<(), BattleError> {
    let (attacker, defender) = if first.stats.speed > second.stats.speed {
        (first, second)
    } else {
        (second, first)
    };
    if attacker.moves.is_empty() {
        return Err(BattleError::EmptyMoveList(attacker.name.clone()));
    }
    if attacker.stats.attack <= 0.0 {
        return Err(BattleError::ZeroAttack(attacker.name.clone()));
    }
    if defender.stats.defense <= 0.0 {
        return Err(BattleError::ZeroDefense);
    }
    Ok(())
}

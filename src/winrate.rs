use crate::battle::{run_battle, Side};
use crate::error::BattleError;
use crate::model::Pokemon;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Tally over repeated battles of the same pairing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WinRateSummary {
    pub simulations: u64,
    pub wins_first: u64,
    pub wins_second: u64,
    pub total_rounds: u64,
}

impl WinRateSummary {
    pub fn first_rate(&self) -> f64 {
        self.wins_first as f64 / self.simulations as f64
    }

    pub fn second_rate(&self) -> f64 {
        self.wins_second as f64 / self.simulations as f64
    }

    pub fn mean_rounds(&self) -> f64 {
        self.total_rounds as f64 / self.simulations as f64
    }
}

/// Run `sims` independent battles of one pairing and tally winners by side,
/// so a mirror match between same-named records still counts correctly.
///
/// Battle seeds are drawn up front from a seeding RNG, which keeps the tally
/// reproducible for a given `seed` no matter how the work is scheduled.
pub fn win_rates(
    first: &Pokemon,
    second: &Pokemon,
    sims: usize,
    seed: u64,
) -> Result<WinRateSummary, BattleError> {
    let mut seed_rng = SmallRng::seed_from_u64(seed);
    let battle_seeds: Vec<u64> = (0..sims).map(|_| seed_rng.gen()).collect();

    let per_battle = battle_seeds
        .par_iter()
        .map(|&battle_seed| {
            let mut rng = SmallRng::seed_from_u64(battle_seed);
            run_battle(first, second, &mut rng)
                .map(|(winning_side, outcome)| (winning_side, outcome.rounds))
        })
        .collect::<Result<Vec<_>, BattleError>>()?;

    let mut summary = WinRateSummary {
        simulations: sims as u64,
        wins_first: 0,
        wins_second: 0,
        total_rounds: 0,
    };
    for (winning_side, rounds) in per_battle {
        match winning_side {
            Side::First => summary.wins_first += 1,
            Side::Second => summary.wins_second += 1,
        }
        summary.total_rounds += u64::from(rounds);
    }
    Ok(summary)
}

use thiserror::Error;

/// Input validation failures for the battle engine.
///
/// The combat loop only ever reads the attacking side's move list and attack
/// stat and the defending side's defense stat, so these are the three records
/// that get checked before a battle starts.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BattleError {
    /// The side that would attack has nothing to pick a move from.
    #[error("{0} has an empty move list")]
    EmptyMoveList(String),
    /// An attack stat of zero (or below) can never deal damage, so no round
    /// could ever end the battle.
    #[error("{0} has an attack stat that can never deal damage")]
    ZeroAttack(String),
    /// The damage formula divides by the defending side's defense stat.
    #[error("the defending side's defense stat must be positive to take damage")]
    ZeroDefense,
}

use crate::error::BattleError;

/// Damage for one attack: `0.5 * attack * (attack / defense) * modifier`.
///
/// The quotient term scales the hit by how the attack stat compares to the
/// defense stat. The result is fractional and never rounded; callers
/// subtract it from hp as-is. Zero or negative defense is rejected.
pub fn calculate_damage(attack: f64, defense: f64, modifier: f64) -> Result<f64, BattleError> {
    if defense <= 0.0 {
        return Err(BattleError::ZeroDefense);
    }
    Ok(0.5 * attack * (attack / defense) * modifier)
}

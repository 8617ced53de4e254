//! Weighted enemy selection shared by explore and hunt.

use crate::catalog::{EnemyTemplate, BANDIT, BEAR, GOBLIN, ORC, SKELETON, WOLF};
use crate::rng::Randomness;

/// Number of enemies in the encounter pool.
const POOL_SIZE: usize = 6;

/// Pool in selection order, weakest first, with base weights.
const BASE_WEIGHTS: [(&EnemyTemplate, u32); POOL_SIZE] = [
    (&GOBLIN, 25),
    (&SKELETON, 20),
    (&BANDIT, 15),
    (&WOLF, 10),
    (&BEAR, 5),
    (&ORC, 2),
];

/// Level at which the pool flattens and bandits become more common.
const VETERAN_LEVEL: u32 = 3;

/// Weight shifted from the weakest to the strongest enemy per staked SP.
const STAKE_WEIGHT_SHIFT: u32 = 8;

/// Returns the encounter pool with weights adjusted for `level` and `extra_sp`.
///
/// From level 3 every weight drops by 5 (never below 5) and bandits gain 5.
/// Each staked SP then moves 8 weight from the goblin (floored at 0) to the orc.
///
/// ```
/// use grimoire_core::action::encounter_weights;
///
/// let weights: Vec<u32> = encounter_weights(1, 0).iter().map(|(_, w)| *w).collect();
/// assert_eq!(weights, [25, 20, 15, 10, 5, 2]);
///
/// let weights: Vec<u32> = encounter_weights(3, 2).iter().map(|(_, w)| *w).collect();
/// assert_eq!(weights, [4, 15, 15, 5, 5, 21]);
/// ```
#[must_use]
pub fn encounter_weights(level: u32, extra_sp: u32) -> [(&'static EnemyTemplate, u32); POOL_SIZE] {
    let mut pool = BASE_WEIGHTS;

    if level >= VETERAN_LEVEL {
        for (_, weight) in &mut pool {
            *weight = weight.saturating_sub(5).max(5);
        }
        pool[2].1 += 5;
    }

    if extra_sp > 0 {
        let shift = extra_sp.saturating_mul(STAKE_WEIGHT_SHIFT);
        pool[0].1 = pool[0].1.saturating_sub(shift);
        pool[POOL_SIZE - 1].1 = pool[POOL_SIZE - 1].1.saturating_add(shift);
    }

    pool
}

/// Picks an enemy with one draw against the cumulative weights.
pub fn choose_enemy<R: Randomness + ?Sized>(
    level: u32,
    extra_sp: u32,
    rng: &mut R,
) -> &'static EnemyTemplate {
    let pool = encounter_weights(level, extra_sp);
    let total: u32 = pool.iter().map(|(_, weight)| weight).sum();
    let roll = rng.next_int(total);

    let mut cumulative = 0;
    for (enemy, weight) in pool {
        cumulative += weight;
        if roll < cumulative {
            tracing::debug!(enemy = enemy.id, roll, total, "enemy chosen");
            return enemy;
        }
    }
    pool[0].0
}

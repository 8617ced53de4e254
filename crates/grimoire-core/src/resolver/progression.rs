//! XP and leveling.
//!
//! The curve is linear: leaving level `L` costs `L * 100` XP. A single grant
//! can cross several thresholds; each crossing is one [`Event::LevelUp`].

use crate::event::{Event, Events};
use crate::state::{Player, LEVEL_UP_HEAL, LEVEL_UP_MAX_HP_GAIN, XP_PER_LEVEL};

/// XP needed to advance from `level`. Levels below 1 count as 1.
///
/// ```
/// use grimoire_core::resolver::xp_to_next;
///
/// assert_eq!(xp_to_next(0), 100);
/// assert_eq!(xp_to_next(5), 500);
/// ```
#[must_use]
pub const fn xp_to_next(level: u32) -> u32 {
    let level = if level < 1 { 1 } else { level };
    level.saturating_mul(XP_PER_LEVEL)
}

/// Adds `amount` XP and processes every level-up it pays for.
///
/// Each level-up consumes the threshold, raises max HP by 10 and heals 10
/// (clamped to the new max). A zero grant is a no-op with no events.
pub fn grant_xp(player: &mut Player, amount: u32) -> Events {
    let mut events = Events::new();
    if amount == 0 {
        return events;
    }

    player.xp = player.xp.saturating_add(amount);
    events.push(Event::XpGained { amount });

    loop {
        let need = xp_to_next(player.level);
        if player.xp < need {
            break;
        }

        player.xp -= need;
        player.level += 1;
        player.max_hp = player.max_hp.saturating_add(LEVEL_UP_MAX_HP_GAIN);
        player.heal(LEVEL_UP_HEAL);

        tracing::debug!(level = player.level, max_hp = player.max_hp, "level up");
        events.push(Event::LevelUp {
            new_level: player.level,
            new_max_hp: player.max_hp,
        });
    }

    events
}

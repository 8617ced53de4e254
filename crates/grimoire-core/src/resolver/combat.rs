//! Turn-based combat between the player and one enemy.
//!
//! The `CombatResolver` handles:
//! - Alternating attacks, player first, until one side reaches 0 HP
//! - Loot rolls for a defeated enemy
//! - Writing the player's final HP back into persistent state
//!
//! # Randomness Order
//!
//! Each round draws one integer for the player's hit and, if the enemy
//! survives, one integer for the enemy's hit. A victory then draws one float
//! per loot entry, in table order.

use serde::{Deserialize, Serialize};

use crate::catalog::EnemyTemplate;
use crate::event::{Combatant, Event, Events};
use crate::rng::{Randomness, Span};
use crate::state::Player;

/// Terminal result of a fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The enemy reached 0 HP.
    Win,
    /// The player reached 0 HP.
    Lose,
}

impl Outcome {
    /// Returns `"win"` or `"lose"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Lose => "lose",
        }
    }
}

/// Summary of a finished fight.
///
/// Rewards are the template's base values; callers apply any multiplier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatResult {
    /// Who won.
    pub outcome: Outcome,
    /// Base XP reward, zero on a loss.
    pub xp: u32,
    /// Base gold reward, zero on a loss.
    pub gold: u32,
    /// Item ids that dropped, in loot table order.
    pub loot: Vec<&'static str>,
    /// Rounds fought.
    pub rounds: u32,
}

impl CombatResult {
    fn defeat(rounds: u32) -> Self {
        Self {
            outcome: Outcome::Lose,
            xp: 0,
            gold: 0,
            loot: Vec::new(),
            rounds,
        }
    }

    /// Returns true if the player won.
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self.outcome, Outcome::Win)
    }
}

/// Resolver for player-versus-enemy fights.
///
/// # Example
///
/// ```
/// use grimoire_core::catalog;
/// use grimoire_core::resolver::{CombatResolver, Outcome};
/// use grimoire_core::rng::ScriptedRng;
/// use grimoire_core::state::Player;
///
/// let mut player = Player { level: 10, ..Player::default() };
/// let goblin = catalog::enemy("goblin").unwrap();
///
/// let (result, _events) =
///     CombatResolver::new().resolve(&mut player, goblin, &mut ScriptedRng::minimum());
/// assert_eq!(result.outcome, Outcome::Win);
/// assert_eq!(player.hp, 100);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CombatResolver;

impl CombatResolver {
    /// Creates a new combat resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Damage range of the player's attack at `level`: `[level + 1, level + 2]`.
    #[must_use]
    pub const fn player_damage(level: u32) -> Span {
        Span::new(level.saturating_add(1), level.saturating_add(2))
    }

    /// Fights `enemy` to completion.
    ///
    /// On a win the player's remaining HP is written back and loot is rolled.
    /// On a loss the player's HP is set to 0 and no rewards are given.
    pub fn resolve<R: Randomness + ?Sized>(
        &self,
        player: &mut Player,
        enemy: &EnemyTemplate,
        rng: &mut R,
    ) -> (CombatResult, Events) {
        let foe = Combatant::enemy(enemy.id);
        let player_hit = Self::player_damage(player.level);

        let mut events = vec![Event::EncounterStarted {
            enemy_id: enemy.id.to_string(),
        }];
        let mut player_hp = player.hp;
        let mut enemy_hp = enemy.hp;
        let mut rounds = 0;

        loop {
            rounds += 1;

            let dealt = player_hit.draw(rng);
            enemy_hp = enemy_hp.saturating_sub(dealt);
            events.push(Event::DamageDealt {
                source: Combatant::Player,
                target: foe.clone(),
                amount: dealt,
                hp_left: enemy_hp,
            });
            tracing::trace!(rounds, dealt, enemy_hp, "player attack");

            if enemy_hp == 0 {
                let loot = Self::roll_loot(enemy, rng);
                events.push(Event::EnemyDefeated {
                    enemy_id: enemy.id.to_string(),
                    xp: enemy.xp,
                    gold: enemy.gold,
                });
                player.hp = player_hp;
                tracing::debug!(enemy = enemy.id, rounds, player_hp, ?loot, "enemy defeated");
                let result = CombatResult {
                    outcome: Outcome::Win,
                    xp: enemy.xp,
                    gold: enemy.gold,
                    loot,
                    rounds,
                };
                return (result, events);
            }

            let taken = enemy.attack.draw(rng);
            player_hp = player_hp.saturating_sub(taken);
            events.push(Event::DamageDealt {
                source: foe.clone(),
                target: Combatant::Player,
                amount: taken,
                hp_left: player_hp,
            });
            tracing::trace!(rounds, taken, player_hp, "enemy attack");

            if player_hp == 0 {
                player.hp = 0;
                events.push(Event::PlayerDefeated);
                tracing::debug!(enemy = enemy.id, rounds, "player defeated");
                return (CombatResult::defeat(rounds), events);
            }
        }
    }

    /// Rolls every loot entry independently; any number may drop.
    fn roll_loot<R: Randomness + ?Sized>(enemy: &EnemyTemplate, rng: &mut R) -> Vec<&'static str> {
        enemy
            .loot
            .iter()
            .filter(|entry| rng.next_unit() < entry.chance)
            .map(|entry| entry.item_id)
            .collect()
    }
}

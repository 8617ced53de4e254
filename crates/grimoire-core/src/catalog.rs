//! Static item and enemy registries.
//!
//! Both catalogs are immutable `static` tables built at compile time. There is
//! no runtime path that mutates them.
//!
//! [`ENEMIES`] is ordered weakest to strongest; enemy selection walks it in
//! that order.

use crate::rng::Span;

// =============================================================================
// Items
// =============================================================================

/// Effect applied when an item is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseEffect {
    /// HP restored.
    pub hp: Span,
    /// SP restored.
    pub sp: Span,
}

/// Catalog entry for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    /// Canonical item id.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Use effect; `None` for items that cannot be used.
    pub effect: Option<UseEffect>,
}

impl Item {
    const fn inert(id: &'static str, name: &'static str) -> Self {
        Self {
            id,
            name,
            effect: None,
        }
    }

    const fn usable(id: &'static str, name: &'static str, hp: Span, sp: Span) -> Self {
        Self {
            id,
            name,
            effect: Some(UseEffect { hp, sp }),
        }
    }
}

/// Every known item.
pub static ITEMS: &[Item] = &[
    Item::usable(
        "healing_potion",
        "Healing Potion",
        Span::new(10, 25),
        Span::new(1, 3),
    ),
    Item::inert("torch", "Torch"),
    Item::inert("rusty_dagger", "Rusty Dagger"),
    Item::inert("bone_shield", "Bone Shield"),
    Item::inert("ancient_coin", "Ancient Coin"),
    Item::inert("coin_pouch", "Coin Pouch"),
    Item::inert("wolf_pelt", "Wolf Pelt"),
    Item::usable("meat", "Meat", Span::fixed(40), Span::fixed(2)),
    Item::inert("bear_claw", "Bear Claw"),
    Item::inert("orcish_blade", "Orcish Blade"),
];

/// Looks up an item by canonical id.
#[must_use]
pub fn item(id: &str) -> Option<&'static Item> {
    ITEMS.iter().find(|item| item.id == id)
}

/// Returns the display name for `id`, falling back to the id itself.
#[must_use]
pub fn display_name(id: &str) -> &str {
    item(id).map_or(id, |item| item.name)
}

// =============================================================================
// Enemies
// =============================================================================

/// One independent drop roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LootEntry {
    /// Canonical id of the dropped item.
    pub item_id: &'static str,
    /// Drop probability in `[0, 1]`.
    pub chance: f64,
}

/// Catalog entry for an enemy archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyTemplate {
    /// Enemy id.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Starting HP.
    pub hp: u32,
    /// Damage dealt per attack.
    pub attack: Span,
    /// XP awarded on defeat.
    pub xp: u32,
    /// Gold awarded on defeat.
    pub gold: u32,
    /// Drop rolls, each evaluated independently.
    pub loot: &'static [LootEntry],
}

const fn drops(item_id: &'static str, chance: f64) -> LootEntry {
    LootEntry { item_id, chance }
}

/// Weakest enemy; first in the encounter pool.
pub const GOBLIN: EnemyTemplate = EnemyTemplate {
    id: "goblin",
    name: "Goblin",
    hp: 8,
    attack: Span::new(1, 3),
    xp: 5,
    gold: 3,
    loot: &[drops("rusty_dagger", 0.20), drops("healing_potion", 0.10)],
};

/// Undead rattler.
pub const SKELETON: EnemyTemplate = EnemyTemplate {
    id: "skeleton",
    name: "Skeleton",
    hp: 10,
    attack: Span::new(2, 4),
    xp: 8,
    gold: 5,
    loot: &[drops("bone_shield", 0.10), drops("ancient_coin", 0.25)],
};

/// Roadside thief; more common from level 3.
pub const BANDIT: EnemyTemplate = EnemyTemplate {
    id: "bandit",
    name: "Bandit",
    hp: 12,
    attack: Span::new(2, 5),
    xp: 10,
    gold: 8,
    loot: &[drops("coin_pouch", 0.30), drops("healing_potion", 0.15)],
};

/// Pack hunter.
pub const WOLF: EnemyTemplate = EnemyTemplate {
    id: "wolf",
    name: "Wolf",
    hp: 14,
    attack: Span::new(3, 6),
    xp: 12,
    gold: 6,
    loot: &[drops("wolf_pelt", 0.30), drops("meat", 0.40)],
};

/// Slow to fall.
pub const BEAR: EnemyTemplate = EnemyTemplate {
    id: "bear",
    name: "Bear",
    hp: 20,
    attack: Span::new(4, 8),
    xp: 20,
    gold: 10,
    loot: &[drops("bear_claw", 0.25)],
};

/// Strongest enemy; staked hunts pull toward it.
pub const ORC: EnemyTemplate = EnemyTemplate {
    id: "orc",
    name: "Orc",
    hp: 25,
    attack: Span::new(5, 10),
    xp: 25,
    gold: 15,
    loot: &[drops("orcish_blade", 0.15), drops("coin_pouch", 0.25)],
};

/// Every known enemy, weakest first.
pub static ENEMIES: &[EnemyTemplate] = &[GOBLIN, SKELETON, BANDIT, WOLF, BEAR, ORC];

/// Looks up an enemy by id.
#[must_use]
pub fn enemy(id: &str) -> Option<&'static EnemyTemplate> {
    ENEMIES.iter().find(|enemy| enemy.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::normalize_item_id;

    #[test]
    fn item_ids_are_canonical_and_unique() {
        for (i, item) in ITEMS.iter().enumerate() {
            assert_eq!(normalize_item_id(item.id), item.id);
            assert!(ITEMS[i + 1..].iter().all(|other| other.id != item.id));
        }
    }

    #[test]
    fn loot_references_known_items() {
        for enemy in ENEMIES {
            for entry in enemy.loot {
                assert!(item(entry.item_id).is_some(), "{} drops unknown item", enemy.id);
                assert!((0.0..=1.0).contains(&entry.chance));
            }
        }
    }

    #[test]
    fn enemies_attack_for_at_least_one() {
        for enemy in ENEMIES {
            assert!(enemy.attack.min >= 1, "{} could stall combat", enemy.id);
            assert!(enemy.hp > 0);
        }
    }

    #[test]
    fn healing_potion_has_effect() {
        let potion = item("healing_potion").unwrap();
        let effect = potion.effect.unwrap();
        assert_eq!(effect.hp, Span::new(10, 25));
        assert_eq!(effect.sp, Span::new(1, 3));
        assert!(item("torch").unwrap().effect.is_none());
    }

    #[test]
    fn lookups() {
        assert_eq!(enemy("goblin").map(|e| e.hp), Some(8));
        assert!(enemy("dragon").is_none());
        assert_eq!(display_name("wolf_pelt"), "Wolf Pelt");
        assert_eq!(display_name("mystery"), "mystery");
    }
}

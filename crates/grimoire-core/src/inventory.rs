//! Item id normalization and the stacked inventory.
//!
//! Every inventory key is a canonical item id: lowercase words joined by
//! underscores. All mutators normalize their input first, so `"Rusty-Dagger"`,
//! `"rusty dagger"` and `"rusty_dagger"` address the same stack.
//!
//! # Invariants
//!
//! - Keys are canonical and non-empty
//! - Stored counts are strictly positive; absence means zero

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Converts a raw item id into its canonical form.
///
/// Lowercases, turns hyphens into spaces, collapses whitespace runs and joins
/// the remaining words with underscores. Blank input yields an empty string,
/// which callers treat as invalid.
///
/// # Example
///
/// ```
/// use grimoire_core::inventory::normalize_item_id;
///
/// assert_eq!(normalize_item_id(" Healing Potion "), "healing_potion");
/// assert_eq!(normalize_item_id("RUSTY-DAGGER"), "rusty_dagger");
/// assert_eq!(normalize_item_id(""), "");
/// ```
#[must_use]
pub fn normalize_item_id(raw: &str) -> String {
    raw.to_lowercase()
        .replace('-', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Counter map from canonical item id to a positive count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Inventory {
    stacks: BTreeMap<String, u32>,
}

impl Inventory {
    /// Creates an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many of `item_id` are held.
    #[must_use]
    pub fn count(&self, item_id: &str) -> u32 {
        self.stacks
            .get(&normalize_item_id(item_id))
            .copied()
            .unwrap_or(0)
    }

    /// Adds `qty` of `item_id`. Zero quantities and blank ids are ignored.
    pub fn add(&mut self, item_id: &str, qty: u32) {
        let key = normalize_item_id(item_id);
        if qty == 0 || key.is_empty() {
            return;
        }
        let stack = self.stacks.entry(key).or_insert(0);
        *stack = stack.saturating_add(qty);
    }

    /// Removes `qty` of `item_id`.
    ///
    /// Removing at least the held count deletes the stack instead of storing
    /// a zero.
    pub fn remove(&mut self, item_id: &str, qty: u32) {
        if qty == 0 {
            return;
        }
        let key = normalize_item_id(item_id);
        let Some(have) = self.stacks.get_mut(&key) else {
            return;
        };
        if *have <= qty {
            self.stacks.remove(&key);
        } else {
            *have -= qty;
        }
    }

    /// Returns true if at least `qty` of `item_id` are held. Always true for zero.
    #[must_use]
    pub fn has(&self, item_id: &str, qty: u32) -> bool {
        qty == 0 || self.count(item_id) >= qty
    }

    /// Iterates stacks in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.stacks.iter().map(|(id, count)| (id.as_str(), *count))
    }

    /// Number of distinct stacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    /// Returns true if nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, u32)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut inventory = Self::new();
        for (id, qty) in iter {
            inventory.add(id.as_ref(), qty);
        }
        inventory
    }
}

/// On-disk shapes an inventory may take.
///
/// Older saves stored one list entry per item instead of counts.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredInventory {
    Stacked(BTreeMap<String, i64>),
    Listed(Vec<String>),
}

impl<'de> Deserialize<'de> for Inventory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut inventory = Self::new();
        match StoredInventory::deserialize(deserializer)? {
            StoredInventory::Stacked(stacks) => {
                for (id, count) in stacks {
                    // Non-positive counts are dropped; oversized ones saturate.
                    if count > 0 {
                        let qty = u32::try_from(count).unwrap_or(u32::MAX);
                        inventory.add(&id, qty);
                    }
                }
            }
            StoredInventory::Listed(ids) => {
                for id in ids {
                    inventory.add(&id, 1);
                }
            }
        }
        Ok(inventory)
    }
}

//! Reward-table lookup for loot rewards.

use crate::error::{ConvertError, Result};
use crate::model::{LootReward, RewardTable, TableRef};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Read-only index over the reward tables loaded for a run.
///
/// When several tables share an order index or id, the first one loaded wins.
#[derive(Debug, Clone, Default)]
pub struct RewardTables<'a> {
    by_order: HashMap<i64, &'a RewardTable>,
    by_id: HashMap<&'a str, &'a RewardTable>,
}

impl<'a> RewardTables<'a> {
    pub fn new(tables: &'a [RewardTable]) -> Self {
        let mut by_order = HashMap::new();
        let mut by_id = HashMap::new();
        for table in tables {
            if let Some(order) = table.order_index {
                match by_order.entry(order) {
                    Entry::Vacant(e) => {
                        e.insert(table);
                    }
                    Entry::Occupied(e) => tracing::warn!(
                        "Reward table {} reuses order index {} of table {}, ordinal lookups keep {}",
                        table.id(),
                        order,
                        e.get().id(),
                        e.get().id()
                    ),
                }
            }
            match by_id.entry(table.id()) {
                Entry::Vacant(e) => {
                    e.insert(table);
                }
                Entry::Occupied(_) => {
                    tracing::warn!("Duplicate reward table id {}, keeping the first", table.id())
                }
            }
        }
        RewardTables { by_order, by_id }
    }

    pub fn lookup(&self, table: &TableRef) -> Option<&'a RewardTable> {
        match table {
            TableRef::Ordinal(n) => self.by_order.get(n).copied(),
            TableRef::Key(k) => self.by_id.get(k.as_str()).copied(),
        }
    }

    /// Resolve the table of `loot`.
    ///
    /// A loaded table matching the reference always wins; the inline
    /// `table_data` is only used when nothing matches.
    pub fn resolve<'r>(&self, reward_id: &str, loot: &'r LootReward) -> Result<&'r RewardTable>
    where
        'a: 'r,
    {
        if let Some(table) = self.lookup(&loot.table) {
            tracing::debug!("reward {} uses loaded table {}", reward_id, table.id());
            return Ok(table);
        }
        match loot.table_data.as_deref() {
            Some(inline) => {
                tracing::debug!(
                    "reward {} falls back to inline table data for {}",
                    reward_id,
                    loot.table
                );
                Ok(inline)
            }
            None => Err(ConvertError::UnresolvedRewardTable {
                reward: reward_id.to_string(),
            }),
        }
    }
}

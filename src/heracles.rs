//! Heracles quest records produced by the converter.
//!
//! Only the parts of the Heracles schema that the converter emits are modeled.
//! Absent optional fields are omitted from the serialized output.

use crate::model::ItemRef;
use indexmap::IndexMap;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeraclesQuest {
    pub settings: QuestSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
    pub tasks: IndexMap<String, HeraclesTask>,
    pub rewards: IndexMap<String, HeraclesReward>,
    pub display: QuestDisplay,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct QuestSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct QuestDisplay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<TextComponent>,
    pub groups: IndexMap<String, GroupPlacement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextComponent {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupPlacement {
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum HeraclesTask {
    #[serde(rename = "heracles:check")]
    Check { value: Uuid },
    #[serde(rename = "heracles:item")]
    Item {
        #[serde(skip_serializing_if = "Option::is_none")]
        amount: Option<i64>,
        item: String,
    },
    #[serde(rename = "heracles:advancement")]
    Advancement { advancements: Vec<String> },
    #[serde(rename = "heracles:biome")]
    Biome { biomes: String },
    #[serde(rename = "heracles:changed_dimension")]
    ChangedDimension { to: String },
    #[serde(rename = "heracles:kill_entity")]
    KillEntity { amount: i64, entity: EntityPredicate },
    #[serde(rename = "heracles:structure")]
    Structure { structures: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityPredicate {
    #[serde(rename = "type")]
    pub entity_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum HeraclesReward {
    #[serde(rename = "heracles:command")]
    Command { command: String },
    #[serde(rename = "heracles:item")]
    Item { item: ItemRef },
    #[serde(rename = "heracles:loottable")]
    LootTable { loot_table: String },
    #[serde(rename = "heracles:xp")]
    Xp { xptype: XpType, amount: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum XpType {
    Level,
    Points,
}

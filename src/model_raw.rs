// Raw models for deserializing FTB Quests documents as closely as possible.
// Nested task/reward/quest nodes are left as untyped values so the schema
// decoder can attach context to each one as it types them.

use crate::model::{ChapterInfo, QuestInfo, QuestObject, RewardTableInfo};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawChapter {
    #[serde(flatten)]
    pub info: ChapterInfo,
    #[serde(default)]
    pub quests: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawQuest {
    #[serde(flatten)]
    pub info: QuestInfo,
    #[serde(default)]
    pub tasks: Vec<Value>,
    #[serde(default)]
    pub rewards: Vec<Value>,
}

/// A task node with its tag still unparsed. `fields` holds the variant payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawTask {
    #[serde(rename = "type")]
    pub tag: String,
    #[serde(flatten)]
    pub object: QuestObject,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A reward node with its tag still unparsed. `weight` is only set inside reward tables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawReward {
    #[serde(rename = "type")]
    pub tag: String,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(flatten)]
    pub object: QuestObject,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRewardTable {
    #[serde(flatten)]
    pub info: RewardTableInfo,
    #[serde(default)]
    pub order_index: Option<i64>,
    #[serde(default)]
    pub rewards: Vec<Value>,
}

/// Table reference fields of a loot reward, before the exactly-one check.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawLootFields {
    #[serde(default)]
    pub table: Option<i64>,
    #[serde(default)]
    pub table_id: Option<String>,
    #[serde(default)]
    pub table_data: Option<Value>,
}

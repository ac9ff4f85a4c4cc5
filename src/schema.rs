use crate::error::{ConvertError, Result};
use crate::model::*;
use crate::model_raw::*;
use crate::tag::{RewardType, TaskType};
use crate::tree::{TreeParser, parse_buffer};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

fn decode<'a, T: Deserialize<'a>>(v: &'a Value, context: impl FnOnce() -> String) -> Result<T> {
    T::deserialize(v).map_err(|source| ConvertError::Decode {
        context: context(),
        source,
    })
}

fn decode_fields<T: DeserializeOwned>(fields: Map<String, Value>, context: &str) -> Result<T> {
    serde_json::from_value(Value::Object(fields)).map_err(|source| ConvertError::Decode {
        context: context.to_string(),
        source,
    })
}

pub fn decode_quest_file(v: &Value) -> Result<QuestFile> {
    decode(v, || "quest file".into())
}

pub fn decode_chapter_groups(v: &Value) -> Result<ChapterGroups> {
    decode(v, || "chapter groups".into())
}

pub fn decode_chapter(v: &Value) -> Result<Chapter> {
    let raw: RawChapter = decode(v, || "chapter".into())?;
    let context = format!("chapter '{}'", raw.info.object.id);
    let quests = raw
        .quests
        .iter()
        .enumerate()
        .map(|(i, q)| decode_quest(q, &format!("{context} quest #{i}")))
        .collect::<Result<Vec<_>>>()?;
    Ok(Chapter {
        info: raw.info,
        quests,
    })
}

pub fn decode_quest(v: &Value, context: &str) -> Result<Quest> {
    let raw: RawQuest = decode(v, || context.to_string())?;
    let context = format!("{context} ({})", raw.info.object.id);
    let tasks = raw
        .tasks
        .iter()
        .enumerate()
        .map(|(i, t)| decode_task(t, &format!("{context} task #{i}")))
        .collect::<Result<Vec<_>>>()?;
    let rewards = raw
        .rewards
        .iter()
        .enumerate()
        .map(|(i, r)| decode_reward(r, &format!("{context} reward #{i}")).map(|w| w.reward))
        .collect::<Result<Vec<_>>>()?;
    Ok(Quest {
        info: raw.info,
        tasks,
        rewards,
    })
}

pub fn decode_task(v: &Value, context: &str) -> Result<Task> {
    let raw: RawTask = decode(v, || context.to_string())?;
    let task_type = TaskType::from_tag(&raw.tag)?;
    let context = format!("{context} ({} {})", task_type, raw.object.id);
    let fields = raw.fields;
    let kind = match task_type {
        TaskType::Item => TaskKind::Item(decode_fields(fields, &context)?),
        TaskType::Checkmark => TaskKind::Checkmark,
        TaskType::Advancement => TaskKind::Advancement(decode_fields(fields, &context)?),
        TaskType::Biome => TaskKind::Biome(decode_fields(fields, &context)?),
        TaskType::Dimension => TaskKind::Dimension(decode_fields(fields, &context)?),
        TaskType::Energy => TaskKind::Energy(decode_fields(fields, &context)?),
        TaskType::Fluid => TaskKind::Fluid(decode_fields(fields, &context)?),
        TaskType::Kill => TaskKind::Kill(decode_fields(fields, &context)?),
        TaskType::Location => TaskKind::Location(decode_fields(fields, &context)?),
        TaskType::Observation => TaskKind::Observation(decode_fields(fields, &context)?),
        TaskType::Stage => TaskKind::Stage(decode_fields(fields, &context)?),
        TaskType::Stat => TaskKind::Stat(decode_fields(fields, &context)?),
        TaskType::Structure => TaskKind::Structure(decode_fields(fields, &context)?),
        TaskType::Xp => TaskKind::Xp(decode_fields(fields, &context)?),
        TaskType::Custom => TaskKind::Custom,
    };
    Ok(Task {
        object: raw.object,
        kind,
    })
}

pub fn decode_reward(v: &Value, context: &str) -> Result<WeightedReward> {
    let raw: RawReward = decode(v, || context.to_string())?;
    let reward_type = RewardType::from_tag(&raw.tag)?;
    let context = format!("{context} ({} {})", reward_type, raw.object.id);
    let fields = raw.fields;
    let kind = match reward_type {
        RewardType::Advancement => RewardKind::Advancement(decode_fields(fields, &context)?),
        RewardType::Choice => RewardKind::Choice,
        RewardType::Command => RewardKind::Command(decode_fields(fields, &context)?),
        RewardType::Item => RewardKind::Item(decode_fields(fields, &context)?),
        RewardType::Loot => RewardKind::Loot(decode_loot(fields, &context)?),
        RewardType::Stage => RewardKind::Stage(decode_fields(fields, &context)?),
        RewardType::Toast => RewardKind::Toast(decode_fields(fields, &context)?),
        RewardType::XpLevels => RewardKind::XpLevels(decode_fields(fields, &context)?),
        RewardType::Xp => RewardKind::Xp(decode_fields(fields, &context)?),
        RewardType::Custom => RewardKind::Custom,
    };
    Ok(WeightedReward {
        weight: raw.weight,
        reward: Reward {
            object: raw.object,
            kind,
        },
    })
}

fn decode_loot(fields: Map<String, Value>, context: &str) -> Result<LootReward> {
    let raw: RawLootFields = decode_fields(fields, context)?;
    let table = match (raw.table, raw.table_id) {
        (Some(ordinal), None) => TableRef::Ordinal(ordinal),
        (None, Some(key)) => TableRef::Key(key),
        (Some(_), Some(_)) => {
            return Err(ConvertError::InvalidFormat(format!(
                "{context}: loot reward has both table and table_id"
            )));
        }
        (None, None) => {
            return Err(ConvertError::InvalidFormat(format!(
                "{context}: loot reward has neither table nor table_id"
            )));
        }
    };
    let table_data = raw
        .table_data
        .as_ref()
        .map(|data| decode_table(data, None, &format!("{context} table_data")))
        .transpose()?
        .map(Box::new);
    Ok(LootReward { table, table_data })
}

/// Decode a reward table document.
///
/// The document's own `order_index` wins over `fallback_order_index`.
pub fn decode_reward_table(v: &Value, fallback_order_index: Option<i64>) -> Result<RewardTable> {
    decode_table(v, fallback_order_index, "reward table")
}

fn decode_table(v: &Value, fallback_order_index: Option<i64>, context: &str) -> Result<RewardTable> {
    let raw: RawRewardTable = decode(v, || context.to_string())?;
    let context = format!("{context} '{}'", raw.info.object.id);
    let rewards = raw
        .rewards
        .iter()
        .enumerate()
        .map(|(i, r)| decode_reward(r, &format!("{context} reward #{i}")))
        .collect::<Result<Vec<_>>>()?;
    Ok(RewardTable {
        info: raw.info,
        order_index: raw.order_index.or(fallback_order_index),
        rewards,
    })
}

/// Parse and decode every buffer of a run.
///
/// Reward tables without an `order_index` are numbered by their position in
/// `buffers.reward_tables`.
pub fn decode_quest_set<P: TreeParser + ?Sized>(
    buffers: &QuestBuffers,
    parser: &P,
) -> Result<QuestSet> {
    let file = decode_quest_file(&parse_buffer(parser, &buffers.file_data)?)?;
    let groups = decode_chapter_groups(&parse_buffer(parser, &buffers.chapter_groups)?)?;
    let chapters = buffers
        .chapters
        .iter()
        .map(|b| decode_chapter(&parse_buffer(parser, b)?))
        .collect::<Result<Vec<_>>>()?;
    let reward_tables = buffers
        .reward_tables
        .iter()
        .enumerate()
        .map(|(i, b)| decode_reward_table(&parse_buffer(parser, b)?, Some(i as i64)))
        .collect::<Result<Vec<_>>>()?;
    Ok(QuestSet {
        file,
        groups,
        chapters,
        reward_tables,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_task_variants() {
        let item = decode_task(
            &json!({"id": "1A", "type": "ftbquests:item", "item": {"id": "minecraft:apple", "Count": 2}, "count": 4}),
            "t",
        )
        .unwrap();
        assert_eq!(item.object.id, "1A");
        match item.kind {
            TaskKind::Item(t) => {
                assert_eq!(t.item.id(), "minecraft:apple");
                assert_eq!(t.count, Some(4));
            }
            other => panic!("unexpected {:?}", other),
        }

        let kill = decode_task(
            &json!({"id": "2B", "type": "kill", "entity": "minecraft:zombie", "value": "10L"}),
            "t",
        )
        .unwrap();
        assert_eq!(
            kill.kind,
            TaskKind::Kill(KillTask {
                entity: "minecraft:zombie".into(),
                value: Long(10),
            })
        );

        let obs = decode_task(
            &json!({"id": "3C", "type": "observation", "timer": 20, "observe_type": 5, "to_observe": "minecraft:cow"}),
            "t",
        )
        .unwrap();
        assert_eq!(obs.kind.task_type(), TaskType::Observation);
    }

    #[test]
    fn task_decode_errors_carry_context() {
        let err = decode_task(&json!({"id": "4D", "type": "biome"}), "chapter 'x' quest #0 task #2")
            .unwrap_err();
        match err {
            ConvertError::Decode { context, .. } => {
                assert!(context.starts_with("chapter 'x' quest #0 task #2"));
                assert!(context.contains("biome 4D"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn unknown_task_tag_is_fatal() {
        let err = decode_task(&json!({"id": "5E", "type": "ftbquests:block"}), "t").unwrap_err();
        assert!(matches!(err, ConvertError::UnrecognizedTag { kind: "task", .. }));
    }

    #[test]
    fn loot_reward_requires_exactly_one_reference() {
        let by_ordinal = decode_reward(&json!({"id": "A", "type": "loot", "table": 3}), "r").unwrap();
        match by_ordinal.reward.kind {
            RewardKind::Loot(l) => assert_eq!(l.table, TableRef::Ordinal(3)),
            other => panic!("unexpected {:?}", other),
        }
        let by_key = decode_reward(&json!({"id": "B", "type": "ftbquests:loot", "table_id": "7F00"}), "r")
            .unwrap();
        match by_key.reward.kind {
            RewardKind::Loot(l) => {
                assert_eq!(l.table, TableRef::Key("7F00".into()));
                assert!(l.table_data.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(decode_reward(&json!({"id": "C", "type": "loot"}), "r").is_err());
        assert!(decode_reward(&json!({"id": "D", "type": "loot", "table": 1, "table_id": "x"}), "r").is_err());
    }

    #[test]
    fn inline_table_data_is_decoded() {
        let w = decode_reward(
            &json!({
                "id": "E",
                "type": "loot",
                "table": 9,
                "table_data": {
                    "id": "inline",
                    "loot_table_id": "minecraft:chests/simple_dungeon",
                    "rewards": [{"id": "F", "type": "xp", "xp": 5, "weight": 2.5}]
                }
            }),
            "r",
        )
        .unwrap();
        let RewardKind::Loot(loot) = w.reward.kind else {
            panic!("expected loot");
        };
        let data = loot.table_data.expect("table_data");
        assert_eq!(data.id(), "inline");
        assert_eq!(data.order_index, None);
        assert_eq!(data.rewards.len(), 1);
        assert_eq!(data.rewards[0].weight, Some(2.5));
    }

    #[test]
    fn unknown_reward_inside_table_is_fatal() {
        let err = decode_reward_table(
            &json!({
                "id": "T3",
                "loot_table_id": "minecraft:chests/simple_dungeon",
                "rewards": [{"id": "R", "type": "ftbquests:gamestage", "stage": "s"}]
            }),
            Some(0),
        )
        .unwrap_err();
        match err {
            ConvertError::UnrecognizedTag { kind, tag } => {
                assert_eq!(kind, "reward");
                assert_eq!(tag, "ftbquests:gamestage");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn reward_table_order_index_fallback() {
        let t = decode_reward_table(&json!({"id": "T1", "rewards": []}), Some(4)).unwrap();
        assert_eq!(t.order_index, Some(4));
        let t = decode_reward_table(&json!({"id": "T2", "order_index": 1}), Some(4)).unwrap();
        assert_eq!(t.order_index, Some(1));
    }

    #[test]
    fn chapter_decode_keeps_quest_order() {
        let chapter = decode_chapter(&json!({
            "id": "C0",
            "title": "Intro",
            "group": "",
            "images": [{"x": 0, "y": 0, "width": 1, "height": 1, "image": "ftbquests:textures/x.png"}],
            "quests": [
                {"id": "01", "x": 0, "y": 0, "dependencies": [], "tasks": [{"id": "11", "type": "checkmark"}]},
                {"id": "02", "x": 1.5, "y": -2, "dependencies": ["01"], "hide": true}
            ]
        }))
        .unwrap();
        assert_eq!(chapter.info.images.len(), 1);
        let ids: Vec<&str> = chapter.quests.iter().map(|q| q.id()).collect();
        assert_eq!(ids, ["01", "02"]);
        assert_eq!(chapter.quests[1].info.x, 1.5);
        assert_eq!(
            chapter.quests[1].info.dependencies,
            Some(Dependencies::Resolved(vec!["01".into()]))
        );
        assert_eq!(chapter.quests[0].tasks[0].kind, TaskKind::Checkmark);
    }

    #[test]
    fn mismatched_shape_fails_fast() {
        let err = decode_chapter(&json!({"id": "C1", "quests": {"not": "a list"}})).unwrap_err();
        assert!(matches!(err, ConvertError::Decode { .. }));
    }
}

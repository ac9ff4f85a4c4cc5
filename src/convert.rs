use crate::error::{ConvertError, Result};
use crate::heracles::{EntityPredicate, HeraclesReward, HeraclesTask, XpType};
use crate::model::*;
use crate::options::ConvertOptions;
use crate::quest_id::LegacyQuestId;
use crate::resolve::RewardTables;
use serde_json::Map;

/// Convert one task. Every declared variant has an arm; the ones Heracles
/// conversion does not cover yet return [`ConvertError::UnsupportedTask`].
pub fn convert_task(task: &Task) -> Result<HeraclesTask> {
    match &task.kind {
        TaskKind::Checkmark => Ok(HeraclesTask::Check {
            value: LegacyQuestId::parse(&task.object.id)?.check_uuid(),
        }),
        TaskKind::Item(t) => Ok(HeraclesTask::Item {
            amount: t.count,
            item: t.item.id().to_string(),
        }),
        TaskKind::Advancement(t) => Ok(HeraclesTask::Advancement {
            advancements: vec![t.advancement.clone()],
        }),
        TaskKind::Biome(t) => Ok(HeraclesTask::Biome {
            biomes: t.biome.clone(),
        }),
        TaskKind::Dimension(t) => Ok(HeraclesTask::ChangedDimension {
            to: t.dimension.clone(),
        }),
        TaskKind::Kill(t) => Ok(HeraclesTask::KillEntity {
            amount: t.value.0,
            entity: EntityPredicate {
                entity_type: t.entity.clone(),
            },
        }),
        TaskKind::Structure(t) => Ok(HeraclesTask::Structure {
            structures: t.structure.clone(),
        }),
        TaskKind::Energy(_)
        | TaskKind::Fluid(_)
        | TaskKind::Location(_)
        | TaskKind::Observation(_)
        | TaskKind::Stage(_)
        | TaskKind::Stat(_)
        | TaskKind::Xp(_)
        | TaskKind::Custom => Err(ConvertError::UnsupportedTask {
            tag: task.kind.task_type().to_string(),
            id: task.object.id.clone(),
        }),
    }
}

/// Convert one reward, resolving loot tables against `tables`.
pub fn convert_reward(
    reward: &Reward,
    tables: &RewardTables<'_>,
    options: &ConvertOptions,
) -> Result<HeraclesReward> {
    match &reward.kind {
        RewardKind::Command(r) => Ok(HeraclesReward::Command {
            command: r.command.clone(),
        }),
        RewardKind::Item(r) => Ok(HeraclesReward::Item {
            item: reward_item(r),
        }),
        RewardKind::Loot(loot) => {
            let table = tables.resolve(&reward.object.id, loot)?;
            match &table.info.loot_table_id {
                Some(loot_table) => Ok(HeraclesReward::LootTable {
                    loot_table: loot_table.clone(),
                }),
                None => Err(ConvertError::UnsupportedRewardTable {
                    reward: reward.object.id.clone(),
                    table: table.id().to_string(),
                }),
            }
        }
        RewardKind::XpLevels(r) => Ok(HeraclesReward::Xp {
            xptype: XpType::Level,
            amount: r.xp_levels.unwrap_or(options.default_xp_levels),
        }),
        RewardKind::Xp(r) => Ok(HeraclesReward::Xp {
            xptype: XpType::Points,
            amount: r.xp.unwrap_or(options.default_xp_points),
        }),
        RewardKind::Advancement(_)
        | RewardKind::Choice
        | RewardKind::Stage(_)
        | RewardKind::Toast(_)
        | RewardKind::Custom => Err(ConvertError::UnsupportedReward {
            tag: reward.kind.reward_type().to_string(),
            id: reward.object.id.clone(),
        }),
    }
}

// A reward-level count overrides the stack count; FTB saves stacks with Count 1.
fn reward_item(r: &ItemReward) -> ItemRef {
    match (&r.item, r.count) {
        (ItemRef::Id(id), Some(count)) => ItemRef::Stack(ItemStack {
            id: id.clone(),
            count: Some(count),
            extra: Map::new(),
        }),
        (ItemRef::Stack(stack), Some(count)) => ItemRef::Stack(ItemStack {
            count: Some(count),
            ..stack.clone()
        }),
        (item, None) => item.clone(),
    }
}

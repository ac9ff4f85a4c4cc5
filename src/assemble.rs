use crate::convert::{convert_reward, convert_task};
use crate::error::Result;
use crate::heracles::*;
use crate::model::*;
use crate::options::ConvertOptions;
use crate::quest_id::legacy_dependency_hex;
use crate::resolve::RewardTables;
use crate::schema::decode_quest_set;
use crate::tree::TreeParser;
use indexmap::IndexMap;

/// Convert every quest of `set` into a Heracles quest keyed by its id.
///
/// This is strict: the first task or reward that cannot be converted aborts
/// the whole run, nothing is skipped.
pub fn assemble(set: &QuestSet, options: &ConvertOptions) -> Result<IndexMap<String, HeraclesQuest>> {
    let tables = RewardTables::new(&set.reward_tables);
    let mut output: IndexMap<String, HeraclesQuest> = IndexMap::new();

    for chapter in &set.chapters {
        let title = chapter.display_title();
        tracing::debug!(
            "Converting chapter {} ({} quests)",
            title,
            chapter.quests.len()
        );

        // Group membership is looked up but not folded into the output.
        if let Some(group_id) = chapter.group_id() {
            match set.groups.get(group_id) {
                Some(group) => tracing::debug!(
                    "Chapter {} belongs to group {} ({})",
                    title,
                    group.id,
                    group.title.as_deref().unwrap_or("untitled")
                ),
                None => tracing::warn!("Chapter {} references unknown group {}", title, group_id),
            }
        }

        for quest in &chapter.quests {
            let converted = convert_quest(quest, title, &tables, options)?;
            if output.insert(quest.id().to_string(), converted).is_some() {
                tracing::warn!("Duplicate quest id {}, keeping the last one", quest.id());
            }
        }
    }

    tracing::info!(
        "Converted {} quests from {} chapters",
        output.len(),
        set.chapters.len()
    );
    Ok(output)
}

/// Convert a single quest placed in the chapter titled `chapter_title`.
pub fn convert_quest(
    quest: &Quest,
    chapter_title: &str,
    tables: &RewardTables<'_>,
    options: &ConvertOptions,
) -> Result<HeraclesQuest> {
    let info = &quest.info;

    let dependencies: Option<Vec<String>> = info.dependencies.as_ref().map(|deps| match deps {
        Dependencies::Legacy(ids) => ids.iter().copied().map(legacy_dependency_hex).collect(),
        Dependencies::Resolved(ids) => ids.clone(),
    });

    let mut tasks = IndexMap::new();
    for task in &quest.tasks {
        tasks.insert(task.object.id.clone(), convert_task(task)?);
    }

    let mut rewards = IndexMap::new();
    for reward in &quest.rewards {
        rewards.insert(
            reward.object.id.clone(),
            convert_reward(reward, tables, options)?,
        );
    }

    let mut groups = IndexMap::new();
    groups.insert(
        chapter_title.to_string(),
        GroupPlacement {
            position: Position {
                x: info.x,
                y: info.y,
            },
        },
    );

    Ok(HeraclesQuest {
        settings: QuestSettings { hidden: info.hide },
        dependencies,
        tasks,
        rewards,
        display: QuestDisplay {
            title: info.object.title.clone(),
            description: info.description.clone(),
            subtitle: info
                .subtitle
                .as_ref()
                .map(|text| TextComponent { text: text.clone() }),
            groups,
        },
    })
}

/// Parse, decode and convert a full set of input buffers.
pub fn convert_ftb_quests<P: TreeParser + ?Sized>(
    buffers: &QuestBuffers,
    parser: &P,
    options: &ConvertOptions,
) -> Result<IndexMap<String, HeraclesQuest>> {
    let set = decode_quest_set(buffers, parser)?;
    tracing::debug!(
        "Decoded {} chapters, {} chapter groups and {} reward tables",
        set.chapters.len(),
        set.groups.chapter_groups.len(),
        set.reward_tables.len()
    );
    assemble(&set, options)
}

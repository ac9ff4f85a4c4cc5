//! Task and reward type tags.
//!
//! FTB Quests writes node types either bare (`checkmark`) or namespaced
//! (`ftbquests:checkmark`). The namespace is stripped once here, and the bare
//! tag is mapped into a closed set of kinds before anything dispatches on it.

use crate::error::{ConvertError, Result};
use std::fmt;

/// Namespace optionally prefixed to every FTB Quests type tag.
pub const FTB_NAMESPACE: &str = "ftbquests";

/// Strip a leading `ftbquests:` from `tag`, if present.
pub fn normalize_tag(tag: &str) -> &str {
    tag.strip_prefix(FTB_NAMESPACE)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(tag)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskType {
    Item,
    Checkmark,
    Advancement,
    Biome,
    Dimension,
    Energy,
    Fluid,
    Kill,
    Location,
    Observation,
    Stage,
    Stat,
    Structure,
    Xp,
    Custom,
}

impl TaskType {
    pub const ALL: [TaskType; 15] = [
        TaskType::Item,
        TaskType::Checkmark,
        TaskType::Advancement,
        TaskType::Biome,
        TaskType::Dimension,
        TaskType::Energy,
        TaskType::Fluid,
        TaskType::Kill,
        TaskType::Location,
        TaskType::Observation,
        TaskType::Stage,
        TaskType::Stat,
        TaskType::Structure,
        TaskType::Xp,
        TaskType::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskType::Item => "item",
            TaskType::Checkmark => "checkmark",
            TaskType::Advancement => "advancement",
            TaskType::Biome => "biome",
            TaskType::Dimension => "dimension",
            TaskType::Energy => "energy",
            TaskType::Fluid => "fluid",
            TaskType::Kill => "kill",
            TaskType::Location => "location",
            TaskType::Observation => "observation",
            TaskType::Stage => "stage",
            TaskType::Stat => "stat",
            TaskType::Structure => "structure",
            TaskType::Xp => "xp",
            TaskType::Custom => "custom",
        }
    }

    /// Resolve a raw, possibly namespaced, task tag.
    pub fn from_tag(tag: &str) -> Result<Self> {
        let bare = normalize_tag(tag);
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == bare)
            .ok_or_else(|| ConvertError::UnrecognizedTag {
                kind: "task",
                tag: tag.to_string(),
            })
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RewardType {
    Advancement,
    Choice,
    Command,
    Item,
    Loot,
    Stage,
    Toast,
    XpLevels,
    Xp,
    Custom,
}

impl RewardType {
    pub const ALL: [RewardType; 10] = [
        RewardType::Advancement,
        RewardType::Choice,
        RewardType::Command,
        RewardType::Item,
        RewardType::Loot,
        RewardType::Stage,
        RewardType::Toast,
        RewardType::XpLevels,
        RewardType::Xp,
        RewardType::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RewardType::Advancement => "advancement",
            RewardType::Choice => "choice",
            RewardType::Command => "command",
            RewardType::Item => "item",
            RewardType::Loot => "loot",
            RewardType::Stage => "stage",
            RewardType::Toast => "toast",
            RewardType::XpLevels => "xp_levels",
            RewardType::Xp => "xp",
            RewardType::Custom => "custom",
        }
    }

    /// Resolve a raw, possibly namespaced, reward tag.
    pub fn from_tag(tag: &str) -> Result<Self> {
        let bare = normalize_tag(tag);
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == bare)
            .ok_or_else(|| ConvertError::UnrecognizedTag {
                kind: "reward",
                tag: tag.to_string(),
            })
    }
}

impl fmt::Display for RewardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

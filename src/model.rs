use crate::tag::{RewardType, TaskType};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

pub type ResourceLocation = String;
/// A registry entry: either a resource location or a `#`-prefixed tag.
pub type RegistryValue = String;

/// Fields shared by every FTB Quests object (quests, tasks, rewards, chapters...).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuestObject {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub icon: Option<ItemRef>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub custom_id: Option<String>,
    #[serde(default)]
    pub disable_toast: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemRef {
    Id(ResourceLocation),
    Stack(ItemStack),
}

impl ItemRef {
    pub fn id(&self) -> &str {
        match self {
            ItemRef::Id(id) => id,
            ItemRef::Stack(stack) => &stack.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    pub id: ResourceLocation,
    #[serde(
        rename = "Count",
        alias = "count",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub count: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An SNBT long. Accepts integers and numeric strings such as `"10"` or `"10L"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LongRepr")]
pub struct Long(pub i64);

#[derive(Deserialize)]
#[serde(untagged)]
enum LongRepr {
    Int(i64),
    Text(String),
}

impl TryFrom<LongRepr> for Long {
    type Error = String;

    fn try_from(repr: LongRepr) -> Result<Self, Self::Error> {
        match repr {
            LongRepr::Int(n) => Ok(Long(n)),
            LongRepr::Text(s) => {
                let trimmed = s.trim();
                let digits = trimmed
                    .strip_suffix(['L', 'l'])
                    .unwrap_or(trimmed);
                digits
                    .parse::<i64>()
                    .map(Long)
                    .map_err(|_| format!("invalid long value `{s}`"))
            }
        }
    }
}

/// Quest node shape. Unknown shapes are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestShape {
    Circle,
    Square,
    Pentagon,
    Hexagon,
    Gear,
    Other(String),
}

impl From<String> for QuestShape {
    fn from(s: String) -> Self {
        match s.as_str() {
            "circle" => QuestShape::Circle,
            "square" => QuestShape::Square,
            "pentagon" => QuestShape::Pentagon,
            "hexagon" => QuestShape::Hexagon,
            "gear" => QuestShape::Gear,
            _ => QuestShape::Other(s),
        }
    }
}

impl From<QuestShape> for String {
    fn from(shape: QuestShape) -> Self {
        match shape {
            QuestShape::Circle => "circle".into(),
            QuestShape::Square => "square".into(),
            QuestShape::Pentagon => "pentagon".into(),
            QuestShape::Hexagon => "hexagon".into(),
            QuestShape::Gear => "gear".into(),
            QuestShape::Other(s) => s,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoclaimRewards {
    Default,
    Disabled,
    Enabled,
    NoToast,
    Invisible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyRequirement {
    AllCompleted,
    OneCompleted,
    AllStarted,
    OneStarted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntityWeight {
    pub passive: Option<i64>,
    pub monster: Option<i64>,
    pub boss: Option<i64>,
}

/// The global `data.snbt` document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuestFile {
    #[serde(flatten)]
    pub object: QuestObject,
    #[serde(default)]
    pub default_reward_team: bool,
    #[serde(default)]
    pub default_consume_items: bool,
    #[serde(default)]
    pub default_autoclaim_rewards: Option<AutoclaimRewards>,
    #[serde(default)]
    pub default_quest_shape: Option<QuestShape>,
    #[serde(default)]
    pub default_quest_disable_jei: bool,
    #[serde(default)]
    pub emergency_items: Vec<ItemStack>,
    #[serde(default)]
    pub emergency_items_cooldown: i64,
    #[serde(default)]
    pub drop_loot_crates: bool,
    #[serde(default)]
    pub loot_crate_no_drop: Option<EntityWeight>,
    #[serde(default)]
    pub disable_gui: Option<bool>,
    #[serde(default)]
    pub grid_scale: Option<f64>,
    #[serde(default)]
    pub pause_game: Option<bool>,
    #[serde(default)]
    pub lock_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChapterGroups {
    #[serde(default)]
    pub chapter_groups: Vec<QuestObject>,
}

impl ChapterGroups {
    pub fn get(&self, id: &str) -> Option<&QuestObject> {
        self.chapter_groups.iter().find(|g| g.id == id)
    }
}

/// Decorative chapter image. Decoded, never converted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterImage {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    pub image: String,
    #[serde(default)]
    pub hover: Vec<String>,
    #[serde(default)]
    pub click: Option<String>,
    #[serde(default)]
    pub dev: Option<bool>,
    #[serde(default)]
    pub corner: Option<bool>,
    #[serde(default)]
    pub dependency: Option<String>,
}

/// Chapter header: everything except the quest list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChapterInfo {
    #[serde(flatten)]
    pub object: QuestObject,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub order_index: Option<i64>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub subtitle: Vec<String>,
    #[serde(default)]
    pub always_invisible: Option<bool>,
    #[serde(default)]
    pub default_quest_shape: Option<QuestShape>,
    #[serde(default)]
    pub default_hide_dependency_lines: Option<bool>,
    #[serde(default)]
    pub images: Vec<ChapterImage>,
    #[serde(default)]
    pub quest_links: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    pub info: ChapterInfo,
    pub quests: Vec<Quest>,
}

impl Chapter {
    /// Key under which this chapter's quests are grouped in Heracles.
    ///
    /// Falls back to the filename, then the id, for chapters whose title lives
    /// in a lang file.
    pub fn display_title(&self) -> &str {
        self.info
            .object
            .title
            .as_deref()
            .or(self.info.filename.as_deref())
            .unwrap_or(&self.info.object.id)
    }

    /// Group id, treating the empty string FTB writes for "no group" as absent.
    pub fn group_id(&self) -> Option<&str> {
        self.info.group.as_deref().filter(|g| !g.is_empty())
    }
}

/// Quest prerequisites: legacy numeric ids, or hex strings already in target form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dependencies {
    Legacy(Vec<i64>),
    Resolved(Vec<String>),
}

/// Quest fields other than tasks and rewards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuestInfo {
    #[serde(flatten)]
    pub object: QuestObject,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub shape: Option<QuestShape>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<Vec<String>>,
    #[serde(default)]
    pub guide_page: Option<String>,
    #[serde(default)]
    pub hide_dependency_lines: Option<bool>,
    #[serde(default)]
    pub hide_dependent_lines: Option<bool>,
    #[serde(default)]
    pub min_required_dependencies: Option<i64>,
    #[serde(default)]
    pub dependencies: Option<Dependencies>,
    #[serde(default)]
    pub hide: Option<bool>,
    #[serde(default)]
    pub dependency_requirement: Option<DependencyRequirement>,
    #[serde(default)]
    pub hide_text_until_complete: Option<bool>,
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub optional: Option<bool>,
    #[serde(default)]
    pub min_width: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quest {
    pub info: QuestInfo,
    pub tasks: Vec<Task>,
    pub rewards: Vec<Reward>,
}

impl Quest {
    pub fn id(&self) -> &str {
        &self.info.object.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub object: QuestObject,
    pub kind: TaskKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskKind {
    Item(ItemTask),
    Checkmark,
    Advancement(AdvancementRef),
    Biome(BiomeTask),
    Dimension(DimensionTask),
    Energy(EnergyTask),
    Fluid(FluidTask),
    Kill(KillTask),
    Location(LocationTask),
    Observation(ObservationTask),
    Stage(StageTask),
    Stat(StatTask),
    Structure(StructureTask),
    Xp(XpTask),
    Custom,
}

impl TaskKind {
    pub fn task_type(&self) -> TaskType {
        match self {
            TaskKind::Item(_) => TaskType::Item,
            TaskKind::Checkmark => TaskType::Checkmark,
            TaskKind::Advancement(_) => TaskType::Advancement,
            TaskKind::Biome(_) => TaskType::Biome,
            TaskKind::Dimension(_) => TaskType::Dimension,
            TaskKind::Energy(_) => TaskType::Energy,
            TaskKind::Fluid(_) => TaskType::Fluid,
            TaskKind::Kill(_) => TaskType::Kill,
            TaskKind::Location(_) => TaskType::Location,
            TaskKind::Observation(_) => TaskType::Observation,
            TaskKind::Stage(_) => TaskType::Stage,
            TaskKind::Stat(_) => TaskType::Stat,
            TaskKind::Structure(_) => TaskType::Structure,
            TaskKind::Xp(_) => TaskType::Xp,
            TaskKind::Custom => TaskType::Custom,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemTask {
    pub item: ItemRef,
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default)]
    pub consume_items: Option<bool>,
    #[serde(default)]
    pub only_from_crafting: Option<bool>,
    #[serde(default)]
    pub match_nbt: Option<bool>,
    #[serde(default)]
    pub weak_nbt_match: Option<bool>,
    #[serde(default)]
    pub task_screen_only: Option<bool>,
}

/// Shared by the advancement task and the advancement reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancementRef {
    pub advancement: ResourceLocation,
    #[serde(default)]
    pub criterion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiomeTask {
    pub biome: RegistryValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionTask {
    pub dimension: ResourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyTask {
    pub value: Long,
    #[serde(default)]
    pub max_input: Option<Long>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluidTask {
    pub fluid: ResourceLocation,
    pub amount: Long,
    #[serde(default)]
    pub nbt: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KillTask {
    pub entity: ResourceLocation,
    pub value: Long,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationTask {
    pub dimension: ResourceLocation,
    #[serde(default)]
    pub ignore_dimension: Option<bool>,
    #[serde(default)]
    pub position: Option<[i64; 3]>,
    #[serde(default)]
    pub size: Option<[i64; 3]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ObserveType {
    Block,
    BlockTag,
    BlockState,
    BlockEntity,
    BlockEntityType,
    EntityType,
    EntityTypeTag,
}

impl TryFrom<u8> for ObserveType {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Ok(match n {
            0 => ObserveType::Block,
            1 => ObserveType::BlockTag,
            2 => ObserveType::BlockState,
            3 => ObserveType::BlockEntity,
            4 => ObserveType::BlockEntityType,
            5 => ObserveType::EntityType,
            6 => ObserveType::EntityTypeTag,
            other => return Err(format!("invalid observe_type {other}")),
        })
    }
}

impl From<ObserveType> for u8 {
    fn from(t: ObserveType) -> u8 {
        t as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationTask {
    pub timer: Long,
    pub observe_type: ObserveType,
    pub to_observe: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTask {
    pub stage: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTask {
    pub stat: ResourceLocation,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureTask {
    pub structure: RegistryValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpTask {
    pub value: Long,
    #[serde(default)]
    pub points: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reward {
    pub object: QuestObject,
    pub kind: RewardKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RewardKind {
    Advancement(AdvancementRef),
    Choice,
    Command(CommandReward),
    Item(ItemReward),
    Loot(LootReward),
    Stage(StageReward),
    Toast(ToastReward),
    XpLevels(XpLevelsReward),
    Xp(XpReward),
    Custom,
}

impl RewardKind {
    pub fn reward_type(&self) -> RewardType {
        match self {
            RewardKind::Advancement(_) => RewardType::Advancement,
            RewardKind::Choice => RewardType::Choice,
            RewardKind::Command(_) => RewardType::Command,
            RewardKind::Item(_) => RewardType::Item,
            RewardKind::Loot(_) => RewardType::Loot,
            RewardKind::Stage(_) => RewardType::Stage,
            RewardKind::Toast(_) => RewardType::Toast,
            RewardKind::XpLevels(_) => RewardType::XpLevels,
            RewardKind::Xp(_) => RewardType::Xp,
            RewardKind::Custom => RewardType::Custom,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandReward {
    pub command: String,
    #[serde(default)]
    pub player_command: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemReward {
    pub item: ItemRef,
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default)]
    pub random_bonus: Option<i64>,
    #[serde(default)]
    pub only_one: Option<bool>,
}

/// How a loot reward names its table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TableRef {
    Ordinal(i64),
    Key(String),
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableRef::Ordinal(n) => write!(f, "#{n}"),
            TableRef::Key(k) => f.write_str(k),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LootReward {
    pub table: TableRef,
    pub table_data: Option<Box<RewardTable>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageReward {
    pub stage: String,
    #[serde(default)]
    pub remove: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastReward {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpLevelsReward {
    #[serde(default)]
    pub xp_levels: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpReward {
    #[serde(default)]
    pub xp: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootCrate {
    pub string_id: String,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub color: i64,
    #[serde(default)]
    pub glow: Option<bool>,
    #[serde(default)]
    pub drops: Option<EntityWeight>,
}

/// Reward table header: everything except its rewards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RewardTableInfo {
    #[serde(flatten)]
    pub object: QuestObject,
    #[serde(default)]
    pub empty_weight: f64,
    #[serde(default)]
    pub loot_size: i64,
    #[serde(default)]
    pub hide_tooltip: Option<bool>,
    #[serde(default)]
    pub use_title: Option<bool>,
    #[serde(default)]
    pub loot_crate: Option<LootCrate>,
    #[serde(default)]
    pub loot_table_id: Option<ResourceLocation>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeightedReward {
    pub weight: Option<f64>,
    pub reward: Reward,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RewardTable {
    pub info: RewardTableInfo,
    /// Externally assigned position used by ordinal references.
    pub order_index: Option<i64>,
    pub rewards: Vec<WeightedReward>,
}

impl RewardTable {
    pub fn id(&self) -> &str {
        &self.info.object.id
    }
}

/// Raw input buffers for one conversion run.
#[derive(Debug, Clone, Default)]
pub struct QuestBuffers {
    pub file_data: Vec<u8>,
    pub chapter_groups: Vec<u8>,
    pub chapters: Vec<Vec<u8>>,
    pub reward_tables: Vec<Vec<u8>>,
}

/// Every decoded document of one conversion run.
#[derive(Debug, Clone, Default)]
pub struct QuestSet {
    pub file: QuestFile,
    pub groups: ChapterGroups,
    pub chapters: Vec<Chapter>,
    pub reward_tables: Vec<RewardTable>,
}

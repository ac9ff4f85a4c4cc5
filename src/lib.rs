//! FtbQuestTools: converts FTB Quests definitions into Heracles quests
//!
//! This crate takes FTB Quests documents (the quest file, chapter groups,
//! chapters and reward tables) as parsed trees and turns every quest into a
//! Heracles quest record. Task and reward types are matched with or without
//! their `ftbquests:` namespace, legacy numeric ids are rewritten into the
//! forms Heracles expects, and loot rewards are resolved against the loaded
//! reward tables. Anything the converter cannot express fails the whole run.
//!
//! Basic example (no-run):
//!
//! ```rust,no_run
//! use ftb_quest_tools::{ConvertOptions, JsonTreeParser, QuestBuffers, convert_ftb_quests};
//!
//! let buffers = QuestBuffers {
//!     file_data: std::fs::read("quests/data.json").unwrap(),
//!     chapter_groups: std::fs::read("quests/chapter_groups.json").unwrap(),
//!     chapters: vec![std::fs::read("quests/chapters/intro.json").unwrap()],
//!     reward_tables: vec![],
//! };
//! let quests = convert_ftb_quests(&buffers, &JsonTreeParser, &ConvertOptions::default()).unwrap();
//! println!("{}", serde_json::to_string_pretty(&quests).unwrap());
//! ```

pub mod assemble;
pub mod convert;
pub mod error;
pub mod heracles;
pub mod model;
pub mod model_raw;
pub mod options;
pub mod quest_id;
pub mod resolve;
pub mod schema;
pub mod tag;
pub mod tree;

pub use crate::assemble::{assemble, convert_ftb_quests, convert_quest};
pub use crate::error::*;
pub use crate::heracles::*;
pub use crate::model::*;
pub use crate::options::ConvertOptions;
pub use crate::resolve::RewardTables;
pub use crate::schema::{
    decode_chapter, decode_chapter_groups, decode_quest_file, decode_quest_set,
    decode_reward_table,
};
pub use crate::tree::{JsonTreeParser, TreeParser};

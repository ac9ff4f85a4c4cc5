use ftb_quest_tools::*;
use serde_json::{Value, json};

fn chapter(title: &str, group: &str, quests: Value) -> Chapter {
    decode_chapter(&json!({
        "id": format!("{title}-id"),
        "title": title,
        "group": group,
        "quests": quests,
    }))
    .unwrap()
}

fn make_set(chapters: Vec<Chapter>, reward_tables: Vec<Value>) -> QuestSet {
    QuestSet {
        file: QuestFile::default(),
        groups: decode_chapter_groups(&json!({
            "chapter_groups": [{"id": "G1", "title": "Group One"}]
        }))
        .unwrap(),
        chapters,
        reward_tables: reward_tables
            .iter()
            .enumerate()
            .map(|(i, v)| decode_reward_table(v, Some(i as i64)).unwrap())
            .collect(),
    }
}

fn run(set: &QuestSet) -> Result<indexmap::IndexMap<String, HeraclesQuest>> {
    assemble(set, &ConvertOptions::default())
}

#[test]
fn numeric_dependencies_become_uppercase_hex() {
    let set = make_set(
        vec![chapter(
            "C",
            "",
            json!([{"id": "Q1", "x": 0, "y": 0, "dependencies": [10, 4096, 0]}]),
        )],
        vec![],
    );
    let out = run(&set).unwrap();
    assert_eq!(
        out["Q1"].dependencies,
        Some(vec!["A".to_string(), "1000".to_string(), "0".to_string()])
    );
}

#[test]
fn string_dependencies_pass_through() {
    let deps = vec!["00aBc".to_string(), "7F".to_string()];
    let set = make_set(
        vec![chapter(
            "C",
            "",
            json!([{"id": "Q1", "x": 0, "y": 0, "dependencies": deps}]),
        )],
        vec![],
    );
    let out = run(&set).unwrap();
    assert_eq!(out["Q1"].dependencies, Some(deps));
}

#[test]
fn absent_fields_are_omitted() {
    let set = make_set(
        vec![chapter("C", "", json!([{"id": "Q1", "x": 1, "y": 2}]))],
        vec![],
    );
    let out = run(&set).unwrap();
    let v = serde_json::to_value(&out["Q1"]).unwrap();
    assert_eq!(
        v,
        json!({
            "settings": {},
            "tasks": {},
            "rewards": {},
            "display": {"groups": {"C": {"position": {"x": 1.0, "y": 2.0}}}}
        })
    );
}

#[test]
fn chapter_group_is_not_folded_into_output() {
    let set = make_set(
        vec![
            chapter("Known", "G1", json!([{"id": "Q1", "x": 0, "y": 0}])),
            chapter("Unknown", "missing", json!([{"id": "Q2", "x": 0, "y": 0}])),
        ],
        vec![],
    );
    let out = run(&set).unwrap();
    let groups: Vec<&str> = out["Q1"].display.groups.keys().map(|k| k.as_str()).collect();
    assert_eq!(groups, ["Known"]);
    let groups: Vec<&str> = out["Q2"].display.groups.keys().map(|k| k.as_str()).collect();
    assert_eq!(groups, ["Unknown"]);
}

#[test]
fn task_order_is_preserved() {
    let set = make_set(
        vec![chapter(
            "C",
            "",
            json!([{
                "id": "Q1", "x": 0, "y": 0,
                "tasks": [
                    {"id": "FF", "type": "checkmark"},
                    {"id": "01", "type": "dimension", "dimension": "minecraft:the_end"},
                    {"id": "80", "type": "biome", "biome": "minecraft:desert"}
                ]
            }]),
        )],
        vec![],
    );
    let out = run(&set).unwrap();
    let keys: Vec<&str> = out["Q1"].tasks.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, ["FF", "01", "80"]);
}

#[test]
fn duplicate_quest_ids_keep_last() {
    let set = make_set(
        vec![
            chapter("First", "", json!([{"id": "Q1", "title": "one", "x": 0, "y": 0}])),
            chapter("Second", "", json!([{"id": "Q1", "title": "two", "x": 0, "y": 0}])),
        ],
        vec![],
    );
    let out = run(&set).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out["Q1"].display.title.as_deref(), Some("two"));
}

#[test]
fn loaded_table_wins_over_inline_data() {
    let set = make_set(
        vec![chapter(
            "C",
            "",
            json!([{
                "id": "Q1", "x": 0, "y": 0,
                "rewards": [{
                    "id": "R1", "type": "loot", "table": 0,
                    "table_data": {"id": "inline", "loot_table_id": "minecraft:inline"}
                }]
            }]),
        )],
        vec![json!({"id": "T0", "loot_table_id": "minecraft:loaded"})],
    );
    let out = run(&set).unwrap();
    assert_eq!(
        out["Q1"].rewards["R1"],
        HeraclesReward::LootTable {
            loot_table: "minecraft:loaded".into()
        }
    );
}

#[test]
fn unresolved_loot_fails_the_run() {
    let set = make_set(
        vec![chapter(
            "C",
            "",
            json!([
                {"id": "Q0", "x": 0, "y": 0},
                {"id": "Q1", "x": 0, "y": 0, "rewards": [{"id": "R1", "type": "loot", "table": 5}]}
            ]),
        )],
        vec![json!({"id": "T0", "loot_table_id": "minecraft:loaded"})],
    );
    match run(&set) {
        Err(ConvertError::UnresolvedRewardTable { reward }) => assert_eq!(reward, "R1"),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn unimplemented_task_fails_the_run() {
    let set = make_set(
        vec![chapter(
            "C",
            "",
            json!([{"id": "Q1", "x": 0, "y": 0, "tasks": [{"id": "T1", "type": "ftbquests:stage", "stage": "s"}]}]),
        )],
        vec![],
    );
    assert!(matches!(
        run(&set),
        Err(ConvertError::UnsupportedTask { .. })
    ));
}

fn buffers_with_chapter(chapter: Value) -> QuestBuffers {
    QuestBuffers {
        file_data: br#"{"id": "0001"}"#.to_vec(),
        chapter_groups: br#"{"chapter_groups": []}"#.to_vec(),
        chapters: vec![serde_json::to_vec(&chapter).unwrap()],
        reward_tables: vec![],
    }
}

#[test]
fn block_task_fails_the_whole_run() {
    let buffers = buffers_with_chapter(json!({
        "id": "C1",
        "title": "Blocks",
        "quests": [{
            "id": "Q1", "x": 0, "y": 0,
            "tasks": [
                {"id": "T0", "type": "checkmark"},
                {"id": "T1", "type": "ftbquests:block", "block": "minecraft:stone"}
            ]
        }]
    }));
    let res = convert_ftb_quests(&buffers, &JsonTreeParser, &ConvertOptions::default());
    match res {
        Err(ConvertError::UnrecognizedTag { kind, tag }) => {
            assert_eq!(kind, "task");
            assert_eq!(tag, "ftbquests:block");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn invalid_buffer_fails_the_run() {
    let mut buffers = buffers_with_chapter(json!({"id": "C1", "title": "x"}));
    buffers.reward_tables.push(vec![0xff, 0xfe]);
    let res = convert_ftb_quests(&buffers, &JsonTreeParser, &ConvertOptions::default());
    assert!(matches!(res, Err(ConvertError::Utf8(_))));

    let mut buffers = buffers_with_chapter(json!({"id": "C1", "title": "x"}));
    buffers.chapters.push(b"{not json".to_vec());
    let res = convert_ftb_quests(&buffers, &JsonTreeParser, &ConvertOptions::default());
    assert!(matches!(res, Err(ConvertError::Json(_))));
}

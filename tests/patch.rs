use mechpatch::cards::FIELD_ORDER;
use mechpatch::run;

use serde_json::Value;

use std::{env, fs, panic, path::PathBuf};

#[macro_use]
extern crate macro_rules_attribute;

// 1. write a per-test input file
// 2. run the patcher
// 3. teardown, even when the body panics

fn input_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("mechpatch_{}_in.json", name))
}

fn output_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("mechpatch_{}_out.json", name))
}

fn write_input(name: &str, payload: &str) -> String {
    let path = input_path(name);
    fs::write(&path, payload).unwrap();
    path.display().to_string()
}

macro_rules! patch_test {(
    fn $fname:ident ()
    $body: block
) => {
    #[test]
    fn $fname () {
        fn __original_func__ ()
        $body

        let result = panic::catch_unwind(|| {
            __original_func__();
        });
        let _ = fs::remove_file(input_path(stringify!($fname)));
        let _ = fs::remove_file(output_path(stringify!($fname)));
        if let Err(e) = result {
            panic!("{:?}", e);
        }
    }
}}

#[macro_rules_attribute(patch_test)]
fn patches_collection() {
    let input = write_input(
        "patches_collection",
        r#"{
  "CORE_001": {
    "card_id": "CORE_001",
    "card_name": "Éclaireuse de Lune",
    "card_type": "minion",
    "cost": 2,
    "attack": 2,
    "health": 3,
    "mechanics": ["Taunt"],
    "effects": [
      {"type": "divine_shield"},
      {"type": "deal_damage", "amount": 2, "trigger": "battlecry"}
    ],
    "text": "Provocation.",
    "artist": "dropped by the projection"
  },
  "CORE_002": {
    "card_name": "Wisp",
    "effects": null
  }
}"#,
    );
    let output = output_path("patches_collection").display().to_string();

    let count = run(&input, &output).unwrap();
    assert_eq!(count, 2);

    let payload = fs::read_to_string(&output).unwrap();
    // non-ASCII stays literal
    assert!(payload.contains("Éclaireuse de Lune"));
    assert!(!payload.contains("\\u"));

    let doc: Value = serde_json::from_str(&payload).unwrap();
    let first = doc["CORE_001"].as_object().unwrap();

    // exactly the 16 fields, in order, extras gone
    let keys: Vec<&str> = first.keys().map(String::as_str).collect();
    assert_eq!(keys, FIELD_ORDER);

    assert_eq!(
        first["mechanics"],
        serde_json::json!(["Divine Shield", "Taunt"])
    );
    let effects = first["effects"].as_array().unwrap();
    assert_eq!(effects.len(), 1);
    assert_eq!(effects[0]["type"], "deal_damage");
    assert_eq!(first["set"], Value::Null);
    assert_eq!(first["rune_cost"], Value::Null);

    let second = doc["CORE_002"].as_object().unwrap();
    assert_eq!(second["mechanics"], serde_json::json!([]));
    assert_eq!(second["effects"], serde_json::json!([]));
    assert_eq!(second["card_id"], Value::Null);
}

#[macro_rules_attribute(patch_test)]
fn preserves_key_order() {
    let input = write_input(
        "preserves_key_order",
        r#"{"ZEBRA": {}, "alpha": {}, "Mid": {}}"#,
    );
    let output = output_path("preserves_key_order").display().to_string();

    run(&input, &output).unwrap();

    let doc: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let keys: Vec<&str> = doc.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["ZEBRA", "alpha", "Mid"]);
}

#[macro_rules_attribute(patch_test)]
fn malformed_document_leaves_output_alone() {
    let input = write_input("malformed_document_leaves_output_alone", "[1, 2]");
    let output = output_path("malformed_document_leaves_output_alone");
    fs::write(&output, "previous run").unwrap();

    let result = run(&input, &output.display().to_string());

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous run");
}

#[macro_rules_attribute(patch_test)]
fn bad_records_are_reported_together() {
    let input = write_input(
        "bad_records_are_reported_together",
        r#"{
  "A": 5,
  "B": {"mechanics": "not a list"},
  "C": {"card_name": "Fine"}
}"#,
    );
    let output = output_path("bad_records_are_reported_together");

    let errors = run(&input, &output.display().to_string()).unwrap_err();

    assert_eq!(errors.len(), 2);
    assert!(errors[0].starts_with("A: "));
    assert!(errors[1].starts_with("B: "));
    assert!(!output.exists());
}

#[macro_rules_attribute(patch_test)]
fn patched_output_is_a_fixed_point() {
    let input = write_input(
        "patched_output_is_a_fixed_point",
        r#"{
  "C1": {
    "card_id": "C1",
    "mechanics": ["Rush"],
    "effects": [
      {"type": "taunt"},
      {"type": "lifesteal", "keyword": "Lifesteal", "trigger": "battlecry"},
      {"type": "summon", "token": "WISP"}
    ]
  }
}"#,
    );
    let output = output_path("patched_output_is_a_fixed_point").display().to_string();

    run(&input, &output).unwrap();
    let once = fs::read_to_string(&output).unwrap();

    // rerun on the patched file, reusing the input slot so the wrapper
    // cleans it up
    let rerun = input_path("patched_output_is_a_fixed_point").display().to_string();
    run(&output, &rerun).unwrap();
    let twice = fs::read_to_string(&rerun).unwrap();

    assert_eq!(once, twice);
}

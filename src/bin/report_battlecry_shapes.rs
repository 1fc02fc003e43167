//! Groups battlecry-triggered effects by `type` and prints the distinct
//! field-key combinations seen for each, to spot shape drift in the dump.

use std::collections::{BTreeMap, BTreeSet};
use std::{env, process};

use itertools::Itertools;
use mechpatch::report::{field_shape, is_battlecry};
use serde_json::Value;

fn main() {
    let path = env::args().nth(1).unwrap_or_else(|| "cards.json".to_string());
    let cards = match mechpatch::load_cards(&path) {
        Ok(cards) => cards,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(65);
        }
    };

    let mut shapes: BTreeMap<String, BTreeSet<Vec<String>>> = BTreeMap::new();
    for card in cards.values() {
        let Some(effects) = card.get("effects").and_then(Value::as_array) else {
            continue;
        };
        for effect in effects {
            if !is_battlecry(effect) {
                continue;
            }
            let effect_type = effect
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("<missing>")
                .to_string();
            shapes.entry(effect_type).or_default().insert(field_shape(effect));
        }
    }

    println!("Battlecry effect types and field shapes:\n");
    for (effect_type, variants) in &shapes {
        println!("- {}", effect_type);
        for shape in variants {
            println!("    ({})", shape.iter().join(", "));
        }
    }
}

//! Lists every summon effect in the dump, one line per effect.

use std::{env, process};

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

    for (key, card) in &cards {
        let Some(effects) = card.get("effects").and_then(Value::as_array) else {
            continue;
        };
        for effect in effects {
            if effect.get("type").and_then(Value::as_str) == Some("summon") {
                let name = card.get("card_name").and_then(Value::as_str).unwrap_or("?");
                let card_id = card.get("card_id").and_then(Value::as_str).unwrap_or(key);
                println!("{} ({}) : {}", name, card_id, effect);
            }
        }
    }
}

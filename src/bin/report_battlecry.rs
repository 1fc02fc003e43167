//! Lists every effect that triggers on battlecry, whether the trigger sits
//! at the effect's top level or under the legacy `extra` sub-object.

use std::{env, process};

use mechpatch::report::is_battlecry;
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

    for (card_id, card) in &cards {
        let Some(effects) = card.get("effects").and_then(Value::as_array) else {
            continue;
        };
        for effect in effects {
            if is_battlecry(effect) {
                let name = card.get("card_name").and_then(Value::as_str).unwrap_or("?");
                println!("{} {} {}", card_id, name, effect);
            }
        }
    }
}

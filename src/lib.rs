use std::fs;

use itertools::{Either, Itertools};
use serde_json::Value;

pub mod cards;
pub mod keywords;
pub mod patch;
pub mod report;

use cards::Card;
use keywords::KeywordTable;
use patch::patch_card;

/// Reads the card collection at `input`, folds simple keyword effects into
/// each card's `mechanics` list, and writes the re-projected collection to
/// `output`. Returns the number of cards patched.
///
/// Every card is parsed before anything is patched or written, and all
/// conversion errors are reported together, so a bad dump never clobbers a
/// previous output file.
pub fn run(input: &str, output: &str) -> Result<usize, Vec<String>> {
    let raw_cards = load_cards(input).map_err(|e| vec![e])?;

    // split into parsed cards and conversion errors
    let (errors, cards): (Vec<String>, Vec<(String, Card)>) = raw_cards
        .into_iter()
        .partition_map(|(card_id, value)| match serde_json::from_value::<Card>(value) {
            Err(e) => Either::Left(format!("{}: {}", card_id, e)),
            Ok(card) => Either::Right((card_id, card)),
        });
    if !errors.is_empty() {
        return Err(errors);
    }

    let keywords = KeywordTable::standard();
    let mut patched = serde_json::Map::new();
    for (card_id, mut card) in cards {
        patch_card(&mut card, &keywords);
        let value = serde_json::to_value(card)
            .map_err(|e| vec![format!("{}: {}", card_id, e)])?;
        patched.insert(card_id, value);
    }

    let count = patched.len();
    // pretty-printed, non-ASCII left unescaped
    let payload = serde_json::to_string_pretty(&Value::Object(patched))
        .map_err(|e| vec![format!("error serializing patched cards: {}", e)])?;
    fs::write(output, payload).map_err(|e| vec![format!("Could not write {}: {}", output, e)])?;

    Ok(count)
}

/// Loads a collection file as the raw card-id to record mapping, preserving
/// key order. The report binaries use this too, so it stays untyped.
pub fn load_cards(path: &str) -> Result<serde_json::Map<String, Value>, String> {
    let raw = fs::read_to_string(path).map_err(|_| format!("Could not open {}", path))?;
    let doc: Value =
        serde_json::from_str(&raw).map_err(|e| format!("error parsing {}: {}", path, e))?;
    match doc {
        Value::Object(cards) => Ok(cards),
        _ => Err(format!("{}: top-level value must be an object of cards", path)),
    }
}

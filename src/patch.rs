use std::collections::BTreeSet;
use std::mem;

use serde_json::Value;

use crate::cards::{Card, Effect};
use crate::keywords::KeywordTable;

/// Folds simple keyword effects into the card's `mechanics` list.
///
/// Entries with an explicit `keyword` field are kept in `effects` (they may
/// carry behavior beyond the bare keyword) while their keyword is merged into
/// `mechanics`. Bare entries whose `type` matches the table are dropped once
/// their display name is recorded. Everything else passes through untouched.
/// `mechanics` comes out sorted and duplicate-free.
pub fn patch_card(card: &mut Card, keywords: &KeywordTable) {
    let mut mechanics: BTreeSet<String> = card.mechanics.drain(..).collect();

    let effects = mem::take(&mut card.effects);
    card.effects = effects
        .into_iter()
        .filter_map(|effect| classify(effect, keywords, &mut mechanics))
        .collect();

    card.mechanics = mechanics.into_iter().collect();
}

// Some(effect) keeps the entry, None drops it after contributing its keyword.
fn classify(
    effect: Effect,
    keywords: &KeywordTable,
    mechanics: &mut BTreeSet<String>,
) -> Option<Effect> {
    if let Some(keyword) = effect.get("keyword") {
        // the type lookup is only consulted when `keyword` is absent; a
        // non-string keyword contributes nothing but the entry still stays
        if let Some(name) = keyword.as_str() {
            mechanics.insert(name.to_string());
        }
        return Some(effect);
    }

    let canonical = effect
        .get("type")
        .and_then(Value::as_str)
        .and_then(|t| keywords.canonical(t));
    match canonical {
        Some(name) => {
            mechanics.insert(name.to_string());
            None
        }
        None => Some(effect),
    }
}

#[cfg(test)]
fn card_with_effects(effects: Value) -> Card {
    serde_json::from_value(serde_json::json!({
        "card_id": "TEST",
        "effects": effects,
    }))
    .unwrap()
}

#[test]
fn bare_keyword_effect_moves_to_mechanics() {
    let mut card = card_with_effects(serde_json::json!([
        {"type": "Taunt"},
        {"type": "deal_damage", "amount": 2},
    ]));

    patch_card(&mut card, &KeywordTable::standard());

    assert_eq!(card.mechanics, vec!["Taunt"]);
    assert_eq!(card.effects.len(), 1);
    assert_eq!(card.effects[0]["type"], "deal_damage");
    assert_eq!(card.effects[0]["amount"], 2);
}

#[test]
fn keyword_bearing_entry_survives() {
    let mut card = card_with_effects(serde_json::json!([
        {"type": "lifesteal", "keyword": "Lifesteal", "trigger": "battlecry"},
    ]));

    patch_card(&mut card, &KeywordTable::standard());

    assert_eq!(card.mechanics, vec!["Lifesteal"]);
    // retained unchanged, trigger and all
    assert_eq!(card.effects.len(), 1);
    assert_eq!(card.effects[0]["keyword"], "Lifesteal");
    assert_eq!(card.effects[0]["trigger"], "battlecry");
}

#[test]
fn mechanics_are_sorted_and_deduplicated() {
    let mut card: Card = serde_json::from_value(serde_json::json!({
        "card_id": "TEST",
        "mechanics": ["Taunt", "Rush"],
        "effects": [
            {"type": "windfury"},
            {"type": "taunt"},
            {"type": "charge", "keyword": "Charge"},
        ],
    }))
    .unwrap();

    patch_card(&mut card, &KeywordTable::standard());

    assert_eq!(card.mechanics, vec!["Charge", "Rush", "Taunt", "Windfury"]);
    assert_eq!(card.effects.len(), 1);
}

#[test]
fn patching_twice_changes_nothing() {
    let mut card = card_with_effects(serde_json::json!([
        {"type": "divine_shield"},
        {"type": "summon", "token": "WISP"},
        {"type": "rush", "keyword": "Rush"},
    ]));
    let table = KeywordTable::standard();

    patch_card(&mut card, &table);
    let once = card.clone();
    patch_card(&mut card, &table);

    assert_eq!(card, once);
}

#[test]
fn unrecognized_effect_shapes_pass_through() {
    let mut card = card_with_effects(serde_json::json!([
        {"amount": 3},
        {"type": 7},
        {"type": "buff", "keyword": 1},
    ]));

    patch_card(&mut card, &KeywordTable::standard());

    assert_eq!(card.mechanics, Vec::<String>::new());
    assert_eq!(card.effects.len(), 3);
}

#[test]
fn keyword_field_wins_over_type_lookup() {
    // both paths would match; only the keyword value may be contributed
    let mut card = card_with_effects(serde_json::json!([
        {"type": "taunt", "keyword": "Mega-Windfury"},
    ]));

    patch_card(&mut card, &KeywordTable::standard());

    assert_eq!(card.mechanics, vec!["Mega-Windfury"]);
    assert_eq!(card.effects.len(), 1);
}

#[test]
fn survivors_keep_their_relative_order() {
    let mut card = card_with_effects(serde_json::json!([
        {"type": "deal_damage", "amount": 1},
        {"type": "stealth"},
        {"type": "summon", "token": "WISP"},
        {"type": "reborn"},
        {"type": "draw", "amount": 2},
    ]));

    patch_card(&mut card, &KeywordTable::standard());

    let kept: Vec<_> = card
        .effects
        .iter()
        .map(|e| e["type"].as_str().unwrap())
        .collect();
    assert_eq!(kept, vec!["deal_damage", "summon", "draw"]);
    assert_eq!(card.mechanics, vec!["Reborn", "Stealth"]);
}

#[test]
fn alternate_table_drives_the_patch() {
    let table = KeywordTable::new([("frenzy", "Frenzy")]);
    let mut card = card_with_effects(serde_json::json!([
        {"type": "frenzy"},
        {"type": "taunt"},
    ]));

    patch_card(&mut card, &table);

    assert_eq!(card.mechanics, vec!["Frenzy"]);
    // taunt is not in this table, so it stays an effect
    assert_eq!(card.effects.len(), 1);
    assert_eq!(card.effects[0]["type"], "taunt");
}

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One effect entry on a card. Kept as a raw JSON object so effect-specific
/// fields (amounts, targets, `trigger`, `extra`, ...) survive verbatim.
pub type Effect = serde_json::Map<String, Value>;

/// Output field order; anything on an input record outside this list is
/// dropped on re-projection.
pub const FIELD_ORDER: [&str; 16] = [
    "card_id",
    "card_name",
    "card_class",
    "card_type",
    "cost",
    "set",
    "rarity",
    "collectible",
    "spell_school",
    "rune_cost",
    "attack",
    "health",
    "races",
    "mechanics",
    "effects",
    "text",
];

/// A card record. The patcher only interprets `mechanics` and `effects`;
/// every other field passes through as-is, defaulting to `null` when the
/// input record does not carry it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub card_id: Value,
    #[serde(default)]
    pub card_name: Value,
    #[serde(default)]
    pub card_class: Value,
    #[serde(default)]
    pub card_type: Value,
    #[serde(default)]
    pub cost: Value,
    #[serde(default)]
    pub set: Value,
    #[serde(default)]
    pub rarity: Value,
    #[serde(default)]
    pub collectible: Value,
    #[serde(default)]
    pub spell_school: Value,
    #[serde(default)]
    pub rune_cost: Value,
    #[serde(default)]
    pub attack: Value,
    #[serde(default)]
    pub health: Value,
    #[serde(default)]
    pub races: Value,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub mechanics: Vec<String>,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub effects: Vec<Effect>,
    #[serde(default)]
    pub text: Value,
}

// Some dumps carry an explicit `"effects": null` instead of omitting the key.
fn null_to_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[test]
fn null_effects_become_empty() {
    let card: Card = serde_json::from_value(serde_json::json!({
        "card_id": "X1",
        "effects": null,
    }))
    .unwrap();

    assert_eq!(card.mechanics, Vec::<String>::new());
    assert_eq!(card.effects, Vec::<Effect>::new());
    assert_eq!(card.attack, Value::Null);
}

#[test]
fn unknown_fields_are_dropped() {
    let card: Card = serde_json::from_value(serde_json::json!({
        "card_id": "X2",
        "artist": "someone",
    }))
    .unwrap();

    let projected = serde_json::to_value(&card).unwrap();
    assert!(projected.get("artist").is_none());
    assert_eq!(projected["card_id"], "X2");
}

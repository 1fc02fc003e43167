use serde_json::Value;

/// Trigger of an effect, reading the top-level `trigger` field first and
/// falling back to the legacy `extra.trigger` nesting. Empty strings count
/// as missing.
pub fn trigger(effect: &Value) -> Option<&str> {
    effect
        .get("trigger")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .or_else(|| {
            effect
                .get("extra")
                .and_then(Value::as_object)
                .and_then(|extra| extra.get("trigger"))
                .and_then(Value::as_str)
        })
}

pub fn is_battlecry(effect: &Value) -> bool {
    trigger(effect) == Some("battlecry")
}

/// Sorted field names of an effect object, for grouping by shape.
pub fn field_shape(effect: &Value) -> Vec<String> {
    let mut keys: Vec<String> = effect
        .as_object()
        .map(|fields| fields.keys().cloned().collect())
        .unwrap_or_default();
    keys.sort();
    keys
}

#[test]
fn trigger_falls_back_to_extra() {
    let top = serde_json::json!({"type": "deal_damage", "trigger": "battlecry"});
    let legacy = serde_json::json!({"type": "summon", "extra": {"trigger": "battlecry"}});
    let none = serde_json::json!({"type": "buff"});
    let empty = serde_json::json!({"type": "buff", "trigger": "", "extra": {"trigger": "deathrattle"}});

    assert!(is_battlecry(&top));
    assert!(is_battlecry(&legacy));
    assert!(!is_battlecry(&none));
    assert_eq!(trigger(&empty), Some("deathrattle"));
}

#[test]
fn shape_is_sorted_keys() {
    let effect = serde_json::json!({"type": "summon", "amount": 1, "token": "WISP"});

    assert_eq!(field_shape(&effect), vec!["amount", "token", "type"]);
}

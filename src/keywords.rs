use std::collections::HashMap;

/// Simple effect types recognized as keyword abilities, mapped to the
/// display form used in `mechanics`. Built once and passed into the patcher;
/// lookups never change it.
pub struct KeywordTable {
    entries: HashMap<String, String>,
}

impl KeywordTable {
    pub fn new<I, S>(pairs: I) -> KeywordTable
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        KeywordTable {
            entries: pairs
                .into_iter()
                .map(|(token, name)| (token.into(), name.into()))
                .collect(),
        }
    }

    /// The ten simple abilities folded into `mechanics`.
    pub fn standard() -> KeywordTable {
        KeywordTable::new([
            ("taunt", "Taunt"),
            ("rush", "Rush"),
            ("charge", "Charge"),
            ("divine_shield", "Divine Shield"),
            ("lifesteal", "Lifesteal"),
            ("poisonous", "Poisonous"),
            ("reborn", "Reborn"),
            ("stealth", "Stealth"),
            ("windfury", "Windfury"),
            ("megawindfury", "Mega-Windfury"),
        ])
    }

    /// Display name for an effect `type`, matched case-insensitively.
    pub fn canonical(&self, effect_type: &str) -> Option<&str> {
        self.entries
            .get(&effect_type.to_lowercase())
            .map(String::as_str)
    }
}

#[test]
fn lookup_ignores_case() {
    let table = KeywordTable::standard();

    assert_eq!(table.canonical("Taunt"), Some("Taunt"));
    assert_eq!(table.canonical("DIVINE_SHIELD"), Some("Divine Shield"));
    assert_eq!(table.canonical("megawindfury"), Some("Mega-Windfury"));
    assert_eq!(table.canonical("deal_damage"), None);
}

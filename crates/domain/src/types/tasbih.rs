//! Tasbih (dhikr counter) types

use serde::{Deserialize, Serialize};

/// A named counter with an advisory target.
///
/// Persisted as an array under the `tasbih_counters` slot (camelCase). The
/// target is not a ceiling; `count` may grow past it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tasbih {
    pub id: String,
    pub name: String,
    pub count: u32,
    pub target_count: u32,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub arabic_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub transliteration: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub translation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub category: Option<String>,
}

/// Built-in counters seeded on first run.
pub fn default_tasbihs() -> Vec<Tasbih> {
    vec![
        Tasbih {
            id: "1".into(),
            name: "Subhan Allah".into(),
            count: 0,
            target_count: 33,
            arabic_text: Some("سُبْحَانَ ٱللَّٰهِ".into()),
            transliteration: Some("Subhan Allah".into()),
            translation: Some("Glory be to Allah".into()),
            category: Some("daily".into()),
        },
        Tasbih {
            id: "2".into(),
            name: "Alhamdulillah".into(),
            count: 0,
            target_count: 33,
            arabic_text: Some("ٱلْحَمْدُ لِلَّٰهِ".into()),
            transliteration: Some("Alhamdulillah".into()),
            translation: Some("Praise be to Allah".into()),
            category: Some("daily".into()),
        },
        Tasbih {
            id: "3".into(),
            name: "Allahu Akbar".into(),
            count: 0,
            target_count: 34,
            arabic_text: Some("اللَّٰهُ أَكْبَرُ".into()),
            transliteration: Some("Allahu Akbar".into()),
            translation: Some("Allah is the Greatest".into()),
            category: Some("daily".into()),
        },
    ]
}

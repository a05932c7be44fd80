//! Bilingual (EN/ZH) heading table for the study's narrative sections.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Zh,
}

impl Lang {
    pub fn from_code(code: &str) -> Option<Lang> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Lang::En),
            "zh" => Some(Lang::Zh),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Zh => "zh",
        }
    }
}

/// EN heading -> ZH translation.
pub const HEADING_TRANSLATIONS: &[(&str, &str)] = &[
    // Main sections
    ("Abstract", "摘要"),
    ("Introduction", "引言"),
    ("Methodology", "研究方法"),
    ("Case Study", "案例研究"),
    ("Results and Analysis", "結果與分析"),
    ("Discussion", "討論"),
    ("Conclusion", "結論"),
    ("References", "參考文獻"),
    // Subsections
    ("Research Context", "研究背景"),
    ("Historical Precedent", "歷史先例"),
    ("Research Objectives", "研究目標"),
    ("Game Context", "對局背景"),
    ("Interactive Chess Board", "互動式棋盤"),
    ("Game Phases Analysis", "對局階段分析"),
    ("Quantitative Findings", "量化發現"),
    ("Narrative Themes Translation", "敘事主題轉譯"),
    ("System Validation", "系統驗證"),
    ("Limitations and Future Work", "限制與未來研究"),
    // Common terms
    ("Figure", "圖"),
    ("Table", "表"),
    ("Phase", "階段"),
    ("Musical Translation", "音樂轉譯"),
    ("Musical Evidence", "音樂證據"),
];

/// Translate a heading. Unknown keys fall back to the English text.
pub fn translate(lang: Lang, key: &str) -> &str {
    match lang {
        Lang::En => key,
        Lang::Zh => HEADING_TRANSLATIONS
            .iter()
            .find(|(en, _)| *en == key)
            .map(|(_, zh)| *zh)
            .unwrap_or(key),
    }
}

/// The full heading table for one language, keyed by the English heading.
pub fn table(lang: Lang) -> BTreeMap<&'static str, &'static str> {
    HEADING_TRANSLATIONS
        .iter()
        .map(|(en, zh)| match lang {
            Lang::En => (*en, *en),
            Lang::Zh => (*en, *zh),
        })
        .collect()
}

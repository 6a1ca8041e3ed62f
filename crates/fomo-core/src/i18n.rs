//! Site language and localized field selection.
//!
//! Content records carry `_en` / `_ru` field pairs. The active language is
//! passed explicitly to whoever renders them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    pub const SUPPORTED: [Language; 2] = [Language::En, Language::Ru];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    /// Picks the localized variant, falling back to English when the Russian one is blank.
    pub fn pick<'a>(&self, en: &'a str, ru: &'a str) -> &'a str {
        match self {
            Language::Ru if !ru.trim().is_empty() => ru,
            _ => en,
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_falls_back_to_english() {
        assert_eq!(Language::Ru.pick("Team", "Команда"), "Команда");
        assert_eq!(Language::Ru.pick("Team", ""), "Team");
        assert_eq!(Language::En.pick("Team", "Команда"), "Team");
    }

    #[test]
    fn parse_language_codes() {
        assert_eq!("RU".parse::<Language>().unwrap(), Language::Ru);
        assert!("de".parse::<Language>().is_err());
    }
}

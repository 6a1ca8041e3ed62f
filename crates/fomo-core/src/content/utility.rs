//! Utilities section: flip cards, their navigation buttons and the section header.

use serde::{Deserialize, Serialize};

use super::settings::LocalizedStat;
use super::{
    require, CollectionResource, ContentValidationError, ReorderEndpoint, SettingsDocument,
    Validate,
};
use crate::i18n::Language;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UtilityFeature {
    pub en: String,
    pub ru: String,
}

impl UtilityFeature {
    pub fn text(&self, lang: Language) -> &str {
        lang.pick(&self.en, &self.ru)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utility {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// `chart`, `arena`, `exchange`, `lightning`, `users` or `custom`.
    #[serde(default = "default_icon_type")]
    pub icon_type: String,
    #[serde(default)]
    pub custom_icon_url: Option<String>,
    #[serde(default)]
    pub short_description_en: String,
    #[serde(default)]
    pub short_description_ru: String,
    #[serde(default)]
    pub full_description_en: String,
    #[serde(default)]
    pub full_description_ru: String,
    #[serde(default)]
    pub features: Vec<UtilityFeature>,
    #[serde(default)]
    pub stats: Vec<LocalizedStat>,
    #[serde(default)]
    pub gradient: String,
    #[serde(default)]
    pub bg_gradient: String,
    #[serde(default)]
    pub button_gradient: String,
    #[serde(default)]
    pub button_text_en: String,
    #[serde(default)]
    pub button_text_ru: String,
    #[serde(default)]
    pub button_link: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default = "active")]
    pub is_active: bool,
}

fn default_icon_type() -> String {
    "chart".to_string()
}

fn active() -> bool {
    true
}

impl Utility {
    pub fn short_description(&self, lang: Language) -> &str {
        lang.pick(&self.short_description_en, &self.short_description_ru)
    }

    pub fn full_description(&self, lang: Language) -> &str {
        lang.pick(&self.full_description_en, &self.full_description_ru)
    }

    pub fn button_text(&self, lang: Language) -> &str {
        lang.pick(&self.button_text_en, &self.button_text_ru)
    }

    /// Icon to render: the uploaded one only for the `custom` type.
    pub fn custom_icon(&self) -> Option<&str> {
        match (self.icon_type.as_str(), self.custom_icon_url.as_deref()) {
            ("custom", Some(url)) if !url.trim().is_empty() => Some(url),
            _ => None,
        }
    }
}

/// Unset styling fields take the backend defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UtilityDraft {
    pub title: String,
    pub subtitle: String,
    pub short_description_en: String,
    pub short_description_ru: String,
    pub full_description_en: String,
    pub full_description_ru: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_icon_url: Option<String>,
    #[serde(default)]
    pub features: Vec<UtilityFeature>,
    #[serde(default)]
    pub stats: Vec<LocalizedStat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_gradient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_gradient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_link: Option<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UtilityPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_description_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_description_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<UtilityFeature>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<LocalizedStat>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_gradient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_gradient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Validate for UtilityDraft {
    fn validate(&self) -> Result<(), ContentValidationError> {
        require("title", &self.title)?;
        require("subtitle", &self.subtitle)?;
        require("short_description_en", &self.short_description_en)?;
        require("full_description_en", &self.full_description_en)?;
        if self.icon_type.as_deref() == Some("custom") {
            require(
                "custom_icon_url",
                self.custom_icon_url.as_deref().unwrap_or_default(),
            )?;
        }
        Ok(())
    }
}

impl CollectionResource for Utility {
    type Draft = UtilityDraft;
    type Patch = UtilityPatch;

    const NAME: &'static str = "utility";
    const PATH: &'static str = "/utilities";
    const REORDER: ReorderEndpoint = ReorderEndpoint::Put;

    fn id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> i64 {
        self.order
    }
}

/// Link button shown above the utility cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilityNavButton {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilityNavButtonDraft {
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UtilityNavButtonPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl Validate for UtilityNavButtonDraft {
    fn validate(&self) -> Result<(), ContentValidationError> {
        require("label", &self.label)?;
        require("url", &self.url)
    }
}

impl CollectionResource for UtilityNavButton {
    type Draft = UtilityNavButtonDraft;
    type Patch = UtilityNavButtonPatch;

    const NAME: &'static str = "utility nav button";
    const PATH: &'static str = "/utility-nav-buttons";
    const REORDER: ReorderEndpoint = ReorderEndpoint::Unsupported;
    const ECHOES_WRITES: bool = false;

    fn id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> i64 {
        self.order
    }
}

/// Header texts of the utilities section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UtilitiesSettings {
    pub badge_en: String,
    pub badge_ru: String,
    pub title_en: String,
    pub title_ru: String,
    pub title_highlight_en: String,
    pub title_highlight_ru: String,
    pub subtitle_en: String,
    pub subtitle_ru: String,
    pub click_hint_en: String,
    pub click_hint_ru: String,
    pub click_back_hint_en: String,
    pub click_back_hint_ru: String,
    pub features_title_en: String,
    pub features_title_ru: String,
    pub details_label_en: String,
    pub details_label_ru: String,
}

impl UtilitiesSettings {
    /// Title and its highlighted tail, joined with a space.
    pub fn heading(&self, lang: Language) -> String {
        let title = lang.pick(&self.title_en, &self.title_ru);
        let highlight = lang.pick(&self.title_highlight_en, &self.title_highlight_ru);
        match (title.trim().is_empty(), highlight.trim().is_empty()) {
            (_, true) => title.to_string(),
            (true, false) => highlight.to_string(),
            (false, false) => format!("{title} {highlight}"),
        }
    }
}

impl SettingsDocument for UtilitiesSettings {
    const NAME: &'static str = "utilities settings";
    const PATH: &'static str = "/utilities-settings";
}

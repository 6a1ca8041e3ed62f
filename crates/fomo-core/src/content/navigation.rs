//! Header navigation links and the hero call-to-action buttons.

use serde::{Deserialize, Serialize};

use super::{require, CollectionResource, ContentValidationError, ReorderEndpoint, Validate};
use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    #[default]
    Primary,
    Secondary,
    Outline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroButton {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub style: ButtonStyle,
    #[serde(default)]
    pub order: i64,
    #[serde(default = "active")]
    pub is_active: bool,
}

fn active() -> bool {
    true
}

/// The hero shows at most this many buttons.
pub const MAX_HERO_BUTTONS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroButtonDraft {
    pub label: String,
    pub url: String,
    pub style: ButtonStyle,
    pub order: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeroButtonPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ButtonStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Validate for HeroButtonDraft {
    fn validate(&self) -> Result<(), ContentValidationError> {
        require("label", &self.label)?;
        require("url", &self.url)
    }
}

impl CollectionResource for HeroButton {
    type Draft = HeroButtonDraft;
    type Patch = HeroButtonPatch;

    const NAME: &'static str = "hero button";
    const PATH: &'static str = "/hero-buttons";
    const REORDER: ReorderEndpoint = ReorderEndpoint::Unsupported;

    fn id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> i64 {
        self.order
    }
}

/// Active buttons in display order, capped at [`MAX_HERO_BUTTONS`].
pub fn visible_hero_buttons(buttons: &[HeroButton]) -> Vec<&HeroButton> {
    let mut visible: Vec<&HeroButton> = buttons.iter().filter(|b| b.is_active).collect();
    visible.sort_by_key(|b| b.order);
    visible.truncate(MAX_HERO_BUTTONS);
    visible
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub id: String,
    /// Stable key the frontend uses to scroll to a section, e.g. `roadmap`.
    pub key: String,
    pub label_en: String,
    #[serde(default)]
    pub label_ru: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default = "active")]
    pub is_active: bool,
}

impl NavigationItem {
    pub fn label(&self, lang: Language) -> &str {
        lang.pick(&self.label_en, &self.label_ru)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItemDraft {
    pub key: String,
    pub label_en: String,
    pub label_ru: String,
    pub href: String,
    pub order: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Validate for NavigationItemDraft {
    fn validate(&self) -> Result<(), ContentValidationError> {
        require("key", &self.key)?;
        require("label_en", &self.label_en)?;
        require("label_ru", &self.label_ru)?;
        require("href", &self.href)
    }
}

impl CollectionResource for NavigationItem {
    type Draft = NavigationItemDraft;
    type Patch = NavigationItemPatch;

    const NAME: &'static str = "navigation item";
    const PATH: &'static str = "/navigation-items";
    const REORDER: ReorderEndpoint = ReorderEndpoint::Unsupported;

    fn id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> i64 {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(id: &str, order: i64, is_active: bool) -> HeroButton {
        HeroButton {
            id: id.into(),
            label: id.into(),
            url: "https://example.com".into(),
            style: ButtonStyle::Primary,
            order,
            is_active,
        }
    }

    #[test]
    fn hero_shows_two_active_buttons_in_order() {
        let buttons = vec![
            button("nft", 2, true),
            button("hidden", 0, false),
            button("explore", 1, true),
            button("extra", 3, true),
        ];

        let ids: Vec<&str> = visible_hero_buttons(&buttons)
            .into_iter()
            .map(|b| b.id.as_str())
            .collect();

        assert_eq!(ids, vec!["explore", "nft"]);
    }

    #[test]
    fn unknown_fields_and_missing_style_decode() {
        let button: HeroButton = serde_json::from_str(
            r#"{"id": "1", "label": "Buy NFT", "url": "/nft", "created_at": "2025-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(button.style, ButtonStyle::Primary);
        assert!(button.is_active);
    }

    #[test]
    fn navigation_draft_requires_both_labels() {
        let draft = NavigationItemDraft {
            key: "roadmap".into(),
            label_en: "Roadmap".into(),
            label_ru: String::new(),
            href: "#roadmap".into(),
            order: 3,
            is_active: true,
        };
        assert_eq!(
            draft.validate(),
            Err(ContentValidationError::MissingField { field: "label_ru" })
        );
    }
}

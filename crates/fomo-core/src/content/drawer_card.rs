use serde::{Deserialize, Serialize};

use super::{require, CollectionResource, ContentValidationError, ReorderEndpoint, Validate};
use crate::i18n::Language;

/// Card in the product drawer ("My Products").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawerCard {
    pub id: String,
    pub title_en: String,
    #[serde(default)]
    pub title_ru: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub order: i64,
}

impl DrawerCard {
    pub fn title(&self, lang: Language) -> &str {
        lang.pick(&self.title_en, &self.title_ru)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawerCardDraft {
    pub title_en: String,
    pub title_ru: String,
    pub link: String,
    pub image_url: String,
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DrawerCardPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl Validate for DrawerCardDraft {
    fn validate(&self) -> Result<(), ContentValidationError> {
        require("title_en", &self.title_en)?;
        require("title_ru", &self.title_ru)?;
        require("link", &self.link)?;
        require("image_url", &self.image_url)
    }
}

impl CollectionResource for DrawerCard {
    type Draft = DrawerCardDraft;
    type Patch = DrawerCardPatch;

    const NAME: &'static str = "drawer card";
    const PATH: &'static str = "/drawer-cards";
    const REORDER: ReorderEndpoint = ReorderEndpoint::Post;

    fn id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> i64 {
        self.order
    }
}

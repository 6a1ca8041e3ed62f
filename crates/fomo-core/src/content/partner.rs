use serde::{Deserialize, Serialize};

use super::{require, CollectionResource, ContentValidationError, ReorderEndpoint, Validate};
use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerCategory {
    #[default]
    Partners,
    Media,
    Portfolio,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub id: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub name_ru: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default)]
    pub description_ru: String,
    #[serde(default)]
    pub image_url: String,
    /// Colored logo shown on hover.
    #[serde(default)]
    pub image_url_hover: Option<String>,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub category: PartnerCategory,
    #[serde(default)]
    pub order: i64,
}

impl Partner {
    pub fn name(&self, lang: Language) -> &str {
        lang.pick(&self.name_en, &self.name_ru)
    }

    pub fn description(&self, lang: Language) -> &str {
        lang.pick(&self.description_en, &self.description_ru)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerDraft {
    pub name_en: String,
    pub name_ru: String,
    pub description_en: String,
    pub description_ru: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url_hover: Option<String>,
    pub link: String,
    pub category: PartnerCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartnerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url_hover: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<PartnerCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl Validate for PartnerDraft {
    fn validate(&self) -> Result<(), ContentValidationError> {
        require("name_en", &self.name_en)?;
        require("link", &self.link)?;
        require("image_url", &self.image_url)
    }
}

impl CollectionResource for Partner {
    type Draft = PartnerDraft;
    type Patch = PartnerPatch;

    const NAME: &'static str = "partner";
    const PATH: &'static str = "/partners";
    const REORDER: ReorderEndpoint = ReorderEndpoint::Post;

    fn id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> i64 {
        self.order
    }
}

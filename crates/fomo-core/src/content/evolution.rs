//! FOMO score evolution: rank levels and unlockable badges, both shown as flip cards.

use serde::{Deserialize, Serialize};

use super::{require, CollectionResource, ContentValidationError, ReorderEndpoint, Validate};
use crate::i18n::Language;

/// Flip card animation shared by levels and badges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardAnimation {
    pub animation_type: String,
    /// `slow`, `normal` or `fast`.
    pub animation_speed: String,
    /// `subtle`, `normal` or `intense`.
    pub animation_intensity: String,
    pub gradient_from: String,
    pub gradient_to: String,
}

impl Default for CardAnimation {
    fn default() -> Self {
        Self {
            animation_type: "stellar".to_string(),
            animation_speed: "normal".to_string(),
            animation_intensity: "normal".to_string(),
            gradient_from: "#64748b".to_string(),
            gradient_to: "#475569".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionLevel {
    pub id: String,
    pub rank_en: String,
    #[serde(default)]
    pub rank_ru: String,
    #[serde(default)]
    pub fomo_score_min: i64,
    #[serde(default)]
    pub fomo_score_max: i64,
    #[serde(default)]
    pub next_level_en: String,
    #[serde(default)]
    pub next_level_ru: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default)]
    pub description_ru: String,
    #[serde(default)]
    pub back_title_en: String,
    #[serde(default)]
    pub back_title_ru: String,
    #[serde(default)]
    pub back_description_en: String,
    #[serde(default)]
    pub back_description_ru: String,
    #[serde(flatten)]
    pub animation: CardAnimation,
    #[serde(default)]
    pub order: i64,
}

impl EvolutionLevel {
    pub fn rank(&self, lang: Language) -> &str {
        lang.pick(&self.rank_en, &self.rank_ru)
    }

    pub fn description(&self, lang: Language) -> &str {
        lang.pick(&self.description_en, &self.description_ru)
    }

    /// Inclusive on both ends.
    pub fn contains_score(&self, score: i64) -> bool {
        (self.fomo_score_min..=self.fomo_score_max).contains(&score)
    }
}

/// First level, in display order, whose range holds `score`.
pub fn level_for_score(levels: &[EvolutionLevel], score: i64) -> Option<&EvolutionLevel> {
    levels.iter().find(|level| level.contains_score(score))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionLevelDraft {
    pub rank_en: String,
    pub rank_ru: String,
    pub fomo_score_min: i64,
    pub fomo_score_max: i64,
    pub next_level_en: String,
    pub next_level_ru: String,
    pub description_en: String,
    pub description_ru: String,
    pub back_title_en: String,
    pub back_title_ru: String,
    pub back_description_en: String,
    pub back_description_ru: String,
    #[serde(flatten)]
    pub animation: CardAnimation,
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EvolutionLevelPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fomo_score_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fomo_score_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_level_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_level_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_title_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_title_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_description_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_description_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_speed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_intensity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl Validate for EvolutionLevelDraft {
    fn validate(&self) -> Result<(), ContentValidationError> {
        require("rank_en", &self.rank_en)?;
        require("next_level_en", &self.next_level_en)?;
        require("description_en", &self.description_en)?;
        if self.fomo_score_min > self.fomo_score_max {
            return Err(ContentValidationError::Invalid {
                field: "fomo_score_max",
                reason: format!(
                    "{} is below the minimum {}",
                    self.fomo_score_max, self.fomo_score_min
                ),
            });
        }
        Ok(())
    }
}

impl CollectionResource for EvolutionLevel {
    type Draft = EvolutionLevelDraft;
    type Patch = EvolutionLevelPatch;

    const NAME: &'static str = "evolution level";
    const PATH: &'static str = "/evolution-levels";
    const REORDER: ReorderEndpoint = ReorderEndpoint::Unsupported;

    fn id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> i64 {
        self.order
    }
}

/// Older badges carry unlocalized `name`/`condition`/`description`; they are
/// used when the localized pair is blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionBadge {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub name_ru: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub xp_requirement: i64,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub condition_en: String,
    #[serde(default)]
    pub condition_ru: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default)]
    pub description_ru: String,
    #[serde(default)]
    pub back_title_en: String,
    #[serde(default)]
    pub back_title_ru: String,
    #[serde(default)]
    pub back_description_en: String,
    #[serde(default)]
    pub back_description_ru: String,
    #[serde(flatten)]
    pub animation: CardAnimation,
    #[serde(default)]
    pub order: i64,
}

fn localized_or<'a>(lang: Language, en: &'a str, ru: &'a str, plain: &'a str) -> &'a str {
    let picked = lang.pick(en, ru);
    if picked.trim().is_empty() {
        plain
    } else {
        picked
    }
}

impl EvolutionBadge {
    pub fn name(&self, lang: Language) -> &str {
        localized_or(lang, &self.name_en, &self.name_ru, &self.name)
    }

    pub fn condition(&self, lang: Language) -> &str {
        localized_or(lang, &self.condition_en, &self.condition_ru, &self.condition)
    }

    pub fn description(&self, lang: Language) -> &str {
        localized_or(lang, &self.description_en, &self.description_ru, &self.description)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EvolutionBadgeDraft {
    pub name_en: String,
    pub name_ru: String,
    pub icon: String,
    pub xp_requirement: i64,
    pub condition_en: String,
    pub condition_ru: String,
    pub description_en: String,
    pub description_ru: String,
    pub back_title_en: String,
    pub back_title_ru: String,
    pub back_description_en: String,
    pub back_description_ru: String,
    #[serde(flatten)]
    pub animation: CardAnimation,
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EvolutionBadgePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp_requirement: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_title_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_title_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_description_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_description_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl Validate for EvolutionBadgeDraft {
    fn validate(&self) -> Result<(), ContentValidationError> {
        require("name_en", &self.name_en)?;
        require("icon", &self.icon)?;
        if self.xp_requirement < 0 {
            return Err(ContentValidationError::Invalid {
                field: "xp_requirement",
                reason: "must not be negative".to_string(),
            });
        }
        Ok(())
    }
}

impl CollectionResource for EvolutionBadge {
    type Draft = EvolutionBadgeDraft;
    type Patch = EvolutionBadgePatch;

    const NAME: &'static str = "evolution badge";
    const PATH: &'static str = "/evolution-badges";
    const REORDER: ReorderEndpoint = ReorderEndpoint::Unsupported;

    fn id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> i64 {
        self.order
    }
}

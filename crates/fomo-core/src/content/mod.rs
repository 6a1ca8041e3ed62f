//! Site content records served by the REST backend.
//!
//! Two shapes exist:
//! - collections of ordered records with CRUD endpoints ([`CollectionResource`])
//! - singleton settings documents with GET/PUT ([`SettingsDocument`])
//!
//! The backend owns all of them; the client only validates required fields
//! before writing.

pub mod drawer_card;
pub mod evolution;
pub mod faq;
pub mod navigation;
pub mod partner;
pub mod roadmap;
pub mod settings;
pub mod site;
pub mod team;
pub mod utility;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use drawer_card::{DrawerCard, DrawerCardDraft, DrawerCardPatch};
pub use evolution::{
    level_for_score, CardAnimation, EvolutionBadge, EvolutionBadgeDraft, EvolutionBadgePatch,
    EvolutionLevel, EvolutionLevelDraft, EvolutionLevelPatch,
};
pub use faq::{FaqDraft, FaqItem, FaqPatch};
pub use navigation::{
    visible_hero_buttons, ButtonStyle, HeroButton, HeroButtonDraft, HeroButtonPatch,
    NavigationItem, NavigationItemDraft, NavigationItemPatch, MAX_HERO_BUTTONS,
};
pub use partner::{Partner, PartnerCategory, PartnerDraft, PartnerPatch};
pub use roadmap::{RoadmapSettings, RoadmapTask, RoadmapTaskDraft, RoadmapTaskPatch, TaskStatus};
pub use settings::{
    AboutSettings, CommunitySettings, CookieConsentSettings, FooterSettings, HeroSettings,
    PlatformSettings,
};
pub use site::SiteContent;
pub use team::{MemberType, SocialLinks, TeamMember, TeamMemberDraft, TeamMemberPatch};
pub use utility::{
    UtilitiesSettings, Utility, UtilityDraft, UtilityFeature, UtilityNavButton,
    UtilityNavButtonDraft, UtilityNavButtonPatch, UtilityPatch,
};

/// Client-side validation failure for a draft record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("{field} is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Required-field validation for drafts.
pub trait Validate {
    fn validate(&self) -> Result<(), ContentValidationError>;
}

pub(crate) fn require(field: &'static str, value: &str) -> Result<(), ContentValidationError> {
    if value.trim().is_empty() {
        Err(ContentValidationError::MissingField { field })
    } else {
        Ok(())
    }
}

/// A record type served as an ordered collection.
pub trait CollectionResource:
    Clone + std::fmt::Debug + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// Create payload.
    type Draft: Serialize + Validate + Send + Sync;
    /// Partial update payload; unset fields are omitted.
    type Patch: Serialize + Send + Sync;

    /// Human-readable resource name used in logs and errors.
    const NAME: &'static str;
    /// Path relative to the API base, e.g. `/faq`.
    const PATH: &'static str;
    /// How `{PATH}/reorder` is called, if the backend has it.
    const REORDER: ReorderEndpoint;
    /// Whether create and update answer with the stored record. When false the
    /// backend only acknowledges the write and the record is read back.
    const ECHOES_WRITES: bool = true;

    fn id(&self) -> &str;
    fn order(&self) -> i64;
}

/// Bulk reorder endpoint of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderEndpoint {
    Unsupported,
    Post,
    Put,
}

/// A singleton settings document.
pub trait SettingsDocument:
    Clone + std::fmt::Debug + Send + Sync + Serialize + DeserializeOwned + 'static
{
    const NAME: &'static str;
    /// GET path.
    const PATH: &'static str;

    /// PUT path; same as `PATH` unless the backend splits admin writes.
    fn update_path() -> &'static str {
        Self::PATH
    }
}

/// One element of a reorder request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEntry {
    pub id: String,
    pub order: i64,
}

impl OrderEntry {
    /// Builds a reorder body from ids in their desired display order.
    pub fn from_ids(ids: &[String]) -> Vec<Self> {
        ids.iter()
            .enumerate()
            .map(|(index, id)| Self {
                id: id.clone(),
                order: index as i64,
            })
            .collect()
    }
}

/// Partial update for a settings document: only the keys set are sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsPatch(serde_json::Map<String, serde_json::Value>);

impl SettingsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Serialize) -> serde_json::Result<Self> {
        self.0.insert(key.into(), serde_json::to_value(value)?);
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }
}

/// Sorts records by their `order` field, stable for equal orders.
pub fn sort_by_order<T: CollectionResource>(items: &mut [T]) {
    items.sort_by_key(|item| item.order());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_entries_follow_id_positions() {
        let ids = vec!["b".to_string(), "a".to_string()];
        assert_eq!(
            OrderEntry::from_ids(&ids),
            vec![
                OrderEntry {
                    id: "b".into(),
                    order: 0
                },
                OrderEntry {
                    id: "a".into(),
                    order: 1
                },
            ]
        );
    }

    #[test]
    fn settings_patch_serializes_only_set_keys() {
        let patch = SettingsPatch::new()
            .set("badge", "Now in Beta v1.2")
            .unwrap()
            .set("subscribe_enabled", false)
            .unwrap();
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"badge": "Now in Beta v1.2", "subscribe_enabled": false})
        );
    }

    #[test]
    fn require_rejects_whitespace() {
        assert_eq!(
            require("question", "  "),
            Err(ContentValidationError::MissingField { field: "question" })
        );
        assert!(require("question", "What is FOMO?").is_ok());
    }
}

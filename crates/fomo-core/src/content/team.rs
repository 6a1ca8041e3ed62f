use serde::{Deserialize, Serialize};

use super::{require, CollectionResource, ContentValidationError, ReorderEndpoint, Validate};

/// Most social icons a team card shows.
pub const MAX_DISPLAYED_SOCIALS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberType {
    /// Large card with bio.
    #[default]
    Main,
    /// Small card.
    TeamMember,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiktok: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl SocialLinks {
    pub fn get(&self, platform: &str) -> Option<&str> {
        match platform {
            "twitter" => self.twitter.as_deref(),
            "linkedin" => self.linkedin.as_deref(),
            "telegram" => self.telegram.as_deref(),
            "instagram" => self.instagram.as_deref(),
            "tiktok" => self.tiktok.as_deref(),
            "website" => self.website.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name_en: String,
    #[serde(default)]
    pub position_en: String,
    #[serde(default)]
    pub bio_en: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub social_links: Option<SocialLinks>,
    #[serde(default)]
    pub displayed_socials: Vec<String>,
    #[serde(default)]
    pub member_type: MemberType,
    #[serde(default)]
    pub order: i64,
}

impl TeamMember {
    /// Social links to render, in the configured order, skipping empty ones.
    pub fn visible_socials(&self) -> Vec<(&str, &str)> {
        let Some(links) = &self.social_links else {
            return Vec::new();
        };
        self.displayed_socials
            .iter()
            .filter_map(|platform| {
                links
                    .get(platform)
                    .filter(|url| !url.is_empty())
                    .map(|url| (platform.as_str(), url))
            })
            .take(MAX_DISPLAYED_SOCIALS)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMemberDraft {
    pub name_en: String,
    pub position_en: String,
    pub bio_en: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
    pub displayed_socials: Vec<String>,
    pub member_type: MemberType,
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TeamMemberPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displayed_socials: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_type: Option<MemberType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl Validate for TeamMemberDraft {
    fn validate(&self) -> Result<(), ContentValidationError> {
        require("name_en", &self.name_en)?;
        require("position_en", &self.position_en)?;
        if self.displayed_socials.len() > MAX_DISPLAYED_SOCIALS {
            return Err(ContentValidationError::Invalid {
                field: "displayed_socials",
                reason: format!("at most {MAX_DISPLAYED_SOCIALS} socials can be shown"),
            });
        }
        Ok(())
    }
}

impl CollectionResource for TeamMember {
    type Draft = TeamMemberDraft;
    type Patch = TeamMemberPatch;

    const NAME: &'static str = "team member";
    const PATH: &'static str = "/team-members";
    const REORDER: ReorderEndpoint = ReorderEndpoint::Post;

    fn id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> i64 {
        self.order
    }
}

use serde::{Deserialize, Serialize};

use super::{
    sort_by_order, CommunitySettings, DrawerCard, FaqItem, FooterSettings, HeroSettings,
    MemberType, Partner, PartnerCategory, PlatformSettings, RoadmapSettings, TeamMember,
};

/// Everything the landing page renders, loaded in one go.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SiteContent {
    pub drawer_cards: Vec<DrawerCard>,
    pub team_members: Vec<TeamMember>,
    pub platform: PlatformSettings,
    pub roadmap: RoadmapSettings,
    pub partners: Vec<Partner>,
    pub footer: FooterSettings,
    pub faq: Vec<FaqItem>,
    pub community: CommunitySettings,
    pub hero: HeroSettings,
}

impl SiteContent {
    /// Sorts every collection by its `order` field.
    pub fn normalize(mut self) -> Self {
        sort_by_order(&mut self.drawer_cards);
        sort_by_order(&mut self.team_members);
        sort_by_order(&mut self.partners);
        sort_by_order(&mut self.faq);
        self.roadmap.tasks.sort_by_key(|task| task.order);
        self
    }

    pub fn partners_in(&self, category: PartnerCategory) -> impl Iterator<Item = &Partner> {
        self.partners
            .iter()
            .filter(move |partner| partner.category == category)
    }

    pub fn team_of(&self, member_type: MemberType) -> impl Iterator<Item = &TeamMember> {
        self.team_members
            .iter()
            .filter(move |member| member.member_type == member_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partner(id: &str, category: PartnerCategory, order: i64) -> Partner {
        Partner {
            id: id.into(),
            name_en: id.into(),
            name_ru: String::new(),
            description_en: String::new(),
            description_ru: String::new(),
            image_url: String::new(),
            image_url_hover: None,
            link: String::new(),
            category,
            order,
        }
    }

    #[test]
    fn normalize_orders_collections_and_filters_by_category() {
        let content = SiteContent {
            partners: vec![
                partner("c", PartnerCategory::Media, 0),
                partner("b", PartnerCategory::Partners, 2),
                partner("a", PartnerCategory::Partners, 1),
            ],
            ..Default::default()
        }
        .normalize();

        let ids: Vec<&str> = content
            .partners_in(PartnerCategory::Partners)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(content.partners_in(PartnerCategory::Portfolio).count(), 0);
    }
}

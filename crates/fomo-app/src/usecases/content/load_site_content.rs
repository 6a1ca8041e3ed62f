use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use fomo_core::content::{
    CommunitySettings, DrawerCard, FaqItem, FooterSettings, HeroSettings, Partner,
    PlatformSettings, SiteContent, TeamMember,
};
use fomo_core::ports::{ContentCollectionPort, RoadmapPort, SettingsDocumentPort};

use super::ContentError;

/// Read ports for everything the landing page shows.
#[derive(Clone)]
pub struct SiteContentSources {
    pub drawer_cards: Arc<dyn ContentCollectionPort<DrawerCard>>,
    pub team_members: Arc<dyn ContentCollectionPort<TeamMember>>,
    pub platform: Arc<dyn SettingsDocumentPort<PlatformSettings>>,
    pub roadmap: Arc<dyn RoadmapPort>,
    pub partners: Arc<dyn ContentCollectionPort<Partner>>,
    pub footer: Arc<dyn SettingsDocumentPort<FooterSettings>>,
    pub faq: Arc<dyn ContentCollectionPort<FaqItem>>,
    pub community: Arc<dyn SettingsDocumentPort<CommunitySettings>>,
    pub hero: Arc<dyn SettingsDocumentPort<HeroSettings>>,
}

/// Loads all landing page content concurrently.
///
/// All-or-nothing: the first failing request fails the whole load.
pub struct LoadSiteContent {
    sources: SiteContentSources,
}

impl LoadSiteContent {
    pub fn new(sources: SiteContentSources) -> Self {
        Self { sources }
    }

    pub async fn execute(&self) -> Result<SiteContent, ContentError> {
        let span = info_span!("usecase.load_site_content.execute");

        async {
            let s = &self.sources;
            let (
                drawer_cards,
                team_members,
                platform,
                roadmap,
                partners,
                footer,
                faq,
                community,
                hero,
            ) = futures::try_join!(
                s.drawer_cards.list(),
                s.team_members.list(),
                s.platform.get(),
                s.roadmap.get(),
                s.partners.list(),
                s.footer.get(),
                s.faq.list(),
                s.community.get(),
                s.hero.get(),
            )?;

            let content = SiteContent {
                drawer_cards,
                team_members,
                platform,
                roadmap,
                partners,
                footer,
                faq,
                community,
                hero,
            }
            .normalize();

            info!(
                partners = content.partners.len(),
                team_members = content.team_members.len(),
                faq = content.faq.len(),
                roadmap_tasks = content.roadmap.tasks.len(),
                "site content loaded"
            );
            Ok(content)
        }
        .instrument(span)
        .await
    }
}

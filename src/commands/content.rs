//! `fomo content`: loads and summarizes the landing page content.

use tracing::{info_span, Instrument};

use fomo_core::content::{MemberType, PartnerCategory, SiteContent};
use fomo_core::i18n::Language;

use crate::bootstrap::AppDeps;

pub async fn run(deps: &AppDeps, lang: Language) -> anyhow::Result<SiteContent> {
    let span = info_span!("command.content", lang = lang.code());
    async {
        let content = deps.load_site_content().execute().await?;
        for line in summarize(&content, lang) {
            println!("{line}");
        }
        Ok(content)
    }
    .instrument(span)
    .await
}

fn summarize(content: &SiteContent, lang: Language) -> Vec<String> {
    let mut lines = vec![format!("Hero: {}", content.hero.badge)];

    lines.push(format!(
        "Team: {} core, {} members",
        content.team_of(MemberType::Main).count(),
        content.team_of(MemberType::TeamMember).count()
    ));
    for category in [
        PartnerCategory::Partners,
        PartnerCategory::Media,
        PartnerCategory::Portfolio,
    ] {
        let names: Vec<&str> = content
            .partners_in(category)
            .map(|partner| partner.name(lang))
            .collect();
        lines.push(format!("{category:?}: {}", names.join(", ")));
    }

    lines.push(format!(
        "Roadmap: {}% done ({} tasks)",
        content.roadmap.progress_percent(),
        content.roadmap.tasks.len()
    ));
    for task in &content.roadmap.tasks {
        lines.push(format!("  [{:?}] {}", task.status, task.name(lang)));
    }

    lines.push(format!("FAQ: {} entries", content.faq.len()));
    for card in &content.drawer_cards {
        lines.push(format!("Card: {} -> {}", card.title(lang), card.link));
    }
    lines
}

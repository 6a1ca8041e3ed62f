//! `fomo admin`: admin login, FAQ and collection management, analytics.

use anyhow::Context;
use tracing::{info_span, Instrument};

use fomo_core::admin::AdminSession;
use fomo_core::analytics::{AnalyticsPeriod, AnalyticsStats};
use fomo_core::content::{
    CollectionResource, EvolutionBadge, EvolutionLevel, FaqDraft, FaqItem, HeroButton,
    NavigationItem, UtilitiesSettings, Utility, UtilityNavButton,
};
use fomo_core::i18n::Language;

use crate::bootstrap::AppDeps;

pub async fn login(deps: &AppDeps, password: &str) -> anyhow::Result<AdminSession> {
    let span = info_span!("command.admin.login");
    async {
        let session = deps.admin_login().execute(password).await?;
        println!("{}", session.token());
        Ok(session)
    }
    .instrument(span)
    .await
}

pub async fn list_faq(deps: &AppDeps) -> anyhow::Result<Vec<FaqItem>> {
    let items = deps.manage_faq().list().await?;
    for item in &items {
        println!("{}\t{}", item.id, item.question);
    }
    Ok(items)
}

pub async fn add_faq(
    deps: &AppDeps,
    session: &AdminSession,
    question: String,
    answer: String,
) -> anyhow::Result<FaqItem> {
    let span = info_span!("command.admin.faq.add");
    async {
        ensure_session(deps, session).await?;
        let manage = deps.manage_faq();
        let order = manage.list().await?.len() as i64;
        let item = manage
            .create(
                session,
                FaqDraft {
                    question,
                    answer,
                    order,
                },
            )
            .await?;
        println!("Created FAQ {}", item.id);
        Ok(item)
    }
    .instrument(span)
    .await
}

pub async fn delete_faq(deps: &AppDeps, session: &AdminSession, id: &str) -> anyhow::Result<()> {
    let span = info_span!("command.admin.faq.delete", id = %id);
    async {
        ensure_session(deps, session).await?;
        deps.manage_faq()
            .delete(session, id)
            .await
            .with_context(|| format!("Failed to delete FAQ {id}"))?;
        println!("Deleted FAQ {id}");
        Ok(())
    }
    .instrument(span)
    .await
}

/// Admin-managed collections listed by `fomo admin list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CollectionKind {
    Utilities,
    UtilityNavButtons,
    EvolutionLevels,
    EvolutionBadges,
    HeroButtons,
    NavigationItems,
}

/// Prints `id, order, label` rows; returns the row count.
pub async fn list_collection(
    deps: &AppDeps,
    kind: CollectionKind,
    lang: Language,
) -> anyhow::Result<usize> {
    match kind {
        CollectionKind::Utilities => {
            let heading = deps
                .manage_settings::<UtilitiesSettings>()
                .get()
                .await?
                .heading(lang);
            if !heading.is_empty() {
                println!("# {heading}");
            }
            print_rows::<Utility>(deps, |u| u.title.clone()).await
        }
        CollectionKind::UtilityNavButtons => {
            print_rows::<UtilityNavButton>(deps, |b| format!("{} -> {}", b.label, b.url)).await
        }
        CollectionKind::EvolutionLevels => {
            print_rows::<EvolutionLevel>(deps, |l| {
                format!("{} ({}..={})", l.rank(lang), l.fomo_score_min, l.fomo_score_max)
            })
            .await
        }
        CollectionKind::EvolutionBadges => {
            print_rows::<EvolutionBadge>(deps, |b| {
                format!("{} {} ({} XP)", b.icon, b.name(lang), b.xp_requirement)
            })
            .await
        }
        CollectionKind::HeroButtons => {
            print_rows::<HeroButton>(deps, |b| format!("{} -> {}", b.label, b.url)).await
        }
        CollectionKind::NavigationItems => {
            print_rows::<NavigationItem>(deps, |n| format!("{} -> {}", n.label(lang), n.href))
                .await
        }
    }
}

async fn print_rows<T: CollectionResource>(
    deps: &AppDeps,
    label: impl Fn(&T) -> String,
) -> anyhow::Result<usize> {
    let items = deps
        .manage::<T>()
        .list()
        .await
        .with_context(|| format!("Failed to list {}", T::NAME))?;
    for item in &items {
        println!("{}\t{}\t{}", item.id(), item.order(), label(item));
    }
    Ok(items.len())
}

/// Saves a new utility card order given ids in display order.
pub async fn reorder_utilities(
    deps: &AppDeps,
    session: &AdminSession,
    ids: &[String],
) -> anyhow::Result<()> {
    let span = info_span!("command.admin.utilities.reorder", count = ids.len());
    async {
        ensure_session(deps, session).await?;
        deps.manage::<Utility>().reorder(session, ids).await?;
        println!("Reordered {} utilities", ids.len());
        Ok(())
    }
    .instrument(span)
    .await
}

pub async fn analytics_stats(
    deps: &AppDeps,
    session: &AdminSession,
    period: AnalyticsPeriod,
) -> anyhow::Result<AnalyticsStats> {
    let span = info_span!("command.admin.analytics.stats", days = period.days());
    async {
        let stats = deps
            .analytics_report()
            .stats(session, period)
            .await
            .context("Failed to load analytics stats")?;
        println!("{}", summarize_stats(&stats, period));
        Ok(stats)
    }
    .instrument(span)
    .await
}

pub async fn analytics_clear(deps: &AppDeps, session: &AdminSession) -> anyhow::Result<u64> {
    let span = info_span!("command.admin.analytics.clear");
    async {
        ensure_session(deps, session).await?;
        let deleted = deps.analytics_report().clear(session).await?;
        println!("Deleted {deleted} analytics events");
        Ok(deleted)
    }
    .instrument(span)
    .await
}

fn summarize_stats(stats: &AnalyticsStats, period: AnalyticsPeriod) -> String {
    if stats.is_empty() {
        return format!("No analytics events in the last {} days", period.days());
    }
    let mut lines = vec![
        format!("Last {} days", period.days()),
        format!(
            "Page views: {}  Sessions: {}  Clicks: {}",
            stats.page_views, stats.unique_sessions, stats.button_clicks
        ),
        format!(
            "Conversions: {} ({:.2}%)",
            stats.conversions, stats.conversion_rate
        ),
    ];
    if let Some(top) = stats.detailed_sources.first() {
        lines.push(format!("Top source: {} ({:.2}%)", top.source, top.percent));
    }
    lines.join("\n")
}

async fn ensure_session(deps: &AppDeps, session: &AdminSession) -> anyhow::Result<()> {
    if !deps.verify_admin_session().execute(session).await {
        anyhow::bail!("Admin session is invalid or expired; run `fomo admin login` again");
    }
    Ok(())
}

use crate::admin::AdminSession;
use crate::analytics::{AnalyticsEvent, AnalyticsPeriod, AnalyticsStats};

use super::errors::ContentApiError;

#[async_trait::async_trait]
pub trait AnalyticsPort: Send + Sync {
    async fn track(&self, event: &AnalyticsEvent) -> anyhow::Result<()>;
}

/// Admin side of analytics: aggregated statistics and data reset.
#[async_trait::async_trait]
pub trait AnalyticsReportPort: Send + Sync {
    async fn stats(
        &self,
        session: &AdminSession,
        period: AnalyticsPeriod,
    ) -> Result<AnalyticsStats, ContentApiError>;

    /// Deletes every stored event; returns how many were removed.
    async fn clear(&self, session: &AdminSession) -> Result<u64, ContentApiError>;
}

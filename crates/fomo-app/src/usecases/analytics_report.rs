use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use fomo_core::admin::AdminSession;
use fomo_core::analytics::{AnalyticsPeriod, AnalyticsStats};
use fomo_core::ports::{AnalyticsReportPort, ContentApiError};

/// Admin analytics dashboard: read aggregates, wipe collected events.
pub struct AnalyticsReport {
    port: Arc<dyn AnalyticsReportPort>,
}

impl AnalyticsReport {
    pub fn new(port: Arc<dyn AnalyticsReportPort>) -> Self {
        Self { port }
    }

    pub async fn stats(
        &self,
        session: &AdminSession,
        period: AnalyticsPeriod,
    ) -> Result<AnalyticsStats, ContentApiError> {
        let span = info_span!("usecase.analytics_report.stats", days = period.days());
        async {
            let stats = self.port.stats(session, period).await?;
            info!(
                page_views = stats.page_views,
                sessions = stats.unique_sessions,
                "analytics stats loaded"
            );
            Ok(stats)
        }
        .instrument(span)
        .await
    }

    /// Irreversible; returns the number of deleted events.
    pub async fn clear(&self, session: &AdminSession) -> Result<u64, ContentApiError> {
        let span = info_span!("usecase.analytics_report.clear");
        async {
            let deleted = self.port.clear(session).await?;
            info!(deleted, "analytics data cleared");
            Ok(deleted)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub Report {}

        #[async_trait]
        impl AnalyticsReportPort for Report {
            async fn stats(
                &self,
                session: &AdminSession,
                period: AnalyticsPeriod,
            ) -> Result<AnalyticsStats, ContentApiError>;
            async fn clear(&self, session: &AdminSession) -> Result<u64, ContentApiError>;
        }
    }

    #[tokio::test]
    async fn stats_forward_requested_period() {
        let mut port = MockReport::new();
        port.expect_stats()
            .withf(|session, period| {
                session.token() == "t" && *period == AnalyticsPeriod::Quarter
            })
            .returning(|_, _| {
                Ok(AnalyticsStats {
                    page_views: 3,
                    ..Default::default()
                })
            });
        let usecase = AnalyticsReport::new(Arc::new(port));

        let stats = usecase
            .stats(&AdminSession::new("t"), AnalyticsPeriod::Quarter)
            .await
            .unwrap();

        assert_eq!(stats.page_views, 3);
    }

    #[tokio::test]
    async fn clear_surfaces_unauthorized() {
        let mut port = MockReport::new();
        port.expect_clear()
            .times(1)
            .returning(|_| Err(ContentApiError::Unauthorized));
        let usecase = AnalyticsReport::new(Arc::new(port));

        let err = usecase.clear(&AdminSession::new("old")).await.unwrap_err();

        assert_eq!(err, ContentApiError::Unauthorized);
    }
}

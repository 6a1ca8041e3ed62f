use async_trait::async_trait;
use anyhow::Context;
use serde::Deserialize;

use fomo_core::admin::AdminSession;
use fomo_core::analytics::{AnalyticsEvent, AnalyticsPeriod, AnalyticsStats};
use fomo_core::ports::{AnalyticsPort, AnalyticsReportPort, ContentApiError};

use super::ApiClient;

pub struct HttpAnalytics {
    client: ApiClient,
}

impl HttpAnalytics {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AnalyticsPort for HttpAnalytics {
    async fn track(&self, event: &AnalyticsEvent) -> anyhow::Result<()> {
        let request = self.client.post("/analytics/track").json(event);
        self.client
            .execute(request)
            .await
            .map_err(ContentApiError::from)
            .context("failed to post analytics event")
    }
}

#[derive(Debug, Deserialize)]
struct ClearResponse {
    #[serde(default)]
    deleted_count: u64,
}

#[async_trait]
impl AnalyticsReportPort for HttpAnalytics {
    async fn stats(
        &self,
        session: &AdminSession,
        period: AnalyticsPeriod,
    ) -> Result<AnalyticsStats, ContentApiError> {
        let request = ApiClient::authorized(self.client.get("/analytics/stats"), session)
            .query(&[("period", period.days())]);
        Ok(self.client.fetch(request).await?)
    }

    async fn clear(&self, session: &AdminSession) -> Result<u64, ContentApiError> {
        let request = ApiClient::authorized(self.client.delete("/analytics/clear"), session);
        let response: ClearResponse = self.client.fetch(request).await?;
        Ok(response.deleted_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use std::time::Duration;

    fn analytics(server: &Server) -> HttpAnalytics {
        HttpAnalytics::new(ApiClient::new(server.url(), Duration::from_secs(5)).unwrap())
    }

    #[tokio::test]
    async fn stats_sends_period_and_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/analytics/stats")
            .match_query(Matcher::UrlEncoded("period".into(), "7".into()))
            .match_header("authorization", "Bearer t")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"page_views": 40, "unique_sessions": 10, "conversions": 2, "conversion_rate": 20.0,
                    "detailed_sources": [{"source": "Google", "count": 6, "percent": 60.0}]}"#,
            )
            .create_async()
            .await;

        let stats = analytics(&server)
            .stats(&AdminSession::new("t"), AnalyticsPeriod::Week)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(stats.unique_sessions, 10);
        assert_eq!(stats.conversion_rate, 20.0);
        assert_eq!(stats.detailed_sources[0].source, "Google");
    }

    #[tokio::test]
    async fn clear_returns_deleted_count() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("DELETE", "/analytics/clear")
            .match_header("authorization", "Bearer t")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true, "deleted_count": 128}"#)
            .create_async()
            .await;

        let deleted = analytics(&server)
            .clear(&AdminSession::new("t"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(deleted, 128);
    }

    #[tokio::test]
    async fn stats_without_session_is_unauthorized() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/analytics/stats")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{"detail": "Missing or invalid authorization header"}"#)
            .create_async()
            .await;

        let err = analytics(&server)
            .stats(&AdminSession::new("expired"), AnalyticsPeriod::Month)
            .await
            .unwrap_err();

        assert_eq!(err, ContentApiError::Unauthorized);
    }

    #[tokio::test]
    async fn track_posts_event_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/analytics/track")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "session_id": "s1",
                "event_type": "click",
                "button_id": "hero-join"
            })))
            .with_status(200)
            .with_body(r#"{"success": true}"#)
            .create_async()
            .await;

        analytics(&server)
            .track(&AnalyticsEvent::click("s1", "hero-join"))
            .await
            .unwrap();

        mock.assert_async().await;
    }
}

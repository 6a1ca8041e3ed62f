//! Analytics events posted to `/analytics/track` and the admin statistics
//! read from `/analytics/stats`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsEventType {
    Pageview,
    Click,
    Conversion,
}

/// Body of `POST /analytics/track`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub session_id: String,
    pub event_type: AnalyticsEventType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl AnalyticsEvent {
    pub fn pageview(session_id: impl Into<String>, page_url: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            event_type: AnalyticsEventType::Pageview,
            page_url: Some(page_url.into()),
            page_title: None,
            button_id: None,
            button_text: None,
            referrer: None,
            user_agent: None,
        }
    }

    pub fn click(session_id: impl Into<String>, button_id: impl Into<String>) -> Self {
        Self {
            event_type: AnalyticsEventType::Click,
            page_url: None,
            button_id: Some(button_id.into()),
            ..Self::pageview(session_id, "")
        }
    }

    /// Registration finished; the celebration screen was shown.
    pub fn conversion(session_id: impl Into<String>) -> Self {
        Self {
            event_type: AnalyticsEventType::Conversion,
            page_url: None,
            ..Self::pageview(session_id, "")
        }
    }

    /// New anonymous session identifier.
    pub fn new_session_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Reporting window of `/analytics/stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalyticsPeriod {
    Week,
    #[default]
    Month,
    Quarter,
}

impl AnalyticsPeriod {
    pub fn days(&self) -> u32 {
        match self {
            AnalyticsPeriod::Week => 7,
            AnalyticsPeriod::Month => 30,
            AnalyticsPeriod::Quarter => 90,
        }
    }
}

impl std::str::FromStr for AnalyticsPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "7" | "7d" => Ok(AnalyticsPeriod::Week),
            "30" | "30d" => Ok(AnalyticsPeriod::Month),
            "90" | "90d" => Ok(AnalyticsPeriod::Quarter),
            other => Err(format!("unsupported period: {other} (use 7, 30 or 90)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedCount {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceShare {
    pub source: String,
    pub count: u64,
    pub percent: f64,
}

/// Aggregates computed by the backend over one [`AnalyticsPeriod`]. Percentages
/// are 0..=100 with two decimals; an empty period is all zeros.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsStats {
    pub page_views: u64,
    pub unique_sessions: u64,
    pub button_clicks: u64,
    pub conversions: u64,
    pub conversion_rate: f64,
    /// Seconds.
    pub avg_session_duration: u64,

    pub new_visitors: u64,
    pub returning_visitors: u64,
    pub new_visitors_percent: f64,
    pub returning_visitors_percent: f64,

    pub desktop_visitors: u64,
    pub mobile_visitors: u64,
    pub tablet_visitors: u64,
    pub desktop_percent: f64,
    pub mobile_percent: f64,
    pub tablet_percent: f64,

    pub top_countries: Vec<NamedCount>,
    pub top_cities: Vec<NamedCount>,

    pub direct_traffic: u64,
    pub referral_traffic: u64,
    pub search_traffic: u64,
    pub direct_percent: f64,
    pub referral_percent: f64,
    pub search_percent: f64,
    pub detailed_sources: Vec<SourceShare>,
}

impl AnalyticsStats {
    pub fn is_empty(&self) -> bool {
        self.page_views == 0 && self.button_clicks == 0 && self.conversions == 0
    }
}

//! Singleton settings documents.
//!
//! Every field defaults so that partially seeded documents still decode.
//! Fields the client never reads are dropped on decode.

use serde::{Deserialize, Serialize};

use super::SettingsDocument;
use crate::i18n::Language;

// ---- hero ----

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroActionButton {
    pub text: String,
    pub link: String,
    /// Filled button when true, outline otherwise.
    pub primary: bool,
    /// Opens the registration flow instead of following `link`.
    pub use_invite_modal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizedStat {
    pub value: String,
    pub label_en: String,
    pub label_ru: String,
}

impl LocalizedStat {
    pub fn label(&self, lang: Language) -> &str {
        lang.pick(&self.label_en, &self.label_ru)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NftSettings {
    pub price_per_box: f64,
    pub discount_threshold: u32,
    pub discount_percent: u32,
    pub total_supply: u32,
    pub max_per_wallet: u32,
}

impl Default for NftSettings {
    fn default() -> Self {
        Self {
            price_per_box: 150.0,
            discount_threshold: 3,
            discount_percent: 10,
            total_supply: 666,
            max_per_wallet: 100,
        }
    }
}

impl NftSettings {
    /// Total price for `quantity` boxes, discounted from the threshold up.
    pub fn total_price(&self, quantity: u32) -> f64 {
        let gross = self.price_per_box * f64::from(quantity);
        if quantity >= self.discount_threshold && self.discount_threshold > 0 {
            gross * (1.0 - f64::from(self.discount_percent) / 100.0)
        } else {
            gross
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroSettings {
    pub badge: String,
    pub title_line1: String,
    pub title_line2: String,
    pub subtitle: String,
    pub action_buttons: Vec<HeroActionButton>,
    pub stats: Vec<LocalizedStat>,
    pub nft_settings: NftSettings,
}

impl SettingsDocument for HeroSettings {
    const NAME: &'static str = "hero settings";
    const PATH: &'static str = "/hero-settings";
}

// ---- about ----

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutFeature {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutSettings {
    pub badge: String,
    pub title: String,
    pub title_highlight: String,
    pub subtitle: String,
    pub description: String,
    pub social_engagement: String,
    pub data_analytics: String,
    pub seamless_access: String,
    pub description_end: String,
    pub features: Vec<AboutFeature>,
    pub whitepaper_button_text: String,
    pub whitepaper_button_link: String,
}

impl SettingsDocument for AboutSettings {
    const NAME: &'static str = "about settings";
    const PATH: &'static str = "/about-settings";
}

// ---- platform ----

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformStat {
    pub value: String,
    pub label_en: String,
    pub label_ru: String,
    pub change: String,
    pub trend: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceModule {
    pub icon: String,
    pub name_en: String,
    pub name_ru: String,
    pub count: String,
    pub label_en: String,
    pub label_ru: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceItem {
    pub num: String,
    pub title_en: String,
    pub title_ru: String,
    pub description_en: String,
    pub description_ru: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BottomStat {
    pub value: String,
    pub label_en: String,
    pub label_ru: String,
    pub description_en: String,
    pub description_ru: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformSettings {
    pub community: PlatformStat,
    pub visits: PlatformStat,
    pub projects: PlatformStat,
    pub alerts: PlatformStat,
    pub service_modules: Vec<ServiceModule>,
    pub services_list: Vec<ServiceItem>,
    pub bottom_stats: Vec<BottomStat>,
    pub section_badge_en: String,
    pub section_badge_ru: String,
    pub section_title_en: String,
    pub section_title_ru: String,
    pub section_intro_en: String,
    pub section_intro_ru: String,
}

impl SettingsDocument for PlatformSettings {
    const NAME: &'static str = "platform settings";
    const PATH: &'static str = "/platform-settings";
}

// ---- footer ----

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterLink {
    pub name: String,
    pub url: String,
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterSection {
    pub title: String,
    pub links: Vec<FooterLink>,
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterSocial {
    pub platform: String,
    pub url: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LegalPage {
    /// `privacy`, `terms` or `disclaimer`.
    pub id: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterSettings {
    pub company_name: String,
    pub company_description: String,
    pub company_address: String,
    pub company_phone: String,
    pub company_email: Option<String>,
    pub social_media: Vec<FooterSocial>,
    pub navigation_sections: Vec<FooterSection>,
    pub cta_button_text: String,
    pub cta_button_url: String,
    pub legal_pages: Vec<LegalPage>,
    pub copyright_text: String,
    pub legal_disclaimer: String,
    pub made_by_text: Option<String>,
    pub made_by_url: Option<String>,
}

impl FooterSettings {
    pub fn legal_page(&self, id: &str) -> Option<&LegalPage> {
        self.legal_pages.iter().find(|page| page.id == id)
    }
}

impl SettingsDocument for FooterSettings {
    const NAME: &'static str = "footer settings";
    const PATH: &'static str = "/footer-settings";
}

// ---- community ----

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunitySocial {
    pub platform: String,
    pub url: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommunitySettings {
    pub title_en: String,
    pub title_ru: String,
    pub description_en: String,
    pub description_ru: String,
    pub socials: Vec<CommunitySocial>,
    pub subscribe_enabled: bool,
    pub subscribe_title_en: String,
    pub subscribe_title_ru: String,
}

impl CommunitySettings {
    pub fn enabled_socials(&self) -> impl Iterator<Item = &CommunitySocial> {
        self.socials.iter().filter(|social| social.enabled)
    }
}

impl SettingsDocument for CommunitySettings {
    const NAME: &'static str = "community settings";
    const PATH: &'static str = "/community-settings";
}

// ---- cookie consent ----

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieConsentSettings {
    pub enabled: bool,
    pub privacy_policy_url: String,
    pub terms_url: String,
    pub cookie_policy_url: String,
    pub title_en: String,
    pub title_ru: String,
    pub description_en: String,
    pub description_ru: String,
}

impl Default for CookieConsentSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            privacy_policy_url: "/privacy".to_string(),
            terms_url: "/terms".to_string(),
            cookie_policy_url: "/cookies".to_string(),
            title_en: String::new(),
            title_ru: String::new(),
            description_en: String::new(),
            description_ru: String::new(),
        }
    }
}

impl SettingsDocument for CookieConsentSettings {
    const NAME: &'static str = "cookie consent settings";
    const PATH: &'static str = "/cookie-consent-settings";

    fn update_path() -> &'static str {
        "/admin/cookie-consent-settings"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nft_discount_applies_from_threshold() {
        let nft = NftSettings::default();
        assert_eq!(nft.total_price(2), 300.0);
        assert_eq!(nft.total_price(3), 405.0);
    }

    #[test]
    fn hero_decodes_partial_document() {
        let json = serde_json::json!({
            "id": "hero_settings",
            "badge": "Now in Beta v1.1",
            "action_buttons": [{"text": "Join", "link": "#", "primary": true, "use_invite_modal": true}]
        });
        let hero: HeroSettings = serde_json::from_value(json).unwrap();
        assert_eq!(hero.badge, "Now in Beta v1.1");
        assert!(hero.action_buttons[0].use_invite_modal);
        assert_eq!(hero.nft_settings, NftSettings::default());
    }

    #[test]
    fn community_social_enabled_defaults_true() {
        let json = serde_json::json!({
            "socials": [
                {"platform": "twitter", "url": "https://twitter.com"},
                {"platform": "discord", "url": "https://discord.com", "enabled": false}
            ]
        });
        let community: CommunitySettings = serde_json::from_value(json).unwrap();
        let enabled: Vec<&str> = community
            .enabled_socials()
            .map(|s| s.platform.as_str())
            .collect();
        assert_eq!(enabled, vec!["twitter"]);
    }

    #[test]
    fn cookie_consent_writes_go_to_admin_path() {
        assert_eq!(CookieConsentSettings::PATH, "/cookie-consent-settings");
        assert_eq!(
            CookieConsentSettings::update_path(),
            "/admin/cookie-consent-settings"
        );
        assert_eq!(HeroSettings::update_path(), "/hero-settings");
    }
}

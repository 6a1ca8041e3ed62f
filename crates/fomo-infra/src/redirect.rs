use std::sync::Mutex;

use tracing::info;

use fomo_core::ports::RedirectPort;

/// Records the navigation target instead of driving a browser.
#[derive(Default)]
pub struct LogRedirect {
    last: Mutex<Option<String>>,
}

impl LogRedirect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_target(&self) -> Option<String> {
        self.last.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait::async_trait]
impl RedirectPort for LogRedirect {
    async fn redirect(&self, url: &str) -> anyhow::Result<()> {
        info!(url = %url, "redirecting");
        let mut guard = self
            .last
            .lock()
            .map_err(|_| anyhow::anyhow!("redirect target lock poisoned"))?;
        *guard = Some(url.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn remembers_latest_target() {
        let redirect = LogRedirect::new();
        assert_eq!(redirect.last_target(), None);

        redirect.redirect("/platform").await.unwrap();
        redirect.redirect("/dashboard").await.unwrap();

        assert_eq!(redirect.last_target().as_deref(), Some("/dashboard"));
    }
}

use async_trait::async_trait;

use super::errors::ContentApiError;
use crate::admin::AdminSession;
use crate::content::{
    CollectionResource, OrderEntry, RoadmapSettings, RoadmapTask, RoadmapTaskDraft,
    RoadmapTaskPatch, SettingsDocument, SettingsPatch,
};

/// CRUD over one content collection. Reads are public, writes carry the
/// admin session.
#[async_trait]
pub trait ContentCollectionPort<T: CollectionResource>: Send + Sync {
    async fn list(&self) -> Result<Vec<T>, ContentApiError>;

    async fn create(&self, session: &AdminSession, draft: &T::Draft) -> Result<T, ContentApiError>;

    async fn update(
        &self,
        session: &AdminSession,
        id: &str,
        patch: &T::Patch,
    ) -> Result<T, ContentApiError>;

    async fn delete(&self, session: &AdminSession, id: &str) -> Result<(), ContentApiError>;

    /// `{path}/reorder` with the verb from `T::REORDER`. Never called for
    /// `ReorderEndpoint::Unsupported`.
    async fn reorder(
        &self,
        session: &AdminSession,
        entries: &[OrderEntry],
    ) -> Result<(), ContentApiError>;
}

#[async_trait]
pub trait SettingsDocumentPort<T: SettingsDocument>: Send + Sync {
    async fn get(&self) -> Result<T, ContentApiError>;

    /// Sends only the keys present in `patch`; returns the stored document.
    async fn update(&self, session: &AdminSession, patch: &SettingsPatch)
        -> Result<T, ContentApiError>;
}

/// Roadmap tasks live inside the roadmap document but have their own endpoints.
#[async_trait]
pub trait RoadmapPort: SettingsDocumentPort<RoadmapSettings> {
    async fn add_task(
        &self,
        session: &AdminSession,
        draft: &RoadmapTaskDraft,
    ) -> Result<RoadmapTask, ContentApiError>;

    async fn update_task(
        &self,
        session: &AdminSession,
        id: &str,
        patch: &RoadmapTaskPatch,
    ) -> Result<(), ContentApiError>;

    async fn delete_task(&self, session: &AdminSession, id: &str) -> Result<(), ContentApiError>;

    async fn reorder_tasks(
        &self,
        session: &AdminSession,
        entries: &[OrderEntry],
    ) -> Result<(), ContentApiError>;
}

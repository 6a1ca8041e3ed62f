use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use fomo_core::admin::AdminSession;
use fomo_core::content::{
    OrderEntry, RoadmapSettings, RoadmapTask, RoadmapTaskDraft, RoadmapTaskPatch, SettingsPatch,
    Validate,
};
use fomo_core::ports::{RoadmapPort, SettingsDocumentPort};

use super::ContentError;

/// Admin editor for the roadmap header and its tasks.
pub struct ManageRoadmap {
    port: Arc<dyn RoadmapPort>,
}

impl ManageRoadmap {
    pub fn new(port: Arc<dyn RoadmapPort>) -> Self {
        Self { port }
    }

    pub async fn get(&self) -> Result<RoadmapSettings, ContentError> {
        let mut roadmap = self.port.get().await?;
        roadmap.tasks.sort_by_key(|task| task.order);
        Ok(roadmap)
    }

    pub async fn update_header(
        &self,
        session: &AdminSession,
        patch: SettingsPatch,
    ) -> Result<RoadmapSettings, ContentError> {
        if patch.is_empty() {
            return Err(ContentError::EmptyPatch);
        }
        Ok(self.port.update(session, &patch).await?)
    }

    pub async fn add_task(
        &self,
        session: &AdminSession,
        draft: RoadmapTaskDraft,
    ) -> Result<RoadmapTask, ContentError> {
        let span = info_span!("usecase.manage_roadmap.add_task");

        async {
            draft
                .validate()
                .map_err(|source| ContentError::Validation {
                    resource: "roadmap task",
                    source,
                })?;
            let task = self.port.add_task(session, &draft).await?;
            info!(id = %task.id, status = ?task.status, "roadmap task added");
            Ok(task)
        }
        .instrument(span)
        .await
    }

    pub async fn update_task(
        &self,
        session: &AdminSession,
        id: &str,
        patch: RoadmapTaskPatch,
    ) -> Result<(), ContentError> {
        let span = info_span!("usecase.manage_roadmap.update_task", id = %id);

        async {
            self.port.update_task(session, id, &patch).await?;
            info!("roadmap task updated");
            Ok(())
        }
        .instrument(span)
        .await
    }

    pub async fn delete_task(&self, session: &AdminSession, id: &str) -> Result<(), ContentError> {
        self.port.delete_task(session, id).await?;
        info!(id = %id, "roadmap task deleted");
        Ok(())
    }

    pub async fn reorder_tasks(
        &self,
        session: &AdminSession,
        ids: &[String],
    ) -> Result<(), ContentError> {
        self.port
            .reorder_tasks(session, &OrderEntry::from_ids(ids))
            .await?;
        info!(count = ids.len(), "roadmap tasks reordered");
        Ok(())
    }
}

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use fomo_core::admin::AdminSession;
use fomo_core::content::{
    sort_by_order, CollectionResource, OrderEntry, ReorderEndpoint, Validate,
};
use fomo_core::ports::ContentCollectionPort;

use super::ContentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Admin editor for one content collection.
pub struct ManageCollection<T: CollectionResource> {
    port: Arc<dyn ContentCollectionPort<T>>,
}

impl<T: CollectionResource> ManageCollection<T> {
    pub fn new(port: Arc<dyn ContentCollectionPort<T>>) -> Self {
        Self { port }
    }

    /// Records sorted by their `order` field.
    pub async fn list(&self) -> Result<Vec<T>, ContentError> {
        let mut items = self.port.list().await?;
        sort_by_order(&mut items);
        Ok(items)
    }

    pub async fn create(&self, session: &AdminSession, draft: T::Draft) -> Result<T, ContentError> {
        let span = info_span!("usecase.manage_collection.create", resource = T::NAME);

        async {
            draft
                .validate()
                .map_err(|source| ContentError::Validation {
                    resource: T::NAME,
                    source,
                })?;
            let created = self.port.create(session, &draft).await?;
            info!(id = %created.id(), "content record created");
            Ok(created)
        }
        .instrument(span)
        .await
    }

    pub async fn update(
        &self,
        session: &AdminSession,
        id: &str,
        patch: T::Patch,
    ) -> Result<T, ContentError> {
        let span = info_span!("usecase.manage_collection.update", resource = T::NAME, id = %id);

        async {
            let updated = self.port.update(session, id, &patch).await?;
            info!("content record updated");
            Ok(updated)
        }
        .instrument(span)
        .await
    }

    pub async fn delete(&self, session: &AdminSession, id: &str) -> Result<(), ContentError> {
        let span = info_span!("usecase.manage_collection.delete", resource = T::NAME, id = %id);

        async {
            self.port.delete(session, id).await?;
            info!("content record deleted");
            Ok(())
        }
        .instrument(span)
        .await
    }

    /// Persists a new display order given ids in the desired sequence.
    pub async fn reorder(&self, session: &AdminSession, ids: &[String]) -> Result<(), ContentError> {
        if T::REORDER == ReorderEndpoint::Unsupported {
            return Err(ContentError::NotReorderable(T::NAME));
        }
        let span = info_span!("usecase.manage_collection.reorder", resource = T::NAME, count = ids.len());

        async {
            self.port
                .reorder(session, &OrderEntry::from_ids(ids))
                .await?;
            info!("content records reordered");
            Ok(())
        }
        .instrument(span)
        .await
    }

    /// Swaps a record with its neighbour. Moving past either end is a no-op.
    pub async fn move_item(
        &self,
        session: &AdminSession,
        id: &str,
        direction: MoveDirection,
    ) -> Result<Vec<String>, ContentError> {
        let mut ids: Vec<String> = self
            .list()
            .await?
            .iter()
            .map(|item| item.id().to_string())
            .collect();
        let index = ids
            .iter()
            .position(|candidate| candidate == id)
            .ok_or_else(|| ContentError::NotFound {
                resource: T::NAME,
                id: id.to_string(),
            })?;
        let target = match direction {
            MoveDirection::Up if index > 0 => index - 1,
            MoveDirection::Down if index + 1 < ids.len() => index + 1,
            _ => return Ok(ids),
        };
        ids.swap(index, target);
        self.reorder(session, &ids).await?;
        Ok(ids)
    }
}

use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;

use fomo_core::admin::AdminSession;
use fomo_core::content::{
    CollectionResource, OrderEntry, ReorderEndpoint, RoadmapSettings, RoadmapTask,
    RoadmapTaskDraft, RoadmapTaskPatch, SettingsDocument, SettingsPatch,
};
use fomo_core::ports::{
    ContentApiError, ContentCollectionPort, RoadmapPort, SettingsDocumentPort,
};

use super::ApiClient;

/// Acknowledgement returned by collections that do not echo writes.
#[derive(Debug, Deserialize)]
struct WriteAck {
    id: Option<String>,
}

/// REST collection at `T::PATH`.
pub struct HttpCollection<T> {
    client: ApiClient,
    _resource: PhantomData<fn() -> T>,
}

impl<T: CollectionResource> HttpCollection<T> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    /// Reads a record back after an acknowledged write.
    async fn read_back(&self, id: &str) -> Result<T, ContentApiError> {
        self.list()
            .await?
            .into_iter()
            .find(|item| item.id() == id)
            .ok_or_else(|| ContentApiError::NotFound(format!("{} {id}", T::NAME)))
    }
}

#[async_trait]
impl<T: CollectionResource> ContentCollectionPort<T> for HttpCollection<T> {
    async fn list(&self) -> Result<Vec<T>, ContentApiError> {
        Ok(self.client.fetch(self.client.get(T::PATH)).await?)
    }

    async fn create(&self, session: &AdminSession, draft: &T::Draft) -> Result<T, ContentApiError> {
        let request = ApiClient::authorized(self.client.post(T::PATH), session).json(draft);
        if T::ECHOES_WRITES {
            return Ok(self.client.fetch(request).await?);
        }
        let ack: WriteAck = self.client.fetch(request).await?;
        let id = ack.id.ok_or_else(|| {
            ContentApiError::Decode(format!("{} create returned no id", T::NAME))
        })?;
        self.read_back(&id).await
    }

    async fn update(
        &self,
        session: &AdminSession,
        id: &str,
        patch: &T::Patch,
    ) -> Result<T, ContentApiError> {
        let url = self.client.segment_url(T::PATH, id)?;
        let request =
            ApiClient::authorized(self.client.request(Method::PUT, url), session).json(patch);
        if T::ECHOES_WRITES {
            return Ok(self.client.fetch(request).await?);
        }
        self.client.execute(request).await?;
        self.read_back(id).await
    }

    async fn delete(&self, session: &AdminSession, id: &str) -> Result<(), ContentApiError> {
        let url = self.client.segment_url(T::PATH, id)?;
        let request = ApiClient::authorized(self.client.request(Method::DELETE, url), session);
        Ok(self.client.execute(request).await?)
    }

    async fn reorder(
        &self,
        session: &AdminSession,
        entries: &[OrderEntry],
    ) -> Result<(), ContentApiError> {
        let path = format!("{}/reorder", T::PATH);
        let request = match T::REORDER {
            ReorderEndpoint::Post => self.client.post(&path),
            ReorderEndpoint::Put => self.client.put(&path),
            ReorderEndpoint::Unsupported => {
                return Err(ContentApiError::Rejected {
                    status: 405,
                    detail: Some(format!("{} has no reorder endpoint", T::NAME)),
                })
            }
        };
        let request = ApiClient::authorized(request, session).json(entries);
        Ok(self.client.execute(request).await?)
    }
}

/// Settings document read from `T::PATH`, written to `T::update_path()`.
pub struct HttpSettings<T> {
    client: ApiClient,
    _document: PhantomData<fn() -> T>,
}

impl<T: SettingsDocument> HttpSettings<T> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _document: PhantomData,
        }
    }
}

#[async_trait]
impl<T: SettingsDocument> SettingsDocumentPort<T> for HttpSettings<T> {
    async fn get(&self) -> Result<T, ContentApiError> {
        Ok(self.client.fetch(self.client.get(T::PATH)).await?)
    }

    async fn update(
        &self,
        session: &AdminSession,
        patch: &SettingsPatch,
    ) -> Result<T, ContentApiError> {
        let request =
            ApiClient::authorized(self.client.put(T::update_path()), session).json(patch);
        Ok(self.client.fetch(request).await?)
    }
}

/// Roadmap document plus its task endpoints.
pub struct HttpRoadmap {
    client: ApiClient,
    document: HttpSettings<RoadmapSettings>,
}

impl HttpRoadmap {
    pub fn new(client: ApiClient) -> Self {
        Self {
            document: HttpSettings::new(client.clone()),
            client,
        }
    }
}

#[async_trait]
impl SettingsDocumentPort<RoadmapSettings> for HttpRoadmap {
    async fn get(&self) -> Result<RoadmapSettings, ContentApiError> {
        self.document.get().await
    }

    async fn update(
        &self,
        session: &AdminSession,
        patch: &SettingsPatch,
    ) -> Result<RoadmapSettings, ContentApiError> {
        self.document.update(session, patch).await
    }
}

#[async_trait]
impl RoadmapPort for HttpRoadmap {
    async fn add_task(
        &self,
        session: &AdminSession,
        draft: &RoadmapTaskDraft,
    ) -> Result<RoadmapTask, ContentApiError> {
        let request =
            ApiClient::authorized(self.client.post("/roadmap/tasks"), session).json(draft);
        Ok(self.client.fetch(request).await?)
    }

    async fn update_task(
        &self,
        session: &AdminSession,
        id: &str,
        patch: &RoadmapTaskPatch,
    ) -> Result<(), ContentApiError> {
        let url = self.client.segment_url("/roadmap/tasks", id)?;
        let request =
            ApiClient::authorized(self.client.request(Method::PUT, url), session).json(patch);
        Ok(self.client.execute(request).await?)
    }

    async fn delete_task(&self, session: &AdminSession, id: &str) -> Result<(), ContentApiError> {
        let url = self.client.segment_url("/roadmap/tasks", id)?;
        let request = ApiClient::authorized(self.client.request(Method::DELETE, url), session);
        Ok(self.client.execute(request).await?)
    }

    async fn reorder_tasks(
        &self,
        session: &AdminSession,
        entries: &[OrderEntry],
    ) -> Result<(), ContentApiError> {
        let request =
            ApiClient::authorized(self.client.post("/roadmap/tasks/reorder"), session).json(entries);
        Ok(self.client.execute(request).await?)
    }
}

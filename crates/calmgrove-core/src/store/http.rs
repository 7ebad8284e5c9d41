//! HTTP-backed record store.
//!
//! Talks JSON to the remote wellness API: `POST /sessions`, `/trees`,
//! `/checkins` to append, `GET` on the same paths (filtered by
//! `userId`) to list. Non-success statuses map to
//! [`PersistenceError::Http`]; the caller logs and moves on.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use super::RecordStore;
use crate::error::PersistenceError;
use crate::records::{ForestTree, MoodCheckin, SessionRecord};

/// Record store client for the remote wellness API.
pub struct HttpRecordStore {
    client: Client,
    base_url: Url,
}

impl HttpRecordStore {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    async fn append<T>(&self, path: &str, record: &T) -> Result<T, PersistenceError>
    where
        T: Serialize + DeserializeOwned + Sync,
    {
        let url = self.endpoint(path);
        debug!(%url, "appending record");
        let resp = self.client.post(&url).json(record).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(PersistenceError::Http {
                operation: format!("POST /{path}"),
                status: status.as_u16(),
            });
        }
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn list<T>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, PersistenceError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!(%url, "listing records");
        let resp = self.client.get(&url).query(query).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(PersistenceError::Http {
                operation: format!("GET /{path}"),
                status: status.as_u16(),
            });
        }
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn append_session(
        &self,
        record: &SessionRecord,
    ) -> Result<SessionRecord, PersistenceError> {
        self.append("sessions", record).await
    }

    async fn append_tree(&self, record: &ForestTree) -> Result<ForestTree, PersistenceError> {
        self.append("trees", record).await
    }

    async fn append_mood_checkin(
        &self,
        record: &MoodCheckin,
    ) -> Result<MoodCheckin, PersistenceError> {
        self.append("checkins", record).await
    }

    async fn list_sessions(&self, user_id: &str) -> Result<Vec<SessionRecord>, PersistenceError> {
        self.list("sessions", &[("userId", user_id)]).await
    }

    async fn list_trees(&self, user_id: &str) -> Result<Vec<ForestTree>, PersistenceError> {
        self.list("trees", &[("userId", user_id)]).await
    }

    async fn list_mood_checkins(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<MoodCheckin>, PersistenceError> {
        let limit = limit.to_string();
        self.list("checkins", &[("userId", user_id), ("limit", &limit)])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionMode;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_session() -> SessionRecord {
        SessionRecord {
            id: Uuid::new_v4(),
            user_id: "u-1".into(),
            duration_secs: 300,
            mode: SessionMode::CalmFocus,
            started_at: Utc::now(),
            mood_before: 3,
            mood_after: 4,
        }
    }

    fn store_for(server: &mockito::ServerGuard) -> HttpRecordStore {
        HttpRecordStore::new(Url::parse(&server.url()).unwrap())
    }

    #[tokio::test]
    async fn append_session_posts_and_returns_stored_record() {
        let mut server = mockito::Server::new_async().await;
        let session = sample_session();
        let body = serde_json::to_string(&session).unwrap();
        let mock = server
            .mock("POST", "/sessions")
            .match_header("content-type", "application/json")
            .with_status(201)
            .with_body(&body)
            .create_async()
            .await;

        let stored = store_for(&server).append_session(&session).await.unwrap();
        assert_eq!(stored.id, session.id);
        assert_eq!(stored.duration_secs, 300);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn server_failure_maps_to_persistence_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/trees")
            .with_status(500)
            .create_async()
            .await;

        let tree = ForestTree::from_session(&sample_session());
        let err = store_for(&server).append_tree(&tree).await.unwrap_err();
        assert!(matches!(err, PersistenceError::Http { status: 500, .. }));
    }

    #[tokio::test]
    async fn list_sessions_filters_by_user() {
        let mut server = mockito::Server::new_async().await;
        let body = serde_json::to_string(&vec![sample_session()]).unwrap();
        let mock = server
            .mock("GET", "/sessions")
            .match_query(mockito::Matcher::UrlEncoded("userId".into(), "u-1".into()))
            .with_status(200)
            .with_body(&body)
            .create_async()
            .await;

        let sessions = store_for(&server).list_sessions("u-1").await.unwrap();
        assert_eq!(sessions.len(), 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn malformed_body_maps_to_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/trees")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let err = store_for(&server).list_trees("u-1").await.unwrap_err();
        assert!(matches!(err, PersistenceError::Decode(_)));
    }
}

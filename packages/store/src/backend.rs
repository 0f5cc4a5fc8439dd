//! HTTP client for the hosted backend's REST table protocol.
//!
//! Each table is exposed at `{base}/rest/v1/{table}` with query-parameter
//! filters (`id=eq.{id}`) and the `Prefer: return=representation` header to
//! get affected rows back from writes. Every request authenticates with the
//! project API key as both `apikey` and bearer token.

use async_trait::async_trait;
use guardian_models::{Identity, RecordId};
use serde::Serialize;

use crate::{RecordStore, Resource, StoreError};

/// Connection settings for the hosted backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Project base URL, e.g. `https://abc123.backend.example`.
    pub base_url: String,
    /// Project API key, sent as `apikey` and bearer token.
    pub api_key: String,
}

/// Client speaking the backend's REST table protocol.
///
/// Cheap to clone; the inner HTTP client pools connections.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Insert body for owned record kinds: the draft's fields plus the stamped
/// `user_id` column.
#[derive(Serialize)]
struct OwnedInsert<'a, D: Serialize> {
    #[serde(flatten)]
    draft: &'a D,
    user_id: &'a str,
}

impl BackendClient {
    /// Creates a client for the given backend project.
    #[must_use]
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn read_rows<R: Resource>(response: reqwest::Response) -> Result<Vec<R>, StoreError> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn read_single<R: Resource>(response: reqwest::Response) -> Result<R, StoreError> {
        let rows = Self::read_rows(response).await?;
        rows.into_iter().next().ok_or(StoreError::MissingRecord)
    }

    /// Turns a non-success response into [`StoreError::Api`], preferring the
    /// message the backend put in its error body.
    async fn error_from(response: reqwest::Response) -> StoreError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| {
                ["message", "msg", "error"]
                    .iter()
                    .find_map(|key| value.get(key)?.as_str().map(str::to_string))
            })
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    format!("request failed with status {status}")
                } else {
                    trimmed.to_string()
                }
            });
        StoreError::Api {
            status: status.as_u16(),
            message,
        }
    }

    async fn ok_or_api_error(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Self::error_from(response).await)
        }
    }
}

#[async_trait]
impl<R: Resource> RecordStore<R> for BackendClient {
    async fn select_all(&self) -> Result<Vec<R>, StoreError> {
        let response = self
            .authed(self.client.get(self.table_url(R::TABLE)))
            .query(&[("select", "*")])
            .send()
            .await?;
        let rows = Self::read_rows(Self::ok_or_api_error(response).await?).await?;
        log::debug!("Fetched {} rows from {}", rows.len(), R::TABLE);
        Ok(rows)
    }

    async fn insert(&self, identity: &Identity, draft: &R::Draft) -> Result<R, StoreError> {
        let request = self
            .authed(self.client.post(self.table_url(R::TABLE)))
            .header("Prefer", "return=representation");
        let request = if R::OWNED {
            request.json(&OwnedInsert {
                draft,
                user_id: &identity.user_id,
            })
        } else {
            request.json(draft)
        };
        let response = request.send().await?;
        Self::read_single(Self::ok_or_api_error(response).await?).await
    }

    async fn update(&self, id: &RecordId, patch: &R::Patch) -> Result<R, StoreError> {
        let response = self
            .authed(self.client.patch(self.table_url(R::TABLE)))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(patch)
            .send()
            .await?;
        Self::read_single(Self::ok_or_api_error(response).await?).await
    }

    async fn delete(&self, id: &RecordId) -> Result<(), StoreError> {
        let response = self
            .authed(self.client.delete(self.table_url(R::TABLE)))
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await?;
        Self::ok_or_api_error(response).await?;
        Ok(())
    }
}

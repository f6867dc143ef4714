use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use super::models::{Comment, Post, User};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned {status}")]
    Status { url: String, status: StatusCode },

    #[error("{url} sent an unreadable body: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

/// Read-only view of the public directory API.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    async fn users(&self) -> Result<Vec<User>, ApiError>;
    async fn user(&self, id: i64) -> Result<User, ApiError>;
    async fn posts(&self) -> Result<Vec<Post>, ApiError>;
    async fn post(&self, id: i64) -> Result<Post, ApiError>;
    async fn comments(&self) -> Result<Vec<Comment>, ApiError>;
}

#[derive(Clone)]
pub struct HttpDirectory {
    client: Client,
    base_url: String,
}

impl HttpDirectory {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "upstream GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Request { url: url.clone(), source })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "upstream returned error status");
            return Err(ApiError::Status { url, status });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { url, source })
    }
}

#[async_trait]
impl DirectoryApi for HttpDirectory {
    async fn users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/users").await
    }

    async fn user(&self, id: i64) -> Result<User, ApiError> {
        self.get_json(&format!("/users/{}", id)).await
    }

    async fn posts(&self) -> Result<Vec<Post>, ApiError> {
        self.get_json("/posts").await
    }

    async fn post(&self, id: i64) -> Result<Post, ApiError> {
        self.get_json(&format!("/posts/{}", id)).await
    }

    async fn comments(&self) -> Result<Vec<Comment>, ApiError> {
        self.get_json("/comments").await
    }
}

//! reqwest-backed [`AlbumStore`] talking to a JSONPlaceholder-style `/albums` resource.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::album::{Album, AlbumDraft};
use crate::error::TransportError;
use crate::remote::AlbumStore;

pub const DEFAULT_API_BASE: &str = "https://jsonplaceholder.typicode.com";

const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

#[derive(Debug, Clone)]
pub struct HttpAlbumStore {
    client: Client,
    base_url: String,
}

impl HttpAlbumStore {
    /// Build a store for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed (e.g. TLS backend init).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| TransportError::Request(err.to_string()))?;
        Ok(Self::with_client(base_url, client))
    }

    #[must_use]
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn albums_url(&self) -> String {
        format!("{}/albums", self.base_url)
    }

    fn album_url(&self, id: u64) -> String {
        format!("{}/albums/{id}", self.base_url)
    }
}

fn request_error(err: reqwest::Error) -> TransportError {
    TransportError::Request(err.to_string())
}

fn ensure_success(response: Response) -> Result<Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(TransportError::Status(status.as_u16()))
    }
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, TransportError> {
    let response = ensure_success(response)?;
    response
        .json::<T>()
        .await
        .map_err(|err| TransportError::Decode(err.to_string()))
}

impl AlbumStore for HttpAlbumStore {
    async fn fetch_all(&self) -> Result<Vec<Album>, TransportError> {
        let response = self
            .client
            .get(self.albums_url())
            .send()
            .await
            .map_err(request_error)?;
        decode_json(response).await
    }

    async fn create(&self, draft: AlbumDraft) -> Result<Album, TransportError> {
        let response = self
            .client
            .post(self.albums_url())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .json(&draft)
            .send()
            .await
            .map_err(request_error)?;
        decode_json(response).await
    }

    async fn update(&self, id: u64, album: Album) -> Result<Album, TransportError> {
        let response = self
            .client
            .put(self.album_url(id))
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .json(&album)
            .send()
            .await
            .map_err(request_error)?;
        decode_json(response).await
    }

    async fn delete(&self, id: u64) -> Result<(), TransportError> {
        let response = self
            .client
            .delete(self.album_url(id))
            .send()
            .await
            .map_err(request_error)?;
        ensure_success(response).map(|_| ())
    }
}

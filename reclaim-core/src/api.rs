use std::time::Duration;

use reqwest::blocking::{Client, Response};

use crate::error::{ReclaimError, Result};
use crate::model::{CleanupRequest, CleanupResult, FileListResponse, FileRecord};

/// Request timeout for every backend call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking client for the cleanup backend REST API.
///
/// All calls block for up to [`REQUEST_TIMEOUT`]; callers that need a
/// responsive UI run them on a worker thread.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` is the server root, e.g. `http://localhost:8080`;
    /// the `/api` prefix is appended here.
    pub fn new(base_url: &str) -> Result<Self> {
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ReclaimError::InvalidBaseUrl(base_url.to_string()));
        }
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: format!("{}/api", base_url.trim_end_matches('/')),
        })
    }

    /// `GET /api/files/large/{minSizeBytes}?limit=N`
    pub fn fetch_large_files(&self, min_size_bytes: u64, limit: usize) -> Result<Vec<FileRecord>> {
        let url = format!("{}/files/large/{min_size_bytes}?limit={limit}", self.base_url);
        self.get_files(&url)
    }

    /// `GET /api/files/category/{category}?limit=N`
    pub fn fetch_category(&self, category: &str, limit: usize) -> Result<Vec<FileRecord>> {
        let url = format!("{}/files/category/{category}?limit={limit}", self.base_url);
        self.get_files(&url)
    }

    fn get_files(&self, url: &str) -> Result<Vec<FileRecord>> {
        log::debug!("GET {url}");
        let response = self.http.get(url).send()?;
        let response = check_status(response)?;
        let body: FileListResponse = response.json()?;
        Ok(body.files)
    }

    /// `POST /api/cleanup/large-files` with the confirmed id list.
    /// All-or-nothing per request; there is no per-file failure reporting.
    pub fn cleanup(&self, file_ids: Vec<String>) -> Result<CleanupResult> {
        let url = format!("{}/cleanup/large-files", self.base_url);
        log::debug!("POST {url} ({} ids)", file_ids.len());
        let request = CleanupRequest {
            file_ids,
            confirm: true,
        };
        let response = self.http.post(&url).json(&request).send()?;
        let response = check_status(response)?;
        Ok(response.json()?)
    }
}

/// Map a non-2xx response to an error, logging the raw body.
/// Timeouts, 4xx and 5xx are not distinguished beyond the log line.
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    log::warn!("backend returned {status}: {body}");
    Err(ReclaimError::Api {
        status: status.as_u16(),
        body,
    })
}

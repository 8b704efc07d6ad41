use std::time::Duration;

use async_trait::async_trait;
use const_format::concatcp;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;
use url::Url;

use crate::error::{AdminError, Result};
use crate::responses::{MessageResponse, OfferRequest, StatusUpdate};
use crate::types::{Project, ProjectSnapshot};

/// Relative prefix every admin endpoint lives under.
const API_PREFIX: &str = "api";
const PROJECTS_PATH: &str = concatcp!(API_PREFIX, "/projects");

/// Operations the dashboard needs from the admin backend.
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// `GET /projects`: every project grouped by lane.
    async fn fetch_projects(&self) -> Result<ProjectSnapshot>;

    /// `GET /projects/{id}`
    async fn fetch_project(&self, id: i64) -> Result<Project>;

    /// `POST /projects/{id}/offer`
    async fn send_offer(&self, id: i64, offer: &OfferRequest) -> Result<()>;

    /// `POST /projects/{id}/status`
    async fn update_status(&self, id: i64, update: &StatusUpdate) -> Result<()>;
}

pub struct AdminClient {
    http: Client,
    base_url: Url,
}

impl AdminClient {
    /// Every request, including reading the body, fails after `timeout`.
    pub fn new(mut base_url: Url, timeout: Duration) -> Result<Self> {
        // Url::join drops the last segment unless the path ends with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|_| AdminError::InvalidUrl(format!("{}{path}", self.base_url)))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        debug!(%url, "GET");

        let response = self.http.get(url).send().await?;
        let response = check_status(response).await?;

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<MessageResponse> {
        let url = self.endpoint(path)?;
        debug!(%url, "POST");

        let response = self.http.post(url).json(body).send().await?;
        let response = check_status(response).await?;

        // Write endpoints only acknowledge; an unexpected body is not a failure.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }
}

async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    Err(AdminError::ApiError {
        status: response.status().as_u16(),
        message: response
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read response body>".to_string()),
    })
}

#[async_trait]
impl AdminApi for AdminClient {
    async fn fetch_projects(&self) -> Result<ProjectSnapshot> {
        let snapshot: ProjectSnapshot = self.get(PROJECTS_PATH).await?;
        debug!(count = snapshot.len(), "Fetched projects");
        Ok(snapshot)
    }

    async fn fetch_project(&self, id: i64) -> Result<Project> {
        match self.get(&format!("{PROJECTS_PATH}/{id}")).await {
            Err(AdminError::ApiError { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(AdminError::ProjectNotFound(id))
            }
            other => other,
        }
    }

    async fn send_offer(&self, id: i64, offer: &OfferRequest) -> Result<()> {
        let ack = self
            .post(&format!("{PROJECTS_PATH}/{id}/offer"), offer)
            .await?;
        debug!(id, message = %ack.message, "Offer accepted by API");
        Ok(())
    }

    async fn update_status(&self, id: i64, update: &StatusUpdate) -> Result<()> {
        let ack = self
            .post(&format!("{PROJECTS_PATH}/{id}/status"), update)
            .await?;
        debug!(id, message = %ack.message, "Status update accepted by API");
        Ok(())
    }
}

use fetcher::{FetchError, FetchOptions, Fetcher, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Result;
use crate::types::{DataEnvelope, NewProject, NewTraining, Project, Training};

pub const PROJECTS_PATH: &str = "/api/projects";
pub const TRAININGS_PATH: &str = "/api/trainings";

/// Typed access to the HTTP API.
///
/// Every call goes through the [`Fetcher`]; the session token, when set, is
/// sent as a Bearer token.
#[derive(Clone)]
pub struct ApiClient {
    fetcher: Fetcher,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(fetcher: Fetcher) -> Self {
        Self {
            fetcher,
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn authorized(&self, options: FetchOptions) -> FetchOptions {
        match &self.token {
            Some(token) => options.bearer(token),
            None => options,
        }
    }

    pub async fn fetch_projects(&self) -> Result<Vec<Project>> {
        let response = self
            .fetcher
            .fetch(PROJECTS_PATH, self.authorized(FetchOptions::get()))
            .await?;
        decode_data(response).await
    }

    pub async fn fetch_trainings(&self) -> Result<Vec<Training>> {
        let response = self
            .fetcher
            .fetch(TRAININGS_PATH, self.authorized(FetchOptions::get()))
            .await?;
        decode_data(response).await
    }

    pub async fn create_project(&self, input: &NewProject) -> Result<Project> {
        let options = self.authorized(FetchOptions::post().json(input)?);
        let response = self.fetcher.fetch(PROJECTS_PATH, options).await?;
        decode_data(response).await
    }

    pub async fn create_training(&self, input: &NewTraining) -> Result<Training> {
        let options = self.authorized(FetchOptions::post().json(input)?);
        let response = self.fetcher.fetch(TRAININGS_PATH, options).await?;
        decode_data(response).await
    }
}

async fn decode_data<T: DeserializeOwned>(response: Response) -> Result<T> {
    let url = response.url().to_string();
    let text = response.text().await.map_err(FetchError::from)?;
    let envelope: DataEnvelope<T> = serde_json::from_str(&text)?;
    debug!(url = %url, "Decoded API response");
    Ok(envelope.data)
}

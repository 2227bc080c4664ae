use panelctl_common::{params::SaveUserParams, views::User};
use reqwest::{Client, Response, StatusCode};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ApiClientError {
    /// The server answered with a status outside 200-299. Carries the
    /// response body text when there was one.
    #[error("{method} {url} failed with status {status}")]
    Status {
        method: &'static str,
        url: String,
        status: StatusCode,
        body: Option<String>,
    },

    #[error("Failed to build HTTP client: {0}")]
    Builder(reqwest::Error),

    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),
}

impl ApiClientError {
    /// The HTTP status the server answered with, if this error came from a
    /// non-success response rather than a transport failure.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Client for the admin-panel user API. Holds the base URL and a reusable
/// HTTP client; every operation is a single request with no retry.
#[derive(Debug, Clone)]
pub struct ApiClient {
    api_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(api_url: String) -> Result<Self, ApiClientError> {
        let client = Client::builder()
            .user_agent(format!("panelctl/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiClientError::Builder)?;

        Ok(Self { api_url, client })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn get<TResult>(&self, path: &str) -> Result<TResult, ApiClientError>
    where
        TResult: serde::de::DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        Self::classify("GET", url, response).await
    }

    async fn post<TBody, TResult>(&self, path: &str, body: &TBody) -> Result<TResult, ApiClientError>
    where
        TBody: serde::ser::Serialize,
        TResult: serde::de::DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;
        Self::classify("POST", url, response).await
    }

    async fn put<TBody, TResult>(&self, path: &str, body: &TBody) -> Result<TResult, ApiClientError>
    where
        TBody: serde::ser::Serialize,
        TResult: serde::de::DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%url, "PUT");
        let response = self
            .client
            .put(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;
        Self::classify("PUT", url, response).await
    }

    async fn delete<TResult>(&self, path: &str) -> Result<TResult, ApiClientError>
    where
        TResult: serde::de::DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%url, "DELETE");
        let response = self.client.delete(&url).send().await?;
        Self::classify("DELETE", url, response).await
    }

    /// Sort the response into success or failure before touching the body:
    /// 2xx decodes as the expected payload, anything else becomes a typed
    /// error carrying the status and whatever body text the server sent.
    async fn classify<TResult>(
        method: &'static str,
        url: String,
        response: Response,
    ) -> Result<TResult, ApiClientError>
    where
        TResult: serde::de::DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok().filter(|b| !b.is_empty());
            return Err(ApiClientError::Status {
                method,
                url,
                status,
                body,
            });
        }

        response.json::<TResult>().await.map_err(ApiClientError::Reqwest)
    }

    /// POST `/users`. The backend assigns the identifier and echoes the
    /// created record back.
    pub async fn create_user(&self, params: &SaveUserParams) -> Result<User, ApiClientError> {
        self.post("/users", params).await
    }

    /// GET `/users/{id}`. The identifier is embedded as given; the backend
    /// owns validation.
    pub async fn user(&self, id: &str) -> Result<User, ApiClientError> {
        self.get(&format!("/users/{id}")).await
    }

    /// GET `/users`, the whole collection in server order.
    pub async fn users(&self) -> Result<Vec<User>, ApiClientError> {
        self.get("/users").await
    }

    /// PUT `/users/{id}` with the replacement field values. Returns the
    /// updated record.
    pub async fn update_user(
        &self,
        id: &str,
        params: &SaveUserParams,
    ) -> Result<User, ApiClientError> {
        self.put(&format!("/users/{id}"), params).await
    }

    /// DELETE `/users/{id}`. The backend answers with a bare boolean
    /// deletion status.
    pub async fn delete_user(&self, id: &str) -> Result<bool, ApiClientError> {
        self.delete(&format!("/users/{id}")).await
    }
}

use crate::errors::ClientError;
use crate::models::{ApiErrorBody, ProcessRequest, Stats, TaskList};
use reqwest::{Client, Method, Response};
use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// The server-side task endpoints the controller depends on.
pub trait TaskApi: Send + Sync {
    fn list_tasks(&self) -> impl Future<Output = Result<TaskList, ClientError>> + Send;

    fn process_tasks(
        &self,
        request: &ProcessRequest,
    ) -> impl Future<Output = Result<TaskList, ClientError>> + Send;

    fn stats(&self) -> impl Future<Output = Result<Stats, ClientError>> + Send;

    /// Raw CSV bytes.
    fn export_csv(&self) -> impl Future<Output = Result<Vec<u8>, ClientError>> + Send;

    fn clear_tasks(&self) -> impl Future<Output = Result<(), ClientError>> + Send;
}

#[derive(Clone)]
pub struct HttpTaskApi {
    client: Client,
    base_url: String,
}

impl HttpTaskApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ClientError> {
        let url = format!("{}{path}", self.base_url);
        debug!(%method, %url, "task api request");

        let mut builder = self.client.request(method, &url);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let response = builder.send().await?;
        ensure_success(response).await
    }
}

async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ApiErrorBody>().await {
        Ok(body) if !body.error.is_empty() => body.error,
        _ => "Request failed".to_string(),
    };
    Err(ClientError::api(status.as_u16(), message))
}

impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> Result<TaskList, ClientError> {
        let response = self.request::<()>(Method::GET, "/api/tasks", None).await?;
        decode(response).await
    }

    async fn process_tasks(&self, request: &ProcessRequest) -> Result<TaskList, ClientError> {
        let response = self
            .request(Method::POST, "/api/tasks/process", Some(request))
            .await?;
        decode(response).await
    }

    async fn stats(&self) -> Result<Stats, ClientError> {
        let response = self
            .request::<()>(Method::GET, "/api/tasks/stats", None)
            .await?;
        decode(response).await
    }

    async fn export_csv(&self) -> Result<Vec<u8>, ClientError> {
        let response = self
            .request::<()>(Method::GET, "/api/tasks/export", None)
            .await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn clear_tasks(&self) -> Result<(), ClientError> {
        self.request::<()>(Method::DELETE, "/api/tasks", None)
            .await?;
        Ok(())
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

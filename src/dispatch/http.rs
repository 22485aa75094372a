use super::Executor;
use super::report::ExecutionOutput;
use crate::error::DispatchError;
use futures::future::BoxFuture;
use serde::Serialize;

pub const EXECUTE_COMMAND_PATH: &str = "/api/execute-command";

/// Executor that posts each command to a backend's `/api/execute-command`.
pub struct HttpExecutor {
    client: reqwest::Client,
    base_url: String,
}

impl HttpExecutor {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Uses a preconfigured client, e.g. with proxies or TLS settings.
    pub fn with_client(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, EXECUTE_COMMAND_PATH)
    }
}

#[derive(Serialize)]
struct ExecuteRequest<'a> {
    command: &'a str,
}

impl Executor for HttpExecutor {
    fn execute<'a>(
        &'a self,
        command: &'a str,
    ) -> BoxFuture<'a, Result<ExecutionOutput, DispatchError>> {
        Box::pin(async move {
            let resp = self
                .client
                .post(self.endpoint())
                .json(&ExecuteRequest { command })
                .send()
                .await
                .map_err(|e| DispatchError::Request(e.to_string()))?;

            if !resp.status().is_success() {
                let status = resp.status().as_u16();
                let body = resp.text().await.unwrap_or_default();
                return Err(DispatchError::Status { status, body });
            }

            resp.json::<ExecutionOutput>()
                .await
                .map_err(|e| DispatchError::Decode(e.to_string()))
        })
    }
}

//! Long-running operation polling

use crate::client::{segment_url, CloudClient};
use dsc_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);
const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(15 * 60);

/// Status of a failed operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OperationStatus {
    pub code: i32,
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Operation {
    pub id: String,
    pub description: String,
    pub done: bool,
    pub metadata: Option<serde_json::Value>,
    pub error: Option<OperationStatus>,
    pub response: Option<serde_json::Value>,
}

impl Operation {
    /// Turn an operation error into [`Error::Operation`]
    pub fn into_result(self) -> Result<Self> {
        match self.error {
            Some(status) => Err(Error::operation(self.id, status.message)),
            None => Ok(self),
        }
    }

    /// Decode the response of a finished operation
    pub fn into_response<T: DeserializeOwned>(self) -> Result<T> {
        let operation = self.into_result()?;
        let Some(response) = operation.response else {
            return Err(Error::operation(
                operation.id,
                "operation finished without a response",
            ));
        };
        serde_json::from_value(response).map_err(Error::from)
    }
}

/// Polls operations until they finish
#[derive(Clone)]
pub struct OperationWaiter {
    client: CloudClient,
    poll_interval: Duration,
    timeout: Duration,
}

impl OperationWaiter {
    pub fn new(client: CloudClient) -> Self {
        Self {
            client,
            poll_interval: DEFAULT_POLL_INTERVAL,
            timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch the current state of an operation
    pub async fn get(&self, id: &str) -> Result<Operation> {
        let base = format!("{}/operations", self.client.endpoints().operation);
        let url = segment_url(&base, id)?;
        self.client.get_json("operation", "get", &url, &[]).await
    }

    /// Poll until `operation` is done, then decode its response
    pub async fn wait<T: DeserializeOwned>(&self, operation: Operation) -> Result<T> {
        self.wait_done(operation).await?.into_response()
    }

    /// Poll until `operation` is done and succeeded
    pub async fn wait_done(&self, mut operation: Operation) -> Result<Operation> {
        let started = tokio::time::Instant::now();
        while !operation.done {
            if started.elapsed() >= self.timeout {
                return Err(Error::operation(
                    &operation.id,
                    format!("not finished after {}s", self.timeout.as_secs()),
                ));
            }
            tokio::time::sleep(self.poll_interval).await;
            tracing::debug!(operation = %operation.id, "Polling operation");
            operation = self.get(&operation.id).await?;
        }
        operation.into_result()
    }
}

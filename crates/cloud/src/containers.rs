//! Serverless containers client

use crate::client::{segment_url, CloudClient};
use crate::models::{
    AccessBinding, Container, ContainerList, CreateContainerRequest, DeployRevisionRequest,
    Revision, SetAccessBindingsRequest, Subject,
};
use crate::operation::{Operation, OperationWaiter};
use dsc_core::{
    Result, RevisionSpec, ALL_USERS_SUBJECT_ID, INVOKER_ROLE_ID, LIST_CONTAINERS_PAGE_SIZE,
    SYSTEM_SUBJECT_TYPE,
};

const SERVICE: &str = "containers";

/// Container lookup, creation and revision deployment
#[derive(Clone)]
pub struct ContainerClient {
    client: CloudClient,
    waiter: OperationWaiter,
}

impl ContainerClient {
    pub fn new(client: CloudClient) -> Self {
        let waiter = OperationWaiter::new(client.clone());
        Self { client, waiter }
    }

    /// Replace the operation waiter (poll interval, timeout)
    pub fn with_waiter(mut self, waiter: OperationWaiter) -> Self {
        self.waiter = waiter;
        self
    }

    fn containers_url(&self) -> String {
        format!("{}/containers/v1/containers", self.client.endpoints().containers)
    }

    /// First container in the folder with exactly this name
    pub async fn find_by_name(&self, folder_id: &str, name: &str) -> Result<Option<Container>> {
        let query = [
            ("folderId", folder_id.to_string()),
            ("pageSize", LIST_CONTAINERS_PAGE_SIZE.to_string()),
            ("filter", format!("name = \"{name}\"")),
        ];
        let list: ContainerList = self
            .client
            .get_json(SERVICE, "list containers", &self.containers_url(), &query)
            .await?;
        Ok(list.containers.into_iter().next())
    }

    /// Create a container and wait for it to exist
    pub async fn create(&self, folder_id: &str, name: &str, description: &str) -> Result<Container> {
        let body = CreateContainerRequest {
            folder_id,
            name,
            description,
        };
        let operation: Operation = self
            .client
            .post_json(SERVICE, "create container", &self.containers_url(), &body)
            .await?;
        self.waiter.wait(operation).await
    }

    /// Deploy a new revision and wait for it to be created
    pub async fn deploy_revision(&self, container_id: &str, spec: &RevisionSpec) -> Result<Revision> {
        let url = format!("{}:deployRevision", self.containers_url());
        let body = DeployRevisionRequest::new(container_id, spec);
        let operation: Operation = self
            .client
            .post_json(SERVICE, "deploy revision", &url, &body)
            .await?;
        self.waiter.wait(operation).await
    }

    /// Allow unauthenticated invocation of the container
    pub async fn set_public_access(&self, container_id: &str) -> Result<()> {
        let url = segment_url(
            &self.containers_url(),
            &format!("{container_id}:setAccessBindings"),
        )?;
        let body = SetAccessBindingsRequest {
            access_bindings: vec![AccessBinding {
                role_id: INVOKER_ROLE_ID,
                subject: Subject {
                    id: ALL_USERS_SUBJECT_ID,
                    kind: SYSTEM_SUBJECT_TYPE,
                },
            }],
        };
        let operation: Operation = self
            .client
            .post_json(SERVICE, "set access bindings", &url, &body)
            .await?;
        self.waiter.wait_done(operation).await?;
        Ok(())
    }
}

//! Wire shapes of the containers API

use dsc_core::{LogOptions, Mount, Resources, RevisionSpec, SecretReference};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Container {
    pub id: String,
    pub folder_id: String,
    pub name: String,
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Revision {
    pub id: String,
    pub container_id: String,
    pub status: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ContainerList {
    pub containers: Vec<Container>,
    pub next_page_token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateContainerRequest<'a> {
    pub folder_id: &'a str,
    pub name: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub description: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct CommandSpec<'a> {
    pub command: &'a [String],
}

#[derive(Debug, Serialize)]
pub(crate) struct ArgsSpec<'a> {
    pub args: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImageSpec<'a> {
    pub image_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<CommandSpec<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<ArgsSpec<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<&'a BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<&'a str>,
}

/// Body of `containers:deployRevision`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployRevisionRequest<'a> {
    container_id: &'a str,
    resources: &'a Resources,
    /// Duration in protobuf JSON form, e.g. `"3s"`
    execution_timeout: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    service_account_id: Option<&'a str>,
    image_spec: ImageSpec<'a>,
    concurrency: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    secrets: Option<&'a [SecretReference]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_options: Option<&'a LogOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mounts: Option<&'a [Mount]>,
}

impl<'a> DeployRevisionRequest<'a> {
    pub fn new(container_id: &'a str, spec: &'a RevisionSpec) -> Self {
        Self {
            container_id,
            resources: &spec.resources,
            execution_timeout: format!("{}s", spec.execution_timeout_secs),
            service_account_id: spec.service_account_id.as_deref(),
            image_spec: ImageSpec {
                image_url: &spec.image_url,
                command: (!spec.command.is_empty()).then_some(CommandSpec {
                    command: &spec.command,
                }),
                args: (!spec.args.is_empty()).then_some(ArgsSpec { args: &spec.args }),
                environment: non_empty_map(&spec.environment),
                working_dir: spec.working_dir.as_deref(),
            },
            concurrency: spec.concurrency,
            secrets: non_empty(&spec.secrets),
            log_options: spec.log_options.as_ref(),
            mounts: non_empty(&spec.mounts),
        }
    }
}

fn non_empty<T>(items: &[T]) -> Option<&[T]> {
    (!items.is_empty()).then_some(items)
}

fn non_empty_map(map: &BTreeMap<String, String>) -> Option<&BTreeMap<String, String>> {
    (!map.is_empty()).then_some(map)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Subject<'a> {
    pub id: &'a str,
    #[serde(rename = "type")]
    pub kind: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AccessBinding<'a> {
    pub role_id: &'a str,
    pub subject: Subject<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SetAccessBindingsRequest<'a> {
    pub access_bindings: Vec<AccessBinding<'a>>,
}

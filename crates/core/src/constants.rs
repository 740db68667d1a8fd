/// Constants used throughout the dsc codebase
// Secret resolution
pub const LATEST_VERSION: &str = "latest";
pub const DEFAULT_SECRETS_CONCURRENCY: usize = 5;
pub const LIST_SECRETS_PAGE_SIZE: u32 = 100;

// Containers
pub const LIST_CONTAINERS_PAGE_SIZE: u32 = 100;
pub const INVOKER_ROLE_ID: &str = "serverless.containers.invoker";
pub const ALL_USERS_SUBJECT_ID: &str = "allUsers";
pub const SYSTEM_SUBJECT_TYPE: &str = "system";

// Default control plane endpoints
pub const DEFAULT_LOCKBOX_ENDPOINT: &str = "https://lockbox.api.cloud.yandex.net";
pub const DEFAULT_CONTAINERS_ENDPOINT: &str = "https://serverless-containers.api.cloud.yandex.net";
pub const DEFAULT_OPERATION_ENDPOINT: &str = "https://operation.api.cloud.yandex.net";
pub const DEFAULT_IAM_ENDPOINT: &str = "https://iam.api.cloud.yandex.net";
pub const DEFAULT_AUTH_ENDPOINT: &str = "https://auth.yandex.cloud";

// Environment variable names
pub const DSC_LOG_VAR: &str = "DSC_LOG";
pub const DSC_LOCKBOX_ENDPOINT_VAR: &str = "DSC_LOCKBOX_ENDPOINT";
pub const DSC_CONTAINERS_ENDPOINT_VAR: &str = "DSC_CONTAINERS_ENDPOINT";
pub const DSC_OPERATION_ENDPOINT_VAR: &str = "DSC_OPERATION_ENDPOINT";
pub const DSC_IAM_ENDPOINT_VAR: &str = "DSC_IAM_ENDPOINT";
pub const DSC_AUTH_ENDPOINT_VAR: &str = "DSC_AUTH_ENDPOINT";
pub const INPUT_VAR_PREFIX: &str = "INPUT_";
pub const GITHUB_OUTPUT_VAR: &str = "GITHUB_OUTPUT";
pub const GITHUB_REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";
pub const ID_TOKEN_REQUEST_URL_VAR: &str = "ACTIONS_ID_TOKEN_REQUEST_URL";
pub const ID_TOKEN_REQUEST_TOKEN_VAR: &str = "ACTIONS_ID_TOKEN_REQUEST_TOKEN";

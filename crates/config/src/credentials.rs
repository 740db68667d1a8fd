//! Credential inputs

use crate::{inputs::ActionInputs, names};
use dsc_core::{Credentials, Error, Result, ServiceAccountKey};

/// Parse an authorized key exported as JSON
pub fn parse_service_account_key(json: &str) -> Result<ServiceAccountKey> {
    Ok(serde_json::from_str(json)?)
}

/// Pick the credential source: key JSON, then IAM token, then federation
pub fn parse_credentials(inputs: &ActionInputs) -> Result<Credentials> {
    let key = inputs.get_input(names::SA_JSON_CREDENTIALS);
    let token = inputs.get_input(names::IAM_TOKEN);
    let service_account_id = inputs.get_input(names::SA_ID);

    let supplied = [key.is_some(), token.is_some(), service_account_id.is_some()]
        .into_iter()
        .filter(|set| *set)
        .count();
    if supplied > 1 {
        tracing::warn!(
            "Several credential inputs are set; using the first of {}, {}, {}",
            names::SA_JSON_CREDENTIALS,
            names::IAM_TOKEN,
            names::SA_ID
        );
    }

    if let Some(json) = key {
        return parse_service_account_key(&json).map(Credentials::ServiceAccountKey);
    }
    if let Some(token) = token {
        return Ok(Credentials::IamToken(token));
    }
    if let Some(service_account_id) = service_account_id {
        return Ok(Credentials::Federated { service_account_id });
    }
    Err(Error::configuration(format!(
        "one of {}, {} or {} must be supplied",
        names::SA_JSON_CREDENTIALS,
        names::IAM_TOKEN,
        names::SA_ID
    )))
}

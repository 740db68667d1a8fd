//! IAM token sources

use crate::client::{decode, http_client};
use crate::endpoints::CloudEndpoints;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use dsc_core::{
    Credentials, Error, Result, ServiceAccountKey, ID_TOKEN_REQUEST_TOKEN_VAR,
    ID_TOKEN_REQUEST_URL_VAR,
};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

/// Audience of service account JWTs
pub const IAM_TOKEN_AUDIENCE: &str = "https://iam.api.cloud.yandex.net/iam/v1/tokens";

const TOKEN_EXCHANGE_GRANT: &str = "urn:ietf:params:oauth:grant-type:token-exchange";
const ACCESS_TOKEN_TYPE: &str = "urn:ietf:params:oauth:token-type:access_token";
const ID_TOKEN_TYPE: &str = "urn:ietf:params:oauth:token-type:id_token";

/// Something that can produce an IAM token
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn token(&self) -> Result<String>;
}

/// Pick the token source matching the configured credentials
pub fn token_source(
    credentials: &Credentials,
    endpoints: &CloudEndpoints,
) -> Result<Box<dyn TokenSource>> {
    let source: Box<dyn TokenSource> = match credentials {
        Credentials::IamToken(token) => Box::new(StaticTokenSource::new(token.clone())),
        Credentials::ServiceAccountKey(key) => Box::new(ServiceAccountKeyTokenSource::new(
            key.clone(),
            &endpoints.iam,
        )?),
        Credentials::Federated { service_account_id } => Box::new(
            FederatedTokenSource::from_env(service_account_id.clone(), &endpoints.auth)?,
        ),
    };
    Ok(source)
}

/// A ready IAM token
pub struct StaticTokenSource {
    token: String,
}

impl StaticTokenSource {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenSource for StaticTokenSource {
    async fn token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}

#[derive(Debug, Serialize)]
struct JwtClaims<'a> {
    iss: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Serialize)]
struct CreateIamTokenRequest<'a> {
    jwt: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateIamTokenResponse {
    iam_token: String,
}

/// Exchanges a signed JWT for an IAM token
pub struct ServiceAccountKeyTokenSource {
    http: reqwest::Client,
    key: ServiceAccountKey,
    encoding_key: EncodingKey,
    tokens_url: String,
}

impl ServiceAccountKeyTokenSource {
    /// Fails when the private key is not a valid RSA PEM
    pub fn new(key: ServiceAccountKey, iam_endpoint: &str) -> Result<Self> {
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key_pem().as_bytes())
            .map_err(|e| Error::authentication(format!("invalid service account private key: {e}")))?;
        Ok(Self {
            http: http_client()?,
            key,
            encoding_key,
            tokens_url: format!("{}/iam/v1/tokens", iam_endpoint.trim_end_matches('/')),
        })
    }

    /// PS256 JWT valid for one hour
    pub fn signed_jwt(&self) -> Result<String> {
        let now = Utc::now();
        let claims = JwtClaims {
            iss: &self.key.service_account_id,
            aud: IAM_TOKEN_AUDIENCE,
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
        };
        let mut header = Header::new(Algorithm::PS256);
        header.kid = Some(self.key.id.clone());

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| Error::authentication(format!("failed to sign JWT: {e}")))
    }
}

#[async_trait]
impl TokenSource for ServiceAccountKeyTokenSource {
    async fn token(&self) -> Result<String> {
        let jwt = self.signed_jwt()?;
        tracing::debug!(key_id = %self.key.id, "Exchanging service account JWT for an IAM token");
        let response = self
            .http
            .post(&self.tokens_url)
            .json(&CreateIamTokenRequest { jwt: &jwt })
            .send()
            .await?;
        let body: CreateIamTokenResponse = decode("iam", "create token", response).await?;
        Ok(body.iam_token)
    }
}

#[derive(Deserialize)]
struct IdTokenResponse {
    value: String,
}

#[derive(Deserialize)]
struct TokenExchangeResponse {
    access_token: String,
}

/// Exchanges the CI workload identity token for a service account IAM token
pub struct FederatedTokenSource {
    http: reqwest::Client,
    service_account_id: String,
    id_token_url: String,
    id_token_request_token: String,
    exchange_url: String,
}

impl FederatedTokenSource {
    pub fn new(
        service_account_id: impl Into<String>,
        id_token_url: impl Into<String>,
        id_token_request_token: impl Into<String>,
        auth_endpoint: &str,
    ) -> Result<Self> {
        Ok(Self {
            http: http_client()?,
            service_account_id: service_account_id.into(),
            id_token_url: id_token_url.into(),
            id_token_request_token: id_token_request_token.into(),
            exchange_url: format!("{}/oauth/token", auth_endpoint.trim_end_matches('/')),
        })
    }

    /// Read the ID token request coordinates the CI runner exposes
    pub fn from_env(service_account_id: impl Into<String>, auth_endpoint: &str) -> Result<Self> {
        let read = |name: &str| {
            std::env::var(name).map_err(|_| {
                Error::authentication(format!(
                    "{name} is not set; grant the workflow `id-token: write` permission"
                ))
            })
        };
        Self::new(
            service_account_id,
            read(ID_TOKEN_REQUEST_URL_VAR)?,
            read(ID_TOKEN_REQUEST_TOKEN_VAR)?,
            auth_endpoint,
        )
    }

    async fn id_token(&self) -> Result<String> {
        let response = self
            .http
            .get(&self.id_token_url)
            .bearer_auth(&self.id_token_request_token)
            .send()
            .await?;
        let body: IdTokenResponse = decode("actions", "get id token", response).await?;
        Ok(body.value)
    }
}

#[async_trait]
impl TokenSource for FederatedTokenSource {
    async fn token(&self) -> Result<String> {
        let subject_token = self.id_token().await?;
        tracing::debug!(
            service_account = %self.service_account_id,
            "Exchanging workload identity token"
        );
        let form = [
            ("grant_type", TOKEN_EXCHANGE_GRANT),
            ("requested_token_type", ACCESS_TOKEN_TYPE),
            ("audience", self.service_account_id.as_str()),
            ("subject_token", subject_token.as_str()),
            ("subject_token_type", ID_TOKEN_TYPE),
        ];
        let response = self
            .http
            .post(&self.exchange_url)
            .form(&form)
            .send()
            .await?;
        let body: TokenExchangeResponse = decode("auth", "exchange token", response).await?;
        Ok(body.access_token)
    }
}

use crate::domain::model::{CreateUserRequest, DocumentsPatch, NodeRequest, OauthRequest, SubnetRequest};
use crate::domain::ports::{CredentialProvider, PaymentsGateway};
use crate::utils::error::{Result, RiseError};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Duration;

pub const HEADER_GATEWAY: &str = "X-SP-GATEWAY";
pub const HEADER_USER_IP: &str = "X-SP-USER-IP";
pub const HEADER_USER: &str = "X-SP-USER";

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Typed client for the SynapseFi-style payments API. Each method maps to one
/// upstream endpoint and returns the upstream JSON body, or a structured error
/// for transport failures and non-2xx replies.
pub struct SynapseClient<C: CredentialProvider> {
    credentials: C,
    client: Client,
}

impl<C: CredentialProvider> SynapseClient<C> {
    pub fn new(credentials: C) -> Result<Self> {
        Self::with_timeout(credentials, Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn with_timeout(credentials: C, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            credentials,
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.credentials.base_url(), path)
    }

    /// Attaches the three identity headers. OAuth-scoped calls replace the
    /// user fingerprint with the access token prepended to it, per the
    /// upstream contract.
    fn identify(&self, request: RequestBuilder, oauth_token: Option<&str>) -> RequestBuilder {
        let user = match oauth_token {
            Some(token) => format!("{}{}", token, self.credentials.user()),
            None => self.credentials.user().to_string(),
        };

        request
            .header(HEADER_GATEWAY, self.credentials.gateway())
            .header(HEADER_USER_IP, self.credentials.user_ip())
            .header(HEADER_USER, user)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Value> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(status = %status, "Upstream response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RiseError::UpstreamError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl<C: CredentialProvider> PaymentsGateway for SynapseClient<C> {
    async fn get_all_users(&self, page: Option<u32>, per_page: Option<u32>) -> Result<Value> {
        let url = self.url("/users");
        tracing::debug!(%url, "GET all users");

        let mut query = Vec::new();
        if let Some(page) = page {
            query.push(("page", page));
        }
        if let Some(per_page) = per_page {
            query.push(("per_page", per_page));
        }

        let request = self.identify(self.client.get(&url).query(&query), None);
        self.execute(request).await
    }

    async fn get_user(&self, user_id: &str) -> Result<Value> {
        let url = self.url(&format!("/users/{}", user_id));
        tracing::debug!(%url, "GET user");

        let request = self.identify(self.client.get(&url), None);
        self.execute(request).await
    }

    async fn create_user(&self, request: CreateUserRequest) -> Result<Value> {
        let url = self.url("/users");
        tracing::debug!(%url, "POST create user");

        let request = self.identify(self.client.post(&url).json(&request), None);
        self.execute(request).await
    }

    async fn get_oauth_token(&self, user_id: &str, refresh_token: &str) -> Result<Value> {
        let url = self.url(&format!("/oauth/{}", user_id));
        tracing::debug!(%url, "POST oauth token exchange");

        let body = OauthRequest {
            refresh_token: refresh_token.to_string(),
        };
        let request = self.identify(self.client.post(&url).json(&body), None);
        self.execute(request).await
    }

    async fn add_documents(
        &self,
        user_id: &str,
        oauth_token: &str,
        documents: Vec<Value>,
    ) -> Result<Value> {
        let url = self.url(&format!("/users/{}", user_id));
        tracing::debug!(%url, "PATCH user documents");

        let body = DocumentsPatch { documents };
        let request = self.identify(self.client.patch(&url).json(&body), Some(oauth_token));
        self.execute(request).await
    }

    async fn get_nodes(&self, user_id: &str, oauth_token: &str) -> Result<Value> {
        let url = self.url(&format!("/users/{}/nodes", user_id));
        tracing::debug!(%url, "GET nodes");

        let request = self.identify(self.client.get(&url), Some(oauth_token));
        self.execute(request).await
    }

    async fn add_node(
        &self,
        user_id: &str,
        oauth_token: &str,
        request: NodeRequest,
    ) -> Result<Value> {
        let url = self.url(&format!("/users/{}/nodes", user_id));
        tracing::debug!(%url, node_type = %request.r#type, "POST node");

        let request = self.identify(self.client.post(&url).json(&request), Some(oauth_token));
        self.execute(request).await
    }

    async fn add_ach_node(
        &self,
        user_id: &str,
        oauth_token: &str,
        bank_id: &str,
        bank_pw: &str,
        bank_name: &str,
    ) -> Result<Value> {
        self.add_node(user_id, oauth_token, NodeRequest::ach(bank_id, bank_pw, bank_name))
            .await
    }

    async fn get_subnets(&self, user_id: &str, oauth_token: &str, node_id: &str) -> Result<Value> {
        let url = self.url(&format!("/users/{}/nodes/{}/subnets", user_id, node_id));
        tracing::debug!(%url, "GET subnets");

        let request = self.identify(self.client.get(&url), Some(oauth_token));
        self.execute(request).await
    }

    async fn add_subnet(
        &self,
        user_id: &str,
        oauth_token: &str,
        node_id: &str,
        request: SubnetRequest,
    ) -> Result<Value> {
        let url = self.url(&format!("/users/{}/nodes/{}/subnets", user_id, node_id));
        tracing::debug!(%url, "POST subnet");

        let request = self.identify(self.client.post(&url).json(&request), Some(oauth_token));
        self.execute(request).await
    }
}

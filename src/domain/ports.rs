use crate::domain::model::{CreateUserRequest, NodeRequest, SubnetRequest};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Source of the static identity headers sent with every upstream call.
pub trait CredentialProvider: Send + Sync {
    /// Gateway credential pair, `client_id|client_secret`.
    fn gateway(&self) -> String;
    /// IP address reported for the calling user.
    fn user_ip(&self) -> &str;
    /// User fingerprint; OAuth-scoped calls prepend the access token to it.
    fn user(&self) -> &str;
    fn base_url(&self) -> &str;
}

/// One method per upstream operation. Every call issues exactly one outbound
/// request and returns the upstream JSON body, or a structured failure.
#[async_trait]
pub trait PaymentsGateway: Send + Sync {
    async fn get_all_users(&self, page: Option<u32>, per_page: Option<u32>) -> Result<Value>;

    async fn get_user(&self, user_id: &str) -> Result<Value>;

    async fn create_user(&self, request: CreateUserRequest) -> Result<Value>;

    /// Exchanges a refresh token for an OAuth access token scoped to `user_id`.
    async fn get_oauth_token(&self, user_id: &str, refresh_token: &str) -> Result<Value>;

    async fn add_documents(
        &self,
        user_id: &str,
        oauth_token: &str,
        documents: Vec<Value>,
    ) -> Result<Value>;

    async fn get_nodes(&self, user_id: &str, oauth_token: &str) -> Result<Value>;

    async fn add_node(
        &self,
        user_id: &str,
        oauth_token: &str,
        request: NodeRequest,
    ) -> Result<Value>;

    /// Links an existing bank account; same endpoint as `add_node` with an
    /// ACH-US body carrying the bank credentials.
    async fn add_ach_node(
        &self,
        user_id: &str,
        oauth_token: &str,
        bank_id: &str,
        bank_pw: &str,
        bank_name: &str,
    ) -> Result<Value>;

    async fn get_subnets(&self, user_id: &str, oauth_token: &str, node_id: &str) -> Result<Value>;

    async fn add_subnet(
        &self,
        user_id: &str,
        oauth_token: &str,
        node_id: &str,
        request: SubnetRequest,
    ) -> Result<Value>;
}

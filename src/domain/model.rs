//! Request payloads for the upstream payments API. Shapes follow the upstream
//! contract; responses come back as raw JSON and are not modelled locally.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Login {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub logins: Vec<Login>,
    pub phone_numbers: Vec<String>,
    pub legal_names: Vec<String>,
}

impl CreateUserRequest {
    pub fn new(email: impl Into<String>, phone_numbers: Vec<String>, legal_names: Vec<String>) -> Self {
        Self {
            logins: vec![Login {
                email: email.into(),
            }],
            phone_numbers,
            legal_names,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OauthRequest {
    pub refresh_token: String,
}

/// Node creation body. `info` carries either a nickname (generic nodes) or the
/// bank credentials of an ACH-US node; absent fields are omitted from the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRequest {
    pub r#type: String,
    pub info: NodeInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_pw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
}

impl NodeRequest {
    pub fn with_nickname(node_type: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self {
            r#type: node_type.into(),
            info: NodeInfo {
                nickname: Some(nickname.into()),
                ..NodeInfo::default()
            },
        }
    }

    pub fn ach(
        bank_id: impl Into<String>,
        bank_pw: impl Into<String>,
        bank_name: impl Into<String>,
    ) -> Self {
        Self {
            r#type: "ACH-US".to_string(),
            info: NodeInfo {
                bank_id: Some(bank_id.into()),
                bank_pw: Some(bank_pw.into()),
                bank_name: Some(bank_name.into()),
                ..NodeInfo::default()
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubnetRequest {
    pub nickname: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentsPatch {
    pub documents: Vec<serde_json::Value>,
}

use crate::domain::ports::CredentialProvider;
use crate::utils::error::{Result, RiseError};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub synapse: SynapseSection,
    #[serde(default)]
    pub server: ServerSection,
}

/// Upstream gateway credentials and base URL, as read from the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynapseSection {
    pub base_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub client_user_ip: String,
    pub client_user: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "public".to_string()
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RiseError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RiseError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values; unresolved
    /// placeholders are left in place.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RiseError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("synapse.base_url", &self.synapse.base_url)?;
        validation::validate_non_empty_string("synapse.client_id", &self.synapse.client_id)?;
        validation::validate_non_empty_string("synapse.client_secret", &self.synapse.client_secret)?;
        validation::validate_non_empty_string(
            "synapse.client_user_ip",
            &self.synapse.client_user_ip,
        )?;
        validation::validate_non_empty_string("synapse.client_user", &self.synapse.client_user)?;

        if let Some(timeout) = self.synapse.timeout_seconds {
            validation::validate_positive_number("synapse.timeout_seconds", timeout, 1)?;
        }

        validation::validate_non_empty_string("server.static_dir", &self.server.static_dir)?;

        Ok(())
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.synapse.timeout_seconds.unwrap_or(30)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

impl CredentialProvider for SynapseSection {
    fn gateway(&self) -> String {
        format!("{}|{}", self.client_id, self.client_secret)
    }

    fn user_ip(&self) -> &str {
        &self.client_user_ip
    }

    fn user(&self) -> &str {
        &self.client_user
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "rise-server")]
#[command(about = "Serves the rise front-end shell and local API routes")]
pub struct ServerCli {
    #[arg(long, default_value = "config/rise.toml")]
    pub config: String,

    #[arg(long, help = "Override the configured listen port")]
    pub port: Option<u16>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

//! Operator CLI for exercising the payments gateway wrappers against a
//! configured environment, one subcommand per upstream operation.

use anyhow::Context;
use clap::{Parser, Subcommand};
use rise::domain::model::{CreateUserRequest, NodeRequest, SubnetRequest};
use rise::utils::validation::Validate;
use rise::{AppConfig, PaymentsGateway, SynapseClient};
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "api-probe")]
#[command(about = "Exercises the payments gateway wrappers against a configured environment")]
struct ProbeCli {
    #[arg(long, default_value = "config/rise.toml")]
    config: String,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List users registered under the configured gateway credentials
    GetAllUsers {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        per_page: Option<u32>,
    },
    /// Fetch one user, including the refresh token
    GetUser {
        #[arg(long)]
        user_id: String,
    },
    /// Register a new user
    CreateUser {
        #[arg(long)]
        email: String,
        #[arg(long = "phone", value_delimiter = ',')]
        phone_numbers: Vec<String>,
        #[arg(long = "legal-name", value_delimiter = ',')]
        legal_names: Vec<String>,
    },
    /// Exchange a refresh token for an OAuth access token
    GetOauthToken {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        refresh_token: String,
    },
    /// Attach identity documents to a user (reads a JSON array from a file)
    AddDocuments {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        oauth_token: String,
        #[arg(long)]
        documents_file: String,
    },
    /// List the nodes linked to a user
    GetNodes {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        oauth_token: String,
    },
    /// Link a node with a nickname
    AddNode {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        oauth_token: String,
        #[arg(long)]
        node_type: String,
        #[arg(long)]
        nickname: String,
    },
    /// Link an existing bank account as an ACH-US node
    AddAchNode {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        oauth_token: String,
        #[arg(long)]
        bank_id: String,
        #[arg(long)]
        bank_password: String,
        #[arg(long)]
        bank_name: String,
    },
    /// List the subnets attached to a node
    GetSubnets {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        oauth_token: String,
        #[arg(long)]
        node_id: String,
    },
    /// Attach a virtual account/routing pair to a node
    AddSubnet {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        oauth_token: String,
        #[arg(long)]
        node_id: String,
        #[arg(long)]
        nickname: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = ProbeCli::parse();

    rise::utils::logger::init_logger(cli.verbose);

    let config = AppConfig::from_file(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config))?;
    config.validate().context("configuration is invalid")?;

    println!("🚀 Probing {}", config.synapse.base_url);

    let timeout = Duration::from_secs(config.timeout_seconds());
    let client = SynapseClient::with_timeout(config.synapse, timeout)?;

    let response = match cli.command {
        Command::GetAllUsers { page, per_page } => client.get_all_users(page, per_page).await?,
        Command::GetUser { user_id } => client.get_user(&user_id).await?,
        Command::CreateUser {
            email,
            phone_numbers,
            legal_names,
        } => {
            client
                .create_user(CreateUserRequest::new(email, phone_numbers, legal_names))
                .await?
        }
        Command::GetOauthToken {
            user_id,
            refresh_token,
        } => client.get_oauth_token(&user_id, &refresh_token).await?,
        Command::AddDocuments {
            user_id,
            oauth_token,
            documents_file,
        } => {
            let content = std::fs::read_to_string(&documents_file)
                .with_context(|| format!("failed to read {}", documents_file))?;
            let documents: Vec<serde_json::Value> =
                serde_json::from_str(&content).context("documents file must be a JSON array")?;
            client.add_documents(&user_id, &oauth_token, documents).await?
        }
        Command::GetNodes {
            user_id,
            oauth_token,
        } => client.get_nodes(&user_id, &oauth_token).await?,
        Command::AddNode {
            user_id,
            oauth_token,
            node_type,
            nickname,
        } => {
            client
                .add_node(
                    &user_id,
                    &oauth_token,
                    NodeRequest::with_nickname(node_type, nickname),
                )
                .await?
        }
        Command::AddAchNode {
            user_id,
            oauth_token,
            bank_id,
            bank_password,
            bank_name,
        } => {
            client
                .add_ach_node(&user_id, &oauth_token, &bank_id, &bank_password, &bank_name)
                .await?
        }
        Command::GetSubnets {
            user_id,
            oauth_token,
            node_id,
        } => client.get_subnets(&user_id, &oauth_token, &node_id).await?,
        Command::AddSubnet {
            user_id,
            oauth_token,
            node_id,
            nickname,
        } => {
            client
                .add_subnet(
                    &user_id,
                    &oauth_token,
                    &node_id,
                    SubnetRequest { nickname },
                )
                .await?
        }
    };

    println!("✅ Upstream response:");
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

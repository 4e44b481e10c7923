pub mod client;
pub mod config;
pub mod domain;
pub mod server;
pub mod utils;

pub use client::SynapseClient;
pub use config::{AppConfig, ServerCli};
pub use domain::ports::{CredentialProvider, PaymentsGateway};
pub use utils::error::{Result, RiseError};

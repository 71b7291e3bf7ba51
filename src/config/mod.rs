use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "agora-site")]
#[command(about = "Client for the Ágora Comunicaciones site backend")]
pub struct CliConfig {
    #[arg(
        long,
        env = "AGORA_BACKEND_URL",
        default_value = "http://localhost:8001"
    )]
    pub backend_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Fetch and print the services and team listings.
    Fetch,
    /// Send a contact message.
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        company: String,
        #[arg(long)]
        message: String,
    },
    /// Submit a quote request, optionally with file attachments.
    Quote {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        company: String,
        #[arg(long = "service", help = "Service id of interest, repeatable")]
        services: Vec<String>,
        #[arg(long)]
        description: String,
        #[arg(long, default_value = "")]
        budget: String,
        #[arg(long, default_value = "")]
        timeline: String,
        #[arg(long = "file", help = "Path of a file to attach, repeatable")]
        files: Vec<PathBuf>,
    },
}

impl ConfigProvider for CliConfig {
    fn backend_url(&self) -> &str {
        &self.backend_url
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("backend_url", &self.backend_url)
    }
}

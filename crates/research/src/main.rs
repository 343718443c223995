use crate::prelude::*;
use clap::Parser;
use std::time::Duration;

mod error;
mod gemini;
mod mcp;
mod prelude;
mod process;
mod server;

use gemini::{ApiKey, GeminiClient, GeminiConfig};

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Summarize passages and suggest further reading using the Gemini API"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Gemini generateContent URL, ending right before the API key
    #[clap(long, env = "GEMINI_API_URL", global = true)]
    gemini_api_url: Option<String>,

    /// Gemini API key, appended to the URL
    #[clap(long, env = "GEMINI_API_KEY", global = true, hide_env_values = true)]
    gemini_api_key: Option<ApiKey>,

    /// Timeout in seconds for the call to the model API
    #[clap(long, env = "GEMINI_TIMEOUT", global = true, default_value_t = gemini::DEFAULT_TIMEOUT_SECS)]
    gemini_timeout: u64,

    /// Whether to display additional information.
    #[clap(long, env = "RESEARCH_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

impl Global {
    pub fn gemini_config(&self) -> std::result::Result<GeminiConfig, Error> {
        let api_url = self
            .gemini_api_url
            .clone()
            .ok_or(Error::MissingConfig("GEMINI_API_URL"))?;
        let api_key = self
            .gemini_api_key
            .clone()
            .ok_or(Error::MissingConfig("GEMINI_API_KEY"))?;

        Ok(GeminiConfig {
            api_url,
            api_key,
            timeout: Duration::from_secs(self.gemini_timeout),
        })
    }

    pub fn gemini_client(&self) -> Result<GeminiClient> {
        let config = self.gemini_config()?;
        GeminiClient::new(config).map_err(|e| eyre!("Failed to create Gemini client: {e}"))
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Serve the research HTTP API
    Serve(crate::server::App),

    /// Run a single research operation and print the answer
    Process(crate::process::App),

    /// Model Context Protocol server over stdio
    MCP(crate::mcp::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(sub_app) => crate::server::run(sub_app, app.global).await,
        SubCommands::Process(sub_app) => crate::process::run(sub_app, app.global).await,
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
}

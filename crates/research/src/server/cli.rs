#[derive(Debug, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Serve the research HTTP API")]
pub struct App {
    /// Port to listen on
    #[arg(short, long, env = "RESEARCH_PORT", default_value = "8080")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "RESEARCH_HOST", default_value = "127.0.0.1")]
    pub host: String,
}

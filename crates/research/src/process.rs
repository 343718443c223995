use crate::prelude::{eprintln, print, *};
use colored::Colorize;
use research_core::research::{build_prompt, ResearchRequest};
use serde::Serialize;
use tokio::io::{AsyncRead, AsyncReadExt};

#[derive(Debug, clap::Parser)]
#[command(name = "process")]
#[command(about = "Run a single research operation and print the answer")]
pub struct App {
    /// Operation to perform ("summarize" or "suggest")
    operation: String,

    /// Text to process. Read from stdin when omitted
    content: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Print the prompt that would be sent and exit without calling the model
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Serialize)]
pub struct ProcessOutput {
    pub operation: String,
    pub answer: String,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let output = execute(app, tokio::io::stdin(), &global).await?;
    print!("{output}");
    Ok(())
}

/// Resolve the content, run the operation, and return what should be printed.
async fn execute<R>(app: App, stdin: R, global: &crate::Global) -> Result<String>
where
    R: AsyncRead + Unpin,
{
    let content = match app.content {
        Some(content) => content,
        None => read_content(stdin).await?,
    };
    let request = ResearchRequest::new(app.operation, content);

    if app.dry_run {
        return Ok(build_prompt(&request)?);
    }

    let client = global.gemini_client()?;

    if global.verbose {
        eprintln!(
            "{} {} ({} chars)",
            "Processing".bright_white().bold(),
            request.operation.cyan(),
            request.content.len()
        );
    }

    let answer = client.process_content(&request).await?;

    render(request.operation, answer, app.json)
}

/// Format an answer for the terminal, either raw or as a JSON document.
pub fn render(operation: String, answer: String, json: bool) -> Result<String> {
    if json {
        let output = ProcessOutput { operation, answer };
        Ok(format!("{}\n", serde_json::to_string_pretty(&output)?))
    } else {
        Ok(format!("{answer}\n"))
    }
}

async fn read_content<R>(mut reader: R) -> Result<String>
where
    R: AsyncRead + Unpin,
{
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .await
        .context("Failed to read content from stdin")?;
    Ok(content)
}

use crate::gemini::GeminiClient;
use crate::prelude::{eprintln, *};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

/// Answer newline-delimited JSON-RPC messages until `input` reaches EOF.
pub async fn serve<R, W>(input: R, mut output: W, client: &GeminiClient, verbose: bool) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = BufReader::new(input).lines();

    while let Some(line) = lines.next_line().await? {
        let message = line.trim();
        if message.is_empty() {
            continue;
        }

        if verbose {
            eprintln!("<- {message}");
        }

        let Some(response) = super::handle_request(message, client).await else {
            continue;
        };
        let mut encoded = serde_json::to_vec(&response)?;

        if verbose {
            eprintln!("-> {}", String::from_utf8_lossy(&encoded));
        }

        encoded.push(b'\n');
        output.write_all(&encoded).await?;
        output.flush().await?;
    }

    Ok(())
}

use crate::exit_codes::SUCCESS;
use crate::transport;
use anyhow::Context;
use sortviz_core::Engine;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Reads requests until stdin closes. Each line is answered before the next
/// one is read.
pub async fn run(engine: Engine) -> anyhow::Result<i32> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    tracing::info!(
        max_input_len = engine.config().max_input_len,
        "serving sort requests on stdin"
    );

    let mut handled = 0usize;
    while let Some(line) = lines.next_line().await.context("failed to read request")? {
        if line.trim().is_empty() {
            continue;
        }
        let response = transport::handle_line(&engine, &line);
        if response.status != 200 {
            tracing::info!(status = response.status, "request rejected");
        }

        let mut payload = serde_json::to_vec(&response)?;
        payload.push(b'\n');
        stdout
            .write_all(&payload)
            .await
            .context("failed to write response")?;
        stdout.flush().await?;
        handled += 1;
    }

    tracing::info!(handled, "stdin closed; shutting down");
    Ok(SUCCESS)
}

//! Command-line shell around the orchestrator.

use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing_subscriber::EnvFilter;

use crate::orchestrator::Orchestrator;

/// Multilingual money changer with natural responses
#[derive(Parser, Debug)]
#[command(name = "moneychanger", version, about = "Convert currencies by asking in plain language")]
pub struct Cli {
    /// Model id override (defaults to MONEYCHANGER_MODEL or gpt-4o-mini)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Request to answer, e.g. "convert 50 USD to EUR". Reads stdin when absent.
    pub prompt: Option<String>,
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Answer one request per input line until EOF. Blank lines are skipped.
pub async fn answer_lines<R, W>(
    orchestrator: &Orchestrator,
    input: R,
    mut output: W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let answer = orchestrator.run(line).await;
        output.write_all(answer.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
    }
    Ok(())
}

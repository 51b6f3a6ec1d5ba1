//! moneychanger binary entry point.

use moneychanger::cli::{answer_lines, init_tracing, Cli};
use moneychanger::config::MoneyChangerConfig;
use moneychanger::orchestrator::Orchestrator;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // A missing GITHUB_TOKEN stops the process here.
    let mut config = MoneyChangerConfig::from_env()?;
    if let Some(model) = cli.model {
        config = config.with_model_id(model);
    }
    if config.exchange_rate_api_key().is_none() {
        tracing::warn!("EXCHANGERATE_API_KEY is not set; conversions will fall back to plain answers");
    }

    let orchestrator = Orchestrator::from_config(&config);

    match cli.prompt {
        Some(prompt) => println!("{}", orchestrator.run(&prompt).await),
        None => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            answer_lines(&orchestrator, stdin, tokio::io::stdout()).await?;
        }
    }

    Ok(())
}

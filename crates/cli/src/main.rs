use anyhow::{Context, Result};
use brief_core::config::{self, AppConfig};
use brief_core::BriefExtractor;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "brief", about = "Extract structured fields from campaign briefs")]
struct Cli {
    /// Path to a config file (defaults to config/default.*).
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the seven brief fields from a file, --text, or stdin.
    Extract {
        /// Read the brief from this file.
        file: Option<PathBuf>,
        /// Inline brief text.
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
        /// Emit the result as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut cfg = config::load(cli.config.as_deref())?;

    // The credential is read from the environment only here, at the edge.
    if cfg.openai.api_key.as_deref().map_or(true, str::is_empty) {
        cfg.openai.api_key = std::env::var("OPENAI_API_KEY").ok();
    }

    match cli.command {
        Commands::Extract { file, text, json } => run_extract(cfg, file, text, json).await,
    }
}

async fn run_extract(
    cfg: AppConfig,
    file: Option<PathBuf>,
    text: Option<String>,
    json: bool,
) -> Result<()> {
    let input = match (file, text) {
        (Some(path), _) => std::fs::read_to_string(&path)
            .with_context(|| format!("read {}", path.display()))?,
        (None, Some(text)) => text,
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
            buf
        }
    };

    let extractor = BriefExtractor::from_config(&cfg);
    let result = extractor.extract(&input).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("method: {}", result.method.as_str());
        for (name, value) in result.fields.entries() {
            println!("{name}: {value}");
        }
    }
    Ok(())
}

//! Assistant CLI
//!
//! Walks through the Grafana and AWS assistants and translates
//! natural-language Kubernetes requests into kubectl commands.

mod client;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{aws, grafana, k8s};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Observability and cloud automation assistant CLI
#[derive(Parser)]
#[command(name = "assist")]
#[command(author, version, about = "Observability and cloud automation assistant", long_about = None)]
pub struct Cli {
    /// Output format (defaults to the config file, then table)
    #[arg(long, short)]
    pub format: Option<output::OutputFormat>,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk through dashboards, alerts, SLOs and queries
    Grafana,

    /// Walk through simulated EC2, S3, Lambda and CloudWatch provisioning
    Aws,

    /// Show natural-language to AWS workflow examples
    AwsWorkflows,

    /// Translate a natural-language request into kubectl commands
    K8s {
        /// Request text, e.g. "show pods in namespace payments"
        text: String,

        /// Execute the commands (requires ALLOW_KUBECTL=1 where they run)
        #[arg(long)]
        run: bool,

        /// Delegate to a command server instead of translating locally
        #[arg(long, env = "ASSIST_SERVER_URL")]
        server: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        output::print_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = config::Config::load().unwrap_or_else(|err| {
        warn!(error = %err, "Ignoring unreadable config file");
        config::Config::default()
    });
    let format = cli.format.or_else(|| config.format()).unwrap_or_default();
    debug!(?format, "Resolved output format");

    match cli.command {
        Commands::Grafana => grafana::run(format)?,
        Commands::Aws => aws::run(format)?,
        Commands::AwsWorkflows => aws::run_workflows(format)?,
        Commands::K8s { text, run, server } => match server.or(config.server_url) {
            Some(url) => k8s::translate_remote(&url, &text, run, format).await?,
            None => k8s::translate(&text, run, format).await?,
        },
    }

    Ok(())
}

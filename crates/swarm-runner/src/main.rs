use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use opentelemetry::global;
use opentelemetry::trace::TracerProvider;
use opentelemetry_sdk::trace as sdktrace;
use opentelemetry_sdk::Resource;
use std::path::PathBuf;
use std::str::FromStr;
use swarm_core::{user_facing_error_message, GateOptions, WalletState};
use swarm_runner::{
    load_json, load_messages, load_tools, print_json, run_context, run_gate, run_route,
    run_solana, run_turn,
};
use swarm_types::{Chain, FlowMode, Intent, ToolSet};
use tracing::{error, subscriber};
use tracing_subscriber::{prelude::*, EnvFilter, Registry};

const DEFAULT_LOG_FILTER: &str = "info,swarm_core=debug,swarm_runner=debug";

/// Prints routing decisions for recorded DeFi chat conversations.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Structured Solana routing decision for the newest user message
    Solana {
        /// Conversation JSON file
        #[arg(long)]
        messages: PathBuf,
        /// Ask the configured model, falling back to heuristics on failure
        #[arg(long)]
        llm: bool,
    },
    /// Router context reconstructed from history
    Context {
        #[arg(long)]
        messages: PathBuf,
    },
    /// Flow state and agent routing for a classified intent
    Route {
        /// Intent JSON file
        #[arg(long)]
        intent: PathBuf,
        /// Conversation JSON file for history-aware flow state
        #[arg(long)]
        messages: Option<PathBuf>,
    },
    /// Tools that survive gating
    Gate {
        /// Tool set JSON file: an object of key to definition, or an array of keys
        #[arg(long)]
        tools: PathBuf,
        #[arg(long, value_parser = FlowMode::from_str, default_value = "explore")]
        mode: FlowMode,
        #[arg(long)]
        allow_wallet_connect: bool,
        #[arg(long)]
        has_wallet_address: bool,
    },
    /// Classify with the model, then route and gate the turn
    Turn {
        #[arg(long)]
        messages: PathBuf,
        #[arg(long, value_parser = Chain::from_str, default_value = "solana")]
        chain: Chain,
        /// Tool set JSON file, grouped by agent prefix
        #[arg(long)]
        tools: Option<PathBuf>,
        #[arg(long)]
        allow_wallet_connect: bool,
        #[arg(long)]
        has_wallet_address: bool,
    },
}

/// Initializes the OpenTelemetry pipeline for tracing.
fn init_tracing() -> Result<sdktrace::SdkTracerProvider> {
    let provider = sdktrace::SdkTracerProvider::builder()
        .with_resource(Resource::builder().with_service_name("swarm-runner").build())
        .build();
    let tracer = provider.tracer("swarm-runner");
    global::set_tracer_provider(provider.clone());

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let subscriber = Registry::default()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_opentelemetry::layer().with_tracer(tracer));

    subscriber::set_global_default(subscriber)
        .context("Failed to set global default tracing subscriber")?;

    Ok(provider)
}

async fn run(command: Command) -> Result<()> {
    match command {
        Command::Solana { messages, llm } => {
            let messages = load_messages(&messages)?;
            print_json(&run_solana(&messages, llm).await?)
        }
        Command::Context { messages } => print_json(&run_context(&load_messages(&messages)?)),
        Command::Route { intent, messages } => {
            let intent: Intent = load_json(&intent)?;
            let messages = messages.as_deref().map(load_messages).transpose()?;
            print_json(&run_route(&intent, messages.as_deref()))
        }
        Command::Gate {
            tools,
            mode,
            allow_wallet_connect,
            has_wallet_address,
        } => {
            let options = GateOptions::new(mode)
                .with_wallet_connect(allow_wallet_connect)
                .with_wallet_address(has_wallet_address);
            print_json(&run_gate(load_tools(&tools)?, &options))
        }
        Command::Turn {
            messages,
            chain,
            tools,
            allow_wallet_connect,
            has_wallet_address,
        } => {
            let messages = load_messages(&messages)?;
            let tools = match tools {
                Some(path) => load_tools(&path)?,
                None => ToolSet::new(),
            };
            let wallet = WalletState {
                allow_wallet_connect,
                has_wallet_address,
            };
            print_json(&run_turn(&messages, chain, wallet, tools).await?)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from a .env file in the current directory.
    dotenv().ok();

    let tracer_provider = init_tracing()?;
    let cli = Cli::parse();

    let result = run(cli.command).await;
    if let Err(e) = &result {
        error!("Command failed: {e:#}");
        eprintln!("{}", user_facing_error_message(&format!("{e:#}")));
    }

    tracer_provider.shutdown()?;
    result
}

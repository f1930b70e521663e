//! Step-locator command line interface
//!
//! Match test steps against an HTML file, inspect extracted references, or
//! run the HTTP API.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use step_locator::config::{DEFAULT_GENERATOR_ENDPOINT, DEFAULT_GENERATOR_MODEL, GeneratorOptions, ServerOptions};
use step_locator::http::{self, AppState};
use step_locator::script::summarize;
use step_locator::{OpenAiGenerator, TestStep, extract_reference, match_all_bytes};

#[derive(Parser)]
#[command(name = "step-locator")]
#[command(version)]
#[command(about = "Match natural-language test steps to HTML elements", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Match steps against an HTML file and print the records as JSON
    Match(StepsArgs),
    /// Print the locator strategy for each step as JSON
    Locators(StepsArgs),
    /// Print the element reference extracted from a step
    Extract {
        /// Step description
        step: String,
    },
    /// Run the HTTP API
    Serve(ServeArgs),
}

#[derive(Args)]
struct StepsArgs {
    /// HTML file to search
    #[arg(long, value_name = "FILE")]
    html: PathBuf,

    /// Test step description (repeat for several steps, kept in order)
    #[arg(long = "step", short = 's', value_name = "TEXT", required = true)]
    steps: Vec<String>,
}

#[derive(Args)]
struct ServeArgs {
    /// Interface to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, short = 'p', default_value = "3000")]
    port: u16,

    /// Chat-completions endpoint used for script generation
    #[arg(long, env = "STEP_LOCATOR_LLM_ENDPOINT", default_value = DEFAULT_GENERATOR_ENDPOINT)]
    llm_endpoint: String,

    /// Model used for script generation
    #[arg(long, env = "STEP_LOCATOR_LLM_MODEL", default_value = DEFAULT_GENERATOR_MODEL)]
    llm_model: String,

    /// API key for the generation service; script generation is disabled without it
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    llm_api_key: Option<String>,

    /// Generation request timeout in seconds
    #[arg(long, default_value = "60")]
    llm_timeout_secs: u64,
}

impl StepsArgs {
    fn load(&self) -> Result<(Vec<u8>, Vec<TestStep>)> {
        let html = std::fs::read(&self.html).with_context(|| format!("Failed to read {}", self.html.display()))?;
        let steps = self.steps.iter().map(|s| TestStep::new(s.as_str())).collect();
        Ok((html, steps))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Match(args) => {
            let (html, steps) = args.load()?;
            let records = match_all_bytes(&html, &steps)?;
            println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "elements": records }))?);
        }
        Command::Locators(args) => {
            let (html, steps) = args.load()?;
            let records = match_all_bytes(&html, &steps)?;
            println!("{}", serde_json::to_string_pretty(&summarize(&records))?);
        }
        Command::Extract { step } => {
            let reference = extract_reference(&step);
            println!("{}", serde_json::to_string_pretty(&reference)?);
        }
        Command::Serve(args) => serve(args).await?,
    }

    Ok(())
}

async fn serve(args: ServeArgs) -> Result<()> {
    let server_options = ServerOptions::new().host(args.host).port(args.port);

    let mut state = AppState::new();
    match args.llm_api_key {
        Some(api_key) => {
            let options = GeneratorOptions::new()
                .endpoint(args.llm_endpoint)
                .model(args.llm_model)
                .api_key(api_key)
                .timeout(Duration::from_secs(args.llm_timeout_secs));
            log::info!("Script generation enabled via {} ({})", options.endpoint, options.model);
            state = state.with_generator(Arc::new(OpenAiGenerator::new(options)?));
        }
        None => log::warn!("No API key configured; /generate_selenium_script will return 503"),
    }

    eprintln!("Step-locator HTTP API v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("Listening on http://{}", server_options.bind_address());

    http::serve(&server_options, state)
        .await
        .context("HTTP server failed")
}

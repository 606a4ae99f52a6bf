//! Terminal front end for the url-shortener service.
//!
//! # Usage
//!
//! ```bash
//! # Interactive session: paste URLs, copy results
//! shortener-client
//!
//! # One-shot, copying the result to the clipboard
//! shortener-client shorten https://example.com/very/long/path --copy
//!
//! # Against another service
//! shortener-client --base-url https://s.example.com
//! ```
//!
//! # Environment Variables
//!
//! See [`shortener_client::config`]. A `.env` file in the working directory is
//! loaded first.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use shortener_client::config::Config;
use shortener_client::prelude::*;

type Controller = ShorteningController<HttpShorteningService, SystemClipboard>;

/// Shorten URLs from the terminal.
#[derive(Parser)]
#[command(name = "shortener-client")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Shortening service base URL (overrides SHORTENER_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides REQUEST_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a single URL and exit
    Shorten {
        /// The long URL to shorten
        url: String,

        /// Copy the short URL to the clipboard
        #[arg(short, long)]
        copy: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(base_url) = cli.base_url {
        config.api_base_url = base_url;
    }
    if let Some(timeout) = cli.timeout {
        config.request_timeout_secs = timeout;
    }
    config.validate()?;

    init_tracing(&config);
    config.print_summary();

    let service = HttpShorteningService::new(&config.api_base_url, config.request_timeout())
        .context("Failed to build HTTP client")?;
    let controller = ShorteningController::new(Arc::new(service), Arc::new(SystemClipboard::new()));

    match cli.command {
        Some(Commands::Shorten { url, copy }) => shorten_once(&controller, &url, copy).await,
        None => run_interactive(&controller).await.map(|()| ExitCode::SUCCESS),
    }
}

/// Logs go to stderr so they never interleave with prompts on stdout.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Shortens `url` once. Fails the process when the attempt fails.
async fn shorten_once(controller: &Controller, url: &str, copy: bool) -> Result<ExitCode> {
    let outcome = submit_with_progress(controller, url).await;

    if copy && matches!(outcome, SubmitOutcome::Shortened(_)) {
        controller.copy_short_url().await;
    }
    render(&View::from_state(&controller.state()));

    Ok(match outcome {
        SubmitOutcome::Shortened(_) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

/// Prompt loop: one submission per line until `quit`.
async fn run_interactive(controller: &Controller) -> Result<()> {
    println!("{}", "🔗 URL Shortener".bright_blue().bold());
    println!("{}", "Type 'quit' to exit.".dimmed());
    println!();

    loop {
        let input: String = Input::new()
            .with_prompt("Paste your long URL here")
            .allow_empty(true)
            .interact_text()?;

        if matches!(input.trim(), "quit" | "exit") {
            break;
        }

        let outcome = submit_with_progress(controller, &input).await;
        render(&View::from_state(&controller.state()));

        if let SubmitOutcome::Shortened(result) = outcome {
            let copy = Confirm::new()
                .with_prompt("Copy to clipboard?")
                .default(true)
                .interact()?;

            if copy {
                controller.copy_short_url().await;
                render_confirmation(&View::from_state(&controller.state()));
            }

            tracing::debug!(long_url = %result.long_url, "Result shown");
        }

        println!();
    }

    Ok(())
}

/// Runs one submission while rendering the in-flight label.
async fn submit_with_progress(controller: &Controller, input: &str) -> SubmitOutcome {
    let mut updates: watch::Receiver<SubmissionState> = controller.subscribe();
    let submission = controller.submit(input);
    tokio::pin!(submission);

    let mut announced = false;
    loop {
        tokio::select! {
            outcome = &mut submission => return outcome,
            Ok(()) = updates.changed() => {
                let view = View::from_state(&updates.borrow_and_update());
                if !view.submit_enabled && !announced {
                    println!("{}", view.submit_label.dimmed());
                    announced = true;
                }
            }
        }
    }
}

fn render(view: &View) {
    if let Some(message) = &view.error_banner {
        println!("{} {}", "✗".red().bold(), message.red());
    }

    if let Some(panel) = &view.result {
        println!("{}", panel.label.bright_white().bold());
        println!("  {}", panel.short_url.bright_yellow().bold());
    }

    render_confirmation(view);
}

fn render_confirmation(view: &View) {
    if let Some(confirmation) = view.result.as_ref().and_then(|p| p.confirmation.as_ref()) {
        println!("{}", confirmation.green().bold());
    }
}

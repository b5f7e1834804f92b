mod avatar;
mod delivery;
mod report;

use std::process;

use chrono::Utc;
use clap::{Parser, Subcommand};
use notify_cardkit::{BuildOutput, CardBuilder, RunContext, keys};

use crate::avatar::HttpAvatarSource;
use crate::delivery::DeliveryError;

#[derive(Parser)]
#[command(name = "pipeline-notify")]
#[command(about = "Send a CI pipeline status card to a Microsoft Teams webhook", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Build the card and deliver it to the configured webhook (default).
    Send,
    /// Build the card and pretty-print it without delivering anything.
    Render,
}

fn main() {
    let cli = Cli::parse();
    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {err}");
            err.exit_code()
        }
    };
    process::exit(exit_code);
}

fn run(cli: Cli) -> Result<(), CliError> {
    let ctx = RunContext::from_env();
    // Plugin runners exec the binary with no argv; default to send.
    match cli.command.unwrap_or(Command::Send) {
        Command::Send => handle_send(&ctx),
        Command::Render => handle_render(&ctx),
    }
}

fn handle_send(ctx: &RunContext) -> Result<(), CliError> {
    let webhook_url = validated_webhook_url(ctx)?;

    let output = build_card(ctx);
    if output.status.overridden {
        println!("Overriding status to: {}", output.status.effective);
    }
    for warning in &output.warnings {
        println!("Warning: {warning}");
    }

    let card_bytes = serde_json::to_vec(&output.card).map_err(CliError::Serialize)?;

    if ctx.get(keys::DEBUG, "false") == "true" {
        report::print_debug(ctx, &card_bytes);
    }
    report::print_build_info(ctx, &output.version, Utc::now());

    println!("\nSending to Microsoft Teams...");
    delivery::deliver(&webhook_url, &card_bytes)?;
    println!("Done!");
    Ok(())
}

fn handle_render(ctx: &RunContext) -> Result<(), CliError> {
    let output = build_card(ctx);
    for warning in &output.warnings {
        eprintln!("Warning: {warning}");
    }
    let pretty = serde_json::to_string_pretty(&output.card).map_err(CliError::Serialize)?;
    println!("{pretty}");
    Ok(())
}

fn build_card(ctx: &RunContext) -> BuildOutput {
    let avatar = HttpAvatarSource::new();
    CardBuilder::new(ctx, Utc::now()).build(&avatar)
}

fn validated_webhook_url(ctx: &RunContext) -> Result<String, CliError> {
    let url = ctx.get(keys::WEBHOOK_URL, "");
    if url.is_empty() {
        return Err(CliError::Config(format!(
            "webhook url required: set {}",
            keys::WEBHOOK_URL
        )));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(CliError::Config(
            "webhook url must be an absolute http(s) URL".to_string(),
        ));
    }
    Ok(url)
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Config(String),
    #[error("error creating card JSON: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

impl CliError {
    /// Every failure class exits 1: configuration, serialization, transport
    /// failures and webhook rejections alike.
    fn exit_code(&self) -> i32 {
        1
    }
}

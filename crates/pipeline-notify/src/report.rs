//! Stdout reporting: debug dump and the build-info summary.

use chrono::{DateTime, SecondsFormat, Utc};
use notify_cardkit::{RunContext, keys};

/// Full context snapshot (sorted by key) followed by the serialized card.
/// Purely observational; runs before delivery when debug mode is on.
pub fn print_debug(ctx: &RunContext, card_bytes: &[u8]) {
    println!("\n** DEBUG ENABLED **");
    println!("\nEnvironment Variables:");
    for (key, value) in ctx.iter() {
        println!(" {key:<30} = {value}");
    }
    println!("\nCard JSON:");
    println!("{}", String::from_utf8_lossy(card_bytes));
}

/// Short build summary, printed before every delivery attempt. STATUS is
/// the raw reported status, not the override.
pub fn print_build_info(ctx: &RunContext, version: &str, now: DateTime<Utc>) {
    println!("\nBuild Info:");
    println!(" PROJECT: {}", ctx.get(keys::REPO, ""));
    println!(" VERSION: {version}");
    println!(" STATUS:  {}", ctx.get(keys::BUILD_STATUS, ""));
    println!(" DATE:    {}", now.to_rfc3339_opts(SecondsFormat::Secs, true));
}

//! Voice Agent Templates - settings payloads for voice-agent sessions
//!
//! Prints the `Settings` message for the chosen industry, voice and language.
//! Run with: cargo run --bin voice-agent-templates -- --industry banking --language es

use std::env;

use anyhow::{anyhow, bail, Context};
use tracing_subscriber::EnvFilter;
use voice_agent_templates::{AgentTemplates, AppSettings};

const USAGE: &str = "Usage: voice-agent-templates [--industry KEY] [--voice-model MODEL] \
[--voice-name NAME] [--language LANG] [--docs-dir DIR] [--pretty] [--save] [--list-industries]";

fn main() -> anyhow::Result<()> {
    // Load .env file if present (ignore errors if file doesn't exist)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let saved = AppSettings::load();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut overrides: Vec<(&str, String)> = Vec::new();
    let mut pretty = false;
    let mut save = false;
    let mut list_industries = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--pretty" => pretty = true,
            "--save" => save = true,
            "--list-industries" => list_industries = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            flag @ ("--industry" | "--voice-model" | "--voice-name" | "--language"
            | "--docs-dir") => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("Missing value for {}\n{}", flag, USAGE))?
                    .clone();
                overrides.push((flag.trim_start_matches("--"), value));
            }
            other => bail!("Unknown argument: {}\n{}", other, USAGE),
        }
    }

    if list_industries {
        for (key, name) in AgentTemplates::get_available_industries() {
            println!("{:<16} {}", key, name);
        }
        return Ok(());
    }

    // Saved settings, then environment, then command line
    let mut settings = saved.clone();
    settings.apply_env();
    settings.apply_overrides(&overrides);

    // Only flags are persisted; environment overrides stay per-process
    if save {
        let mut persisted = saved;
        persisted.apply_overrides(&overrides);
        let path = persisted.save().map_err(|e| anyhow!(e))?;
        eprintln!("Saved defaults to {}", path.display());
    }

    let templates = AgentTemplates::new(settings.to_templates_config())
        .context("Failed to build agent templates")?;

    let json = if pretty {
        templates.settings().to_json_pretty()?
    } else {
        templates.settings().to_json()?
    };
    println!("{}", json);

    Ok(())
}

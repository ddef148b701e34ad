//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, API_URL_ENV, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }
    if std::env::var_os(API_URL_ENV).is_some() {
        ctx.output.kv("override", API_URL_ENV);
    }

    // API section
    ctx.output.line("");
    ctx.output.line("[api]");
    ctx.output.kv("base_url", &ctx.config.api.base_url);
    ctx.output.kv("timeout_secs", &ctx.config.api.timeout_secs.to_string());

    // Logging section
    ctx.output.line("");
    ctx.output.line("[logging]");
    ctx.output.kv("filter", &ctx.config.logging.filter);
    ctx.output.kv("format", &ctx.config.logging.format.to_string());

    // Display section
    ctx.output.line("");
    ctx.output.line("[display]");
    ctx.output.kv("currency", ctx.config.display.currency.code());
    ctx.output.kv("window_width", &ctx.config.display.window_width.to_string());
    ctx.output.kv("placeholder_image", &ctx.config.display.placeholder_image);

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

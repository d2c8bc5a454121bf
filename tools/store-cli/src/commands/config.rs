//! Configuration management commands.

use std::path::Path;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, StoreConfig};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { path, force } => init_config(&path, force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let filters = &ctx.config.filters;
    ctx.output.info("[filters]");
    ctx.output.kv("category", &filters.category);
    ctx.output.kv("exclusive_only", &filters.exclusive_only.to_string());
    ctx.output.kv("min_price", &filters.min_price.to_string());
    ctx.output.kv("max_price", &filters.max_price.to_string());
    ctx.output.kv("sort", &filters.sort);

    let display = &ctx.config.display;
    ctx.output.info("[display]");
    ctx.output.kv("show_sizes", &display.show_sizes.to_string());
    ctx.output.kv("show_colors", &display.show_colors.to_string());

    let slider = &ctx.config.slider;
    ctx.output.info("[slider]");
    ctx.output.kv("min", &slider.min.to_string());
    ctx.output.kv("max", &slider.max.to_string());
    ctx.output.kv("step", &slider.step.to_string());

    Ok(())
}

fn init_config(path: &str, force: bool, ctx: &Context) -> Result<()> {
    let target = ctx.resolve_path(path);
    if target.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            target.display()
        );
    }

    if is_json(&target) {
        StoreConfig::default().save(&target.to_string_lossy())?;
    } else {
        std::fs::write(&target, generate_default_config())?;
    }

    ctx.output.success(&format!("Created {}", target.display()));
    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.config.validate()?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "valid": true }));
    } else {
        ctx.output.success("Configuration is valid");
    }
    Ok(())
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

use crate::output::{or_dash, print_json};
use anyhow::Context;
use brandkit_core::config::{ACCENT_COLORS, ACCENT_ENV, BASE_COLORS, BASE_ENV};
use brandkit_core::{theme, MissionParser};
use clap::Subcommand;
use std::path::Path;

#[derive(Subcommand)]
pub enum ColorsSubcommand {
    /// Switch the accent and/or base colour family
    Set {
        /// Accent family written to the config and stylesheet
        accent: Option<String>,
        /// Base family written to the config
        #[arg(long)]
        base: Option<String>,
    },
}

pub fn run(
    root: &Path,
    list: bool,
    subcmd: Option<ColorsSubcommand>,
    json: bool,
) -> anyhow::Result<()> {
    match subcmd {
        Some(ColorsSubcommand::Set { accent, base }) => {
            set(root, accent.as_deref(), base.as_deref(), json)
        }
        None if list => list_families(json),
        None => show(root, json),
    }
}

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let colors = super::mission_parser(root)?.extract_theme_colors();

    if json {
        return print_json(&colors);
    }
    println!("Accent:  {}", colors.accent);
    println!("Base:    {}", colors.base);
    println!("Shade:   {}", or_dash(colors.accent_shade.as_deref()));
    Ok(())
}

fn list_families(json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&serde_json::json!({
            "accent": ACCENT_COLORS,
            "base": BASE_COLORS,
        }));
    }
    println!("Accent colors: {}", ACCENT_COLORS.join(", "));
    println!("Base colors:   {}", BASE_COLORS.join(", "));
    Ok(())
}

fn set(root: &Path, accent: Option<&str>, base: Option<&str>, json: bool) -> anyhow::Result<()> {
    if accent.is_none() && base.is_none() {
        anyhow::bail!("nothing to set: pass an accent colour and/or --base");
    }
    let update =
        theme::set_theme_colors(root, accent, base).context("failed to update theme colours")?;

    if json {
        return print_json(&update);
    }
    if accent.is_some() {
        println!("Accent color updated to: {}", update.accent);
        println!(
            "Updated {} --color-accent declaration(s) in resources/css/app.css",
            update.declarations_updated
        );
    }
    if base.is_some() {
        println!("Base color updated to: {}", update.base);
    }
    for var in [ACCENT_ENV, BASE_ENV] {
        if std::env::var_os(var).is_some() {
            eprintln!("warning: {var} is set and overrides .brandkit/config.yaml");
        }
    }
    println!("Rebuild your assets to compile the changes.");
    Ok(())
}

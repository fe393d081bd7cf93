use crate::output::print_json;
use clap::Subcommand;
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Print the effective config (file plus environment overrides)
    Show,

    /// Validate the config for common mistakes
    Validate,
}

pub fn run(root: &Path, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(root, json),
        ConfigSubcommand::Validate => validate(root, json),
    }
}

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = super::load_config(root)?;
    if json {
        return print_json(&config);
    }
    println!("theme.accent:          {}", config.theme.accent);
    println!("theme.base:            {}", config.theme.base);
    println!("sessions.ttl_minutes:  {}", config.sessions.ttl_minutes);
    println!("two_factor.enabled:    {}", config.two_factor.enabled);
    match config.two_factor.trust_days {
        Some(days) => println!("two_factor.trust_days: {days}"),
        None => println!("two_factor.trust_days: off"),
    }
    Ok(())
}

fn validate(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = super::load_config(root)?;
    let warnings = config.validate();

    if json {
        print_json(&serde_json::json!({ "warnings": warnings }))?;
    } else if warnings.is_empty() {
        println!("Config is valid. No warnings.");
    } else {
        for w in &warnings {
            println!("[warning] {}", w.message);
        }
    }
    Ok(())
}

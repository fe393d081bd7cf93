use anyhow::Context;
use brandkit_core::{config::Config, paths};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Initializing brandkit in: {}", root.display());

    let sessions = paths::sessions_dir(root);
    std::fs::create_dir_all(&sessions)
        .with_context(|| format!("failed to create {}", sessions.display()))?;

    if paths::config_path(root).exists() {
        println!("  exists:  {}", paths::CONFIG_FILE);
    } else {
        Config::default()
            .save(root)
            .context("failed to write config.yaml")?;
        println!("  created: {}", paths::CONFIG_FILE);
    }

    if !paths::mission_candidates(root).iter().any(|p| p.is_file()) {
        println!(
            "\nNo mission document found. Add one at {} for richer prompts.",
            paths::MISSION_CANDIDATES[0]
        );
    }
    Ok(())
}

pub mod colors;
pub mod config;
pub mod context;
pub mod init;
pub mod prompt;
pub mod session;

use anyhow::Context;
use brandkit_core::config::Config;
use brandkit_core::ProjectMissionParser;
use std::path::Path;

pub(crate) fn load_config(root: &Path) -> anyhow::Result<Config> {
    Config::load(root).context("failed to load .brandkit/config.yaml")
}

pub(crate) fn mission_parser(root: &Path) -> anyhow::Result<ProjectMissionParser> {
    let config = load_config(root)?;
    Ok(ProjectMissionParser::new(root, config.theme))
}

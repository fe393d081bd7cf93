use crate::output::{or_dash, print_json, print_table};
use anyhow::Context;
use brandkit_core::session::{LogoOption, LogoSession, SessionStatus};
use brandkit_core::MissionParser;
use chrono::{Duration, Utc};
use clap::Subcommand;
use std::path::Path;

// ---------------------------------------------------------------------------
// Subcommand types
// ---------------------------------------------------------------------------

#[derive(Subcommand)]
pub enum SessionSubcommand {
    /// Start a session from the current mission document
    Create {
        /// Minutes until the session expires (default: sessions.ttl_minutes)
        #[arg(long)]
        ttl_minutes: Option<u32>,
    },
    /// List sessions
    List {
        /// Only sessions that have not expired
        #[arg(long, conflicts_with = "expired")]
        active: bool,
        /// Only sessions past their expiry
        #[arg(long)]
        expired: bool,
    },
    /// Show a session and its options
    Show { id: String },
    /// Move a session to a new status
    Status { id: String, status: String },
    /// Record a generated logo option
    AddOption {
        id: String,
        /// Image generation service that produced the option
        #[arg(long)]
        service: String,
        #[arg(long)]
        image_url: Option<String>,
        /// Prompt used (default: the session prompt)
        #[arg(long)]
        prompt: Option<String>,
        /// Free-form JSON stored with the option
        #[arg(long)]
        metadata: Option<String>,
    },
    /// Select an option and complete the session
    Select { id: String, option: String },
    /// Delete a session and its options
    Delete { id: String },
    /// Delete every expired session
    Purge,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run(root: &Path, subcmd: SessionSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        SessionSubcommand::Create { ttl_minutes } => create(root, ttl_minutes, json),
        SessionSubcommand::List { active, expired } => list(root, active, expired, json),
        SessionSubcommand::Show { id } => show(root, &id, json),
        SessionSubcommand::Status { id, status } => set_status(root, &id, &status, json),
        SessionSubcommand::AddOption {
            id,
            service,
            image_url,
            prompt,
            metadata,
        } => add_option(root, &id, service, image_url, prompt, metadata, json),
        SessionSubcommand::Select { id, option } => select(root, &id, &option, json),
        SessionSubcommand::Delete { id } => delete(root, &id, json),
        SessionSubcommand::Purge => purge(root, json),
    }
}

fn load(root: &Path, id: &str) -> anyhow::Result<LogoSession> {
    LogoSession::load(root, id).with_context(|| format!("failed to load session '{id}'"))
}

// ---------------------------------------------------------------------------
// create
// ---------------------------------------------------------------------------

fn create(root: &Path, ttl_minutes: Option<u32>, json: bool) -> anyhow::Result<()> {
    let config = super::load_config(root)?;
    let ttl = ttl_minutes
        .map(|m| Duration::minutes(i64::from(m)))
        .unwrap_or_else(|| config.sessions.ttl());

    let parser = super::mission_parser(root)?;
    let brief = parser.brief();
    let prompt = parser.generate_logo_prompt(&brief, &parser.extract_theme_colors());

    let mut session = LogoSession::from_brief(brief, prompt, ttl);
    session.save(root).context("failed to save session")?;
    tracing::info!(id = %session.id, "session created");

    if json {
        print_json(&session)?;
    } else {
        println!("Created session: {}", session.id);
        println!("Expires: {}", session.expires_at.to_rfc3339());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// list / show
// ---------------------------------------------------------------------------

fn list(root: &Path, active: bool, expired: bool, json: bool) -> anyhow::Result<()> {
    let now = Utc::now();
    let sessions = if active {
        LogoSession::active(root, now)
    } else if expired {
        LogoSession::expired(root, now)
    } else {
        LogoSession::list(root)
    }
    .context("failed to list sessions")?;

    if json {
        let summaries: Vec<_> = sessions
            .iter()
            .map(|s| {
                serde_json::json!({
                    "id": s.id,
                    "app_name": s.app_name,
                    "status": s.status.to_string(),
                    "options": s.generated_options.len(),
                    "expired": s.is_expired(now),
                    "expires_at": s.expires_at,
                })
            })
            .collect();
        return print_json(&summaries);
    }

    if sessions.is_empty() {
        println!("No sessions.");
        return Ok(());
    }

    let rows = sessions
        .iter()
        .map(|s| {
            vec![
                s.id.clone(),
                s.status.to_string(),
                s.generated_options.len().to_string(),
                if s.is_expired(now) {
                    "expired".to_string()
                } else {
                    s.expires_at.format("%Y-%m-%d %H:%M").to_string()
                },
                s.app_name.clone(),
            ]
        })
        .collect();
    print_table(&["ID", "STATUS", "OPTIONS", "EXPIRES", "APP"], rows);
    Ok(())
}

fn show(root: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    let session = load(root, id)?;
    let options = session
        .options(root)
        .with_context(|| format!("failed to load options for session '{id}'"))?;

    if json {
        return print_json(&serde_json::json!({
            "session": session,
            "options": options,
        }));
    }

    println!("Session: {}", session.id);
    println!("Status:   {}", session.status);
    println!("App:      {}", session.app_name);
    println!("Expires:  {}", session.expires_at.to_rfc3339());
    println!("Selected: {}", or_dash(session.selected_option_id.as_deref()));
    if let Some(prompt) = &session.prompt_template {
        println!("\nPrompt:\n  {prompt}");
    }

    if !options.is_empty() {
        println!();
        let rows = options
            .iter()
            .map(|o| {
                vec![
                    o.id.clone(),
                    o.ai_service.clone(),
                    or_dash(o.image_url.as_deref()),
                ]
            })
            .collect();
        print_table(&["OPTION", "SERVICE", "IMAGE"], rows);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// mutations
// ---------------------------------------------------------------------------

fn set_status(root: &Path, id: &str, status: &str, json: bool) -> anyhow::Result<()> {
    let target: SessionStatus = status.parse()?;
    let mut session = load(root, id)?;
    let from = session.status;
    session.transition(target)?;
    session.save(root).context("failed to save session")?;

    if json {
        print_json(&serde_json::json!({
            "id": session.id,
            "from": from.to_string(),
            "status": session.status.to_string(),
        }))?;
    } else {
        println!("Session {}: {from} -> {}", session.id, session.status);
    }
    Ok(())
}

fn add_option(
    root: &Path,
    id: &str,
    service: String,
    image_url: Option<String>,
    prompt: Option<String>,
    metadata: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let mut session = load(root, id)?;
    let prompt = prompt
        .or_else(|| session.prompt_template.clone())
        .unwrap_or_default();

    let mut option = LogoOption::new(&session.id, prompt, service)?;
    if let Some(url) = image_url {
        option = option.with_image_url(url);
    }
    if let Some(raw) = metadata {
        let value: serde_json::Value =
            serde_json::from_str(&raw).context("--metadata is not valid JSON")?;
        option = option.with_metadata(value);
    }
    session
        .add_option(root, &option)
        .context("failed to store option")?;

    if json {
        print_json(&option)?;
    } else {
        println!("Added option {} to session {}", option.id, session.id);
    }
    Ok(())
}

fn select(root: &Path, id: &str, option_id: &str, json: bool) -> anyhow::Result<()> {
    let mut session = load(root, id)?;
    session
        .select_option(root, option_id)
        .with_context(|| format!("failed to select option '{option_id}'"))?;

    if json {
        print_json(&session)?;
    } else {
        println!("Selected option {option_id}; session {} completed", session.id);
    }
    Ok(())
}

fn delete(root: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    LogoSession::delete(root, id).with_context(|| format!("failed to delete session '{id}'"))?;
    if json {
        print_json(&serde_json::json!({ "deleted": id }))?;
    } else {
        println!("Deleted session {id}");
    }
    Ok(())
}

fn purge(root: &Path, json: bool) -> anyhow::Result<()> {
    let count = LogoSession::purge_expired(root, Utc::now()).context("failed to purge sessions")?;
    if json {
        print_json(&serde_json::json!({ "purged": count }))?;
    } else {
        println!("Purged {count} expired session(s)");
    }
    Ok(())
}

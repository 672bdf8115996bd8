//! `relic parse` - reconstruct sessions from snapshot files.

use std::path::PathBuf;

use anyhow::bail;
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde_json::json;

use relic_session::SessionParser;

use super::{resolve_browser, resolve_profile};
use crate::render;

pub struct ParseArgs {
    pub browser: String,
    pub files: Vec<PathBuf>,
    pub profile: Option<String>,
    pub latest: usize,
    pub json: bool,
    pub show_deleted: bool,
    pub by_workspace: bool,
}

pub fn run(args: ParseArgs) -> anyhow::Result<()> {
    let browser = resolve_browser(&args.browser)?;
    let profile = resolve_profile(&browser, args.profile.as_deref())?;

    // Loaded once per profile, shared by every file parsed below
    let workspaces = relic_workspaces::load_workspaces(&profile.path);

    let targets: Vec<(PathBuf, Option<DateTime<Utc>>)> = if !args.files.is_empty() {
        args.files.into_iter().map(|p| (p, None)).collect()
    } else {
        relic_discovery::list_session_files(&profile.sessions_path)?
            .into_iter()
            .take(args.latest)
            .map(|f| (f.path, Some(f.modified)))
            .collect()
    };
    if targets.is_empty() {
        bail!(
            "no session files found in {}",
            profile.sessions_path.display()
        );
    }

    tracing::debug!(files = targets.len(), "parsing session files");

    let parser = SessionParser::new(workspaces);
    let mut results = Vec::new();

    for (path, mtime) in &targets {
        let state = match parser.parse_file(path) {
            Ok(state) => state,
            // One unreadable file must not sink the rest of the batch
            Err(err) => {
                eprintln!("{}", format!("error parsing {}: {err}", path.display()).red());
                continue;
            }
        };

        if args.json {
            let mut value = serde_json::to_value(&state)?;
            if let serde_json::Value::Object(map) = &mut value {
                map.insert("file".to_string(), json!(path.display().to_string()));
                map.insert("mtime".to_string(), json!(mtime));
                map.insert("browser".to_string(), json!(browser.name));
                map.insert("profile".to_string(), json!(profile.name));
            }
            results.push(value);
            continue;
        }

        println!();
        println!(
            "{}",
            format!("# {} / {}", browser.name, profile.name).cyan().bold()
        );
        println!("{}", format!("# File: {}", path.display()).dimmed());
        if state.truncated {
            println!(
                "{}",
                "# snapshot truncated; showing the recoverable prefix".yellow()
            );
        }
        if args.by_workspace {
            render::display_by_workspace(&state, args.show_deleted);
        } else {
            render::display_by_window(&state, args.show_deleted);
        }
    }

    if args.json {
        let output = if results.len() == 1 {
            results.remove(0)
        } else {
            serde_json::Value::Array(results)
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    }
    Ok(())
}

//! `relic summary` - quick stats for the newest session file.

use std::collections::HashMap;

use anyhow::bail;
use colored::Colorize;

use relic_session::SessionParser;

use super::{resolve_browser, resolve_profile};
use crate::render;

pub fn run(browser_id: &str, profile: Option<&str>) -> anyhow::Result<()> {
    let browser = resolve_browser(browser_id)?;
    let profile = resolve_profile(&browser, profile)?;
    if !profile.has_sessions {
        bail!("no session files found for {} / {}", browser.name, profile.name);
    }

    let workspaces = relic_workspaces::load_workspaces(&profile.path);
    let files = relic_discovery::list_session_files(&profile.sessions_path)?;
    let Some(newest) = files.first() else {
        bail!("no session files found in {}", profile.sessions_path.display());
    };

    let state = SessionParser::new(workspaces).parse_file(&newest.path)?;

    let mut total_tabs = 0usize;
    let mut closed_tabs = 0usize;
    let mut by_workspace: HashMap<String, usize> = HashMap::new();
    for tab in state.tabs() {
        total_tabs += 1;
        if tab.deleted {
            closed_tabs += 1;
        }
        let bucket = render::workspace_label(tab).unwrap_or_else(|| "No Workspace".to_string());
        *by_workspace.entry(bucket).or_default() += 1;
    }

    println!("{}", format!("{} / {}", browser.name, profile.name).cyan().bold());
    println!(
        "{}",
        format!(
            "Session: {} ({})",
            newest.path.display(),
            newest.modified.format("%Y-%m-%d %H:%M:%S UTC")
        )
        .dimmed()
    );
    println!("Windows:     {}", state.windows.len());
    println!("Total tabs:  {total_tabs}");
    println!("Open tabs:   {}", total_tabs - closed_tabs);
    println!("Closed tabs: {closed_tabs}");
    if state.truncated {
        println!("{}", "Snapshot was truncated; counts cover the recoverable prefix".yellow());
    }

    if by_workspace.len() > 1 {
        println!();
        println!("{}", "Tabs by workspace".bold());
        let mut buckets: Vec<_> = by_workspace.into_iter().collect();
        buckets.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        for (name, count) in buckets {
            println!("  {:<24} {}", name.green(), count);
        }
    }
    Ok(())
}

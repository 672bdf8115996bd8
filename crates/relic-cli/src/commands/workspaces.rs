//! `relic workspaces` - workspace definitions for a profile.

use anyhow::bail;
use colored::Colorize;
use serde_json::json;

use super::{resolve_browser, resolve_profile};

pub fn run(browser_id: &str, profile: Option<&str>, json: bool) -> anyhow::Result<()> {
    let browser = resolve_browser(browser_id)?;
    let profile = resolve_profile(&browser, profile)?;

    let workspaces = relic_workspaces::load_workspaces(&profile.path);
    if workspaces.is_empty() {
        bail!("no workspaces found (workspaces are Vivaldi-specific)");
    }

    if json {
        let data: serde_json::Map<String, serde_json::Value> = workspaces
            .iter()
            .map(|(id, ws)| {
                (
                    id.to_string(),
                    json!({"name": ws.name, "emoji": ws.emoji}),
                )
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("Workspaces in {} / {}", browser.name, profile.name).bold()
    );
    let mut entries: Vec<_> = workspaces.iter().collect();
    entries.sort_by(|a, b| a.1.name.cmp(&b.1.name));
    for (id, workspace) in entries {
        let emoji = workspace.emoji.as_deref().unwrap_or("📁");
        println!(
            "{} {:<20} {}",
            emoji,
            workspace.name.green(),
            id.to_string().dimmed()
        );
    }
    Ok(())
}

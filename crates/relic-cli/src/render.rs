//! Human-readable rendering of reconstructed sessions.

use std::collections::BTreeMap;

use colored::Colorize;
use relic_session::{SessionState, Tab, WorkspaceRef};

const TITLE_WIDTH: usize = 60;
const WORKSPACE_TAB_LIMIT: usize = 50;

/// Label a tab's workspace for grouping and display. Unresolved ids keep
/// their raw value so they can still be grouped on.
pub fn workspace_label(tab: &Tab) -> Option<String> {
    match &tab.workspace {
        Some(WorkspaceRef::Resolved { name, .. }) => Some(name.clone()),
        Some(WorkspaceRef::Unresolved { id }) => Some(format!("workspace {id}")),
        None => None,
    }
}

fn truncated_title(tab: &Tab) -> String {
    let title = if tab.title.is_empty() { "(untitled)" } else { tab.title.as_str() };
    if title.chars().count() > TITLE_WIDTH {
        let short: String = title.chars().take(TITLE_WIDTH).collect();
        format!("{short}...")
    } else {
        title.to_string()
    }
}

fn tab_line(tab: &Tab) -> String {
    let prefix = if tab.active { "→ " } else { "  " };
    let mut line = format!("  {}{}", prefix, truncated_title(tab).dimmed());
    if let Some(label) = workspace_label(tab) {
        line.push_str(&format!(" {}", format!("[{label}]").cyan()));
    }
    if tab.deleted {
        line.push_str(&format!(" {}", "[closed]".red()));
    }
    line
}

pub fn display_by_window(state: &SessionState, show_deleted: bool) {
    for (i, window) in state.windows.iter().enumerate() {
        if window.deleted && !show_deleted {
            continue;
        }

        let status = if window.deleted {
            "closed".red().to_string()
        } else if window.active {
            "active".green().to_string()
        } else {
            String::new()
        };
        let tab_count = window
            .tabs
            .iter()
            .filter(|t| show_deleted || !t.deleted)
            .count();
        println!(
            "{} {} ({} tabs)",
            format!("Window {}", i + 1).bold(),
            status,
            tab_count
        );

        for tab in &window.tabs {
            if tab.deleted && !show_deleted {
                continue;
            }
            println!("{}", tab_line(tab));
        }
    }
}

pub fn display_by_workspace(state: &SessionState, show_deleted: bool) {
    let mut groups: BTreeMap<String, Vec<&Tab>> = BTreeMap::new();
    let mut ungrouped: Vec<&Tab> = Vec::new();

    for tab in state.tabs() {
        if tab.deleted && !show_deleted {
            continue;
        }
        match workspace_label(tab) {
            Some(label) => groups.entry(label).or_default().push(tab),
            None => ungrouped.push(tab),
        }
    }

    for (label, tabs) in &groups {
        print_group(&format!("📁 {label}").green().bold().to_string(), tabs);
    }
    if !ungrouped.is_empty() {
        print_group(&"📁 No Workspace".yellow().bold().to_string(), &ungrouped);
    }
}

fn print_group(header: &str, tabs: &[&Tab]) {
    println!("{} ({} tabs)", header, tabs.len());
    for tab in tabs.iter().take(WORKSPACE_TAB_LIMIT) {
        println!("  {}", truncated_title(tab).dimmed());
    }
    if tabs.len() > WORKSPACE_TAB_LIMIT {
        println!(
            "  {}",
            format!("... and {} more", tabs.len() - WORKSPACE_TAB_LIMIT).dimmed()
        );
    }
}

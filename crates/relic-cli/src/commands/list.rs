//! `relic list` - detected browsers.

use anyhow::bail;
use colored::Colorize;

pub fn run() -> anyhow::Result<()> {
    let browsers = relic_discovery::detect_browsers();
    if browsers.is_empty() {
        bail!("no Chromium-family browsers detected");
    }

    println!(
        "{:<10} {:<16} {:<10} {}",
        "ID".bold(),
        "NAME".bold(),
        "SESSIONS".bold(),
        "PROFILES".bold()
    );
    for browser in browsers {
        let with_sessions = browser.profiles.iter().filter(|p| p.has_sessions).count();
        let names: Vec<&str> = browser
            .profiles
            .iter()
            .take(3)
            .map(|p| p.name.as_str())
            .collect();
        let extra = browser.profiles.len().saturating_sub(3);
        let mut profiles = names.join(", ");
        if extra > 0 {
            profiles.push_str(&format!(" (+{extra})"));
        }

        println!(
            "{:<10} {:<16} {:<10} {}",
            browser.id.cyan(),
            browser.name,
            format!("{}/{}", with_sessions, browser.profiles.len()),
            profiles.dimmed()
        );
    }
    Ok(())
}

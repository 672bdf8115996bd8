//! `relic profiles` - profiles for one browser.

use colored::Colorize;

use super::resolve_browser;

pub fn run(browser_id: &str) -> anyhow::Result<()> {
    let browser = resolve_browser(browser_id)?;

    println!("{}", format!("Profiles for {}", browser.name).bold());
    println!("{:<16} {:<10} {}", "NAME".bold(), "SESSIONS".bold(), "PATH".bold());
    for profile in &browser.profiles {
        let marker = if profile.has_sessions { "yes".green() } else { "no".dimmed() };
        println!(
            "{:<16} {:<10} {}",
            profile.name.cyan(),
            marker,
            profile.path.display().to_string().dimmed()
        );
    }
    Ok(())
}

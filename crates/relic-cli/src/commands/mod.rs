//! CLI subcommands.

pub mod list;
pub mod parse;
pub mod profiles;
pub mod summary;
pub mod workspaces;

use anyhow::{bail, Context};
use relic_discovery::{Browser, BrowserProfile};

/// Resolve a browser id or fail with a hint toward `relic list`.
pub fn resolve_browser(id: &str) -> anyhow::Result<Browser> {
    relic_discovery::get_browser_by_id(id).with_context(|| {
        format!("browser '{id}' not found; run 'relic list' to see detected browsers")
    })
}

pub fn resolve_profile<'a>(
    browser: &'a Browser,
    requested: Option<&str>,
) -> anyhow::Result<&'a BrowserProfile> {
    match browser.select_profile(requested) {
        Some(profile) => Ok(profile),
        None => bail!("no profiles found for {}", browser.name),
    }
}

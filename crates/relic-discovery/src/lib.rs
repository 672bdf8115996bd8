//! RELIC Browser Discovery
//!
//! Finds installed Chromium-family browsers, their profiles, and the
//! session snapshot files inside them. This is the filesystem surface the
//! parsing core deliberately knows nothing about: discovery hands over a
//! file path (and a profile path for workspace loading) and steps aside.

mod browsers;
mod error;
mod files;

pub use browsers::{detect_browsers, get_browser_by_id, Browser, BrowserProfile};
pub use error::DiscoveryError;
pub use files::{is_session_file, list_session_files, SessionFile};

pub type Result<T> = std::result::Result<T, DiscoveryError>;

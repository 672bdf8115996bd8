//! Browser catalog and profile enumeration.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::files::list_session_files;

/// A detected Chromium-family browser installation.
#[derive(Debug, Clone, Serialize)]
pub struct Browser {
    /// Stable identifier used on the command line ("chrome", "vivaldi", ...).
    pub id: String,
    pub name: String,
    pub profiles: Vec<BrowserProfile>,
}

impl Browser {
    /// Pick a profile: exact name match, then case-insensitive substring,
    /// then the first profile that actually has session files.
    pub fn select_profile(&self, requested: Option<&str>) -> Option<&BrowserProfile> {
        if let Some(requested) = requested {
            if let Some(profile) = self.profiles.iter().find(|p| p.name == requested) {
                return Some(profile);
            }
            let needle = requested.to_lowercase();
            if let Some(profile) = self
                .profiles
                .iter()
                .find(|p| p.name.to_lowercase().contains(&needle))
            {
                return Some(profile);
            }
        }
        self.profiles
            .iter()
            .find(|p| p.has_sessions)
            .or_else(|| self.profiles.first())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BrowserProfile {
    pub name: String,
    /// Profile directory (holds the Preferences store).
    pub path: PathBuf,
    /// Directory the browser writes session snapshots into.
    pub sessions_path: PathBuf,
    pub has_sessions: bool,
}

struct BrowserSpec {
    id: &'static str,
    name: &'static str,
    /// Whether the user-data directory is itself the single profile.
    flat_profile: bool,
}

const CATALOG: &[BrowserSpec] = &[
    BrowserSpec {
        id: "chrome",
        name: "Google Chrome",
        flat_profile: false,
    },
    BrowserSpec {
        id: "chromium",
        name: "Chromium",
        flat_profile: false,
    },
    BrowserSpec {
        id: "edge",
        name: "Microsoft Edge",
        flat_profile: false,
    },
    BrowserSpec {
        id: "brave",
        name: "Brave",
        flat_profile: false,
    },
    BrowserSpec {
        id: "vivaldi",
        name: "Vivaldi",
        flat_profile: false,
    },
    BrowserSpec {
        id: "opera",
        name: "Opera",
        flat_profile: true,
    },
];

/// All catalog browsers whose user-data directory exists on this machine.
pub fn detect_browsers() -> Vec<Browser> {
    CATALOG
        .iter()
        .filter_map(|spec| {
            let user_data = dirs::user_data_dir(spec.id)?;
            if !user_data.is_dir() {
                return None;
            }
            Some(Browser {
                id: spec.id.to_string(),
                name: spec.name.to_string(),
                profiles: enumerate_profiles(&user_data, spec.flat_profile),
            })
        })
        .collect()
}

pub fn get_browser_by_id(id: &str) -> Option<Browser> {
    detect_browsers().into_iter().find(|b| b.id == id)
}

/// Profiles under a user-data directory: `Default` plus `Profile N`, or
/// the directory itself for single-profile browsers.
fn enumerate_profiles(user_data: &Path, flat_profile: bool) -> Vec<BrowserProfile> {
    if flat_profile {
        return vec![profile_at("Default", user_data.to_path_buf())];
    }
    let Ok(entries) = std::fs::read_dir(user_data) else {
        tracing::warn!(dir = %user_data.display(), "user data directory unreadable");
        return Vec::new();
    };
    let mut profiles: Vec<BrowserProfile> = entries
        .flatten()
        .filter(|e| e.path().is_dir())
        .filter_map(|e| {
            let name = e.file_name().to_str()?.to_string();
            if name == "Default" || name.starts_with("Profile ") {
                Some(profile_at(&name, e.path()))
            } else {
                None
            }
        })
        .collect();
    profiles.sort_by(|a, b| a.name.cmp(&b.name));
    profiles
}

fn profile_at(name: &str, path: PathBuf) -> BrowserProfile {
    // Newer Chromium keeps snapshots in a Sessions subdirectory; older
    // builds write them straight into the profile.
    let sessions_subdir = path.join("Sessions");
    let sessions_path = if sessions_subdir.is_dir() {
        sessions_subdir
    } else {
        path.clone()
    };
    let has_sessions = list_session_files(&sessions_path)
        .map(|files| !files.is_empty())
        .unwrap_or(false);
    BrowserProfile {
        name: name.to_string(),
        path,
        sessions_path,
        has_sessions,
    }
}

/// Per-platform user-data directory resolution.
mod dirs {
    use std::path::PathBuf;

    pub fn user_data_dir(browser_id: &str) -> Option<PathBuf> {
        #[cfg(target_os = "linux")]
        {
            let config = std::env::var("XDG_CONFIG_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| std::env::var("HOME").ok().map(|h| PathBuf::from(h).join(".config")))?;
            let dir = match browser_id {
                "chrome" => "google-chrome",
                "chromium" => "chromium",
                "edge" => "microsoft-edge",
                "brave" => "BraveSoftware/Brave-Browser",
                "vivaldi" => "vivaldi",
                "opera" => "opera",
                _ => return None,
            };
            Some(config.join(dir))
        }
        #[cfg(target_os = "macos")]
        {
            let support = std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))?;
            let dir = match browser_id {
                "chrome" => "Google/Chrome",
                "chromium" => "Chromium",
                "edge" => "Microsoft Edge",
                "brave" => "BraveSoftware/Brave-Browser",
                "vivaldi" => "Vivaldi",
                "opera" => "com.operasoftware.Opera",
                _ => return None,
            };
            Some(support.join(dir))
        }
        #[cfg(target_os = "windows")]
        {
            match browser_id {
                "opera" => {
                    let roaming = std::env::var("APPDATA").ok().map(PathBuf::from)?;
                    Some(roaming.join("Opera Software/Opera Stable"))
                }
                _ => {
                    let local = std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)?;
                    let dir = match browser_id {
                        "chrome" => "Google/Chrome/User Data",
                        "chromium" => "Chromium/User Data",
                        "edge" => "Microsoft/Edge/User Data",
                        "brave" => "BraveSoftware/Brave-Browser/User Data",
                        "vivaldi" => "Vivaldi/User Data",
                        _ => return None,
                    };
                    Some(local.join(dir))
                }
            }
        }
        #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
        {
            let _ = browser_id;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch_session(dir: &Path) {
        std::fs::write(dir.join("Current Session"), b"x").unwrap();
    }

    #[test]
    fn test_enumerate_profiles_picks_default_and_numbered() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["Default", "Profile 1", "Profile 2", "System Profile", "Crashpad"] {
            std::fs::create_dir(dir.path().join(name)).unwrap();
        }
        let profiles = enumerate_profiles(dir.path(), false);
        let names: Vec<_> = profiles.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Default", "Profile 1", "Profile 2"]);
    }

    #[test]
    fn test_flat_profile_is_the_user_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let profiles = enumerate_profiles(dir.path(), true);
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].path, dir.path());
    }

    #[test]
    fn test_sessions_subdirectory_preferred() {
        let dir = tempfile::tempdir().unwrap();
        let profile_dir = dir.path().join("Default");
        std::fs::create_dir_all(profile_dir.join("Sessions")).unwrap();
        touch_session(&profile_dir.join("Sessions"));

        let profile = profile_at("Default", profile_dir.clone());
        assert_eq!(profile.sessions_path, profile_dir.join("Sessions"));
        assert!(profile.has_sessions);
    }

    #[test]
    fn test_profile_without_snapshots_has_no_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let profile = profile_at("Default", dir.path().to_path_buf());
        assert_eq!(profile.sessions_path, dir.path());
        assert!(!profile.has_sessions);
    }

    #[test]
    fn test_select_profile_prefers_exact_then_substring() {
        let browser = Browser {
            id: "vivaldi".to_string(),
            name: "Vivaldi".to_string(),
            profiles: vec![
                BrowserProfile {
                    name: "Default".to_string(),
                    path: PathBuf::from("/p/Default"),
                    sessions_path: PathBuf::from("/p/Default"),
                    has_sessions: false,
                },
                BrowserProfile {
                    name: "Profile 1".to_string(),
                    path: PathBuf::from("/p/Profile 1"),
                    sessions_path: PathBuf::from("/p/Profile 1"),
                    has_sessions: true,
                },
            ],
        };
        assert_eq!(browser.select_profile(Some("Default")).unwrap().name, "Default");
        assert_eq!(browser.select_profile(Some("profile")).unwrap().name, "Profile 1");
        // No request: first profile with sessions wins
        assert_eq!(browser.select_profile(None).unwrap().name, "Profile 1");
    }
}

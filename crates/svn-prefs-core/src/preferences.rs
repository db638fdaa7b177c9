//! Preference records for the two persistence scopes:
//! - User: per-user, per-machine (stored in the host key-value store)
//! - Project: per-project, committed alongside the project settings

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::TraceLogLevel;

/// Executable used when the project does not configure one.
pub const DEFAULT_CLI_EXECUTABLE: &str = "svn";

/// Per-user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserPreferences {
    /// Master switch for the whole integration
    pub core_integration_enabled: bool,

    /// Draw status overlays on top of project assets
    pub overlay_icons_enabled: bool,

    /// Query the repository for lock information
    pub lock_checking_enabled: bool,

    /// Seconds between periodic status refreshes; negative disables them
    pub auto_refresh_interval_seconds: i32,

    pub trace_log_level: TraceLogLevel,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            core_integration_enabled: true,
            overlay_icons_enabled: true,
            lock_checking_enabled: false,
            auto_refresh_interval_seconds: 60,
            trace_log_level: TraceLogLevel::SvnOperations,
        }
    }
}

impl UserPreferences {
    /// Interval between periodic refreshes, or `None` when disabled.
    pub fn auto_refresh_interval(&self) -> Option<Duration> {
        u64::try_from(self.auto_refresh_interval_seconds)
            .ok()
            .map(Duration::from_secs)
    }

    /// Whether the configured level includes the given trace category.
    pub fn traces(&self, category: TraceLogLevel) -> bool {
        match (self.trace_log_level, category) {
            (_, TraceLogLevel::None) | (TraceLogLevel::None, _) => false,
            (TraceLogLevel::All, _) => true,
            (level, category) => level == category,
        }
    }
}

/// Per-project preferences, shared with everyone working on the project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectPreferences {
    /// Path to the svn executable; empty means "find it on PATH"
    pub cli_executable_path: String,

    /// Project-relative paths the integration ignores
    pub excluded_paths: Vec<String>,
}

impl ProjectPreferences {
    pub fn cli_executable(&self) -> &str {
        let path = self.cli_executable_path.trim();
        if path.is_empty() {
            DEFAULT_CLI_EXECUTABLE
        } else {
            path
        }
    }

    /// True when `path` is an excluded entry or lies underneath one.
    ///
    /// Both sides are compared with forward slashes and without trailing
    /// separators. Blank entries never match.
    pub fn is_excluded(&self, path: &str) -> bool {
        let path = normalize(path);
        self.excluded_paths.iter().any(|entry| {
            let entry = normalize(entry);
            if entry.is_empty() {
                return false;
            }
            path == entry
                || path
                    .strip_prefix(entry.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }

    /// Append an excluded path unless an equivalent entry already exists.
    /// Returns whether the list changed.
    pub fn add_excluded_path(&mut self, path: &str) -> bool {
        let normalized = normalize(path);
        if normalized.is_empty()
            || self
                .excluded_paths
                .iter()
                .any(|entry| normalize(entry) == normalized)
        {
            return false;
        }
        self.excluded_paths.push(normalized);
        true
    }

    /// Remove every entry equivalent to `path`. Returns whether the list changed.
    pub fn remove_excluded_path(&mut self, path: &str) -> bool {
        let normalized = normalize(path);
        let before = self.excluded_paths.len();
        self.excluded_paths.retain(|entry| normalize(entry) != normalized);
        self.excluded_paths.len() != before
    }
}

fn normalize(path: &str) -> String {
    path.trim().replace('\\', "/").trim_end_matches('/').to_string()
}

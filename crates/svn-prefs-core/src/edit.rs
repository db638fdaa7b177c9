//! Named access to individual preference fields, for text front ends.

use std::str::FromStr;

use crate::error::PreferencesError;
use crate::preferences::{ProjectPreferences, UserPreferences};
use crate::types::TraceLogLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceField {
    CoreIntegrationEnabled,
    OverlayIconsEnabled,
    LockCheckingEnabled,
    AutoRefreshIntervalSeconds,
    TraceLogLevel,
    CliExecutablePath,
}

impl PreferenceField {
    pub const ALL: [PreferenceField; 6] = [
        PreferenceField::CoreIntegrationEnabled,
        PreferenceField::OverlayIconsEnabled,
        PreferenceField::LockCheckingEnabled,
        PreferenceField::AutoRefreshIntervalSeconds,
        PreferenceField::TraceLogLevel,
        PreferenceField::CliExecutablePath,
    ];

    /// Serialized name of the field.
    pub fn name(self) -> &'static str {
        match self {
            PreferenceField::CoreIntegrationEnabled => "coreIntegrationEnabled",
            PreferenceField::OverlayIconsEnabled => "overlayIconsEnabled",
            PreferenceField::LockCheckingEnabled => "lockCheckingEnabled",
            PreferenceField::AutoRefreshIntervalSeconds => "autoRefreshIntervalSeconds",
            PreferenceField::TraceLogLevel => "traceLogLevel",
            PreferenceField::CliExecutablePath => "cliExecutablePath",
        }
    }

    pub fn is_project_scoped(self) -> bool {
        matches!(self, PreferenceField::CliExecutablePath)
    }

    /// Current value rendered as text.
    pub fn get(self, user: &UserPreferences, project: &ProjectPreferences) -> String {
        match self {
            PreferenceField::CoreIntegrationEnabled => user.core_integration_enabled.to_string(),
            PreferenceField::OverlayIconsEnabled => user.overlay_icons_enabled.to_string(),
            PreferenceField::LockCheckingEnabled => user.lock_checking_enabled.to_string(),
            PreferenceField::AutoRefreshIntervalSeconds => {
                user.auto_refresh_interval_seconds.to_string()
            }
            PreferenceField::TraceLogLevel => user.trace_log_level.to_string(),
            PreferenceField::CliExecutablePath => project.cli_executable_path.clone(),
        }
    }

    /// Parse `value` and store it in the matching record.
    pub fn set(
        self,
        user: &mut UserPreferences,
        project: &mut ProjectPreferences,
        value: &str,
    ) -> Result<(), PreferencesError> {
        let invalid = || PreferencesError::InvalidValue {
            field: self.name().to_string(),
            value: value.to_string(),
        };

        match self {
            PreferenceField::CoreIntegrationEnabled => {
                user.core_integration_enabled = parse_bool(value).ok_or_else(invalid)?;
            }
            PreferenceField::OverlayIconsEnabled => {
                user.overlay_icons_enabled = parse_bool(value).ok_or_else(invalid)?;
            }
            PreferenceField::LockCheckingEnabled => {
                user.lock_checking_enabled = parse_bool(value).ok_or_else(invalid)?;
            }
            PreferenceField::AutoRefreshIntervalSeconds => {
                user.auto_refresh_interval_seconds =
                    value.trim().parse().map_err(|_| invalid())?;
            }
            PreferenceField::TraceLogLevel => {
                user.trace_log_level = TraceLogLevel::parse(value.trim()).ok_or_else(invalid)?;
            }
            PreferenceField::CliExecutablePath => {
                project.cli_executable_path = value.trim().to_string();
            }
        }
        Ok(())
    }
}

impl FromStr for PreferenceField {
    type Err = PreferencesError;

    /// Accepts the serialized name or its kebab/snake-case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect();
        Self::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| PreferencesError::UnknownField(s.to_string()))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_parse_in_any_case_style() {
        assert_eq!(
            "lock-checking-enabled".parse::<PreferenceField>().unwrap(),
            PreferenceField::LockCheckingEnabled
        );
        assert_eq!(
            "cli_executable_path".parse::<PreferenceField>().unwrap(),
            PreferenceField::CliExecutablePath
        );
        assert!(matches!(
            "colour".parse::<PreferenceField>(),
            Err(PreferencesError::UnknownField(_))
        ));
    }

    #[test]
    fn set_updates_matching_record() {
        let mut user = UserPreferences::default();
        let mut project = ProjectPreferences::default();

        PreferenceField::AutoRefreshIntervalSeconds
            .set(&mut user, &mut project, "-1")
            .unwrap();
        PreferenceField::TraceLogLevel
            .set(&mut user, &mut project, "all")
            .unwrap();
        PreferenceField::CliExecutablePath
            .set(&mut user, &mut project, " /usr/bin/svn ")
            .unwrap();

        assert_eq!(user.auto_refresh_interval_seconds, -1);
        assert_eq!(user.trace_log_level, TraceLogLevel::All);
        assert_eq!(project.cli_executable_path, "/usr/bin/svn");
        assert_eq!(PreferenceField::TraceLogLevel.get(&user, &project), "All");
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut user = UserPreferences::default();
        let mut project = ProjectPreferences::default();

        let err = PreferenceField::OverlayIconsEnabled
            .set(&mut user, &mut project, "maybe")
            .unwrap_err();
        assert!(matches!(err, PreferencesError::InvalidValue { .. }));
        assert!(user.overlay_icons_enabled);
    }
}

//! Status enums shared by the icon cache and the preference records.

use serde::{Deserialize, Serialize};

/// Working-copy status of a file, as reported by `svn status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileStatus {
    Normal,
    Added,
    Modified,
    Deleted,
    Conflicted,
    Unversioned,
    Ignored,
    Missing,
    Replaced,
    External,
}

impl FileStatus {
    /// Every variant in ordinal order.
    pub const ALL: [FileStatus; 10] = [
        FileStatus::Normal,
        FileStatus::Added,
        FileStatus::Modified,
        FileStatus::Deleted,
        FileStatus::Conflicted,
        FileStatus::Unversioned,
        FileStatus::Ignored,
        FileStatus::Missing,
        FileStatus::Replaced,
        FileStatus::External,
    ];

    pub fn ordinal(self) -> usize {
        self as usize
    }
}

/// Lock state of a file in the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockStatus {
    NoLock,
    LockedHere,
    LockedOther,
    LockedButStolen,
    BrokenLock,
}

impl LockStatus {
    /// Every variant in ordinal order.
    pub const ALL: [LockStatus; 5] = [
        LockStatus::NoLock,
        LockStatus::LockedHere,
        LockStatus::LockedOther,
        LockStatus::LockedButStolen,
        LockStatus::BrokenLock,
    ];

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            LockStatus::NoLock => "NoLock",
            LockStatus::LockedHere => "LockedHere",
            LockStatus::LockedOther => "LockedOther",
            LockStatus::LockedButStolen => "LockedButStolen",
            LockStatus::BrokenLock => "BrokenLock",
        }
    }

    /// Human readable description shown as the icon tooltip.
    pub fn tooltip(self) -> &'static str {
        match self {
            LockStatus::NoLock => "",
            LockStatus::LockedHere => "You have locked this file.",
            LockStatus::LockedOther => "Someone else locked this file.",
            LockStatus::LockedButStolen => "Your lock was stolen by someone else.",
            LockStatus::BrokenLock => "Your lock was broken.",
        }
    }
}

/// Whether the repository holds newer changes than the working copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteStatus {
    None,
    Modified,
}

impl RemoteStatus {
    pub const ALL: [RemoteStatus; 2] = [RemoteStatus::None, RemoteStatus::Modified];
}

/// Which integration activity gets traced to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TraceLogLevel {
    None,
    #[default]
    #[serde(rename = "SVNOperations")]
    SvnOperations,
    DatabaseUpdates,
    All,
}

impl TraceLogLevel {
    pub const ALL: [TraceLogLevel; 4] = [
        TraceLogLevel::None,
        TraceLogLevel::SvnOperations,
        TraceLogLevel::DatabaseUpdates,
        TraceLogLevel::All,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TraceLogLevel::None => "None",
            TraceLogLevel::SvnOperations => "SVNOperations",
            TraceLogLevel::DatabaseUpdates => "DatabaseUpdates",
            TraceLogLevel::All => "All",
        }
    }

    /// Parse a level name, ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(value))
    }
}

impl std::fmt::Display for TraceLogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_follow_declaration_order() {
        for (idx, status) in FileStatus::ALL.iter().enumerate() {
            assert_eq!(status.ordinal(), idx);
        }
        for (idx, status) in LockStatus::ALL.iter().enumerate() {
            assert_eq!(status.ordinal(), idx);
        }
    }

    #[test]
    fn trace_level_parses_case_insensitively() {
        assert_eq!(
            TraceLogLevel::parse("svnoperations"),
            Some(TraceLogLevel::SvnOperations)
        );
        assert_eq!(TraceLogLevel::parse("ALL"), Some(TraceLogLevel::All));
        assert_eq!(TraceLogLevel::parse("verbose"), None);
    }

    #[test]
    fn trace_level_serializes_with_host_names() {
        let json = serde_json::to_string(&TraceLogLevel::SvnOperations).unwrap();
        assert_eq!(json, "\"SVNOperations\"");
    }
}

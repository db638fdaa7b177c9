//! Status overlay icons, resolved once and cached for UI redraws.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::types::{FileStatus, LockStatus, RemoteStatus};

const OVERLAY_ROOT: &str = "Editor/SVNOverlayIcons";

/// Opaque handle to a resolved image resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconHandle {
    inner: Rc<ImageResource>,
}

#[derive(Debug, PartialEq, Eq)]
struct ImageResource {
    name: String,
    path: Option<PathBuf>,
}

impl IconHandle {
    pub fn new(name: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self {
            inner: Rc::new(ImageResource {
                name: name.into(),
                path,
            }),
        }
    }

    /// Resource name the handle was resolved from.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Backing file, if the source is file based.
    pub fn path(&self) -> Option<&Path> {
        self.inner.path.as_deref()
    }

    /// True when both handles point at the same cached resource.
    pub fn ptr_eq(&self, other: &IconHandle) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Image plus tooltip, ready to be drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconContent {
    pub image: Option<IconHandle>,
    pub tooltip: String,
}

impl IconContent {
    fn new(image: Option<IconHandle>, tooltip: &str) -> Self {
        Self {
            image,
            tooltip: tooltip.to_string(),
        }
    }
}

/// Host image-resource loader.
pub trait IconSource {
    /// Resolve a named resource; `None` when the host has no such image.
    fn load(&self, name: &str) -> Option<IconHandle>;
}

/// Resolves `<root>/<name>.png`.
#[derive(Debug, Clone)]
pub struct DirectoryIconSource {
    root: PathBuf,
}

impl DirectoryIconSource {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl IconSource for DirectoryIconSource {
    fn load(&self, name: &str) -> Option<IconHandle> {
        let path = self.root.join(format!("{name}.png"));
        if path.is_file() {
            Some(IconHandle::new(name, Some(path)))
        } else {
            None
        }
    }
}

pub fn file_status_resource(status: FileStatus) -> String {
    let icon = match status {
        FileStatus::Normal | FileStatus::External => "SVNNormalIcon",
        FileStatus::Added => "SVNAddedIcon",
        FileStatus::Modified | FileStatus::Replaced => "SVNModifiedIcon",
        FileStatus::Deleted | FileStatus::Missing => "SVNDeletedIcon",
        FileStatus::Conflicted => "SVNConflictIcon",
        FileStatus::Unversioned => "SVNUnversionedIcon",
        FileStatus::Ignored => "SVNIgnoredIcon",
    };
    format!("{OVERLAY_ROOT}/{icon}")
}

pub fn lock_status_resource(status: LockStatus) -> String {
    format!("{OVERLAY_ROOT}/Locks/SVN{}Icon", status.name())
}

pub fn remote_changes_resource() -> String {
    format!("{OVERLAY_ROOT}/Others/SVNRemoteChangesIcon")
}

/// Icons for every status variant, indexed by ordinal.
#[derive(Debug, Clone)]
pub struct IconCache {
    file_status: Vec<IconContent>,
    lock_status: Vec<IconContent>,
    remote_changes: IconContent,
    unresolved: usize,
}

impl Default for IconCache {
    /// Cache with an entry for every variant and no images.
    fn default() -> Self {
        Self {
            file_status: vec![IconContent::default(); FileStatus::ALL.len()],
            lock_status: vec![IconContent::default(); LockStatus::ALL.len()],
            remote_changes: IconContent::default(),
            unresolved: 0,
        }
    }
}

impl IconCache {
    /// Resolve every status icon through `source`.
    ///
    /// Variants sharing a resource share one handle.
    pub fn build(source: &dyn IconSource) -> Self {
        let mut resolved: Vec<(String, Option<IconHandle>)> = Vec::new();
        let mut load = |name: String| -> Option<IconHandle> {
            if let Some((_, handle)) = resolved.iter().find(|(known, _)| *known == name) {
                return handle.clone();
            }
            let handle = source.load(&name);
            if handle.is_none() {
                tracing::debug!("Missing SVN overlay icon resource: {}", name);
            }
            resolved.push((name, handle.clone()));
            handle
        };

        let file_status = FileStatus::ALL
            .iter()
            .map(|status| IconContent::new(load(file_status_resource(*status)), ""))
            .collect();
        let lock_status = LockStatus::ALL
            .iter()
            .map(|status| IconContent::new(load(lock_status_resource(*status)), status.tooltip()))
            .collect();
        let remote_changes = IconContent::new(
            load(remote_changes_resource()),
            "Newer changes are available in the repository.",
        );

        let unresolved = resolved.iter().filter(|(_, handle)| handle.is_none()).count();
        if unresolved > 0 {
            tracing::warn!(
                "{} of {} SVN overlay icon resources could not be resolved",
                unresolved,
                resolved.len()
            );
        }

        Self {
            file_status,
            lock_status,
            remote_changes,
            unresolved,
        }
    }

    /// Number of distinct resources the source could not resolve.
    pub fn unresolved_count(&self) -> usize {
        self.unresolved
    }

    pub fn file_status(&self, status: FileStatus) -> &IconContent {
        &self.file_status[status.ordinal()]
    }

    pub fn lock_status(&self, status: LockStatus) -> &IconContent {
        &self.lock_status[status.ordinal()]
    }

    pub fn remote_status(&self, status: RemoteStatus) -> Option<&IconContent> {
        match status {
            RemoteStatus::Modified => Some(&self.remote_changes),
            RemoteStatus::None => None,
        }
    }
}

//! Discovery module: Find supported files beneath a root directory

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::{DirsumError, Result, SUPPORTED_EXTENSIONS};

/// A file picked up by the directory scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Full path (root joined with the walk path)
    pub path: PathBuf,
    /// Base filename
    pub name: String,
    /// Path relative to the scan root, `/` separated
    pub relative: String,
}

/// Lowercased extension of a path, without the dot.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Check if a path has one of the supported extensions.
pub fn is_supported(path: &Path) -> bool {
    SUPPORTED_EXTENSIONS.contains(&extension_of(path).as_str())
}

/// Walk `root` recursively and collect every file with a supported extension.
///
/// Hidden and git-ignored files are included; symlinked directories are not
/// followed. Results come back in traversal order.
pub fn scan_directory(root: &Path) -> Result<Vec<DiscoveredFile>> {
    if !root.is_dir() {
        return Err(DirsumError::InvalidDirectory(root.to_path_buf()));
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };

        let path = entry.path();
        if path.is_dir() || !is_supported(path) {
            continue;
        }

        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => continue,
        };
        let relative = path
            .strip_prefix(root)
            .unwrap_or(path)
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        files.push(DiscoveredFile {
            path: path.to_path_buf(),
            name,
            relative,
        });
    }

    tracing::debug!("Discovered {} supported files in {}", files.len(), root.display());
    Ok(files)
}

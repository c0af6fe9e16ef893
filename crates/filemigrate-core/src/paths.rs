//! Normalization of job source and destination paths

use std::fs;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Replace every `/` and `\` with the platform separator and make sure the
/// result ends with one.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let mut normalized: String = raw
        .chars()
        .map(|c| if c == '/' || c == '\\' { MAIN_SEPARATOR } else { c })
        .collect();

    if !normalized.ends_with(MAIN_SEPARATOR) {
        normalized.push(MAIN_SEPARATOR);
    }

    normalized
}

/// Filesystem path for a normalized string with the trailing separator
/// dropped.
///
/// A file source normalizes to `a.txt/`, which the OS would reject as a
/// directory lookup, so discovery walks from this path instead.
#[must_use]
pub fn walk_root(normalized: &str) -> PathBuf {
    Path::new(normalized).components().collect()
}

/// Destination of `file` when moving it out of `source_root` into
/// `destination_root`.
///
/// A file discovered as the root itself lands directly inside the
/// destination under its own name. Returns `None` when `file` does not live
/// under `source_root`.
#[must_use]
pub fn destination_for(file: &Path, source_root: &Path, destination_root: &Path) -> Option<PathBuf> {
    let relative = file.strip_prefix(source_root).ok()?;

    if relative.as_os_str().is_empty() {
        return file.file_name().map(|name| destination_root.join(name));
    }

    Some(destination_root.join(relative))
}

/// Whether `source` and `destination` name the same filesystem entry.
///
/// Equal paths always match. Otherwise both are resolved, so `..`
/// components and symlinked directories that lead back to the source are
/// caught as well.
#[must_use]
pub fn is_same_location(source: &Path, destination: &Path) -> bool {
    if source == destination {
        return true;
    }

    match (fs::canonicalize(source), fs::canonicalize(destination)) {
        (Ok(source), Ok(destination)) => source == destination,
        _ => false,
    }
}

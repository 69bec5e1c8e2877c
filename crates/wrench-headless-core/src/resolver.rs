//! Locating build-script output directories next to the wrench binary.
//!
//! Cargo places the `OUT_DIR` of every build script under
//! `target/<profile>/build/<package>-<hash>`. Stale hashes from older builds
//! stay around, so the most recently modified match is taken to be current.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

use crate::error::{HeadlessError, HeadlessResult};

/// Name of the directory, sibling to the binary, that holds build-script output.
pub const BUILD_DIR_NAME: &str = "build";

/// A directory entry matching the package prefix, captured during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildArtifactCandidate {
    pub name: OsString,
    pub modified: SystemTime,
    pub path: PathBuf,
}

/// Directory containing the binary at `binary_path`.
///
/// A path ending in a separator is already a directory. A bare file name
/// lives in the current directory.
pub fn binary_dir(binary_path: &Path) -> PathBuf {
    let raw = binary_path.as_os_str().to_string_lossy();
    if raw.ends_with(std::path::is_separator) {
        return binary_path.to_path_buf();
    }

    match binary_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// The `build` directory that sits next to the binary at `binary_path`.
pub fn build_dir_for(binary_path: &Path) -> PathBuf {
    binary_dir(binary_path).join(BUILD_DIR_NAME)
}

/// List every entry in `build_dir` whose name starts with `<package>-`.
///
/// Names are compared as raw bytes, so a hash suffix that is not valid
/// UTF-8 still matches. A missing build directory yields no candidates.
pub fn scan_candidates(package: &str, build_dir: &Path) -> HeadlessResult<Vec<BuildArtifactCandidate>> {
    let entries = match fs::read_dir(build_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(build_dir = %build_dir.display(), "Build directory does not exist");
            return Ok(Vec::new());
        }
        Err(e) => return Err(HeadlessError::filesystem(build_dir, e)),
    };

    let prefix = format!("{package}-");
    let mut candidates = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| HeadlessError::filesystem(build_dir, e))?;
        let name = entry.file_name();
        if !name.as_encoded_bytes().starts_with(prefix.as_bytes()) {
            continue;
        }

        let path = build_dir.join(&name);
        let modified = fs::metadata(&path)
            .and_then(|m| m.modified())
            .map_err(|e| HeadlessError::filesystem(&path, e))?;

        candidates.push(BuildArtifactCandidate {
            name,
            modified,
            path,
        });
    }

    Ok(candidates)
}

/// Pick the most recently modified candidate.
///
/// Which of several equally new candidates wins is unspecified.
pub fn newest(candidates: Vec<BuildArtifactCandidate>) -> Option<BuildArtifactCandidate> {
    candidates.into_iter().max_by_key(|c| c.modified)
}

/// Find the newest `<package>-*` entry in the build directory next to `binary_path`.
///
/// `binary_path` does not need to exist. Returns `Ok(None)` when nothing
/// matches, including when the build directory itself is missing.
pub fn resolve(package: &str, binary_path: &Path) -> HeadlessResult<Option<PathBuf>> {
    let build_dir = build_dir_for(binary_path);
    let candidates = scan_candidates(package, &build_dir)?;
    debug!(
        package,
        build_dir = %build_dir.display(),
        count = candidates.len(),
        "Scanned build directory"
    );

    Ok(newest(candidates).map(|c| c.path))
}

/// Like [`resolve`], but a missing dependency is an error.
pub fn require(package: &str, binary_path: &Path) -> HeadlessResult<PathBuf> {
    resolve(package, binary_path)?.ok_or_else(|| HeadlessError::DependencyNotFound {
        package: package.to_string(),
        build_dir: build_dir_for(binary_path),
    })
}

//! Content digest of the screenshot written by `wrench show`.

use std::fs::File;
use std::io;
use std::path::Path;

use md5::{Digest, Md5};

use crate::error::{HeadlessError, HeadlessResult};

/// File name wrench writes its rendered frame to, in its working directory.
pub const SCREENSHOT_FILE: &str = "screenshot.png";

/// Lowercase hex MD5 digest of the file at `path`.
pub fn md5_hex(path: &Path) -> HeadlessResult<String> {
    let mut file = File::open(path).map_err(|e| HeadlessError::filesystem(path, e))?;
    let mut hasher = Md5::new();
    io::copy(&mut file, &mut hasher).map_err(|e| HeadlessError::filesystem(path, e))?;
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_of_known_content() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(SCREENSHOT_FILE);
        std::fs::write(&path, b"abc").unwrap();
        assert_eq!(md5_hex(&path).unwrap(), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn digest_of_empty_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(SCREENSHOT_FILE);
        std::fs::write(&path, b"").unwrap();
        assert_eq!(md5_hex(&path).unwrap(), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn missing_screenshot_is_filesystem_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = md5_hex(&tmp.path().join(SCREENSHOT_FILE)).unwrap_err();
        assert!(matches!(err, HeadlessError::FilesystemAccess { .. }));
    }
}

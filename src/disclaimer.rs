use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::error::ScanError;
use crate::license::locate::list_entries;

/// Attribution-bearing file names, each with an optional single extension.
static DISCLAIMER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:",
        r"(?:un)?licen[sc]es?|",
        r"copy(?:ing|right)|",
        r"authors?|",
        r"contributors?|",
        r"patents?",
        r")(?:\.[^.]+)?$"
    ))
    .expect("disclaimer name pattern is a valid regex")
});

/// One attribution file of a dependency.
#[derive(Debug, Clone)]
pub struct DisclaimerFile {
    pub name: String,
    /// `None` when the file could not be read.
    pub content: Option<String>,
}

pub fn is_disclaimer_name(name: &str) -> bool {
    DISCLAIMER_NAME.is_match(name)
}

/// Collect every license, copying, authors, contributors and patents file
/// directly inside `dir`, in listing order.
///
/// Only the listing itself can fail; unreadable files are logged and kept
/// without content.
pub fn extract_disclaimer(dir: &Path) -> Result<Vec<DisclaimerFile>, ScanError> {
    let files = list_entries(dir)?
        .into_iter()
        .filter(|(name, file_type)| file_type.is_file() && is_disclaimer_name(name))
        .map(|(name, _)| {
            let content = read_disclaimer_file(&dir.join(&name));
            DisclaimerFile { name, content }
        })
        .collect();

    Ok(files)
}

fn read_disclaimer_file(path: &Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            warn!(file = %path.display(), error = %e, "unable to read disclaimer file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_disclaimer_names() {
        for name in [
            "LICENSE",
            "licenses",
            "UNLICENSE.txt",
            "Licence.md",
            "COPYING",
            "copyright.txt",
            "AUTHORS",
            "author.md",
            "CONTRIBUTORS",
            "PATENTS",
            "patent.txt",
        ] {
            assert!(is_disclaimer_name(name), "{name} should qualify");
        }
        for name in ["main.go", "README.md", "LICENSE.txt.bak", "copy", "license-info.md", "authorsx"] {
            assert!(!is_disclaimer_name(name), "{name} should not qualify");
        }
    }

    #[test]
    fn test_extract_license_and_authors_only() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("LICENSE"), "license text").unwrap();
        fs::write(dir.path().join("AUTHORS"), "Jane Doe").unwrap();
        fs::write(dir.path().join("main.go"), "package main").unwrap();

        let files = extract_disclaimer(dir.path()).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["AUTHORS", "LICENSE"]);
        assert_eq!(files[0].content.as_deref(), Some("Jane Doe"));
        assert_eq!(files[1].content.as_deref(), Some("license text"));
    }

    #[test]
    fn test_directories_are_skipped() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("LICENSES")).unwrap();
        fs::write(dir.path().join("PATENTS"), "grant").unwrap();

        let files = extract_disclaimer(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "PATENTS");
    }

    #[test]
    fn test_read_failure_yields_no_content() {
        let dir = tempdir().unwrap();
        assert!(read_disclaimer_file(&dir.path().join("LICENSE")).is_none());
        fs::write(dir.path().join("LICENSE"), b"caf\xe9").unwrap();
        assert_eq!(
            read_disclaimer_file(&dir.path().join("LICENSE")).as_deref(),
            Some("caf\u{fffd}")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_is_kept_without_content() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let copying = dir.path().join("COPYING");
        fs::write(&copying, "secret").unwrap();
        fs::write(dir.path().join("LICENSE"), "license text").unwrap();
        fs::set_permissions(&copying, fs::Permissions::from_mode(0o000)).unwrap();
        if fs::read(&copying).is_ok() {
            // running as root, permissions are not enforced
            return;
        }

        let files = extract_disclaimer(dir.path()).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["COPYING", "LICENSE"]);
        assert!(files[0].content.is_none());
        assert_eq!(files[1].content.as_deref(), Some("license text"));
    }

    #[test]
    fn test_missing_directory_is_scan_error() {
        let dir = tempdir().unwrap();
        assert!(extract_disclaimer(&dir.path().join("gone")).is_err());
    }
}

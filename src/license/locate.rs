use std::fs::FileType;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ScanError;

/// Candidate license file names. Capture group index selects the score.
static LICENSE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:",
        r"((?:un)?licen[sc]e)|",
        r"((?:un)?licen[sc]e\.(?:md|markdown|txt))|",
        r"(copy(?:ing|right)(?:\.[^.]+)?)|",
        r"((?:un)?licen[sc]e\.[^.]+)",
        r")$"
    ))
    .expect("license name pattern is a valid regex")
});

const GROUP_SCORES: [f64; 4] = [1.0, 0.9, 0.8, 0.7];

/// Score how likely a file name is to be "the" license file.
///
/// `LICENSE` scores 1.0, `LICENSE.md|markdown|txt` 0.9, `COPYING`/`COPYRIGHT`
/// with an optional extension 0.8, `LICENSE.<other>` 0.7, anything else 0.
pub fn score_license_name(name: &str) -> f64 {
    let Some(caps) = LICENSE_NAME.captures(name) else {
        return 0.0;
    };
    GROUP_SCORES
        .iter()
        .enumerate()
        .find(|(i, _)| caps.get(i + 1).is_some())
        .map(|(_, &score)| score)
        .unwrap_or(0.0)
}

/// Immediate entries of `dir` with their (non-followed) file types, sorted by
/// name so scans are deterministic across filesystems.
pub(crate) fn list_entries(dir: &Path) -> Result<Vec<(String, FileType)>, ScanError> {
    let scan_err = |source| ScanError {
        dir: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(scan_err)? {
        let entry = entry.map_err(scan_err)?;
        let file_type = entry.file_type().map_err(scan_err)?;
        entries.push((entry.file_name().to_string_lossy().into_owned(), file_type));
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(entries)
}

/// Pick the best-scoring license file in `dir`, if any scores above zero.
///
/// Directories are skipped. On equal scores the first file in listing order wins.
pub fn find_license_file(dir: &Path) -> Result<Option<PathBuf>, ScanError> {
    let mut best_score = 0.0;
    let mut best_name = None;

    for (name, file_type) in list_entries(dir)? {
        if file_type.is_dir() {
            continue;
        }
        let score = score_license_name(&name);
        if score > best_score {
            best_score = score;
            best_name = Some(name);
        }
    }

    Ok(best_name.map(|name| dir.join(name)))
}

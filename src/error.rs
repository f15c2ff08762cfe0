//! Error kinds surfaced by the license engine.
//!
//! Run-level glue (`main`, enumerators, report writers) works in
//! [`anyhow::Result`]; the engine itself returns these typed errors so the
//! caller can tell an I/O failure apart from a critical-license signal.

use std::path::PathBuf;

use crate::license::classifier::Classification;

/// A compiled-in reference template could not be turned into a usable template.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("license template {name} has no words in its body")]
    EmptyTemplate { name: String },
}

/// A dependency directory could not be listed.
#[derive(Debug, thiserror::Error)]
#[error("unable to list {}: {source}", .dir.display())]
pub struct ScanError {
    pub dir: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// The license file of a dependency could not be located or read.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("no license file found in {}", .dir.display())]
    NoLicenseFile { dir: PathBuf },

    #[error("unable to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The best match is on the critical list. Carries the full classification so
/// a caller that chooses to continue can still record the label.
#[derive(Debug, thiserror::Error)]
#[error("critical license {nickname}: {}", .classification.label)]
pub struct CriticalLicense {
    pub nickname: String,
    pub classification: Box<Classification>,
}

/// Outcome of classifying one dependency and applying the critical-license policy.
#[derive(Debug, thiserror::Error)]
pub enum LicenseError {
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Critical(#[from] CriticalLicense),
}

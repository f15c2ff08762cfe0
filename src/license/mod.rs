//! License file identification.
//!
//! - [`words`] — normalizes text into a word set (lowercase, copyright lines dropped).
//! - [`template`] — parses the compiled-in reference licenses ([`assets`]) into a [`template::Corpus`].
//! - [`locate`] — picks the license file of a dependency directory.
//! - [`matcher`] — Dice-coefficient scoring against every template.
//! - [`classifier`] — turns the best match into a label.
//! - [`critical`] — flags copyleft and unresolved licenses.

pub mod assets;
pub mod classifier;
pub mod critical;
pub mod locate;
pub mod matcher;
pub mod template;
pub mod words;

use std::path::Path;

use crate::error::LicenseError;
use classifier::{Classification, Classifier};
use critical::CriticalPolicy;

/// Classify the dependency at `dir`, then apply the critical-license policy.
///
/// A critical license comes back as [`LicenseError::Critical`], which still
/// carries the classification, so the caller decides whether to stop.
pub fn classify_license(
    classifier: &Classifier,
    policy: &CriticalPolicy,
    dir: &Path,
) -> Result<Classification, LicenseError> {
    let classification = classifier.classify(dir)?;
    Ok(policy.check(classification)?)
}

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::config::ClassifierConfig;
use crate::error::ClassifyError;
use crate::license::locate::find_license_file;
use crate::license::matcher::match_templates;
use crate::license::template::Corpus;
use crate::license::words::build_word_set;

/// Label used when no template could be named.
pub const UNRESOLVED_LABEL: &str = "?";

/// What a dependency's license file was identified as.
#[derive(Debug, Clone)]
pub struct Classification {
    pub license_file: PathBuf,
    /// Matched template title; `None` when the file is unresolved.
    pub title: Option<String>,
    pub nickname: Option<String>,
    pub score: f64,
    /// Human-facing label, with `+words:`/`-words:` lines below the confidence threshold.
    pub label: String,
    pub extra_words: Vec<String>,
    pub missing_words: Vec<String>,
}

/// Scores license files against a shared, read-only corpus.
#[derive(Debug, Clone)]
pub struct Classifier {
    corpus: Arc<Corpus>,
    confidence: f64,
    min_score: f64,
}

impl Classifier {
    pub fn new(corpus: Arc<Corpus>, config: &ClassifierConfig) -> Self {
        Self {
            corpus,
            confidence: config.confidence,
            min_score: config.min_score,
        }
    }

    /// Locate the license file of the dependency at `dir` and classify it.
    pub fn classify(&self, dir: &Path) -> Result<Classification, ClassifyError> {
        let license_file = find_license_file(dir)?.ok_or_else(|| ClassifyError::NoLicenseFile {
            dir: dir.to_path_buf(),
        })?;

        let data = std::fs::read(&license_file).map_err(|source| ClassifyError::Read {
            path: license_file.clone(),
            source,
        })?;

        Ok(self.classify_bytes(license_file, &data))
    }

    /// Classify already-read license text.
    pub fn classify_bytes(&self, license_file: PathBuf, data: &[u8]) -> Classification {
        let words = build_word_set(&String::from_utf8_lossy(data));
        let result = match_templates(&words, self.corpus.templates());

        let matched = result.template.filter(|_| result.score > self.min_score);

        debug!(
            file = %license_file.display(),
            score = result.score,
            nickname = matched.map(|t| t.nickname.as_str()).unwrap_or(UNRESOLVED_LABEL),
            "classified license file"
        );

        let label = match matched {
            Some(t) => {
                let mut label = format!("{} ({:2}%)", t.title, percent(result.score));
                if result.score < self.confidence {
                    if !result.extra_words.is_empty() {
                        label.push_str("\n\t+words: ");
                        label.push_str(&result.extra_words.join(", "));
                    }
                    if !result.missing_words.is_empty() {
                        label.push_str("\n\t-words: ");
                        label.push_str(&result.missing_words.join(", "));
                    }
                }
                label
            }
            None => UNRESOLVED_LABEL.to_string(),
        };

        Classification {
            license_file,
            title: matched.map(|t| t.title.clone()),
            nickname: matched.map(|t| t.nickname.clone()),
            score: result.score,
            label,
            extra_words: result.extra_words,
            missing_words: result.missing_words,
        }
    }
}

/// Whole percent, truncated so an inexact match never shows as 100%.
fn percent(score: f64) -> u32 {
    (score * 100.0 + 1e-9).floor().max(0.0) as u32
}

use std::path::PathBuf;

use serde::Serialize;

/// One third-party dependency and, after classification, its license.
#[derive(Debug, Clone, Serialize)]
pub struct Dependency {
    pub name: String,
    /// Directory holding the dependency's sources.
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    pub license: Option<String>,
    pub nickname: Option<String>,
    pub score: Option<f64>,
    pub verdict: LicenseVerdict,
}

impl Dependency {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            revision: None,
            version: None,
            branch: None,
            license: None,
            nickname: None,
            score: None,
            verdict: LicenseVerdict::Pending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseVerdict {
    /// Not classified yet.
    Pending,
    Pass,
    /// Best match is on the critical list.
    Critical,
    /// No license file, or it could not be read.
    Unresolved,
}

impl std::fmt::Display for LicenseVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LicenseVerdict::Pending => write!(f, "pending"),
            LicenseVerdict::Pass => write!(f, "pass"),
            LicenseVerdict::Critical => write!(f, "critical"),
            LicenseVerdict::Unresolved => write!(f, "unresolved"),
        }
    }
}

/// Where the dependency list comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DependencySource {
    /// `Gopkg.lock` with sources under `vendor/`.
    Dep,
    /// Go modules, listed with `go list -m -json all`.
    GoModules,
}

impl std::fmt::Display for DependencySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DependencySource::Dep => write!(f, "dep (Gopkg.lock)"),
            DependencySource::GoModules => write!(f, "Go modules"),
        }
    }
}

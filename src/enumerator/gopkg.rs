use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::Dependency;

#[derive(Debug, Deserialize)]
struct GopkgLock {
    #[serde(default)]
    projects: Vec<GopkgProject>,
}

#[derive(Debug, Deserialize)]
struct GopkgProject {
    name: String,
    revision: Option<String>,
    version: Option<String>,
    branch: Option<String>,
}

/// Reads `Gopkg.lock`; each project's sources live in `<root>/vendor/<name>`.
pub struct GopkgEnumerator;

impl GopkgEnumerator {
    pub fn new() -> Self {
        Self
    }
}

impl super::Enumerator for GopkgEnumerator {
    async fn enumerate(&self, root: &Path) -> Result<Vec<Dependency>> {
        let lock_path = root.join("Gopkg.lock");
        let content = tokio::fs::read_to_string(&lock_path)
            .await
            .with_context(|| format!("reading {}", lock_path.display()))?;
        parse_gopkg_lock(&content, &root.join("vendor"))
            .with_context(|| format!("parsing {}", lock_path.display()))
    }
}

fn parse_gopkg_lock(content: &str, vendor_dir: &Path) -> Result<Vec<Dependency>> {
    let lock: GopkgLock = toml::from_str(content)?;

    let deps = lock
        .projects
        .into_iter()
        .map(|p| {
            let mut dep = Dependency::new(p.name.clone(), vendor_dir.join(&p.name));
            dep.revision = p.revision.filter(|s| !s.is_empty());
            dep.version = p.version.filter(|s| !s.is_empty());
            dep.branch = p.branch.filter(|s| !s.is_empty());
            dep
        })
        .collect();

    Ok(deps)
}

use std::path::Path;

use crate::models::DependencySource;

/// Pick the dependency source of a project: a `Gopkg.lock` wins over `go.mod`.
pub fn detect_source(path: &Path) -> Option<DependencySource> {
    if path.join("Gopkg.lock").exists() {
        return Some(DependencySource::Dep);
    }

    if path.join("go.mod").exists() {
        return Some(DependencySource::GoModules);
    }

    None
}

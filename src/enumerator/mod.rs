//! Dependency enumeration.
//!
//! - [`gopkg`] — `Gopkg.lock` projects, sources under `vendor/`.
//! - [`gomod`] — Go modules via `go list -m -json all`.

use std::path::Path;

use anyhow::Result;

use crate::models::Dependency;

pub mod gomod;
pub mod gopkg;

pub trait Enumerator {
    /// List the third-party dependencies of the project at `root`, in manifest order.
    async fn enumerate(&self, root: &Path) -> Result<Vec<Dependency>>;
}

use std::path::{Path, PathBuf};
use std::process::Output;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use tokio::process::Command;
use tracing::{debug, info};

use crate::models::Dependency;

/// The subset of `go list -m -json` output that is used.
#[derive(Debug, Deserialize)]
struct GoModule {
    #[serde(rename = "Path")]
    path: String,
    #[serde(rename = "Version")]
    version: Option<String>,
    #[serde(rename = "Dir")]
    dir: Option<PathBuf>,
    #[serde(rename = "Main", default)]
    main: bool,
}

/// Lists Go modules through the `go` tool.
pub struct GoModEnumerator {
    /// Use the vendored module versions instead of downloading.
    vendor: bool,
    timeout: Duration,
}

impl GoModEnumerator {
    pub fn new(vendor: bool, timeout: Duration) -> Self {
        Self { vendor, timeout }
    }

    async fn go(&self, root: &Path, args: &[&str]) -> Result<Vec<u8>> {
        let command = format!("go {}", args.join(" "));
        debug!(%command, "running");

        let output: Output = tokio::time::timeout(
            self.timeout,
            Command::new("go")
                .args(args)
                .env("GO111MODULE", "on")
                .current_dir(root)
                .kill_on_drop(true)
                .output(),
        )
        .await
        .map_err(|_| anyhow!("`{command}` timed out after {:?}", self.timeout))?
        .with_context(|| format!("running `{command}`"))?;

        if !output.status.success() {
            bail!(
                "`{command}` failed with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(output.stdout)
    }
}

impl super::Enumerator for GoModEnumerator {
    async fn enumerate(&self, root: &Path) -> Result<Vec<Dependency>> {
        let stdout = if self.vendor {
            self.go(root, &["list", "-m", "-json", "-mod=mod", "all"])
                .await?
        } else {
            info!("downloading modules");
            self.go(root, &["mod", "download"]).await?;
            self.go(root, &["list", "-m", "-json", "all"]).await?
        };

        parse_module_stream(&stdout)
    }
}

/// Decode the concatenated JSON objects printed by `go list -m -json`.
/// The main module is not a dependency and is skipped.
fn parse_module_stream(stdout: &[u8]) -> Result<Vec<Dependency>> {
    let mut deps = Vec::new();

    for module in serde_json::Deserializer::from_slice(stdout).into_iter::<GoModule>() {
        let module = module.context("decoding `go list` output")?;
        if module.main {
            continue;
        }
        let mut dep = Dependency::new(module.path, module.dir.unwrap_or_default());
        dep.version = module.version.filter(|v| !v.is_empty());
        deps.push(dep);
    }

    Ok(deps)
}

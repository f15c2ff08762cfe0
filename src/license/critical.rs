use std::collections::HashSet;

use tracing::warn;

use crate::error::CriticalLicense;
use crate::license::classifier::Classification;

/// Identifier recorded for a dependency whose license could not be named.
pub const NO_LICENSE: &str = "NOLICENSE";

/// Copyleft or unclear licenses that stop a run unless explicitly ignored.
pub const DEFAULT_CRITICAL: &[&str] = &[
    "AGPL-3.0",
    "EPL-1.0",
    "GPL-2.0",
    "GPL-3.0",
    "MPL-2.0",
    "MS-RL",
    NO_LICENSE,
    "LGPL-2.1",
    "OSL-3.0",
];

/// Which license identifiers raise a critical-license condition.
#[derive(Debug, Clone)]
pub struct CriticalPolicy {
    nicknames: HashSet<String>,
}

impl Default for CriticalPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_CRITICAL.iter().copied())
    }
}

impl CriticalPolicy {
    pub fn new<I, S>(nicknames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            nicknames: nicknames.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_critical(&self, nickname: &str) -> bool {
        self.nicknames.contains(nickname)
    }

    /// Pass the classification through, or flag it when its identifier
    /// (`NOLICENSE` if unresolved) is on the critical list.
    pub fn check(&self, classification: Classification) -> Result<Classification, CriticalLicense> {
        let nickname = classification
            .nickname
            .clone()
            .unwrap_or_else(|| NO_LICENSE.to_string());

        if !self.is_critical(&nickname) {
            return Ok(classification);
        }

        warn!(
            nickname = %nickname,
            file = %classification.license_file.display(),
            "found critical license"
        );
        Err(CriticalLicense {
            nickname,
            classification: Box::new(classification),
        })
    }
}

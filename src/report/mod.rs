//! Output renderers. Everything goes to the writer handed in (stdout in
//! practice); status and diagnostics go through `tracing` on stderr.
//!
//! - [`manifest`] — per-dependency license manifest as key/value text, a table, or JSON.
//! - [`disclaimer`] — concatenated attribution files per dependency.

pub mod disclaimer;
pub mod manifest;

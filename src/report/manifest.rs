use std::io::Write;

use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{Dependency, LicenseVerdict};

/// Key/value blocks, one per dependency, separated by a blank line.
/// Revision, version and branch lines are omitted when unknown.
pub fn render_text<W: Write>(out: &mut W, deps: &[Dependency]) -> Result<()> {
    for dep in deps {
        writeln!(out, "name:     {}", dep.name)?;
        if let Some(revision) = &dep.revision {
            writeln!(out, "revision: {revision}")?;
        }
        if let Some(version) = &dep.version {
            writeln!(out, "version:  {version}")?;
        }
        if let Some(branch) = &dep.branch {
            writeln!(out, "branch:   {branch}")?;
        }
        writeln!(out, "license:  {}", dep.license.as_deref().unwrap_or("?"))?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn render_table<W: Write>(out: &mut W, deps: &[Dependency]) -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Version").add_attribute(Attribute::Bold),
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Verdict").add_attribute(Attribute::Bold),
        ]);

    for dep in deps {
        let version = dep
            .version
            .as_deref()
            .or(dep.branch.as_deref())
            .or(dep.revision.as_deref())
            .unwrap_or("");

        let (verdict_str, verdict_color) = match dep.verdict {
            LicenseVerdict::Pass => ("✓ pass", Color::Green),
            LicenseVerdict::Critical => ("✗ critical", Color::Red),
            LicenseVerdict::Unresolved => ("? unresolved", Color::Yellow),
            LicenseVerdict::Pending => ("pending", Color::DarkGrey),
        };

        table.add_row(vec![
            Cell::new(&dep.name),
            Cell::new(version),
            Cell::new(dep.license.as_deref().unwrap_or("?")),
            Cell::new(verdict_str)
                .fg(verdict_color)
                .set_alignment(CellAlignment::Center),
        ]);
    }

    writeln!(out, "{table}")?;
    Ok(())
}

pub fn render_json<W: Write>(out: &mut W, deps: &[Dependency]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, deps)?;
    writeln!(out)?;
    Ok(())
}

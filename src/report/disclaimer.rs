use std::io::Write;

use anyhow::Result;

use crate::disclaimer::DisclaimerFile;

/// Write the disclaimer block of one dependency.
pub fn render<W: Write>(out: &mut W, name: &str, files: &[DisclaimerFile]) -> Result<()> {
    writeln!(out, "\nDISCLAIMER of {name}:")?;
    for file in files {
        write!(out, "\nFilename: {}\n", file.name)?;
        if let Some(content) = &file.content {
            out.write_all(content.as_bytes())?;
        }
    }
    writeln!(out)?;
    Ok(())
}

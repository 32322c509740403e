//! Presentation of derived versions and diagnostics.

use std::io::Write;

use crate::detail::VersionDetail;
use crate::error::Result;

pub mod formatter;

pub use formatter::{display_error, format_error, render_detail};

/// Write the rendered detail followed by a newline and flush.
pub fn write_detail<W: Write>(out: &mut W, detail: &VersionDetail, pretty: bool) -> Result<()> {
    let rendered = render_detail(detail, pretty)?;
    writeln!(out, "{}", rendered)?;
    out.flush()?;
    Ok(())
}

//! Fixed-width text table for route listings.

use std::io::Write;

use crate::error::Result;
use crate::store::Route;

pub const INDEX_WIDTH: usize = 4;
pub const START_WIDTH: usize = 30;
pub const END_WIDTH: usize = 20;
pub const NUMBER_WIDTH: usize = 10;

pub const EMPTY_MESSAGE: &str = "List of routes is empty.";

fn border() -> String {
    format!(
        "+-{}-+-{}-+-{}-+-{}-+",
        "-".repeat(INDEX_WIDTH),
        "-".repeat(START_WIDTH),
        "-".repeat(END_WIDTH),
        "-".repeat(NUMBER_WIDTH)
    )
}

/// Write `routes` as a bordered table, or [`EMPTY_MESSAGE`] when there are none.
///
/// Widths are fixed; longer values are printed in full and push the border out.
pub fn write_routes<W: Write>(out: &mut W, routes: &[Route]) -> Result<()> {
    if routes.is_empty() {
        writeln!(out, "{EMPTY_MESSAGE}")?;
        return Ok(());
    }

    let line = border();
    writeln!(out, "{line}")?;
    writeln!(
        out,
        "| {:^iw$} | {:^sw$} | {:^ew$} | {:^nw$} |",
        "No",
        "Start",
        "End",
        "Number",
        iw = INDEX_WIDTH,
        sw = START_WIDTH,
        ew = END_WIDTH,
        nw = NUMBER_WIDTH
    )?;
    writeln!(out, "{line}")?;

    for (idx, route) in routes.iter().enumerate() {
        writeln!(
            out,
            "| {:>iw$} | {:<sw$} | {:<ew$} | {:>nw$} |",
            idx + 1,
            route.start,
            route.end,
            route.number,
            iw = INDEX_WIDTH,
            sw = START_WIDTH,
            ew = END_WIDTH,
            nw = NUMBER_WIDTH
        )?;
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// [`write_routes`] to stdout.
pub fn display_routes(routes: &[Route]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_routes(&mut out, routes)
}

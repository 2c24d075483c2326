//! Plain-text line-segment export.
//!
//! One segment per line, `x1 y1 x2 y2`, separated by single spaces.

use crate::{error::FigureResult, figure::StickFigure, traverse::Order};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use tracing::{info, instrument};

/// Writes every segment of `figure` in `order` to `out`.
///
/// ### Returns
/// The number of segments written.
pub fn write_segments<W: Write>(
    figure: &StickFigure,
    order: Order,
    mut out: W,
) -> FigureResult<usize> {
    let mut count = 0;
    for s in figure.segments(order) {
        writeln!(out, "{} {} {} {}", s.from.x, s.from.y, s.to.x, s.to.y)?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

/// Creates (or truncates) `path` and writes the segments of `figure` to it.
#[instrument(level = "debug", skip(figure, path), fields(path = %path.as_ref().display()))]
pub fn save_segments(
    figure: &StickFigure,
    order: Order,
    path: impl AsRef<Path>,
) -> FigureResult<usize> {
    let file = File::create(path.as_ref())?;
    let count = write_segments(figure, order, BufWriter::new(file))?;
    info!(count, "segments exported");
    Ok(count)
}

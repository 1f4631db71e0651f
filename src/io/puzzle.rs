//! Plain-text puzzle loading
//!
//! A puzzle file lists shapes followed by regions:
//!
//! ```text
//! 0:
//! ###
//! #..
//!
//! 4x4: 2
//! 5x3: 1 0
//! ```
//!
//! A shape starts with an `<id>:` header and continues with rows of `#` and
//! `.` until a blank line. A region line is `<W>x<H>:` followed by one count
//! per shape identifier; missing trailing counts are zero.

use std::path::Path;

use crate::algorithm::problem::Problem;
use crate::io::configuration::{DIMENSION_SEPARATOR, EMPTY_GLYPH, FILLED_GLYPH};
use crate::io::error::{PackingError, Result, file_system, parse_error};
use crate::spatial::registry::{ShapeId, ShapeRegistry};
use crate::spatial::shape::Shape;

/// Shapes and problems loaded from one puzzle description
#[derive(Clone, Debug)]
pub struct Puzzle {
    registry: ShapeRegistry,
    problems: Vec<Problem>,
}

struct PendingShape {
    id: ShapeId,
    header_line: usize,
    rows: Vec<Vec<bool>>,
}

impl Puzzle {
    /// Parse puzzle text
    ///
    /// # Errors
    ///
    /// Returns `Parse` with a 1-based line number for unknown glyphs,
    /// malformed headers, unparsable numbers, duplicate shape identifiers,
    /// ragged or empty shapes, and shape rows without a header
    pub fn parse(input: &str) -> Result<Self> {
        let mut shapes: Vec<(ShapeId, Shape)> = Vec::new();
        let mut problems = Vec::new();
        let mut pending: Option<PendingShape> = None;

        for (index, raw_line) in input.lines().enumerate() {
            let line_number = index + 1;
            let line = raw_line.trim();

            if line.is_empty() {
                finish_shape(pending.take(), &mut shapes)?;
                continue;
            }

            if let Some((header, body)) = line.split_once(':') {
                finish_shape(pending.take(), &mut shapes)?;
                let header = header.trim();

                if header.contains(DIMENSION_SEPARATOR) {
                    problems.push(parse_region(header, body, line_number)?);
                } else {
                    if !body.trim().is_empty() {
                        return Err(parse_error(
                            line_number,
                            &format!("unexpected text after shape header '{header}:'"),
                        ));
                    }
                    let id = parse_number(header, line_number, "shape identifier")?;
                    if shapes.iter().any(|(existing, _)| *existing == id) {
                        return Err(parse_error(
                            line_number,
                            &format!("shape {id} is defined twice"),
                        ));
                    }
                    pending = Some(PendingShape {
                        id,
                        header_line: line_number,
                        rows: Vec::new(),
                    });
                }
                continue;
            }

            let Some(shape) = pending.as_mut() else {
                return Err(parse_error(
                    line_number,
                    &format!("expected a shape or region header, found '{line}'"),
                ));
            };
            shape.rows.push(parse_row(line, line_number)?);
        }

        finish_shape(pending.take(), &mut shapes)?;

        let registry = ShapeRegistry::from_shapes(shapes)?;
        tracing::debug!(
            shapes = registry.len(),
            problems = problems.len(),
            "parsed puzzle"
        );

        Ok(Self { registry, problems })
    }

    /// Read and parse a puzzle file
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be read, or any error from
    /// [`Self::parse`]
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| file_system(path, "read puzzle", source))?;
        Self::parse(&text)
    }

    /// Registered shapes with their orientations
    pub const fn registry(&self) -> &ShapeRegistry {
        &self.registry
    }

    /// Problems in file order
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// Split into registry and problems
    pub fn into_parts(self) -> (ShapeRegistry, Vec<Problem>) {
        (self.registry, self.problems)
    }
}

fn finish_shape(pending: Option<PendingShape>, shapes: &mut Vec<(ShapeId, Shape)>) -> Result<()> {
    let Some(PendingShape {
        id,
        header_line,
        rows,
    }) = pending
    else {
        return Ok(());
    };

    let shape = Shape::from_rows(&rows).map_err(|err| match err {
        PackingError::MalformedShape { reason, .. } => {
            parse_error(header_line, &format!("shape {id}: {reason}"))
        }
        other => other,
    })?;
    shapes.push((id, shape));
    Ok(())
}

fn parse_row(line: &str, line_number: usize) -> Result<Vec<bool>> {
    line.chars()
        .map(|glyph| match glyph {
            FILLED_GLYPH => Ok(true),
            EMPTY_GLYPH => Ok(false),
            other => Err(parse_error(
                line_number,
                &format!("unexpected character '{other}' in shape row"),
            )),
        })
        .collect()
}

fn parse_region(header: &str, body: &str, line_number: usize) -> Result<Problem> {
    let Some((width, height)) = header.split_once(DIMENSION_SEPARATOR) else {
        return Err(parse_error(
            line_number,
            &format!("expected '<width>x<height>', found '{header}'"),
        ));
    };
    let width = parse_number(width.trim(), line_number, "region width")?;
    let height = parse_number(height.trim(), line_number, "region height")?;

    let counts = body
        .split_whitespace()
        .map(|count| parse_number(count, line_number, "shape count"))
        .collect::<Result<Vec<_>>>()?;

    Ok(Problem::new(width, height, counts))
}

fn parse_number(text: &str, line_number: usize, what: &str) -> Result<usize> {
    text.parse()
        .map_err(|err| parse_error(line_number, &format!("invalid {what} '{text}': {err}")))
}

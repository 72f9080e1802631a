use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{ReadError, Result};
use crate::polygon::Polygon;

/// One record from a polygon file: a query point and its polygon.
#[derive(Debug, Clone)]
pub struct PointPolygon {
    pub x: f32,
    pub y: f32,
    pub polygon: Polygon,
}

/// Reads `(query point, polygon)` records from a text file.
///
/// The format is line-oriented: lines starting with `#` are comments,
/// a blank line terminates the current record, the first data line of
/// a record is the query point as `x y`, and each following data line
/// is one polygon vertex appended in traversal order.
///
/// Polygons are returned as stored; closure is not validated here, so
/// open polygons pass through and simply have no winding number.
///
/// # Errors
///
/// Returns [`ReadError::Io`] if the file cannot be opened or read, and
/// [`ReadError::Malformed`] for lines that do not parse as two floats
/// or records that end with a query point but no vertices.
pub fn read_points_and_polygons(path: impl AsRef<Path>) -> Result<Vec<PointPolygon>> {
    let file = File::open(path).map_err(ReadError::from)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    let mut current: Option<PointPolygon> = None;
    let mut line_number = 0;

    for line in reader.lines() {
        let line = line.map_err(ReadError::from)?;
        line_number += 1;

        let text = line.trim();
        if text.starts_with('#') {
            continue;
        }
        if text.is_empty() {
            if let Some(record) = current.take() {
                records.push(finish_record(record, line_number)?);
            }
            continue;
        }

        let (x, y) = parse_pair(text, line_number)?;
        match current.as_mut() {
            None => {
                current = Some(PointPolygon {
                    x,
                    y,
                    polygon: Polygon::new(),
                });
            }
            Some(record) => record.polygon.append_point(x, y),
        }
    }

    if let Some(record) = current.take() {
        records.push(finish_record(record, line_number)?);
    }

    Ok(records)
}

fn finish_record(record: PointPolygon, line: usize) -> Result<PointPolygon> {
    if record.polygon.is_empty() {
        return Err(ReadError::Malformed {
            line,
            reason: "record has a query point but no polygon vertices".to_owned(),
        }
        .into());
    }
    Ok(record)
}

fn parse_pair(text: &str, line: usize) -> Result<(f32, f32)> {
    let mut fields = text.split_whitespace();
    let (Some(x), Some(y), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(ReadError::Malformed {
            line,
            reason: format!("expected two coordinates, got {text:?}"),
        }
        .into());
    };
    let x = x.parse::<f32>().map_err(|e| ReadError::Malformed {
        line,
        reason: format!("bad x coordinate: {e}"),
    })?;
    let y = y.parse::<f32>().map_err(|e| ReadError::Malformed {
        line,
        reason: format!("bad y coordinate: {e}"),
    })?;
    Ok((x, y))
}

//! Delimited text (`.xya`) point files.
//!
//! ```text
//! elevation, friction
//! 0.6, 0.7, 4.9, 0.3
//! 1.9, 2.8, 5, 0.3
//! #geo reference
//! 56
//! 466600.0
//! 8644444.0
//! ```
//!
//! The first line names the attributes. Each following line holds
//! `x, y` and one value per attribute. Data ends at the first line with
//! fewer than two fields or starting with `#`, which may introduce a
//! geo reference block.

use super::RawPoints;
use crate::{Attributes, GeodataError, C};
use geo::geometry::Coord;
use georef::{GeoRefError, GeoReference};
use log::debug;
use std::io::{BufRead, Write};

/// Parses `bytes` with `delimiter`, or with `,` falling back to
/// whitespace when none is given.
pub(super) fn read(bytes: &[u8], delimiter: Option<char>) -> Result<RawPoints, GeodataError> {
    match delimiter {
        Some(delimiter) => parse(bytes, delimiter),
        None => match parse(bytes, ',') {
            Err(GeodataError::GeoRef(GeoRefError::TitleMismatch { .. })) => {
                debug!("not comma delimited, retrying with whitespace");
                parse(bytes, ' ')
            }
            res => res,
        },
    }
}

pub(super) fn write<W: Write>(
    wtr: &mut W,
    points: &[Coord<C>],
    attributes: &Attributes,
    geo_reference: Option<&GeoReference>,
    delimiter: char,
) -> Result<(), GeodataError> {
    let header: Vec<&str> = attributes.names().collect();
    writeln!(wtr, "{}", header.join(delimiter.to_string().as_str()))?;
    for (idx, point) in points.iter().enumerate() {
        write!(wtr, "{}{delimiter}{}", point.x, point.y)?;
        for (_, values) in attributes.iter() {
            write!(wtr, "{delimiter}{}", values[idx])?;
        }
        writeln!(wtr)?;
    }
    if let Some(geo_reference) = geo_reference {
        geo_reference.write_ascii(wtr)?;
    }
    Ok(())
}

fn parse(mut rdr: &[u8], delimiter: char) -> Result<RawPoints, GeodataError> {
    let mut line = String::new();
    rdr.read_line(&mut line)?;
    let names: Vec<String> = fields(&line, delimiter).map(str::to_owned).collect();
    for (idx, name) in names.iter().enumerate() {
        if names[..idx].contains(name) {
            return Err(GeodataError::DuplicateAttribute(name.clone()));
        }
    }

    let mut columns: Vec<Vec<C>> = vec![Vec::new(); names.len()];
    let mut points = Vec::new();
    let mut line_no = 1;
    loop {
        line.clear();
        rdr.read_line(&mut line)?;
        line_no += 1;

        let values: Vec<&str> = fields(&line, delimiter).collect();
        if values.len() < 2 || line.starts_with('#') {
            break;
        }
        let x = parse_field(values[0], line_no)?;
        let y = parse_field(values[1], line_no)?;
        if values.len() - 2 != names.len() {
            return Err(GeodataError::ColumnCount {
                line: line_no,
                expected: names.len(),
                found: values.len() - 2,
            });
        }
        for (column, value) in columns.iter_mut().zip(&values[2..]) {
            column.push(parse_field(value, line_no)?);
        }
        points.push(Coord { x, y });
    }

    // Only a non-blank terminating line can start a geo reference.
    let at_end = line.trim().is_empty() && rdr.iter().all(u8::is_ascii_whitespace);
    let geo_reference = if at_end {
        None
    } else {
        Some(GeoReference::read_ascii(&mut rdr, Some(line.as_str()))?)
    };

    Ok(RawPoints {
        points,
        attributes: names.into_iter().zip(columns).collect(),
        geo_reference,
    })
}

/// Splits `line` on `delimiter`, trimming fields and dropping empty
/// ones. A whitespace delimiter matches any run of whitespace.
fn fields(line: &str, delimiter: char) -> Box<dyn Iterator<Item = &str> + '_> {
    if delimiter.is_whitespace() {
        Box::new(line.split_whitespace())
    } else {
        Box::new(
            line.split(delimiter)
                .map(str::trim)
                .filter(|field| !field.is_empty()),
        )
    }
}

fn parse_field(value: &str, line: usize) -> Result<C, GeodataError> {
    value.parse::<C>().map_err(|_| GeodataError::MalformedField {
        line,
        value: value.to_owned(),
    })
}

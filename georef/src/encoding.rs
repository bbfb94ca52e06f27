//! Text and binary encodings of a [GeoReference].
//!
//! The text form is the 4-line block appended to `.xya` point files:
//!
//! ```text
//! #geo reference
//! 56
//! 466600
//! 8644444
//! ```
//!
//! The binary form is a little-endian record embedded in `.pts`
//! files and carries every field.

use crate::{GeoRefError, GeoReference, Zone, C};
use byteorder::{LittleEndian as LE, ReadBytesExt, WriteBytesExt};
use std::io::{BufRead, Read, Write};

/// Title line introducing a text geo reference block.
pub const TITLE: &str = "#geo reference";

impl GeoReference {
    /// Writes the 4-line text block.
    pub fn write_ascii<W: Write>(&self, wtr: &mut W) -> Result<(), GeoRefError> {
        writeln!(wtr, "{TITLE}")?;
        writeln!(wtr, "{}", self.zone.code())?;
        writeln!(wtr, "{}", self.xllcorner)?;
        writeln!(wtr, "{}", self.yllcorner)?;
        Ok(())
    }

    /// Reads the 4-line text block.
    ///
    /// Callers which have already consumed the title line (e.g. while
    /// scanning for the end of a data section) pass it as `title`.
    pub fn read_ascii<R: BufRead>(rdr: &mut R, title: Option<&str>) -> Result<Self, GeoRefError> {
        let title = match title {
            Some(title) => title.to_owned(),
            None => read_line(rdr)?,
        };
        check_title(&title)?;

        let zone_line = read_line(rdr)?;
        let zone = zone_line
            .trim()
            .parse::<i64>()
            .map_err(|_| GeoRefError::Parse {
                field: "zone",
                value: zone_line.trim().to_owned(),
            })
            .and_then(Zone::from_code)?;
        let xllcorner = parse_float(rdr, "xllcorner")?;
        let yllcorner = parse_float(rdr, "yllcorner")?;

        Ok(Self::new(zone, xllcorner, yllcorner))
    }

    /// Writes every field as a little-endian binary record.
    pub fn write_binary<W: Write>(&self, wtr: &mut W) -> Result<(), GeoRefError> {
        wtr.write_i32::<LE>(self.zone.code())?;
        wtr.write_f64::<LE>(self.xllcorner)?;
        wtr.write_f64::<LE>(self.yllcorner)?;
        wtr.write_f64::<LE>(self.false_easting)?;
        wtr.write_f64::<LE>(self.false_northing)?;
        write_str(wtr, &self.datum)?;
        write_str(wtr, &self.projection)?;
        write_str(wtr, &self.units)?;
        Ok(())
    }

    /// Reads a record written by [GeoReference::write_binary].
    pub fn read_binary<R: Read>(rdr: &mut R) -> Result<Self, GeoRefError> {
        let zone = Zone::from_code(i64::from(rdr.read_i32::<LE>()?))?;
        let xllcorner = rdr.read_f64::<LE>()?;
        let yllcorner = rdr.read_f64::<LE>()?;
        let false_easting = rdr.read_f64::<LE>()?;
        let false_northing = rdr.read_f64::<LE>()?;
        let datum = read_str(rdr)?;
        let projection = read_str(rdr)?;
        let units = read_str(rdr)?;
        Ok(Self {
            zone,
            xllcorner,
            yllcorner,
            datum,
            projection,
            units,
            false_easting,
            false_northing,
        })
    }
}

/// Only the leading `#g` is significant, case-insensitively.
fn check_title(title: &str) -> Result<(), GeoRefError> {
    let matches = title
        .get(..2)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(&TITLE[..2]));
    if matches {
        Ok(())
    } else {
        Err(GeoRefError::TitleMismatch {
            expected: TITLE.to_owned(),
            found: title.trim_end().to_owned(),
        })
    }
}

fn read_line<R: BufRead>(rdr: &mut R) -> Result<String, GeoRefError> {
    let mut line = String::new();
    rdr.read_line(&mut line)?;
    Ok(line)
}

fn parse_float<R: BufRead>(rdr: &mut R, field: &'static str) -> Result<C, GeoRefError> {
    let line = read_line(rdr)?;
    let value = line.trim();
    value.parse::<C>().map_err(|_| GeoRefError::Parse {
        field,
        value: value.to_owned(),
    })
}

fn write_str<W: Write>(wtr: &mut W, s: &str) -> Result<(), GeoRefError> {
    let len = u16::try_from(s.len()).map_err(|_| GeoRefError::StringLen(s.len()))?;
    wtr.write_u16::<LE>(len)?;
    wtr.write_all(s.as_bytes())?;
    Ok(())
}

fn read_str<R: Read>(rdr: &mut R) -> Result<String, GeoRefError> {
    let len = rdr.read_u16::<LE>()?;
    let mut buf = vec![0; usize::from(len)];
    rdr.read_exact(&mut buf)?;
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::{GeoRefError, GeoReference, Zone};

    #[test]
    fn test_write_ascii() {
        let geo = GeoReference::new(Zone::Utm(56), 466_600.0, 8_644_444.5);
        let mut buf = Vec::new();
        geo.write_ascii(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "#geo reference\n56\n466600\n8644444.5\n"
        );
    }

    #[test]
    fn test_ascii_round_trip() {
        for geo in [
            GeoReference::new(Zone::Utm(56), 466_600.0, 8_644_444.0),
            GeoReference::new(Zone::Unset, 0.0, 0.0),
            GeoReference::new(Zone::Utm(1), -0.1, 123_456.789_012_345),
        ] {
            let mut buf = Vec::new();
            geo.write_ascii(&mut buf).unwrap();
            let read = GeoReference::read_ascii(&mut &buf[..], None).unwrap();
            assert_eq!(read.get_origin(), geo.get_origin());
        }
    }

    #[test]
    fn test_read_ascii_with_consumed_title() {
        let text = "56\n466600.0\n8644444.0\n";
        let geo = GeoReference::read_ascii(&mut text.as_bytes(), Some("#GEO REFERENCE\n")).unwrap();
        assert_eq!(geo.get_origin(), (Zone::Utm(56), 466_600.0, 8_644_444.0));
    }

    #[test]
    fn test_read_ascii_title_mismatch() {
        let text = "geo reference\n56\n466600.0\n8644444.0\n";
        let res = GeoReference::read_ascii(&mut text.as_bytes(), None);
        assert!(matches!(res, Err(GeoRefError::TitleMismatch { .. })));

        let res = GeoReference::read_ascii(&mut "".as_bytes(), None);
        assert!(matches!(res, Err(GeoRefError::TitleMismatch { .. })));
    }

    #[test]
    fn test_read_ascii_parse_errors() {
        let text = "#geo reference\nfifty six\n466600.0\n8644444.0\n";
        let res = GeoReference::read_ascii(&mut text.as_bytes(), None);
        assert!(matches!(
            res,
            Err(GeoRefError::Parse { field: "zone", .. })
        ));

        let text = "#geo reference\n56\n466600.0\n";
        let res = GeoReference::read_ascii(&mut text.as_bytes(), None);
        assert!(matches!(
            res,
            Err(GeoRefError::Parse {
                field: "yllcorner",
                ..
            })
        ));

        let text = "#geo reference\n-3\n466600.0\n8644444.0\n";
        let res = GeoReference::read_ascii(&mut text.as_bytes(), None);
        assert!(matches!(res, Err(GeoRefError::InvalidZone(-3))));
    }

    #[test]
    fn test_binary_round_trip() {
        let geo = GeoReference::new(Zone::Utm(55), 321_000.25, 5_812_000.75)
            .with_datum("gda94")
            .with_projection("UTM")
            .with_units("m")
            .with_false_origin(500_000.0, 0.0);
        let mut buf = Vec::new();
        geo.write_binary(&mut buf).unwrap();
        let read = GeoReference::read_binary(&mut &buf[..]).unwrap();
        assert_eq!(read, geo);
    }

    #[test]
    fn test_binary_truncated() {
        let mut buf = Vec::new();
        GeoReference::default().write_binary(&mut buf).unwrap();
        buf.truncate(buf.len() - 1);
        assert!(matches!(
            GeoReference::read_binary(&mut &buf[..]),
            Err(GeoRefError::Io(_))
        ));
    }
}

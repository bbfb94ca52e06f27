//! Binary (`.pts`) point files.
//!
//! All values are little-endian.
//!
//! | field            | type                                   |
//! |------------------|----------------------------------------|
//! | magic            | `b"GPTS"`                              |
//! | version          | `u8`                                   |
//! | point count `n`  | `u64`                                  |
//! | attribute count  | `u32`                                  |
//! | points           | `n` × (`f64` x, `f64` y)               |
//! | attributes       | `u16` name length, name, `n` × `f64`   |
//! | geo reference    | `u8` flag, then the binary geo reference when the flag is `1` |

use super::RawPoints;
use crate::{Attributes, GeodataError, C};
use byteorder::{LittleEndian as LE, ReadBytesExt, WriteBytesExt};
use geo::geometry::Coord;
use georef::GeoReference;
use std::io::{ErrorKind, Read, Write};

const MAGIC: [u8; 4] = *b"GPTS";
const VERSION: u8 = 1;

pub(super) fn write<W: Write>(
    wtr: &mut W,
    points: &[Coord<C>],
    attributes: &Attributes,
    geo_reference: Option<&GeoReference>,
) -> Result<(), GeodataError> {
    wtr.write_all(&MAGIC)?;
    wtr.write_u8(VERSION)?;
    wtr.write_u64::<LE>(points.len() as u64)?;
    #[allow(clippy::cast_possible_truncation)]
    wtr.write_u32::<LE>(attributes.len() as u32)?;
    for point in points {
        wtr.write_f64::<LE>(point.x)?;
        wtr.write_f64::<LE>(point.y)?;
    }
    for (name, values) in attributes.iter() {
        let len = u16::try_from(name.len())
            .map_err(|_| GeodataError::Corrupt(format!("attribute name '{name}' too long")))?;
        wtr.write_u16::<LE>(len)?;
        wtr.write_all(name.as_bytes())?;
        for value in values {
            wtr.write_f64::<LE>(*value)?;
        }
    }
    match geo_reference {
        Some(geo_reference) => {
            wtr.write_u8(1)?;
            geo_reference.write_binary(wtr)?;
        }
        None => wtr.write_u8(0)?,
    }
    Ok(())
}

pub(super) fn read<R: Read>(rdr: &mut R) -> Result<RawPoints, GeodataError> {
    let mut magic = [0_u8; 4];
    rdr.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(GeodataError::BadMagic(magic));
    }
    let version = rdr.read_u8()?;
    if version != VERSION {
        return Err(GeodataError::UnsupportedVersion(version));
    }

    let n_points = usize::try_from(rdr.read_u64::<LE>()?)
        .map_err(|_| GeodataError::Corrupt("point count overflows usize".to_owned()))?;
    let n_attributes = rdr.read_u32::<LE>()?;

    let mut points = Vec::new();
    for _ in 0..n_points {
        let x = rdr.read_f64::<LE>()?;
        let y = rdr.read_f64::<LE>()?;
        points.push(Coord { x, y });
    }

    let mut attributes = Attributes::new();
    for _ in 0..n_attributes {
        let name = {
            let len = rdr.read_u16::<LE>()?;
            let mut buf = vec![0; usize::from(len)];
            rdr.read_exact(&mut buf)?;
            String::from_utf8(buf)?
        };
        let mut values = Vec::new();
        for _ in 0..n_points {
            values.push(rdr.read_f64::<LE>()?);
        }
        if attributes.insert(name.clone(), values).is_some() {
            return Err(GeodataError::DuplicateAttribute(name));
        }
    }

    // Files ending before the flag carry no geo reference.
    let geo_reference = match rdr.read_u8() {
        Ok(0) => None,
        Ok(1) => Some(GeoReference::read_binary(rdr)?),
        Ok(flag) => {
            return Err(GeodataError::Corrupt(format!(
                "invalid geo reference flag {flag}"
            )))
        }
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => None,
        Err(e) => return Err(GeodataError::Io(e)),
    };

    Ok(RawPoints {
        points,
        attributes,
        geo_reference,
    })
}

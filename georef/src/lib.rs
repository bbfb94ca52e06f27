//! Geo-references for local mesh coordinates.
//!
//! Point data in a model domain is usually stored relative to a local
//! origin (the lower-left corner of the domain) to keep coordinates
//! small. A [GeoReference] records that origin together with the UTM
//! zone it lives in, and converts points between the relative frame
//! and absolute UTM eastings/northings.
//!
//! # References
//!
//! 1. [Universal Transverse Mercator](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system)
//! 1. [GDA2020 Technical Manual](https://www.icsm.gov.au/gda2020-and-gda94-technical-manuals)

mod encoding;
mod error;
mod zone;

pub use crate::{encoding::TITLE, error::GeoRefError, zone::Zone};
use geo::geometry::Coord;
use log::debug;
use std::fmt;

/// Base floating point type used for all coordinates.
pub type C = f64;

/// Absolute tolerance used when deciding whether an origin is zero.
pub const ABS_TOLERANCE: C = 1e-8;

pub const DEFAULT_DATUM: &str = "wgs84";
pub const DEFAULT_PROJECTION: &str = "UTM";
pub const DEFAULT_UNITS: &str = "m";
pub const DEFAULT_FALSE_EASTING: C = 500_000.0;
/// Default false northing, valid for the southern hemisphere.
pub const DEFAULT_FALSE_NORTHING: C = 10_000_000.0;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoReference {
    /// UTM zone of the origin.
    zone: Zone,

    /// Easting of the local origin in meters.
    xllcorner: C,

    /// Northing of the local origin in meters.
    yllcorner: C,

    datum: String,

    projection: String,

    units: String,

    false_easting: C,

    false_northing: C,
}

impl Default for GeoReference {
    fn default() -> Self {
        Self::new(Zone::Unset, 0.0, 0.0)
    }
}

impl GeoReference {
    pub fn new(zone: Zone, xllcorner: C, yllcorner: C) -> Self {
        Self {
            zone,
            xllcorner,
            yllcorner,
            datum: DEFAULT_DATUM.to_owned(),
            projection: DEFAULT_PROJECTION.to_owned(),
            units: DEFAULT_UNITS.to_owned(),
            false_easting: DEFAULT_FALSE_EASTING,
            false_northing: DEFAULT_FALSE_NORTHING,
        }
    }

    pub fn with_datum(mut self, datum: impl Into<String>) -> Self {
        self.datum = datum.into();
        self
    }

    pub fn with_projection(mut self, projection: impl Into<String>) -> Self {
        self.projection = projection.into();
        self
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    pub fn with_false_origin(mut self, false_easting: C, false_northing: C) -> Self {
        self.false_easting = false_easting;
        self.false_northing = false_northing;
        self
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn xllcorner(&self) -> C {
        self.xllcorner
    }

    pub fn yllcorner(&self) -> C {
        self.yllcorner
    }

    pub fn datum(&self) -> &str {
        &self.datum
    }

    pub fn projection(&self) -> &str {
        &self.projection
    }

    pub fn units(&self) -> &str {
        &self.units
    }

    pub fn false_easting(&self) -> C {
        self.false_easting
    }

    pub fn false_northing(&self) -> C {
        self.false_northing
    }

    /// Returns the local origin as a coordinate.
    pub fn origin(&self) -> Coord<C> {
        Coord {
            x: self.xllcorner,
            y: self.yllcorner,
        }
    }

    /// Returns `(zone, xllcorner, yllcorner)`.
    pub fn get_origin(&self) -> (Zone, C, C) {
        (self.zone, self.xllcorner, self.yllcorner)
    }

    /// Returns true if the origin is `(0, 0)`, i.e. points referenced
    /// to `self` are already absolute.
    pub fn is_absolute(&self) -> bool {
        self.xllcorner.abs() <= ABS_TOLERANCE && self.yllcorner.abs() <= ABS_TOLERANCE
    }

    /// Returns `points`, which are relative to `from`, translated into
    /// this reference's frame.
    ///
    /// `from == None` means `points` are absolute.
    pub fn rebase(&self, points: &[Coord<C>], from: Option<&GeoReference>) -> Vec<Coord<C>> {
        if from.is_some_and(|from| std::ptr::eq(from, self)) {
            return points.to_vec();
        }
        let from_origin = from.map_or(Coord { x: 0.0, y: 0.0 }, GeoReference::origin);
        debug!(
            "rebasing {} points from {from_origin:?} to {:?}",
            points.len(),
            self.origin()
        );
        points
            .iter()
            .map(|point| Coord {
                x: point.x + from_origin.x - self.xllcorner,
                y: point.y + from_origin.y - self.yllcorner,
            })
            .collect()
    }

    /// Returns `points`, which are relative to `self`, as absolute
    /// coordinates.
    pub fn to_absolute(&self, points: &[Coord<C>]) -> Vec<Coord<C>> {
        if self.is_absolute() {
            return points.to_vec();
        }
        points
            .iter()
            .map(|point| Coord {
                x: point.x + self.xllcorner,
                y: point.y + self.yllcorner,
            })
            .collect()
    }

    /// Makes `self` and `other` agree on a zone.
    ///
    /// An unset zone adopts the other reference's zone. Two different
    /// concrete zones can not be reconciled.
    pub fn reconcile_zone(&mut self, other: &mut GeoReference) -> Result<(), GeoRefError> {
        let zone = self.zone.reconcile(other.zone)?;
        self.zone = zone;
        other.zone = zone;
        Ok(())
    }
}

impl fmt::Display for GeoReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(zone={} easting={:.6}, northing={:.6})",
            self.zone, self.xllcorner, self.yllcorner
        )
    }
}

/// Converts untyped rows into coordinates, checking every row holds
/// exactly an `(x, y)` pair.
pub fn coords_from_rows<R: AsRef<[C]>>(rows: &[R]) -> Result<Vec<Coord<C>>, GeoRefError> {
    rows.iter()
        .enumerate()
        .map(|(row, values)| match values.as_ref() {
            &[x, y] => Ok(Coord { x, y }),
            other => Err(GeoRefError::Shape {
                row,
                width: other.len(),
            }),
        })
        .collect()
}

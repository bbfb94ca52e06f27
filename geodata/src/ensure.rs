//! Helpers for APIs that accept points in any of their common forms.

use crate::{Attributes, GeodataError, PointSet, C};
use geo::geometry::Coord;
use georef::GeoReference;
use log::debug;
use std::path::Path;

/// Where a caller's points come from.
#[derive(Debug, Clone, Copy)]
pub enum PointSource<'a> {
    /// Raw coordinates, relative to an optional origin.
    Coords(&'a [Coord<C>]),
    Data(&'a PointSet),
    /// A `.xya` or `.pts` file.
    File(&'a Path),
}

impl<'a> From<&'a [Coord<C>]> for PointSource<'a> {
    fn from(points: &'a [Coord<C>]) -> Self {
        Self::Coords(points)
    }
}

impl<'a> From<&'a PointSet> for PointSource<'a> {
    fn from(set: &'a PointSet) -> Self {
        Self::Data(set)
    }
}

impl<'a> From<&'a Path> for PointSource<'a> {
    fn from(path: &'a Path) -> Self {
        Self::File(path)
    }
}

/// Returns the absolute coordinates of `source`.
///
/// `origin` only applies to raw coordinates. Point sets and files
/// carry their own geo reference.
pub fn ensure_absolute(
    source: PointSource<'_>,
    origin: Option<&GeoReference>,
) -> Result<Vec<Coord<C>>, GeodataError> {
    match (source, origin) {
        (PointSource::Coords(points), Some(origin)) => Ok(origin.to_absolute(points)),
        (PointSource::Coords(points), None) => Ok(points.to_vec()),
        (_, Some(_)) => Err(GeodataError::Builder(
            "point data is specified yet an origin is also specified",
        )),
        (PointSource::Data(set), None) => Ok(set.get_points(true, None)),
        (PointSource::File(path), None) => Ok(PointSet::from_file(path)?.get_points(true, None)),
    }
}

/// Returns `source` as a [PointSet].
///
/// Raw coordinates become an attribute-less set referenced to
/// `origin`, or to the default geo reference.
pub fn ensure_geospatial(
    source: PointSource<'_>,
    origin: Option<&GeoReference>,
) -> Result<PointSet, GeodataError> {
    match (source, origin) {
        (PointSource::Coords(points), origin) => PointSet::new(
            points.to_vec(),
            Attributes::new(),
            origin.cloned().unwrap_or_default(),
        ),
        (_, Some(_)) => Err(GeodataError::Builder(
            "point data is specified yet an origin is also specified",
        )),
        (PointSource::Data(set), None) => Ok(set.clone()),
        (PointSource::File(path), None) => PointSet::from_file(path),
    }
}

/// Merges the point files `lhs` and `rhs` and writes the union, in
/// absolute coordinates, to `out`.
pub fn merge_points_files<P, Q, R>(lhs: P, rhs: Q, out: R) -> Result<(), GeodataError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    let (lhs, rhs, out) = (lhs.as_ref(), rhs.as_ref(), out.as_ref());
    debug!("merging {lhs:?} and {rhs:?} into {out:?}");
    let merged = PointSet::from_file(lhs)?.merge(&PointSet::from_file(rhs)?)?;
    merged.export_points_file(out, true)
}

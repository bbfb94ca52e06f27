//! Point file import and export.
//!
//! | extension | encoding                                        |
//! |-----------|-------------------------------------------------|
//! | `.xya`    | delimited text, optional trailing geo reference |
//! | `.pts`    | little-endian binary records                    |

mod pts;
mod xya;

use crate::{Attributes, GeodataError, PointSet, C};
use geo::geometry::Coord;
use georef::GeoReference;
use log::debug;
use std::{
    ffi::OsStr,
    fs::File,
    io::{BufWriter, ErrorKind, Write},
    path::Path,
};

/// Delimiter used when writing `.xya` files.
pub const XYA_DELIMITER: char = ',';

/// Point file encodings, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Xya,
    Pts,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self, GeodataError> {
        match path.extension().and_then(OsStr::to_str) {
            Some("xya") => Ok(Self::Xya),
            Some("pts") => Ok(Self::Pts),
            _ => Err(GeodataError::UnsupportedExtension(path.to_owned())),
        }
    }
}

/// Contents of a point file before validation.
struct RawPoints {
    points: Vec<Coord<C>>,
    attributes: Attributes,
    geo_reference: Option<GeoReference>,
}

/// Reads the point file at `path`.
///
/// The whole file is read into memory, and the handle closed, before
/// any parsing.
pub(crate) fn load(path: &Path, delimiter: Option<char>) -> Result<PointSet, GeodataError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::PermissionDenied) => {
            return Err(GeodataError::NotFound(path.to_owned()))
        }
        Err(e) => return Err(GeodataError::Io(e)),
    };
    let format = Format::from_path(path)?;
    debug!("loading {path:?} as {format:?}, {} bytes", bytes.len());

    let RawPoints {
        points,
        attributes,
        geo_reference,
    } = match format {
        Format::Xya => xya::read(&bytes, delimiter)?,
        Format::Pts => pts::read(&mut &bytes[..])?,
    };
    PointSet::new(points, attributes, geo_reference.unwrap_or_default())
}

impl PointSet {
    /// Writes this set to `path` as a `.xya` or `.pts` file.
    ///
    /// With `absolute`, absolute coordinates are written and the geo
    /// reference is omitted. Otherwise the stored relative coordinates
    /// are written together with the geo reference.
    pub fn export_points_file<P: AsRef<Path>>(&self, path: P, absolute: bool) -> Result<(), GeodataError> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let (points, geo_reference) = if absolute {
            (self.get_points(true, None), None)
        } else {
            (self.relative_points().to_vec(), Some(self.geo_reference()))
        };
        debug!(
            "writing {} points to {path:?} as {format:?}, absolute: {absolute}",
            points.len()
        );

        let mut wtr = BufWriter::new(File::create(path)?);
        match format {
            Format::Xya => xya::write(
                &mut wtr,
                &points,
                self.attributes(),
                geo_reference,
                XYA_DELIMITER,
            )?,
            Format::Pts => pts::write(&mut wtr, &points, self.attributes(), geo_reference)?,
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Format;
    use crate::{Attributes, GeodataError, PointSet};
    use assert_approx_eq::assert_approx_eq;
    use geo::geometry::Coord;
    use georef::{GeoReference, Zone};
    use std::path::Path;

    fn sample_set() -> PointSet {
        let attributes: Attributes = [("elevation", vec![4.9, 5.0])].into_iter().collect();
        PointSet::new(
            vec![Coord { x: 0.6, y: 0.7 }, Coord { x: 1.9, y: 2.8 }],
            attributes,
            GeoReference::default(),
        )
        .unwrap()
    }

    fn referenced_set() -> PointSet {
        let attributes: Attributes = [
            ("elevation", vec![4.9, 5.0, 5.2]),
            ("friction", vec![0.3, 0.35, 0.4]),
        ]
        .into_iter()
        .collect();
        PointSet::new(
            vec![
                Coord { x: 0.6, y: 0.7 },
                Coord { x: 1.9, y: 2.8 },
                Coord { x: 2.7, y: 2.4 },
            ],
            attributes,
            GeoReference::new(Zone::Utm(56), 466_600.0, 8_644_444.0),
        )
        .unwrap()
    }

    fn assert_same_absolute(lhs: &PointSet, rhs: &PointSet) {
        let lhs_points = lhs.get_points(true, None);
        let rhs_points = rhs.get_points(true, None);
        assert_eq!(lhs_points.len(), rhs_points.len());
        for (l, r) in lhs_points.iter().zip(&rhs_points) {
            assert_approx_eq!(l.x, r.x, 1e-6);
            assert_approx_eq!(l.y, r.y, 1e-6);
        }
        assert_eq!(lhs.attributes(), rhs.attributes());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("a.xya")).unwrap(), Format::Xya);
        assert_eq!(Format::from_path(Path::new("dir/a.pts")).unwrap(), Format::Pts);
        assert!(matches!(
            Format::from_path(Path::new("a.csv")),
            Err(GeodataError::UnsupportedExtension(_))
        ));
        assert!(matches!(
            Format::from_path(Path::new("xya")),
            Err(GeodataError::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn test_round_trip_exact_values() {
        let dir = tempfile::tempdir().unwrap();
        let set = sample_set();
        for name in ["points.xya", "points.pts"] {
            for absolute in [true, false] {
                let path = dir.path().join(name);
                set.export_points_file(&path, absolute).unwrap();
                let read = PointSet::from_file(&path).unwrap();
                assert_eq!(
                    read.get_points(true, None),
                    [Coord { x: 0.6, y: 0.7 }, Coord { x: 1.9, y: 2.8 }]
                );
                assert_eq!(read.get_attribute(Some("elevation")).unwrap(), [4.9, 5.0]);
            }
        }
    }

    #[test]
    fn test_round_trip_keeps_frame() {
        let dir = tempfile::tempdir().unwrap();
        let set = referenced_set();
        for name in ["points.xya", "points.pts"] {
            let path = dir.path().join(name);

            set.export_points_file(&path, false).unwrap();
            let relative = PointSet::from_file(&path).unwrap();
            assert_eq!(relative.geo_reference().get_origin(), set.geo_reference().get_origin());
            assert_eq!(relative.relative_points(), set.relative_points());
            assert_same_absolute(&relative, &set);

            set.export_points_file(&path, true).unwrap();
            let absolute = PointSet::from_file(&path).unwrap();
            assert!(absolute.geo_reference().is_absolute());
            assert_eq!(absolute.geo_reference().zone(), Zone::Unset);
            assert_same_absolute(&absolute, &set);
        }
    }

    #[test]
    fn test_column_order_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.xya");
        referenced_set().export_points_file(&path, false).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("elevation,friction\n0.6,0.7,4.9,0.3\n"));
        assert!(text.ends_with("#geo reference\n56\n466600\n8644444\n"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.xya");
        assert!(matches!(
            PointSet::from_file(&path),
            Err(GeodataError::NotFound(_))
        ));
        let path = dir.path().join("missing.txt");
        assert!(matches!(
            PointSet::from_file(&path),
            Err(GeodataError::NotFound(_))
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.txt");
        std::fs::write(&path, "elevation\n0.6,0.7,4.9\n").unwrap();
        assert!(matches!(
            PointSet::from_file(&path),
            Err(GeodataError::UnsupportedExtension(_))
        ));
        assert!(matches!(
            sample_set().export_points_file(&path, true),
            Err(GeodataError::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn test_builder_delimiter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.xya");
        std::fs::write(&path, "elevation;friction\n0.6;0.7;4.9;0.3\n").unwrap();
        let set = PointSet::builder()
            .file(&path)
            .delimiter(';')
            .default_attribute_name("friction")
            .build()
            .unwrap();
        assert_eq!(set.get_attribute(None).unwrap(), [0.3]);

        let res = PointSet::builder().file(&path).delimiter(',').build();
        assert!(res.is_err());
    }
}

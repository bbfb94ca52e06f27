use crate::{
    io, point_set::DEFAULT_ATTRIBUTE_NAME, projection, Attributes, GeodataError, PointSet, C,
};
use geo::geometry::Coord;
use georef::GeoReference;
use std::path::PathBuf;

/// Builds a [PointSet] from exactly one source: in-memory points, a
/// points file, or latitudes and longitudes.
#[derive(Debug, Clone, Default)]
pub struct PointSetBuilder {
    points: Option<Vec<Coord<C>>>,

    attributes: Option<Attributes>,

    /// Frame `points` are relative to.
    geo_reference: Option<GeoReference>,

    default_attribute_name: Option<String>,

    file: Option<PathBuf>,

    /// Field delimiter of a `.xya` file. Without one, `,` is tried
    /// before whitespace.
    delimiter: Option<char>,

    latitudes: Option<Vec<C>>,

    longitudes: Option<Vec<C>>,

    /// Interpret `points` as `(latitude, longitude)` pairs.
    points_are_lats_longs: bool,
}

impl PointSetBuilder {
    pub fn points(mut self, points: Vec<Coord<C>>) -> Self {
        self.points = Some(points);
        self
    }

    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Adds a single named attribute.
    pub fn attribute(mut self, name: impl Into<String>, values: Vec<C>) -> Self {
        self.attributes
            .get_or_insert_with(Attributes::new)
            .insert(name, values);
        self
    }

    /// Adds a single unnamed attribute, stored as `"attribute"`.
    pub fn values(self, values: Vec<C>) -> Self {
        self.attribute(DEFAULT_ATTRIBUTE_NAME, values)
    }

    pub fn geo_reference(mut self, geo_reference: GeoReference) -> Self {
        self.geo_reference = Some(geo_reference);
        self
    }

    pub fn default_attribute_name(mut self, name: impl Into<String>) -> Self {
        self.default_attribute_name = Some(name.into());
        self
    }

    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    pub fn latitudes(mut self, latitudes: Vec<C>) -> Self {
        self.latitudes = Some(latitudes);
        self
    }

    pub fn longitudes(mut self, longitudes: Vec<C>) -> Self {
        self.longitudes = Some(longitudes);
        self
    }

    pub fn points_are_lats_longs(mut self, points_are_lats_longs: bool) -> Self {
        self.points_are_lats_longs = points_are_lats_longs;
        self
    }

    pub fn build(mut self) -> Result<PointSet, GeodataError> {
        let from_latlon =
            self.latitudes.is_some() || self.longitudes.is_some() || self.points_are_lats_longs;
        let default_attribute_name = self.default_attribute_name.clone();

        let set = match (self.file.take(), from_latlon) {
            (Some(_), true) => {
                return Err(GeodataError::Builder(
                    "a file is specified yet latitudes and longitudes are also specified",
                ))
            }
            (Some(path), false) => {
                if self.points.is_some() || self.attributes.is_some() {
                    return Err(GeodataError::Builder(
                        "a file is specified yet data points or attributes are also specified",
                    ));
                }
                if self.geo_reference.is_some() {
                    return Err(GeodataError::Builder(
                        "a file is specified yet a geo reference is also specified",
                    ));
                }
                io::load(&path, self.delimiter)?
            }
            (None, _) if self.delimiter.is_some() => {
                return Err(GeodataError::Builder(
                    "no file is specified yet a delimiter is provided",
                ))
            }
            (None, true) => self.build_from_latlon()?,
            (None, false) => {
                let points = self.points.ok_or(GeodataError::Builder(
                    "there is no data or file provided",
                ))?;
                PointSet::new(
                    points,
                    self.attributes.unwrap_or_default(),
                    self.geo_reference.unwrap_or_default(),
                )?
            }
        };

        Ok(set.with_default_attribute_name(default_attribute_name))
    }
}

/// Private API.
impl PointSetBuilder {
    fn build_from_latlon(self) -> Result<PointSet, GeodataError> {
        if self.geo_reference.is_some() {
            return Err(GeodataError::Builder(
                "a geo reference is specified yet latitudes and longitudes are also specified",
            ));
        }

        let (latitudes, longitudes) = if self.points_are_lats_longs {
            if self.latitudes.is_some() || self.longitudes.is_some() {
                return Err(GeodataError::Builder(
                    "points are latitudes and longitudes yet latitudes or longitudes are also specified",
                ));
            }
            let points = self
                .points
                .ok_or(GeodataError::Builder("data points are not specified"))?;
            points.iter().map(|coord| (coord.x, coord.y)).unzip()
        } else {
            if self.points.is_some() {
                return Err(GeodataError::Builder(
                    "data points are specified yet latitudes and longitudes are also specified",
                ));
            }
            match (self.latitudes, self.longitudes) {
                (Some(latitudes), Some(longitudes)) => (latitudes, longitudes),
                (Some(_), None) => {
                    return Err(GeodataError::Builder(
                        "latitudes are specified yet longitudes aren't",
                    ))
                }
                (None, Some(_)) => {
                    return Err(GeodataError::Builder(
                        "longitudes are specified yet latitudes aren't",
                    ))
                }
                (None, None) => {
                    return Err(GeodataError::Builder(
                        "latitudes and longitudes are not specified",
                    ))
                }
            }
        };

        let (points, zone) = projection::latlon_to_utm(&latitudes, &longitudes)?;
        PointSet::new(
            points,
            self.attributes.unwrap_or_default(),
            GeoReference::new(zone, 0.0, 0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Coord, GeoReference, GeodataError, PointSet};
    use assert_approx_eq::assert_approx_eq;
    use georef::Zone;

    fn assert_builder_err(res: Result<PointSet, GeodataError>) {
        assert!(matches!(res, Err(GeodataError::Builder(_))), "{res:?}");
    }

    #[test]
    fn test_points_and_attributes() {
        let set = PointSet::builder()
            .points(vec![Coord { x: 1.0, y: 2.0 }, Coord { x: 3.0, y: 4.0 }])
            .attribute("elevation", vec![5.0, 6.0])
            .attribute("friction", vec![0.3, 0.3])
            .geo_reference(GeoReference::new(Zone::Utm(56), 10.0, 20.0))
            .default_attribute_name("friction")
            .build()
            .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get_attribute(None).unwrap(), [0.3, 0.3]);
        assert_eq!(set.geo_reference().zone(), Zone::Utm(56));
    }

    #[test]
    fn test_unnamed_values() {
        let set = PointSet::builder()
            .points(vec![Coord { x: 1.0, y: 2.0 }])
            .values(vec![7.0])
            .build()
            .unwrap();
        assert_eq!(set.get_attribute(Some("attribute")).unwrap(), [7.0]);
        assert!(set.geo_reference().is_absolute());
        assert_eq!(set.geo_reference().zone(), Zone::Unset);
    }

    #[test]
    fn test_contract_violations() {
        assert_builder_err(PointSet::builder().build());
        assert_builder_err(
            PointSet::builder()
                .points(vec![Coord { x: 1.0, y: 2.0 }])
                .delimiter(',')
                .build(),
        );
        assert_builder_err(
            PointSet::builder()
                .latitudes(vec![-37.0])
                .longitudes(vec![144.0])
                .geo_reference(GeoReference::default())
                .build(),
        );
        assert_builder_err(
            PointSet::builder()
                .points(vec![Coord { x: 1.0, y: 2.0 }])
                .latitudes(vec![-37.0])
                .longitudes(vec![144.0])
                .build(),
        );
        assert_builder_err(PointSet::builder().latitudes(vec![-37.0]).build());
        assert_builder_err(PointSet::builder().longitudes(vec![144.0]).build());
        assert_builder_err(PointSet::builder().points_are_lats_longs(true).build());
        assert_builder_err(
            PointSet::builder()
                .file("points.xya")
                .points(vec![Coord { x: 1.0, y: 2.0 }])
                .build(),
        );
        assert_builder_err(
            PointSet::builder()
                .file("points.xya")
                .latitudes(vec![-37.0])
                .longitudes(vec![144.0])
                .build(),
        );
    }

    #[test]
    fn test_latlon() {
        let set = PointSet::builder()
            .latitudes(vec![-37.652_821_138_888_89])
            .longitudes(vec![143.926_495_527_777_8])
            .attribute("elevation", vec![1.0])
            .build()
            .unwrap();
        assert_eq!(set.geo_reference().zone(), Zone::Utm(54));
        assert!(set.geo_reference().is_absolute());
        let points = set.get_points(true, None);
        assert_approx_eq!(points[0].x, 758_173.797, 1e-2);
        assert_approx_eq!(points[0].y, 5_828_674.340, 1e-2);
    }

    #[test]
    fn test_points_are_lats_longs() {
        let set = PointSet::builder()
            .points(vec![
                Coord {
                    x: -37.652_821_138_888_89,
                    y: 143.926_495_527_777_8,
                },
                Coord { x: -37.6, y: 143.9 },
            ])
            .points_are_lats_longs(true)
            .build()
            .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.geo_reference().zone(), Zone::Utm(54));
        assert_approx_eq!(set.get_points(true, None)[0].x, 758_173.797, 1e-2);
    }

    #[test]
    fn test_latlon_length_mismatch() {
        let res = PointSet::builder()
            .latitudes(vec![-37.0, -37.1])
            .longitudes(vec![144.0])
            .build();
        assert!(matches!(res, Err(GeodataError::LatLonLength { .. })));
    }
}

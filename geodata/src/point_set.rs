use crate::{polygon, Attributes, GeodataError, PointSetBuilder, C};
use geo::geometry::{Coord, LineString, Polygon};
use georef::GeoReference;
use log::debug;
use std::{fmt, path::Path};

/// Name given to a single, unnamed attribute vector.
pub const DEFAULT_ATTRIBUTE_NAME: &str = "attribute";

/// Points on the planet and their associated attributes.
///
/// Points are always stored relative to the set's [GeoReference];
/// absolute coordinates are computed on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    /// Point coordinates relative to `geo_reference`.
    points: Vec<Coord<C>>,

    /// Per-point values, each exactly `points.len()` long.
    attributes: Attributes,

    geo_reference: GeoReference,

    /// Attribute returned by `get_attribute(None)`.
    default_attribute_name: Option<String>,
}

impl PointSet {
    pub fn builder() -> PointSetBuilder {
        PointSetBuilder::default()
    }

    /// Returns a new point set, checking that every attribute has one
    /// value per point.
    pub fn new(
        points: Vec<Coord<C>>,
        attributes: Attributes,
        geo_reference: GeoReference,
    ) -> Result<Self, GeodataError> {
        if let Some((name, values)) = attributes
            .iter()
            .find(|(_, values)| values.len() != points.len())
        {
            return Err(GeodataError::AttributeLength {
                name: name.to_owned(),
                expected: points.len(),
                found: values.len(),
            });
        }
        Ok(Self {
            points,
            attributes,
            geo_reference,
            default_attribute_name: None,
        })
    }

    /// Returns a point set parsed from a `.xya` or `.pts` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GeodataError> {
        crate::io::load(path.as_ref(), None)
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn geo_reference(&self) -> &GeoReference {
        &self.geo_reference
    }

    /// Returns the stored points, relative to [PointSet::geo_reference].
    pub fn relative_points(&self) -> &[Coord<C>] {
        &self.points
    }

    /// Returns point coordinates.
    ///
    /// - `relative_to` given: points rebased into that frame.
    /// - `absolute`: absolute UTM coordinates.
    /// - otherwise: the stored relative coordinates.
    pub fn get_points(&self, absolute: bool, relative_to: Option<&GeoReference>) -> Vec<Coord<C>> {
        match (absolute, relative_to) {
            (_, Some(geo_reference)) => geo_reference.rebase(&self.points, Some(&self.geo_reference)),
            (true, None) => self.geo_reference.to_absolute(&self.points),
            (false, None) => self.points.clone(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn default_attribute_name(&self) -> Option<&str> {
        self.default_attribute_name.as_deref()
    }

    pub fn set_default_attribute_name(&mut self, name: Option<String>) {
        self.default_attribute_name = name;
    }

    /// Returns the values of attribute `name`.
    ///
    /// Without a name, the default attribute name is used, falling back
    /// to the first attribute.
    pub fn get_attribute(&self, name: Option<&str>) -> Result<&[C], GeodataError> {
        let name = match name.or(self.default_attribute_name.as_deref()) {
            Some(name) => name,
            None => {
                let (_, values) = self.attributes.first().ok_or(GeodataError::NoAttributes)?;
                return Ok(values);
            }
        };
        self.attributes
            .get(name)
            .ok_or_else(|| GeodataError::MissingAttribute(name.to_owned()))
    }

    /// Re-bases this set onto `geo_reference`, rewriting the stored
    /// points so their absolute positions are unchanged.
    pub fn set_geo_reference(&mut self, geo_reference: GeoReference) {
        self.points = geo_reference.rebase(&self.points, Some(&self.geo_reference));
        self.geo_reference = geo_reference;
    }

    /// Returns the absolute points as a polygon ring, so a point set
    /// can be used as a clipping boundary.
    pub fn to_polygon(&self) -> Polygon<C> {
        Polygon::new(LineString::from(self.get_points(true, None)), vec![])
    }

    /// Returns the points (and attributes) inside `polygon`.
    ///
    /// `polygon` is in absolute coordinates. With `closed`, points on
    /// the boundary are kept. The result uses a default geo reference.
    pub fn clip(&self, polygon: &Polygon<C>, closed: bool) -> PointSet {
        let points = self.get_points(true, None);
        let indices = polygon::inside_indices(&points, polygon, closed);
        self.take(&points, &indices)
    }

    /// Returns the points (and attributes) outside `polygon`; the
    /// complement of [PointSet::clip].
    pub fn clip_outside(&self, polygon: &Polygon<C>, closed: bool) -> PointSet {
        let points = self.get_points(true, None);
        let indices = polygon::outside_indices(&points, polygon, closed);
        self.take(&points, &indices)
    }

    /// Returns the union of `self` and `other`.
    ///
    /// Zones are reconciled and the result is referenced to the lowest
    /// corner of both origins. Points and attributes of `self` come
    /// first. Both sets must have the same attribute names.
    pub fn merge(&self, other: &PointSet) -> Result<PointSet, GeodataError> {
        let mut lhs_geo = self.geo_reference.clone();
        let mut rhs_geo = other.geo_reference.clone();
        lhs_geo.reconcile_zone(&mut rhs_geo)?;

        if !self.attributes.same_names(&other.attributes) {
            return Err(GeodataError::AttributeMismatch(
                self.attributes.names().map(str::to_owned).collect(),
                other.attributes.names().map(str::to_owned).collect(),
            ));
        }

        let geo_reference = GeoReference::new(
            lhs_geo.zone(),
            lhs_geo.xllcorner().min(rhs_geo.xllcorner()),
            lhs_geo.yllcorner().min(rhs_geo.yllcorner()),
        );
        debug!(
            "merging {} + {} points onto {geo_reference}",
            self.len(),
            other.len()
        );

        let mut points = geo_reference.rebase(&self.points, Some(&self.geo_reference));
        points.extend(geo_reference.rebase(&other.points, Some(&other.geo_reference)));

        let attributes = self
            .attributes
            .iter()
            .map(|(name, lhs)| {
                let rhs = other.attributes.get(name).unwrap_or_default();
                (name, [lhs, rhs].concat())
            })
            .collect();

        Ok(PointSet {
            points,
            attributes,
            geo_reference,
            default_attribute_name: self.default_attribute_name.clone(),
        })
    }
}

/// Private API
impl PointSet {
    pub(crate) fn with_default_attribute_name(mut self, name: Option<String>) -> Self {
        self.default_attribute_name = name;
        self
    }

    /// Returns a new set holding fresh copies of `points[indices]`.
    fn take(&self, points: &[Coord<C>], indices: &[usize]) -> PointSet {
        PointSet {
            points: indices.iter().map(|&idx| points[idx]).collect(),
            attributes: self.attributes.take(indices),
            geo_reference: GeoReference::default(),
            default_attribute_name: None,
        }
    }
}

/// Formats the absolute points.
impl fmt::Display for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, point) in self.get_points(true, None).iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[{}, {}]", point.x, point.y)?;
        }
        write!(f, "]")
    }
}

//! # Geospatial point data
//!
//! `geodata` stores sets of points with named per-point attributes,
//! referenced to a UTM origin through a [GeoReference]. Point sets can
//! be clipped by polygons, merged, and read from or written to `.xya`
//! text and `.pts` binary files.

mod attributes;
mod builder;
mod ensure;
mod error;
mod io;
mod point_set;
pub mod polygon;
pub mod projection;

pub use crate::{
    attributes::Attributes,
    builder::PointSetBuilder,
    ensure::{ensure_absolute, ensure_geospatial, merge_points_files, PointSource},
    error::GeodataError,
    io::{Format, XYA_DELIMITER},
    point_set::{PointSet, DEFAULT_ATTRIBUTE_NAME},
};
pub use {
    geo,
    georef::{self, GeoReference, Zone},
};

/// Base floating point type used for all coordinates and attributes.
pub type C = georef::C;

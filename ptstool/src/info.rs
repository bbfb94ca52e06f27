use crate::options::Info;
use anyhow::Result;
use geodata::{GeoReference, PointSet, C};
use serde::Serialize;
use std::{io::Write, path::Path};

#[derive(Debug, Serialize)]
struct Summary<'a> {
    file: &'a Path,
    points: usize,
    geo_reference: &'a GeoReference,
    /// Absolute `[min_x, min_y, max_x, max_y]`, absent for empty sets.
    bounds: Option<[C; 4]>,
    attributes: Vec<AttributeSummary<'a>>,
}

#[derive(Debug, Serialize)]
struct AttributeSummary<'a> {
    name: &'a str,
    min: Option<C>,
    max: Option<C>,
}

impl Info {
    pub fn run(&self) -> Result<()> {
        let set = PointSet::from_file(&self.input)?;
        let summary = Summary {
            file: &self.input,
            points: set.len(),
            geo_reference: set.geo_reference(),
            bounds: bounds(&set),
            attributes: set
                .attributes()
                .iter()
                .map(|(name, values)| {
                    let (min, max) = range(values.iter().copied());
                    AttributeSummary { name, min, max }
                })
                .collect(),
        };

        let mut out = std::io::stdout().lock();
        if self.json {
            serde_json::to_writer_pretty(&mut out, &summary)?;
            writeln!(out)?;
        } else {
            Self::print(&mut out, &summary)?;
        }
        Ok(())
    }

    fn print(out: &mut impl Write, summary: &Summary<'_>) -> Result<()> {
        let geo = summary.geo_reference;
        writeln!(out, "file:          {}", summary.file.display())?;
        writeln!(out, "points:        {}", summary.points)?;
        writeln!(out, "geo reference: {geo}")?;
        writeln!(
            out,
            "               {} {} {}, false origin ({}, {})",
            geo.datum(),
            geo.projection(),
            geo.units(),
            geo.false_easting(),
            geo.false_northing()
        )?;
        if let Some([min_x, min_y, max_x, max_y]) = summary.bounds {
            writeln!(out, "bounds:        ({min_x}, {min_y}) - ({max_x}, {max_y})")?;
        }
        for attribute in &summary.attributes {
            match (attribute.min, attribute.max) {
                (Some(min), Some(max)) => {
                    writeln!(out, "attribute:     {} [{min}, {max}]", attribute.name)?;
                }
                _ => writeln!(out, "attribute:     {}", attribute.name)?,
            }
        }
        Ok(())
    }
}

fn bounds(set: &PointSet) -> Option<[C; 4]> {
    let points = set.get_points(true, None);
    let (min_x, max_x) = range(points.iter().map(|p| p.x));
    let (min_y, max_y) = range(points.iter().map(|p| p.y));
    Some([min_x?, min_y?, max_x?, max_y?])
}

fn range(values: impl Iterator<Item = C>) -> (Option<C>, Option<C>) {
    values.fold((None, None), |(min, max), value| {
        (
            Some(min.map_or(value, |min: C| min.min(value))),
            Some(max.map_or(value, |max: C| max.max(value))),
        )
    })
}

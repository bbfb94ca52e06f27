use crate::options::Project;
use anyhow::{ensure, Result};
use geodata::PointSet;
use log::info;

impl Project {
    pub fn run(&self) -> Result<()> {
        let input = PointSet::from_file(&self.input)?;
        ensure!(
            input.geo_reference().is_absolute(),
            "{:?} is geo referenced, expected raw latitudes and longitudes",
            self.input
        );

        let projected = PointSet::builder()
            .points(input.relative_points().to_vec())
            .attributes(input.attributes().clone())
            .points_are_lats_longs(true)
            .build()?;
        // Relative export keeps the projected zone in the output.
        projected.export_points_file(&self.out, false)?;
        info!(
            "projected {} points into zone {}",
            projected.len(),
            projected.geo_reference().zone()
        );
        Ok(())
    }
}

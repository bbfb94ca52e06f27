use crate::options::Clip;
use anyhow::{bail, Result};
use geodata::PointSet;
use log::info;

impl Clip {
    pub fn run(&self) -> Result<()> {
        let boundary = PointSet::from_file(&self.polygon)?;
        if boundary.len() < 3 {
            bail!(
                "polygon {:?} has {} vertices, need at least 3",
                self.polygon,
                boundary.len()
            );
        }
        let polygon = boundary.to_polygon();
        let set = PointSet::from_file(&self.input)?;

        let closed = !self.open;
        let clipped = if self.outside {
            set.clip_outside(&polygon, closed)
        } else {
            set.clip(&polygon, closed)
        };
        clipped.export_points_file(&self.out, true)?;
        info!("kept {} of {} points", clipped.len(), set.len());
        Ok(())
    }
}

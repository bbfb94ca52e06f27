use crate::options::Merge;
use anyhow::Result;
use geodata::PointSet;
use log::info;

impl Merge {
    pub fn run(&self) -> Result<()> {
        if self.relative {
            let merged = PointSet::from_file(&self.lhs)?.merge(&PointSet::from_file(&self.rhs)?)?;
            merged.export_points_file(&self.out, false)?;
            info!(
                "merged {} points referenced to {}",
                merged.len(),
                merged.geo_reference()
            );
        } else {
            geodata::merge_points_files(&self.lhs, &self.rhs, &self.out)?;
            info!("merged {:?} and {:?} into {:?}", self.lhs, self.rhs, self.out);
        }
        Ok(())
    }
}

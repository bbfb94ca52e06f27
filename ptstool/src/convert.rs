use crate::options::Convert;
use anyhow::Result;
use geodata::PointSet;
use log::info;

impl Convert {
    pub fn run(&self) -> Result<()> {
        let mut builder = PointSet::builder().file(&self.input);
        if let Some(delimiter) = self.delimiter {
            builder = builder.delimiter(delimiter);
        }
        let set = builder.build()?;
        set.export_points_file(&self.output, !self.relative)?;
        info!(
            "converted {} points from {:?} to {:?}",
            set.len(),
            self.input,
            self.output
        );
        Ok(())
    }
}

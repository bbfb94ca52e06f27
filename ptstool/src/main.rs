mod clip;
mod convert;
mod info;
mod merge;
mod options;
mod project;

use anyhow::Result;
use clap::Parser;
use options::Cli;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli {
        Cli::Info(info) => info.run(),
        Cli::Convert(convert) => convert.run(),
        Cli::Merge(merge) => merge.run(),
        Cli::Clip(clip) => clip.run(),
        Cli::Project(project) => project.run(),
    }
}

use clap::{Args, Parser};
use std::path::PathBuf;

/// Inspect and transform `.xya` and `.pts` point files.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub enum Cli {
    /// Print point count, geo reference and attribute ranges.
    Info(Info),

    /// Convert between point file formats.
    Convert(Convert),

    /// Write the union of two point files.
    Merge(Merge),

    /// Keep only the points inside (or outside) a polygon.
    Clip(Clip),

    /// Project latitude/longitude points onto UTM.
    Project(Project),
}

#[derive(Debug, Clone, Args)]
pub struct Info {
    /// Print a JSON summary.
    #[arg(long)]
    pub json: bool,

    pub input: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct Convert {
    /// Write relative coordinates and the geo reference instead of
    /// absolute coordinates.
    #[arg(short, long)]
    pub relative: bool,

    /// Field delimiter of a `.xya` input.
    #[arg(short, long)]
    pub delimiter: Option<char>,

    pub input: PathBuf,

    pub output: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct Merge {
    /// Write relative coordinates and the geo reference instead of
    /// absolute coordinates.
    #[arg(short, long)]
    pub relative: bool,

    #[arg(short, long)]
    pub out: PathBuf,

    pub lhs: PathBuf,

    pub rhs: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct Clip {
    /// Point file whose absolute points form the polygon ring.
    #[arg(short, long)]
    pub polygon: PathBuf,

    /// Keep points outside the polygon.
    #[arg(long)]
    pub outside: bool,

    /// Treat points on the polygon boundary as outside.
    #[arg(long)]
    pub open: bool,

    #[arg(short, long)]
    pub out: PathBuf,

    pub input: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct Project {
    #[arg(short, long)]
    pub out: PathBuf,

    /// Point file whose rows are `latitude, longitude, attributes...`.
    pub input: PathBuf,
}

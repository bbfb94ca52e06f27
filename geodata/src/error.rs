use georef::GeoRefError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeodataError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    GeoRef(#[from] GeoRefError),

    #[error("{0}")]
    Builder(&'static str),

    #[error("got {latitudes} latitudes but {longitudes} longitudes")]
    LatLonLength { latitudes: usize, longitudes: usize },

    #[error("latitude {lat}, longitude {lon} is out of range")]
    LatLonRange { lat: f64, lon: f64 },

    #[error("attribute '{name}' has {found} values, expected {expected}")]
    AttributeLength {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("attribute '{0}' does not exist in data set")]
    MissingAttribute(String),

    #[error("data set has no attributes")]
    NoAttributes,

    #[error("duplicate attribute '{0}'")]
    DuplicateAttribute(String),

    #[error("both point sets must have the same attributes to allow merging, got {0:?} and {1:?}")]
    AttributeMismatch(Vec<String>, Vec<String>),

    #[error("file {0} does not exist or is not accessible")]
    NotFound(PathBuf),

    #[error("unknown point file extension for {0}")]
    UnsupportedExtension(PathBuf),

    #[error("line {line}: expected {expected} attribute values, got {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: malformed numeric field '{value}'")]
    MalformedField { line: usize, value: String },

    #[error("not a points file, bad magic {0:?}")]
    BadMagic([u8; 4]),

    #[error("unsupported points file version {0}")]
    UnsupportedVersion(u8),

    #[error("corrupt points file: {0}")]
    Corrupt(String),

    #[error("attribute name is not valid UTF-8")]
    AttributeName(#[from] std::string::FromUtf8Error),
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoRefError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("input must be an N x 2 array of (x, y) values, row {row} has {width} elements")]
    Shape { row: usize, width: usize },

    #[error("both geo references must be in the same zone to allow reconciliation, got zone {0} and {1}")]
    ZoneMismatch(u8, u8),

    #[error("expecting line '{expected}', got '{found}'")]
    TitleMismatch { expected: String, found: String },

    #[error("could not parse geo reference {field} from '{value}'")]
    Parse { field: &'static str, value: String },

    #[error("invalid UTM zone {0}")]
    InvalidZone(i64),

    #[error("geo reference string is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("geo reference string too long ({0} bytes)")]
    StringLen(usize),
}

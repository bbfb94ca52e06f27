use crate::GeoRefError;
use std::fmt;

/// UTM zone of a [GeoReference](crate::GeoReference).
///
/// File formats encode [Zone::Unset] as `-1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Zone {
    /// No zone has been assigned yet. Reconciles with any zone.
    #[default]
    Unset,

    /// A concrete UTM longitude band.
    Utm(u8),
}

impl Zone {
    /// Integer written to files for an unset zone.
    pub const UNSET_CODE: i32 = -1;

    /// Returns the zone for the integer `code` used by the file
    /// formats.
    pub fn from_code(code: i64) -> Result<Self, GeoRefError> {
        match code {
            -1 => Ok(Self::Unset),
            0..=255 => Ok(Self::Utm(code as u8)),
            invalid => Err(GeoRefError::InvalidZone(invalid)),
        }
    }

    /// Returns the integer used to represent this zone in files.
    pub fn code(self) -> i32 {
        match self {
            Self::Unset => Self::UNSET_CODE,
            Self::Utm(zone) => i32::from(zone),
        }
    }

    pub fn is_unset(self) -> bool {
        self == Self::Unset
    }

    /// Returns the zone both `self` and `other` can agree on.
    pub fn reconcile(self, other: Self) -> Result<Self, GeoRefError> {
        match (self, other) {
            (lhs, rhs) if lhs == rhs => Ok(lhs),
            (Self::Unset, zone) | (zone, Self::Unset) => Ok(zone),
            (Self::Utm(lhs), Self::Utm(rhs)) => Err(GeoRefError::ZoneMismatch(lhs, rhs)),
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

//! Latitude/longitude to UTM projection.
//!
//! Redfearn's series for the transverse Mercator projection, as used
//! for the Geocentric Datum of Australia. Accurate to about a
//! millimeter within a zone.
//!
//! # References
//!
//! 1. [GDA Technical Manual, section 7.3](https://www.icsm.gov.au/gda2020-and-gda94-technical-manuals)

use crate::{GeodataError, C};
use geo::geometry::Coord;
use georef::Zone;
use std::f64::consts::PI;

/// Semi major axis (meters).
const A: C = 6_378_137.0;
const INVERSE_FLATTENING: C = 298.257_222_101;
/// Central scale factor.
const K0: C = 0.9996;
const ZONE_WIDTH: C = 6.0;
const CENTRAL_MERIDIAN_ZONE0: C = -183.0;
const WESTERN_EDGE_ZONE0: C = -186.0;
const FALSE_EASTING: C = 500_000.0;
const FALSE_NORTHING_SOUTH: C = 10_000_000.0;

/// A projected UTM position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Utm {
    pub zone: u8,
    pub easting: C,
    pub northing: C,
}

/// Projects a single position given in decimal degrees.
pub fn redfearn(lat: C, lon: C) -> Result<Utm, GeodataError> {
    if !(lat.is_finite() && lon.is_finite() && lat.abs() <= 90.0 && lon.abs() <= 180.0) {
        return Err(GeodataError::LatLonRange { lat, lon });
    }

    let false_northing = if lat < 0.0 { FALSE_NORTHING_SOUTH } else { 0.0 };

    let f = 1.0 / INVERSE_FLATTENING;
    let e2 = f * (2.0 - f);
    let e4 = e2 * e2;
    let e6 = e2 * e4;

    let phi = lat.to_radians();
    let sinphi = phi.sin();
    let cosphi = phi.cos();
    let cosphi3 = cosphi.powi(3);
    let cosphi5 = cosphi.powi(5);
    let cosphi7 = cosphi.powi(7);

    let t2 = phi.tan().powi(2);
    let t4 = t2 * t2;
    let t6 = t2 * t4;

    // Radii of curvature.
    let rho = A * (1.0 - e2) / (1.0 - e2 * sinphi * sinphi).powf(1.5);
    let nu = A / (1.0 - e2 * sinphi * sinphi).sqrt();
    let psi = nu / rho;
    let psi2 = psi * psi;
    let psi3 = psi * psi2;
    let psi4 = psi2 * psi2;

    // Meridian distance.
    let a0 = 1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0;
    let a2 = 3.0 / 8.0 * (e2 + e4 / 4.0 + 15.0 * e6 / 128.0);
    let a4 = 15.0 / 256.0 * (e4 + 3.0 * e6 / 4.0);
    let a6 = 35.0 * e6 / 3072.0;
    let m = A * a0 * phi - A * a2 * (2.0 * phi).sin() + A * a4 * (4.0 * phi).sin()
        - A * a6 * (6.0 * phi).sin();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let zone = ((lon - WESTERN_EDGE_ZONE0) / ZONE_WIDTH) as u8;
    let central_meridian = C::from(zone) * ZONE_WIDTH + CENTRAL_MERIDIAN_ZONE0;

    let omega = (lon - central_meridian) * PI / 180.0;
    let omega2 = omega * omega;
    let omega3 = omega * omega2;
    let omega4 = omega2 * omega2;
    let omega5 = omega * omega4;
    let omega6 = omega3 * omega3;
    let omega7 = omega * omega6;
    let omega8 = omega4 * omega4;

    let northing = {
        let term1 = nu * sinphi * cosphi * omega2 / 2.0;
        let term2 = nu * sinphi * cosphi3 * (4.0 * psi2 + psi - t2) * omega4 / 24.0;
        let term3 = nu
            * sinphi
            * cosphi5
            * (8.0 * psi4 * (11.0 - 24.0 * t2) - 28.0 * psi3 * (1.0 - 6.0 * t2)
                + psi2 * (1.0 - 32.0 * t2)
                - psi * 2.0 * t2
                + t4
                - t2)
            * omega6
            / 720.0;
        let term4 = nu * sinphi * cosphi7 * (1385.0 - 3111.0 * t2 + 543.0 * t4 - t6) * omega8
            / 40320.0;
        false_northing + K0 * (m + term1 + term2 + term3 + term4)
    };

    let easting = {
        let term1 = nu * omega * cosphi;
        let term2 = nu * cosphi3 * (psi - t2) * omega3 / 6.0;
        let term3 = nu
            * cosphi5
            * (4.0 * psi3 * (1.0 - 6.0 * t2) + psi2 * (1.0 + 8.0 * t2) - 2.0 * psi * t2 + t4)
            * omega5
            / 120.0;
        let term4 = nu * cosphi7 * (61.0 - 479.0 * t2 + 179.0 * t4 - t6) * omega7 / 5040.0;
        FALSE_EASTING + K0 * (term1 + term2 + term3 + term4)
    };

    Ok(Utm {
        zone,
        easting,
        northing,
    })
}

/// Projects paired `latitudes` and `longitudes`.
///
/// All positions must fall in the same zone.
pub fn latlon_to_utm(latitudes: &[C], longitudes: &[C]) -> Result<(Vec<Coord<C>>, Zone), GeodataError> {
    if latitudes.len() != longitudes.len() {
        return Err(GeodataError::LatLonLength {
            latitudes: latitudes.len(),
            longitudes: longitudes.len(),
        });
    }
    let mut zone = Zone::Unset;
    let mut points = Vec::with_capacity(latitudes.len());
    for (&lat, &lon) in latitudes.iter().zip(longitudes) {
        let utm = redfearn(lat, lon)?;
        zone = zone.reconcile(Zone::Utm(utm.zone))?;
        points.push(Coord {
            x: utm.easting,
            y: utm.northing,
        });
    }
    Ok((points, zone))
}

use crate::error::RouteError;
use crate::point::Coordinate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

const MEAN_EARTH_RADIUS_KM: f64 = 6371.0088;

// WGS-84
const SEMI_MAJOR_AXIS_M: f64 = 6_378_137.0;
const FLATTENING: f64 = 1.0 / 298.257_223_563;
const SEMI_MINOR_AXIS_M: f64 = (1.0 - FLATTENING) * SEMI_MAJOR_AXIS_M;

const VINCENTY_MAX_ITERATIONS: usize = 200;
const VINCENTY_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Ellipsoidal geodesic on WGS-84 (Vincenty inverse).
    #[default]
    Geodesic,
    /// Great circle on a sphere of mean Earth radius.
    Haversine,
}

impl DistanceMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceMetric::Geodesic => "geodesic",
            DistanceMetric::Haversine => "haversine",
        }
    }

    pub fn distance_km(self, a: Coordinate, b: Coordinate) -> f64 {
        distance_km(self, a, b)
    }
}

impl FromStr for DistanceMetric {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "geodesic" | "ellipsoid" => Ok(DistanceMetric::Geodesic),
            "haversine" | "sphere" => Ok(DistanceMetric::Haversine),
            _ => Err(RouteError::UnknownMetric {
                name: s.to_string(),
            }),
        }
    }
}

/// Distance in kilometers between two coordinates.
///
/// Operands are put in a fixed order before evaluation, so the result is
/// bit-identical for `(a, b)` and `(b, a)`.
pub fn distance_km(metric: DistanceMetric, a: Coordinate, b: Coordinate) -> f64 {
    let (first, second) = canonical_order(a, b);

    match metric {
        DistanceMetric::Haversine => haversine_km(first, second),
        DistanceMetric::Geodesic => {
            vincenty_km(first, second).unwrap_or_else(|| haversine_km(first, second))
        }
    }
}

fn canonical_order(a: Coordinate, b: Coordinate) -> (Coordinate, Coordinate) {
    let ordering = a.lat.total_cmp(&b.lat).then(a.lng.total_cmp(&b.lng));
    if ordering == Ordering::Greater {
        (b, a)
    } else {
        (a, b)
    }
}

pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let s1 = (dlat / 2.0).sin();
    let s2 = (dlng / 2.0).sin();
    let h = s1 * s1 + lat1.cos() * lat2.cos() * s2 * s2;

    2.0 * MEAN_EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

fn wrap_longitude(degrees: f64) -> f64 {
    let wrapped = (degrees + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 { 180.0 } else { wrapped }
}

/// Vincenty's inverse formula. `None` when the iteration fails to converge,
/// which happens for nearly antipodal points.
pub fn vincenty_km(a: Coordinate, b: Coordinate) -> Option<f64> {
    let l = wrap_longitude(b.lng - a.lng).to_radians();
    let u1 = ((1.0 - FLATTENING) * a.lat.to_radians().tan()).atan();
    let u2 = ((1.0 - FLATTENING) * b.lat.to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    let mut converged = false;

    let mut sin_sigma = 0.0;
    let mut cos_sigma = 0.0;
    let mut sigma = 0.0;
    let mut cos_sq_alpha = 0.0;
    let mut cos_2sigma_m = 0.0;

    for _ in 0..VINCENTY_MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        let cross = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
        sin_sigma = ((cos_u2 * sin_lambda).powi(2) + cross.powi(2)).sqrt();

        if sin_sigma == 0.0 {
            return Some(0.0);
        }

        cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        sigma = sin_sigma.atan2(cos_sigma);

        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;

        // Both points on the equator
        cos_2sigma_m = if cos_sq_alpha != 0.0 {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        } else {
            0.0
        };

        let c = FLATTENING / 16.0 * cos_sq_alpha * (4.0 + FLATTENING * (4.0 - 3.0 * cos_sq_alpha));
        let previous = lambda;
        lambda = l
            + (1.0 - c)
                * FLATTENING
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))));

        if (lambda - previous).abs() < VINCENTY_TOLERANCE {
            converged = true;
            break;
        }
    }

    if !converged {
        return None;
    }

    let a_sq = SEMI_MAJOR_AXIS_M * SEMI_MAJOR_AXIS_M;
    let b_sq = SEMI_MINOR_AXIS_M * SEMI_MINOR_AXIS_M;
    let u_sq = cos_sq_alpha * (a_sq - b_sq) / b_sq;

    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    let delta_sigma = big_b
        * sin_sigma
        * (cos_2sigma_m
            + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))
                    - big_b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma.powi(2))
                        * (-3.0 + 4.0 * cos_2sigma_m.powi(2))));

    let meters = SEMI_MINOR_AXIS_M * big_a * (sigma - delta_sigma);
    Some(meters / 1000.0)
}

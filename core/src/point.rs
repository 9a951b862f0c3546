use crate::error::{Result, RouteError};
use serde::Serialize;

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// A named location. Validated on construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    name: String,
    coordinate: Coordinate,
}

impl Point {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Result<Self> {
        let name = name.into();
        let coordinate = Coordinate::new(lat, lng);

        if !coordinate.is_valid() {
            return Err(RouteError::InvalidCoordinate { name, lat, lng });
        }

        Ok(Self { name, coordinate })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn lat(&self) -> f64 {
        self.coordinate.lat
    }

    pub fn lng(&self) -> f64 {
        self.coordinate.lng
    }
}

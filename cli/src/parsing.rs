use crate::error::LoadError;
use citypath_core::Point;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One entry of the city data file.
#[derive(Debug, Clone, Deserialize)]
pub struct CityRecord {
    pub city: String,
    pub lat: Degrees,
    pub lng: Degrees,
}

/// Coordinates may be stored as JSON numbers or as numeric strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Degrees {
    Number(f64),
    Text(String),
}

impl Degrees {
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Degrees::Number(value) => Some(*value),
            Degrees::Text(text) => text.trim().parse().ok(),
        }
    }
}

pub fn parse_points(path: &Path) -> Result<Vec<Point>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let values: Vec<serde_json::Value> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let records = values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value::<CityRecord>(value).map_err(|e| LoadError::InvalidRecord {
                position: index + 1,
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    records_to_points(records)
}

/// Validates records in file order. Positions in errors are 1-based.
pub fn records_to_points(records: Vec<CityRecord>) -> Result<Vec<Point>, LoadError> {
    let mut seen_names = FxHashSet::default();
    let mut points = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let position = index + 1;
        let invalid = |reason: String| LoadError::InvalidRecord { position, reason };

        let name = record.city.trim();
        if name.is_empty() {
            return Err(invalid("city name is empty".to_string()));
        }
        if !seen_names.insert(name.to_string()) {
            return Err(invalid(format!("duplicate city '{name}'")));
        }

        let lat = record
            .lat
            .to_f64()
            .ok_or_else(|| invalid(format!("latitude of '{name}' is not a number")))?;
        let lng = record
            .lng
            .to_f64()
            .ok_or_else(|| invalid(format!("longitude of '{name}' is not a number")))?;

        let point = Point::new(name, lat, lng).map_err(|e| invalid(e.to_string()))?;
        points.push(point);
    }

    Ok(points)
}

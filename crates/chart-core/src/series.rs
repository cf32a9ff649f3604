// File: crates/chart-core/src/series.rs
// Summary: Series model: ordered (timestamp label, optional value) observations.
// Notes:
// - A value that is absent, non-numeric or non-finite is "missing": it is
//   rendered with the placeholder and never takes part in extrema.
// - The JSON shape is the backend's row format: `[[label, value], ...]`.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub label: String,
    pub value: Option<f64>,
}

impl Point {
    /// Non-finite values are stored as missing.
    pub fn new(label: impl Into<String>, value: Option<f64>) -> Self {
        Self { label: label.into(), value: value.filter(|v| v.is_finite()) }
    }

    pub fn present(label: impl Into<String>, value: f64) -> Self {
        Self::new(label, Some(value))
    }

    pub fn missing(label: impl Into<String>) -> Self {
        Self { label: label.into(), value: None }
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let row = Vec::<Value>::deserialize(deserializer)?;
        let mut it = row.into_iter();
        let label = match it.next() {
            Some(Value::String(s)) => s,
            Some(Value::Null) | None => return Err(de::Error::custom("series row is missing its label")),
            Some(other) => other.to_string(),
        };
        let value = it.next().and_then(|v| v.as_f64());
        Ok(Point::new(label, value))
    }
}

impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.label, self.value).serialize(serializer)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    pub points: Vec<Point>,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Build from `(label, value)` pairs; `None` marks a missing value.
    pub fn from_pairs<L: Into<String>>(pairs: impl IntoIterator<Item = (L, Option<f64>)>) -> Self {
        Self { points: pairs.into_iter().map(|(l, v)| Point::new(l, v)).collect() }
    }

    /// Parse the backend's `[[label, value], ...]` JSON array.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> { self.points.iter() }

    /// Present values in series order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().filter_map(|p| p.value)
    }

    /// `(min, max)` over present values, or `None` when every value is missing.
    pub fn extent(&self) -> Option<(f64, f64)> {
        self.values().fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

impl FromIterator<Point> for Series {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter { self.points.iter() }
}

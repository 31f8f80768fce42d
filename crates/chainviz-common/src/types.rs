//! Data payload types shared by the dataset backend and the chart builders.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Value columns keyed by series name, ordered by name.
pub type SeriesColumns = BTreeMap<String, Vec<Option<f64>>>;

/// A named time-series payload.
///
/// `time` holds epoch-millisecond timestamps. Every column in `data` is
/// expected to be parallel to `time` (index `i` is the same sample), but
/// nothing here enforces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Data {
    /// Dataset label.
    pub name: String,
    /// Value columns keyed by series name.
    pub data: SeriesColumns,
    /// Sample timestamps.
    pub time: Vec<Option<i64>>,
}

impl Data {
    /// Creates a payload from its parts.
    pub fn new(name: impl Into<String>, data: SeriesColumns, time: Vec<Option<i64>>) -> Self {
        Self {
            name: name.into(),
            data,
            time,
        }
    }

    /// Names of all value columns, in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Number of samples on the time axis.
    pub fn sample_count(&self) -> usize {
        self.time.len()
    }

    /// Names of the columns whose length differs from `time`.
    pub fn misaligned_columns(&self) -> Vec<&str> {
        self.data
            .iter()
            .filter(|(_, values)| values.len() != self.time.len())
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Selects one value column, by name or by position.
///
/// Serialises as a bare string or number so it can be written straight
/// into a series encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Column {
    /// Column position.
    Index(u32),
    /// Column name.
    Name(String),
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for Column {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Column {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&String> for Column {
    fn from(name: &String) -> Self {
        Self::Name(name.clone())
    }
}

impl From<u32> for Column {
    fn from(index: u32) -> Self {
        Self::Index(index)
    }
}

impl FromStr for Column {
    type Err = Infallible;

    /// Digit-only text becomes an index; anything else is a name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = s.parse() {
                return Ok(Self::Index(index));
            }
        }
        Ok(Self::Name(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Data {
        let mut data = SeriesColumns::new();
        data.insert("total_eth".to_string(), vec![Some(1.0), None, Some(3.0)]);
        data.insert("tx_count".to_string(), vec![Some(10.0), Some(20.0)]);
        Data::new("blocks", data, vec![Some(100), Some(200), Some(300)])
    }

    #[test]
    fn test_misaligned_columns() {
        let data = sample();
        assert_eq!(data.sample_count(), 3);
        assert_eq!(data.misaligned_columns(), vec!["tx_count"]);
        assert_eq!(
            data.column_names().collect::<Vec<_>>(),
            vec!["total_eth", "tx_count"]
        );
    }

    #[test]
    fn test_column_from_str() {
        assert_eq!("fee_per_gas:mean".parse::<Column>().unwrap(), Column::from("fee_per_gas:mean"));
        assert_eq!("2".parse::<Column>().unwrap(), Column::Index(2));
        assert_eq!("".parse::<Column>().unwrap(), Column::Name(String::new()));
        // Too large for an index, kept as a name.
        assert_eq!(
            "99999999999".parse::<Column>().unwrap(),
            Column::Name("99999999999".to_string())
        );
    }

    #[test]
    fn test_column_serializes_bare() {
        assert_eq!(serde_json::to_string(&Column::from("a")).unwrap(), "\"a\"");
        assert_eq!(serde_json::to_string(&Column::Index(1)).unwrap(), "1");
        let parsed: Column = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, Column::Index(7));
        let parsed: Column = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(parsed, Column::Name("7".to_string()));
    }

    #[test]
    fn test_data_deserializes_backend_payload() {
        let json = r#"{"name":"x","data":{"a":[1.0,null,3.5]},"time":[100,null,300]}"#;
        let data: Data = serde_json::from_str(json).unwrap();
        assert_eq!(data.name, "x");
        assert_eq!(data.data["a"], vec![Some(1.0), None, Some(3.5)]);
        assert_eq!(data.time, vec![Some(100), None, Some(300)]);
    }
}

//! Typed subset of the chart library's option schema.
//!
//! Only the pieces the builders write are modelled. Field names and enum
//! spellings follow the library's JavaScript option object exactly, so a
//! serialised [`ChartOption`] can be handed to `setOption` unchanged.
//!
//! Options borrow their bulk data (dataset source, axis data) from the
//! payload they were built from; nothing is copied until serialisation.

use chainviz_common::{Column, Result, SeriesColumns};
use serde::Serialize;
use serde_json::Value;

/// Root option object for a single-series chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption<'a> {
    /// Tooltip behaviour.
    pub tooltip: Tooltip,
    /// Data the series read from.
    pub dataset: Dataset<'a>,
    /// Horizontal axis.
    pub x_axis: Axis<'a>,
    /// Vertical axis.
    pub y_axis: Axis<'a>,
    /// The single series; serialised as an object, not an array.
    pub series: Series,
}

impl ChartOption<'_> {
    /// Serialises to a JSON value.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serialises to compact JSON text.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialises to indented JSON text.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Tooltip configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    /// What hovering over triggers the tooltip.
    pub trigger: Trigger,
}

impl Tooltip {
    /// Tooltip shown for every series at the hovered axis position.
    pub const fn axis() -> Self {
        Self {
            trigger: Trigger::Axis,
        }
    }
}

/// Tooltip trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    /// Hovering the axis.
    Axis,
    /// Hovering a data item.
    Item,
    /// Never.
    None,
}

/// Dataset component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset<'a> {
    /// Dimension names, when declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Vec<String>>,
    /// The raw data.
    pub source: DatasetSource<'a>,
}

impl<'a> Dataset<'a> {
    /// Dataset over named value columns.
    pub const fn columns(columns: &'a SeriesColumns) -> Self {
        Self {
            dimensions: None,
            source: DatasetSource::Columns(columns),
        }
    }

    /// Dataset over an arbitrary JSON source, forwarded as-is.
    pub const fn raw(source: &'a Value) -> Self {
        Self {
            dimensions: None,
            source: DatasetSource::Raw(source),
        }
    }

    /// Declares dimension names.
    #[must_use]
    pub fn with_dimensions<I, S>(mut self, dimensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dimensions = Some(dimensions.into_iter().map(Into::into).collect());
        self
    }
}

/// Borrowed dataset source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DatasetSource<'a> {
    /// Column-oriented source: series name to values.
    Columns(&'a SeriesColumns),
    /// Untyped source, not inspected.
    Raw(&'a Value),
}

/// Cartesian axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Axis<'a> {
    /// Axis kind.
    #[serde(rename = "type")]
    pub kind: AxisType,
    /// Explicit axis values, when supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a [Option<i64>]>,
}

impl<'a> Axis<'a> {
    /// Time axis; values are spaced as timestamps.
    pub const fn time() -> Self {
        Self {
            kind: AxisType::Time,
            data: None,
        }
    }

    /// Numeric value axis.
    pub const fn value() -> Self {
        Self {
            kind: AxisType::Value,
            data: None,
        }
    }

    /// Supplies the axis values explicitly.
    #[must_use]
    pub const fn with_data(self, data: &'a [Option<i64>]) -> Self {
        Self {
            kind: self.kind,
            data: Some(data),
        }
    }
}

/// Axis kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    /// Continuous numeric.
    Value,
    /// Discrete categories.
    Category,
    /// Timestamps.
    Time,
    /// Logarithmic.
    Log,
}

/// A series declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Series {
    /// Series kind.
    #[serde(rename = "type")]
    pub kind: SeriesType,
    /// Column-to-axis mapping; omitted to let the library infer it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encode: Option<Encode>,
}

impl Series {
    /// Line series with inferred encoding.
    pub const fn line() -> Self {
        Self {
            kind: SeriesType::Line,
            encode: None,
        }
    }

    /// Binds the y-axis to `column`.
    #[must_use]
    pub fn encode_y(mut self, column: Column) -> Self {
        self.encode.get_or_insert_with(Encode::default).y = Some(column);
        self
    }
}

/// Series kind. Only line charts are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    /// Line chart.
    Line,
}

/// Which dataset column feeds which axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Encode {
    /// Column on the x-axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Column>,
    /// Column on the y-axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Column>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_axis_omits_missing_data() {
        let value = serde_json::to_value(Axis::value()).unwrap();
        assert_eq!(value, json!({ "type": "value" }));

        let time = [Some(1), None];
        let value = serde_json::to_value(Axis::time().with_data(&time)).unwrap();
        assert_eq!(value, json!({ "type": "time", "data": [1, null] }));
    }

    #[test]
    fn test_enum_spellings() {
        assert_eq!(serde_json::to_value(Trigger::None).unwrap(), json!("none"));
        assert_eq!(serde_json::to_value(Trigger::Item).unwrap(), json!("item"));
        assert_eq!(serde_json::to_value(AxisType::Category).unwrap(), json!("category"));
        assert_eq!(serde_json::to_value(AxisType::Log).unwrap(), json!("log"));
    }

    #[test]
    fn test_series_encode() {
        assert_eq!(
            serde_json::to_value(Series::line()).unwrap(),
            json!({ "type": "line" })
        );
        assert_eq!(
            serde_json::to_value(Series::line().encode_y(Column::Index(2))).unwrap(),
            json!({ "type": "line", "encode": { "y": 2 } })
        );
    }

    #[test]
    fn test_raw_dataset_with_dimensions() {
        let source = json!([[1, 2], [3, 4]]);
        let dataset = Dataset::raw(&source).with_dimensions(["time", "value"]);
        assert_eq!(
            serde_json::to_value(&dataset).unwrap(),
            json!({ "dimensions": ["time", "value"], "source": [[1, 2], [3, 4]] })
        );
    }
}

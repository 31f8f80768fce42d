//! Line chart option builders.

use crate::option::{Axis, ChartOption, Dataset, Series, Tooltip};
use chainviz_common::{Column, Data};
use serde_json::Value;
use tracing::debug;

/// Dimensions declared for an untyped `[time, value]` row source.
pub const TIME_VALUE_DIMENSIONS: [&str; 2] = ["time", "value"];

/// Builds a time-series line chart plotting `column` of `data`.
///
/// The dataset source is `data.data` itself and the x-axis carries
/// `data.time` as explicit axis data, so the chart library receives the
/// real timestamps instead of inferring them from the dataset. Neither the
/// column nor the lengths are checked; a column that is not in `data.data`
/// renders as an empty chart.
pub fn line_option(data: &Data, column: impl Into<Column>) -> ChartOption<'_> {
    let column = column.into();
    debug!(
        dataset = %data.name,
        %column,
        columns = data.data.len(),
        samples = data.time.len(),
        "building line option"
    );

    ChartOption {
        tooltip: Tooltip::axis(),
        dataset: Dataset::columns(&data.data),
        x_axis: Axis::time().with_data(&data.time),
        y_axis: Axis::value(),
        series: Series::line().encode_y(column),
    }
}

/// Builds a line chart over an untyped row source.
///
/// `source` is forwarded unchanged and declared as `time`/`value` rows;
/// the series relies on the library's default column inference.
pub fn dataset_line_option(source: &Value) -> ChartOption<'_> {
    debug!(kind = source_kind(source), "building untyped line option");

    ChartOption {
        tooltip: Tooltip::axis(),
        dataset: Dataset::raw(source).with_dimensions(TIME_VALUE_DIMENSIONS),
        x_axis: Axis::time(),
        y_axis: Axis::value(),
        series: Series::line(),
    }
}

const fn source_kind(source: &Value) -> &'static str {
    match source {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! Chart builder trait for pluggable chart kinds.

use crate::line::line_option;
use crate::option::ChartOption;
use chainviz_common::{Column, Data};

/// Trait for builders that turn a payload into a chart option.
pub trait ChartBuilder: Send + Sync {
    /// Builds an option plotting `column` of `data`.
    fn build<'a>(&self, data: &'a Data, column: Column) -> ChartOption<'a>;

    /// Gets the name of this chart kind.
    fn name(&self) -> &'static str;

    /// Gets the description of this chart kind.
    fn description(&self) -> &'static str;
}

/// Time-series line chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineChart;

impl ChartBuilder for LineChart {
    fn build<'a>(&self, data: &'a Data, column: Column) -> ChartOption<'a> {
        line_option(data, column)
    }

    fn name(&self) -> &'static str {
        "line"
    }

    fn description(&self) -> &'static str {
        "One column plotted against the time axis"
    }
}

//! Shapes and charts drawn on a slide.

use super::geometry::Rect;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Preset geometry of a drawn shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeKind {
    /// Plain rectangle
    Rect,
    /// Rectangle with rounded corners; `radius` is the corner size as a
    /// fraction of the shorter side
    RoundRect { radius: f64 },
    /// Block arrow pointing right
    RightArrow,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Rect => write!(f, "rect"),
            ShapeKind::RoundRect { .. } => write!(f, "roundRect"),
            ShapeKind::RightArrow => write!(f, "rightArrow"),
        }
    }
}

/// Solid fill of a shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    /// Fill color (hex RGB)
    pub color: String,
}

impl Fill {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

/// Outline of a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Line color (hex RGB)
    pub color: String,

    /// Line width in points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

impl LineStyle {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            width: None,
        }
    }

    /// Set the line width in points.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }
}

/// Chart type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Vertical bars (columns)
    #[default]
    Column,
    /// Horizontal bars
    Bar,
    /// Line chart
    Line,
    /// Pie chart
    Pie,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartKind::Column => "column",
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
        };
        f.write_str(name)
    }
}

/// One named data series: a value per category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    name: String,
    labels: Vec<String>,
    values: Vec<f64>,
}

impl ChartSeries {
    /// Create a series.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSeries`] if `labels` and `values` differ in length or
    /// a value is not finite.
    pub fn new<L, S>(name: impl Into<String>, labels: L, values: Vec<f64>) -> Result<Self>
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();

        if labels.len() != values.len() {
            return Err(Error::InvalidSeries(format!(
                "{}: {} labels but {} values",
                name,
                labels.len(),
                values.len()
            )));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(Error::InvalidSeries(format!(
                "{}: value {} is not finite",
                name, bad
            )));
        }

        Ok(Self {
            name,
            labels,
            values,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of data points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest value, if any.
    pub fn max_value(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }
}

/// Value axis range and tick spacing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    pub min: f64,
    pub max: f64,
    pub major_unit: f64,
}

/// Position and styling of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    /// Position and size in inches
    pub rect: Rect,

    /// Series colors (hex RGB), applied in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,

    /// Show the legend
    #[serde(default)]
    pub show_legend: bool,

    /// Fixed value-axis scale; automatic when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_axis: Option<AxisScale>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_axis_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_axis_title: Option<String>,

    /// Axis label color (hex RGB)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_color: Option<String>,

    /// Major grid line color (hex RGB)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_color: Option<String>,
}

impl ChartFrame {
    /// Create an unstyled frame at `rect`.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            colors: Vec::new(),
            show_legend: false,
            value_axis: None,
            value_axis_title: None,
            category_axis_title: None,
            label_color: None,
            grid_color: None,
        }
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    /// Fix the value axis to `min..=max` with ticks every `major_unit`.
    pub fn with_value_axis(mut self, min: f64, max: f64, major_unit: f64) -> Self {
        self.value_axis = Some(AxisScale {
            min,
            max,
            major_unit,
        });
        self
    }

    pub fn with_axis_titles(
        mut self,
        category: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.category_axis_title = Some(category.into());
        self.value_axis_title = Some(value.into());
        self
    }

    pub fn with_label_color(mut self, color: impl Into<String>) -> Self {
        self.label_color = Some(color.into());
        self
    }

    pub fn with_grid_color(mut self, color: impl Into<String>) -> Self {
        self.grid_color = Some(color.into());
        self
    }
}

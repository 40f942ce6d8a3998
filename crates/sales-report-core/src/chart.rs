//! Chart payload types in the chart.js data shape, and palette handling.

use sales_report_common::Money;
use sales_report_config::defaults::DEFAULT_PALETTE;
use sales_report_config::ChartConfig;
use serde::{Deserialize, Serialize};

/// Labels plus datasets, ready for a chart.js style renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Category axis labels.
    pub labels: Vec<String>,
    /// Series plotted against `labels`.
    pub datasets: Vec<Dataset>,
}

/// Either one color for the whole series or one per entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Same color for every entry.
    Single(String),
    /// Color of each entry, index aligned with the data.
    PerEntry(Vec<String>),
}

/// One chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Series name shown in the legend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Values, index aligned with the chart labels.
    pub data: Vec<Money>,
    /// Fill color.
    pub background_color: ColorSpec,
    /// Stroke color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<ColorSpec>,
    /// Stroke width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    /// Line styling, emitted inline for line series only.
    #[serde(flatten)]
    pub line: Option<LineStyle>,
}

/// Cosmetic fields of a line series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct LineStyle {
    pub line_tension: f64,
    pub border_cap_style: String,
    pub border_dash: Vec<f64>,
    pub border_dash_offset: f64,
    pub border_join_style: String,
    pub point_border_color: String,
    pub point_background_color: String,
    pub point_border_width: u32,
    pub point_hover_radius: u32,
    pub point_hover_background_color: String,
    pub point_hover_border_color: String,
    pub point_hover_border_width: u32,
    pub point_radius: u32,
    pub point_hit_radius: u32,
    pub span_gaps: bool,
}

/// Fill color of the term series.
pub const LINE_BACKGROUND: &str = "rgba(75,192,192,0.4)";
/// Stroke color of the term series.
pub const LINE_BORDER: &str = "rgba(75,192,192,1)";

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            line_tension: 0.1,
            border_cap_style: "butt".to_string(),
            border_dash: Vec::new(),
            border_dash_offset: 0.0,
            border_join_style: "miter".to_string(),
            point_border_color: LINE_BORDER.to_string(),
            point_background_color: "#fff".to_string(),
            point_border_width: 1,
            point_hover_radius: 5,
            point_hover_background_color: LINE_BORDER.to_string(),
            point_hover_border_color: "rgba(220,220,220,1)".to_string(),
            point_hover_border_width: 2,
            point_radius: 1,
            point_hit_radius: 10,
            span_gaps: false,
        }
    }
}

impl Dataset {
    /// A styled line series with a single color.
    pub fn line(label: impl Into<String>, data: Vec<Money>) -> Self {
        Self {
            label: Some(label.into()),
            data,
            background_color: ColorSpec::Single(LINE_BACKGROUND.to_string()),
            border_color: Some(ColorSpec::Single(LINE_BORDER.to_string())),
            border_width: None,
            line: Some(LineStyle::default()),
        }
    }

    /// An unlabeled series colored per entry, as drawn by pie charts.
    pub fn segmented(data: Vec<Money>, colors: Vec<String>) -> Self {
        Self {
            label: None,
            data,
            background_color: ColorSpec::PerEntry(colors),
            border_color: None,
            border_width: None,
            line: None,
        }
    }

    /// A labeled series colored and outlined per entry.
    pub fn colored(label: impl Into<String>, data: Vec<Money>, colors: Vec<String>) -> Self {
        Self {
            label: Some(label.into()),
            data,
            background_color: ColorSpec::PerEntry(colors.clone()),
            border_color: Some(ColorSpec::PerEntry(colors)),
            border_width: Some(1),
            line: None,
        }
    }
}

/// Maps an entry index onto a color, cycling when entries outnumber colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Creates a palette; an empty list falls back to the default colors.
    pub fn new(colors: Vec<String>) -> Self {
        if colors.is_empty() {
            Self::default()
        } else {
            Self { colors }
        }
    }

    /// Palette configured for charts.
    pub fn from_config(config: &ChartConfig) -> Self {
        Self::new(config.palette.clone())
    }

    /// Color of the entry at `index`.
    pub fn color(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }

    /// Colors for the first `count` entries.
    pub fn take(&self, count: usize) -> Vec<String> {
        (0..count).map(|i| self.color(i).to_string()).collect()
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no colors; never true once constructed.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

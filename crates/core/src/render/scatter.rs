//! # Scatter Renderer
//!
//! Partitions clustered points into one series per cluster index, projected
//! onto two chosen feature axes. Mounting the resulting [`ScatterChart`]
//! fully replaces the previous chart; nothing here patches in place.

use crate::models::ClusterPoint;

/// Fixed series palette; a series' color is a pure function of its cluster
/// index modulo the palette size, so re-renders are visually stable.
pub const PALETTE: [&str; 10] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#00FFFF", "#FFA07A",
    "#7FFF00", "#DA70D6",
];

/// Alpha byte appended to the border color for the fill (8-digit hex).
const FILL_ALPHA: &str = "80";

/// The two feature columns projected onto the chart axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisPair {
    pub x: String,
    pub y: String,
}

impl AxisPair {
    /// The dashboard's historical default: scaled temperature vs humidity.
    pub fn weather_default() -> Self {
        Self {
            x: "Temperature (C)".to_string(),
            y: "Humidity".to_string(),
        }
    }

    /// The first two names of the service's feature list, when it has two.
    pub fn from_features(features: &[String]) -> Option<Self> {
        match features {
            [x, y, ..] => Some(Self {
                x: x.clone(),
                y: y.clone(),
            }),
            _ => None,
        }
    }
}

/// One cluster's points, with its deterministic colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub label: String,
    pub border_color: String,
    pub fill_color: String,
    pub points: Vec<(f64, f64)>,
}

/// A complete replacement chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub series: Vec<ScatterSeries>,
}

/// Border color for a cluster index.
pub fn series_color(index: u32) -> &'static str {
    PALETTE[index as usize % PALETTE.len()]
}

/// Builds one series per cluster index in `[0, k)`.
///
/// Points whose index falls outside that range, or which lack either axis
/// feature, are dropped: the service's idea of k and the UI's can disagree
/// mid-flight and a mismatch must not break rendering.
pub fn build_chart(points: &[ClusterPoint], k: u32, axes: &AxisPair) -> ScatterChart {
    let series = (0..k)
        .map(|i| {
            let color = series_color(i);
            ScatterSeries {
                label: format!("Cluster {i}"),
                border_color: color.to_string(),
                fill_color: format!("{color}{FILL_ALPHA}"),
                points: points
                    .iter()
                    .filter(|p| p.cluster == i64::from(i))
                    .filter_map(|p| Some((*p.features.get(&axes.x)?, *p.features.get(&axes.y)?)))
                    .collect(),
            }
        })
        .collect();

    ScatterChart {
        title: "K-Means Clusters Visualization".to_string(),
        x_title: format!("Scaled {}", axes.x),
        y_title: format!("Scaled {}", axes.y),
        series,
    }
}

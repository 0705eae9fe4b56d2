//! # Data Model
//!
//! Typed records exchanged with the clustering service. The feature schema
//! is open: whatever numeric columns the service clustered on arrive as a
//! flattened map next to the `Cluster` assignment.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One input record tagged with its assigned cluster index.
///
/// `cluster` stays `i64` so an index the service should not have produced
/// (negative, or past the requested k) remains representable and can be
/// dropped at render time instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterPoint {
    #[serde(rename = "Cluster")]
    pub cluster: i64,
    /// Feature name -> scaled value.
    #[serde(flatten)]
    pub features: BTreeMap<String, f64>,
}

/// Per-cluster mean feature vector returned by the clustering service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    #[serde(rename = "Cluster")]
    pub cluster: i64,
    /// Feature name -> cluster-mean value.
    #[serde(flatten)]
    pub features: BTreeMap<String, f64>,
}

/// A successful clustering run, after the wire envelope has been unwrapped.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterOutcome {
    /// Human-readable summary of the run; the sole input to narration.
    pub analysis_text: String,
    /// Every clustered record, tagged with its assignment.
    pub plot_data: Vec<ClusterPoint>,
    /// One record per cluster; order is service-determined.
    pub centroids: Vec<Centroid>,
    /// Ordered feature names as clustered. The first two are the default
    /// scatter axes when none are configured.
    pub features: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_deserializes_open_schema() {
        let point: ClusterPoint = serde_json::from_str(
            r#"{"Temperature (C)": 1.5, "Humidity": -0.2, "Wind Speed (km/h)": 0.7, "Cluster": 2}"#,
        )
        .unwrap();

        assert_eq!(point.cluster, 2);
        assert_eq!(point.features.len(), 3);
        assert_eq!(point.features["Humidity"], -0.2);
        assert!(!point.features.contains_key("Cluster"));
    }

    #[test]
    fn test_centroid_keeps_cluster_out_of_features() {
        let centroid: Centroid =
            serde_json::from_str(r#"{"Cluster": 0, "Temperature (C)": 21.4}"#).unwrap();

        assert_eq!(centroid.cluster, 0);
        assert_eq!(
            centroid.features.keys().collect::<Vec<_>>(),
            vec!["Temperature (C)"]
        );
    }
}

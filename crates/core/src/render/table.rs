//! # Centroid Table
//!
//! Projects centroid records into a header/body table model. Columns come
//! from the first record; every later record must agree on the key set or
//! the table is rejected as a whole.

use crate::error::SchemaError;
use crate::models::Centroid;

/// One table row: the emphasized cluster id plus one formatted value per
/// header column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cluster: i64,
    pub values: Vec<String>,
}

/// Full replacement contents for the centroid table region. Both fields are
/// empty when there are no centroids: an empty table has no header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CentroidTable {
    /// Feature columns, `"Avg. "`-prefixed. Excludes the cluster id.
    pub headers: Vec<String>,
    /// Rows in service-determined order.
    pub rows: Vec<TableRow>,
}

/// Builds the table model, formatting every value to three decimals.
pub fn build_table(centroids: &[Centroid]) -> Result<CentroidTable, SchemaError> {
    let Some(first) = centroids.first() else {
        return Ok(CentroidTable::default());
    };

    let columns: Vec<String> = first.features.keys().cloned().collect();
    let mut rows = Vec::with_capacity(centroids.len());
    for centroid in centroids {
        let found: Vec<String> = centroid.features.keys().cloned().collect();
        if found != columns {
            return Err(SchemaError {
                cluster: centroid.cluster,
                expected: columns,
                found,
            });
        }
        rows.push(TableRow {
            cluster: centroid.cluster,
            values: columns
                .iter()
                .map(|column| format!("{:.3}", centroid.features[column]))
                .collect(),
        });
    }

    Ok(CentroidTable {
        headers: columns.iter().map(|c| format!("Avg. {c}")).collect(),
        rows,
    })
}

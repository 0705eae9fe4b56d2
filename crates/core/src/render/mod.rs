//! # Renderers
//!
//! Pure projections from service records to view models. Nothing in here
//! touches a UI toolkit; surfaces decide how a [`ScatterChart`] or a
//! [`CentroidTable`] is actually drawn.

pub mod scatter;
pub mod table;

pub use scatter::{build_chart, series_color, AxisPair, ScatterChart, ScatterSeries};
pub use table::{build_table, CentroidTable, TableRow};

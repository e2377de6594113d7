//! Presentation: egui panels, tables and the trend chart.
//!
//! Everything here reads from and writes to [`crate::state::AppState`];
//! no aggregation happens in this module.

pub mod panels;
pub mod plot;
pub mod table;

//! Export module - printable inventory reports.

mod export_model;
mod inventory_report;

pub use export_model::{ExportDocument, ExportOptions};
pub use inventory_report::build_inventory_report;

//! Stock valuation: derived per-record value and inventory totals.

mod valuation_calculator;

pub use valuation_calculator::{calculate_grand_total, calculate_stock_value, preview_stock_value};

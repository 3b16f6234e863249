pub mod natural_order;
pub mod time_utils;

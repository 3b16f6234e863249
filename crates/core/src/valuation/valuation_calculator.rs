use std::str::FromStr;

use rust_decimal::Decimal;

use crate::errors::{Error, Result};
use crate::stocks::StockRecord;

/// Value of a stock line: `purchase_price * quantity`.
///
/// No rounding is applied beyond the native decimal precision. Fails only if
/// the product does not fit in a `Decimal`.
pub fn calculate_stock_value(purchase_price: Decimal, quantity: u32) -> Result<Decimal> {
    purchase_price
        .checked_mul(Decimal::from(quantity))
        .ok_or_else(|| {
            Error::Calculation(format!(
                "stock value of {} x {} overflows",
                purchase_price, quantity
            ))
        })
}

/// Sums the stored `stock_value` of every record.
///
/// Stored values are summed as-is, not recomputed from price and quantity.
/// An empty collection totals zero.
pub fn calculate_grand_total<'a, I>(records: I) -> Result<Decimal>
where
    I: IntoIterator<Item = &'a StockRecord>,
{
    records
        .into_iter()
        .try_fold(Decimal::ZERO, |total, record| {
            total.checked_add(record.stock_value)
        })
        .ok_or_else(|| Error::Calculation("grand total overflows".to_string()))
}

/// Value shown while the add-stock form is still being filled in.
///
/// Unparseable or negative inputs count as zero, so a half-typed form always
/// has a preview.
pub fn preview_stock_value(purchase_price: &str, quantity: &str) -> Decimal {
    let price = Decimal::from_str(purchase_price.trim())
        .ok()
        .filter(|p| !p.is_sign_negative())
        .unwrap_or(Decimal::ZERO);
    let quantity = quantity.trim().parse::<u32>().unwrap_or(0);
    calculate_stock_value(price, quantity).unwrap_or(Decimal::ZERO)
}

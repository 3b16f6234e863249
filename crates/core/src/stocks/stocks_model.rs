//! Stock record domain models.

use std::str::FromStr;

use chrono::{DateTime, SubsecRound, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::LOW_STOCK_THRESHOLD;
use crate::errors::{Error, Result, ValidationError};
use crate::valuation::calculate_stock_value;

/// Domain model representing one stock line owned by an account.
///
/// Records are immutable once created. `stock_value` is derived from
/// `purchase_price * quantity` at creation time and stored; nothing
/// recomputes it later, so any future edit path must re-derive it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    pub id: String,
    #[serde(alias = "userId")]
    pub owner_id: String,
    pub item_name: String,
    pub item_code: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub purchase_price: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub selling_price: Decimal,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub stock_value: Decimal,
    /// Creation instant at millisecond precision, persisted as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl StockRecord {
    /// Parses an add-stock form into a new record owned by `owner_id`.
    ///
    /// Assigns a fresh id and the current timestamp. No record is produced
    /// unless every field is present and valid.
    pub fn from_form(owner_id: &str, form: &NewStockRecord) -> Result<Self> {
        let item_name = required(&form.item_name, "itemName")?;
        let item_code = required(&form.item_code, "itemCode")?;
        let purchase_price = parse_price(&form.purchase_price, "purchasePrice")?;
        let selling_price = parse_price(&form.selling_price, "sellingPrice")?;
        let quantity = parse_quantity(&form.quantity)?;
        let stock_value = calculate_stock_value(purchase_price, quantity)?;

        Ok(Self {
            id: Uuid::now_v7().to_string(),
            owner_id: owner_id.to_string(),
            item_name: item_name.to_string(),
            item_code: item_code.to_string(),
            purchase_price,
            selling_price,
            quantity,
            stock_value,
            created_at: Utc::now().trunc_subsecs(3),
        })
    }

    /// True when fewer than `LOW_STOCK_THRESHOLD` units are held.
    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }
}

/// Raw add-stock form input, one string per field as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStockRecord {
    pub item_name: String,
    pub item_code: String,
    pub purchase_price: String,
    pub selling_price: String,
    pub quantity: String,
}

impl NewStockRecord {
    pub fn new(
        item_name: impl Into<String>,
        item_code: impl Into<String>,
        purchase_price: impl ToString,
        selling_price: impl ToString,
        quantity: impl ToString,
    ) -> Self {
        Self {
            item_name: item_name.into(),
            item_code: item_code.into(),
            purchase_price: purchase_price.to_string(),
            selling_price: selling_price.to_string(),
            quantity: quantity.to_string(),
        }
    }
}

/// An owner's records in display order together with their valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryListing {
    pub records: Vec<StockRecord>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub grand_total: Decimal,
}

impl InventoryListing {
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Export is only offered for a non-empty inventory.
    pub fn is_exportable(&self) -> bool {
        !self.is_empty()
    }

    pub fn low_stock_records(&self) -> impl Iterator<Item = &StockRecord> {
        self.records.iter().filter(|r| r.is_low_stock())
    }
}

fn required<'a>(value: &'a str, field: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            field.to_string(),
        )));
    }
    Ok(trimmed)
}

fn parse_price(value: &str, field: &str) -> Result<Decimal> {
    let price = Decimal::from_str(required(value, field)?).map_err(ValidationError::from)?;
    if price.is_sign_negative() && !price.is_zero() {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "{} must not be negative",
            field
        ))));
    }
    Ok(price)
}

fn parse_quantity(value: &str) -> Result<u32> {
    let text = required(value, "quantity")?;
    if text.starts_with('-') {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "quantity must not be negative".to_string(),
        )));
    }
    Ok(text.parse::<u32>().map_err(ValidationError::from)?)
}

use csv::WriterBuilder;
use log::{debug, warn};
use rust_decimal::Decimal;

use super::export_model::{ExportDocument, ExportOptions};
use crate::accounts::Account;
use crate::constants::EXPORT_FILE_PREFIX;
use crate::errors::{Error, Result};
use crate::stocks::InventoryListing;
use crate::utils::time_utils::local_today;

/// Renders an owner's listing as a CSV inventory report.
///
/// Rows follow the listing order. Returns `Ok(None)` for an empty listing:
/// export is disabled rather than producing an empty report.
pub fn build_inventory_report(
    account: &Account,
    listing: &InventoryListing,
    options: &ExportOptions,
) -> Result<Option<ExportDocument>> {
    if !listing.is_exportable() {
        warn!(
            "Export requested for '{}' with an empty inventory, skipping",
            account.username
        );
        return Ok(None);
    }

    let currency = options.currency_label.as_str();
    let generated_on = options.generated_on.unwrap_or_else(local_today);

    let mut writer = WriterBuilder::new().flexible(true).from_writer(Vec::new());

    writer.write_record([format!("{} - Inventory Report", options.store_name)])?;
    writer.write_record([format!("Generated for: {}", account.username)])?;
    writer.write_record([format!("Date: {}", generated_on.format("%Y-%m-%d"))])?;
    writer.write_record([
        "Item Name".to_string(),
        "Item Code".to_string(),
        format!("Purchase Price ({})", currency),
        format!("Selling Price ({})", currency),
        "Quantity".to_string(),
        format!("Stock Value ({})", currency),
    ])?;

    for record in &listing.records {
        writer.write_record([
            record.item_name.clone(),
            record.item_code.clone(),
            money(currency, record.purchase_price),
            money(currency, record.selling_price),
            record.quantity.to_string(),
            money(currency, record.stock_value),
        ])?;
    }

    writer.write_record([
        "Grand Total Inventory Value".to_string(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        money(currency, listing.grand_total),
    ])?;

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Export(e.to_string()))?;
    let content = String::from_utf8(bytes).map_err(|e| Error::Export(e.to_string()))?;

    debug!(
        "Built inventory report for '{}' with {} rows",
        account.username,
        listing.record_count()
    );

    Ok(Some(ExportDocument {
        file_name: report_file_name(&account.username),
        content,
    }))
}

fn money(currency: &str, amount: Decimal) -> String {
    format!("{} {}", currency, amount.normalize())
}

// Usernames are free text; keep the file name portable.
fn report_file_name(username: &str) -> String {
    let safe: String = username
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}{}.csv", EXPORT_FILE_PREFIX, safe)
}

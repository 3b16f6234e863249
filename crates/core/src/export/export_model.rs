use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CURRENCY_LABEL, DEFAULT_STORE_NAME};
use crate::errors::{Error, Result};

/// Options controlling the inventory report header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    pub store_name: String,
    pub currency_label: String,
    /// Date printed on the report; `None` means today (local time).
    pub generated_on: Option<NaiveDate>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            store_name: DEFAULT_STORE_NAME.to_string(),
            currency_label: DEFAULT_CURRENCY_LABEL.to_string(),
            generated_on: None,
        }
    }
}

/// A generated report, ready to be saved or offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub file_name: String,
    pub content: String,
}

impl ExportDocument {
    /// Writes the document into `dir` under its file name.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        let export_err =
            |e: std::io::Error| Error::Export(format!("{}: {}", dir.display(), e));
        fs::create_dir_all(dir).map_err(export_err)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, self.content.as_bytes()).map_err(export_err)?;
        debug!("Wrote inventory report to {}", path.display());
        Ok(path)
    }
}

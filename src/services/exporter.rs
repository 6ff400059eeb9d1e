// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::error::Result;
use crate::models::record::{OutputRecord, CSV_HEADER};
use chrono::{DateTime, Local};
use csv::{QuoteStyle, WriterBuilder};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Timestamp embedded in export file names
const FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Writes a result set to a timestamped CSV file
#[derive(Debug, Clone)]
pub struct CsvExporter {
    output_dir: PathBuf,
    file_prefix: String,
}

impl CsvExporter {
    pub fn new(output_dir: impl Into<PathBuf>, file_prefix: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            file_prefix: file_prefix.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `<prefix>_<YYYY-MM-DD_HH-MM-SS>.csv`
    pub fn file_name(&self, at: &DateTime<Local>) -> String {
        format!("{}_{}.csv", self.file_prefix, at.format(FILE_TIMESTAMP_FORMAT))
    }

    /// Export stamped with the current local time
    pub fn export(&self, records: &[OutputRecord]) -> Result<PathBuf> {
        self.export_at(records, &Local::now())
    }

    /// Export stamped with `at`. An existing file of the same name is overwritten.
    pub fn export_at(&self, records: &[OutputRecord], at: &DateTime<Local>) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let path = self.output_dir.join(self.file_name(at));
        let file = File::create(&path)?;
        write_records(file, records)?;

        info!(
            path = %path.display(),
            records = records.len(),
            "Exported catalog to CSV"
        );

        Ok(path)
    }
}

/// Header row followed by one row per record. Fields are quoted unless numeric.
pub fn write_records<W: Write>(writer: W, records: &[OutputRecord]) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .from_writer(writer);

    wtr.write_record(CSV_HEADER)?;
    for record in records {
        wtr.write_record(record.to_csv_record())?;
    }
    wtr.flush()?;

    Ok(())
}

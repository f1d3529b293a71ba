use crate::domain::model::{ShipmentPair, ShipmentRecord};
use crate::domain::options::OutputFormat;
use crate::utils::error::{EtlError, Result};
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

const RECORD_HEADER: [&str; 3] = ["origin", "destination", "quantity"];
const PAIR_HEADER: [&str; 4] = ["country_a", "country_b", "quantity_a_to_b", "quantity_b_to_a"];

/// A rendered output file, not yet written anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub name: String,
    pub contents: Vec<u8>,
}

pub fn render_records(records: &[ShipmentRecord], format: OutputFormat) -> Result<String> {
    render(records, &RECORD_HEADER, format)
}

pub fn render_pairs(pairs: &[ShipmentPair], format: OutputFormat) -> Result<String> {
    render(pairs, &PAIR_HEADER, format)
}

fn render<T: Serialize + Display>(rows: &[T], header: &[&str], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(rows.iter().map(|row| format!("{}\n", row)).collect()),
        OutputFormat::Csv => render_delimited(rows, header, b','),
        OutputFormat::Tsv => render_delimited(rows, header, b'\t'),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
    }
}

fn render_delimited<T: Serialize>(rows: &[T], header: &[&str], delimiter: u8) -> Result<String> {
    // 表頭手動寫入，空資料時仍輸出表頭
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))?;

    String::from_utf8(bytes).map_err(|e| EtlError::ProcessingError {
        message: format!("rendered output is not UTF-8: {}", e),
    })
}

/// Packs rendered files into a single zip archive.
pub fn bundle_zip(files: &[OutputFile]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

    for file in files {
        zip.start_file::<_, ()>(file.name.as_str(), FileOptions::default())?;
        zip.write_all(&file.contents)?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

//! Load and validate a market lender catalogue from CSV
//!
//! The source must have a header of exactly three columns, two of which are
//! named `Rate` and `Available`, each exactly once. The third column is the
//! lender name. All rows are read into memory before the underlying reader
//! is dropped, so no caller ever holds a live handle on the source.

use super::{Catalogue, LenderOffer};
use crate::error::{QuoteError, Result, SchemaViolation};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

const EXPECTED_COLUMNS: usize = 3;
const RATE_COLUMN: &str = "Rate";
const AVAILABLE_COLUMN: &str = "Available";

/// Positions of the named columns within the header
struct ColumnLayout {
    lender: usize,
    rate: usize,
    available: usize,
}

/// Load a catalogue from a CSV file on disk
pub fn load_catalogue<P: AsRef<Path>>(path: P) -> Result<Catalogue> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(QuoteError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|_| QuoteError::SourceNotFound {
        path: path.to_path_buf(),
    })?;
    debug!("Opened lender catalogue {}", path.display());

    let catalogue = load_catalogue_from_reader(BufReader::new(file))?;
    info!(
        "Loaded {} lender offers from {}",
        catalogue.len(),
        path.display()
    );
    Ok(catalogue)
}

/// Load a catalogue from any reader.
///
/// The reader is consumed and dropped before this returns, on success and
/// on every error path.
pub fn load_catalogue_from_reader<R: Read>(reader: R) -> Result<Catalogue> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let layout = resolve_layout(&headers)?;
    debug!("Catalogue columns: {:?}", headers.iter().collect::<Vec<_>>());

    let mut offers = Vec::new();
    for (idx, record) in csv_reader.records().enumerate() {
        let record = record?;
        let row = record
            .position()
            .map(|p| p.line())
            .unwrap_or(idx as u64 + 2);
        offers.push(parse_offer(&record, &layout, row)?);
    }
    debug!("Read {} data rows", offers.len());

    Catalogue::new(offers)
}

fn resolve_layout(headers: &StringRecord) -> Result<ColumnLayout> {
    // csv reports a single empty field for an empty header line
    let found = if headers.len() == 1 && headers[0].is_empty() {
        0
    } else {
        headers.len()
    };
    if found != EXPECTED_COLUMNS {
        return Err(SchemaViolation::ColumnCount {
            expected: EXPECTED_COLUMNS,
            found,
        }
        .into());
    }

    let position = |name: &'static str| {
        let mut found = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| *h == name)
            .map(|(idx, _)| idx);
        match (found.next(), found.next()) {
            (Some(idx), None) => Ok(idx),
            (None, _) => Err(SchemaViolation::MissingColumn(name)),
            (Some(_), Some(_)) => Err(SchemaViolation::DuplicateColumn(name)),
        }
    };
    let rate = position(RATE_COLUMN)?;
    let available = position(AVAILABLE_COLUMN)?;
    let lender = (0..EXPECTED_COLUMNS)
        .find(|i| *i != rate && *i != available)
        .ok_or(SchemaViolation::MissingColumn(AVAILABLE_COLUMN))?;

    Ok(ColumnLayout {
        lender,
        rate,
        available,
    })
}

fn parse_offer(record: &StringRecord, layout: &ColumnLayout, row: u64) -> Result<LenderOffer> {
    let lender = record.get(layout.lender).unwrap_or_default();
    let rate = parse_decimal(record, layout.rate, RATE_COLUMN, row)?;
    let available = parse_decimal(record, layout.available, AVAILABLE_COLUMN, row)?;

    if rate < Decimal::ZERO {
        return Err(invalid_field(row, RATE_COLUMN, &rate.to_string()));
    }
    if available < Decimal::ZERO {
        return Err(invalid_field(row, AVAILABLE_COLUMN, &available.to_string()));
    }

    Ok(LenderOffer::new(lender, rate, available))
}

fn parse_decimal(
    record: &StringRecord,
    idx: usize,
    column: &'static str,
    row: u64,
) -> Result<Decimal> {
    let raw = record.get(idx).unwrap_or_default();
    Decimal::from_str(raw).map_err(|_| invalid_field(row, column, raw))
}

fn invalid_field(row: u64, column: &'static str, value: &str) -> QuoteError {
    QuoteError::InvalidField {
        row,
        column,
        value: value.to_string(),
    }
}

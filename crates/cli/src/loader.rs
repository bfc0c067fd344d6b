use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
    str::FromStr,
};

use optibid_core::{TableError, WinRateRecord, WinRateTable};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info};

const BID_PRICE_COLUMN: &str = "bid_price";
const WIN_RATE_COLUMN: &str = "win_rate";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open win rate data at {path}: {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to read win rate data at {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    #[error("win rate data at {path} has no `{column}` column")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("invalid {column} `{value}` in data row {row} of {path}")]
    InvalidDecimal {
        path: PathBuf,
        row: u64,
        column: &'static str,
        value: String,
    },

    #[error("invalid win rate table at {path}: {source}")]
    Table { path: PathBuf, source: TableError },
}

pub fn load_table(path: impl AsRef<Path>) -> Result<WinRateTable, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let table = read_table(file, path)?;
    info!(path = %path.display(), records = table.len(), "loaded win rate table");
    Ok(table)
}

/// Reads `bid_price`/`win_rate` columns from CSV; other columns are ignored.
///
/// `path` is only used to label errors.
pub fn read_table<R: io::Read>(reader: R, path: &Path) -> Result<WinRateTable, LoadError> {
    let csv_error = |source: csv::Error| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?.clone();
    let bid_price_idx = column_index(&headers, BID_PRICE_COLUMN, path)?;
    let win_rate_idx = column_index(&headers, WIN_RATE_COLUMN, path)?;
    debug!(?headers, bid_price_idx, win_rate_idx, "resolved win rate columns");

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(csv_error)?;
        let data_row = records.len() as u64 + 1;

        let bid_price = parse_field(&row, bid_price_idx, BID_PRICE_COLUMN, data_row, path)?;
        let win_rate = parse_field(&row, win_rate_idx, WIN_RATE_COLUMN, data_row, path)?;
        records.push(WinRateRecord::new(bid_price, win_rate));
    }

    WinRateTable::new(records).map_err(|source| LoadError::Table {
        path: path.to_path_buf(),
        source,
    })
}

fn column_index(
    headers: &csv::StringRecord,
    column: &'static str,
    path: &Path,
) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| LoadError::MissingColumn {
            path: path.to_path_buf(),
            column,
        })
}

fn parse_field(
    row: &csv::StringRecord,
    idx: usize,
    column: &'static str,
    data_row: u64,
    path: &Path,
) -> Result<Decimal, LoadError> {
    let value = row.get(idx).unwrap_or_default();
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|_| LoadError::InvalidDecimal {
            path: path.to_path_buf(),
            row: data_row,
            column,
            value: value.to_string(),
        })
}

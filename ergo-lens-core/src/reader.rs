use std::fs::File;
use std::io;
use std::path::Path;

use crate::record::{RawRecord, Record};
use crate::Result;
use ergo_lens_common::ErgoLensError;

/// Columns the dataset must carry. The header row is required; any extra
/// columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "RER",
    "Age",
    "Sex",
    "Weight",
    "Height",
    "Temperature",
    "Speed",
    "Resting",
];

/// Reads and coerces the whole dataset from any reader.
///
/// A structurally broken file (bad header, ragged rows) is a fatal load
/// error. A row whose fields merely fail numeric parse is kept, with `NaN`
/// in the failed fields.
pub fn load_records<R: io::Read>(rdr: R) -> Result<Vec<Record>> {
    let mut rdr = csv::Reader::from_reader(rdr);
    let headers = rdr.headers()?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(ErgoLensError::MissingColumn(col.to_string()));
        }
    }
    let mut records = Vec::new();
    for res in rdr.deserialize() {
        let raw: RawRecord = res?;
        records.push(Record::from_raw(&raw));
    }
    Ok(records)
}

pub fn load_csv(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path)?;
    load_records(file)
}

//! Reading and writing record data files.
//!
//! The file format is chosen by extension: `.json` files hold an array of
//! records with camelCase keys, and `.csv` files have a header row with the
//! same field names.

use std::{
    collections::HashSet,
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    Error,
    record::{Record, RecordId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DataFormat {
    Json,
    Csv,
}

impl DataFormat {
    fn from_path(path: &Path) -> Result<Self, Error> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(|extension| extension.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("csv") => Ok(Self::Csv),
            _ => Err(Error::UnsupportedDataFormat(path.display().to_string())),
        }
    }
}

/// Load and validate the records in the data file at `path`.
///
/// A record without an `id` (or with an `id` of zero) gets its 1-based
/// position in the file as its ID.
///
/// # Errors
/// Returns an:
/// - [Error::UnsupportedDataFormat] if `path` does not end in `.json` or `.csv`,
/// - [Error::DataFileError] if the file cannot be read or parsed,
/// - [Error::InvalidRecord] if a record has a negative price, an empty category
///   or the same ID as an earlier record.
pub fn load_records(path: &Path) -> Result<Vec<Record>, Error> {
    let mut records: Vec<Record> = match DataFormat::from_path(path)? {
        DataFormat::Json => serde_json::from_reader(BufReader::new(File::open(path)?))?,
        DataFormat::Csv => csv::Reader::from_path(path)?
            .deserialize()
            .collect::<Result<_, csv::Error>>()?,
    };

    assign_missing_ids(&mut records);
    validate_records(&records)?;

    tracing::debug!("Loaded {} records from {}", records.len(), path.display());

    Ok(records)
}

/// Write `records` to a data file at `path`, replacing any existing file.
///
/// # Errors
/// Returns an [Error::UnsupportedDataFormat] if `path` does not end in `.json`
/// or `.csv`, or an [Error::DataFileError] if the file cannot be written.
pub fn write_records(records: &[Record], path: &Path) -> Result<(), Error> {
    match DataFormat::from_path(path)? {
        DataFormat::Json => {
            let mut writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut writer, records)?;
            writer.flush()?;
        }
        DataFormat::Csv => {
            let mut writer = csv::Writer::from_path(path)?;
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
    }

    Ok(())
}

fn assign_missing_ids(records: &mut [Record]) {
    for (index, record) in records.iter_mut().enumerate() {
        if record.id == 0 {
            record.id = (index + 1) as RecordId;
        }
    }
}

fn validate_records(records: &[Record]) -> Result<(), Error> {
    let mut seen_ids = HashSet::with_capacity(records.len());

    records
        .iter()
        .enumerate()
        .try_for_each(|(index, record)| {
            record
                .validate()
                .and_then(|()| {
                    if seen_ids.insert(record.id) {
                        Ok(())
                    } else {
                        Err(format!("id {} is used by an earlier record", record.id))
                    }
                })
                .map_err(|reason| Error::InvalidRecord { index, reason })
        })
}

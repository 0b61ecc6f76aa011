use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use phish_model::{CellValue, ColumnName, Table};

use crate::IngestError;

/// Read a delimited file into a [`Table`].
///
/// Headers are trimmed (including a UTF-8 BOM); cell text is kept verbatim
/// because whitespace normalization is a transformation-stage concern. An
/// empty cell becomes [`CellValue::Missing`]. Short records are padded with
/// missing cells, long records truncated to the header width.
pub fn read_table(path: &Path) -> Result<Table, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let headers = reader
        .headers()
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    let columns: Vec<ColumnName> = headers
        .iter()
        .map(ColumnName::new)
        .collect::<Result<_, _>>()
        .map_err(|source| IngestError::Table {
            path: path.to_path_buf(),
            source,
        })?;

    let width = columns.len();
    let mut table = Table::new(columns);
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let mut row = Vec::with_capacity(width);
        for index in 0..width {
            let cell = match record.get(index) {
                Some(value) if !value.is_empty() => CellValue::text(value),
                _ => CellValue::Missing,
            };
            row.push(cell);
        }
        table.push_row(row).map_err(|source| IngestError::Table {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(table)
}

/// Write a [`Table`] to a delimited file, overwriting any existing file.
///
/// Missing cells are written as empty fields, so a write/read round trip
/// preserves missingness.
pub fn write_table(path: &Path, table: &Table) -> Result<(), IngestError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|source| IngestError::CsvWrite {
            path: path.to_path_buf(),
            source,
        })?;

    let header: Vec<&str> = table.columns().iter().map(ColumnName::as_str).collect();
    let write_err = |source| IngestError::CsvWrite {
        path: path.to_path_buf(),
        source,
    };
    writer.write_record(&header).map_err(write_err)?;
    for row in table.rows() {
        let record: Vec<&str> = row
            .iter()
            .map(|cell| cell.as_text().unwrap_or(""))
            .collect();
        writer.write_record(&record).map_err(write_err)?;
    }
    writer
        .flush()
        .map_err(|source| write_err(csv::Error::from(source)))?;
    Ok(())
}

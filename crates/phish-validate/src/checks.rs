use phish_model::{ColumnName, DatasetSchema, Table};

/// Check a raw batch file name against the schema's naming rule:
/// `<prefix>_<datestamp>_<timestamp>.csv` with all-digit stamps of the
/// configured lengths.
pub fn filename_matches_schema(file_name: &str, schema: &DatasetSchema) -> bool {
    let Some(stem) = file_name.strip_suffix(".csv") else {
        return false;
    };
    let Some(stamps) = stem.strip_prefix(&format!("{}_", schema.file_prefix)) else {
        return false;
    };
    let Some((date_stamp, time_stamp)) = stamps.split_once('_') else {
        return false;
    };
    is_digit_stamp(date_stamp, schema.date_stamp_length)
        && is_digit_stamp(time_stamp, schema.time_stamp_length)
}

fn is_digit_stamp(value: &str, length: usize) -> bool {
    value.len() == length && value.chars().all(|ch| ch.is_ascii_digit())
}

/// Check that the table carries exactly the schema's column count.
pub fn column_count_matches(table: &Table, schema: &DatasetSchema) -> bool {
    table.width() == schema.number_of_columns
}

/// Names of columns whose every cell is missing.
///
/// A file with any such column is rejected: a fully absent feature cannot
/// be imputed from itself downstream.
pub fn fully_missing_columns(table: &Table) -> Vec<ColumnName> {
    table
        .columns()
        .iter()
        .enumerate()
        .filter(|(index, _)| {
            table.height() > 0 && table.column_values(*index).all(|cell| cell.is_missing())
        })
        .map(|(_, column)| column.clone())
        .collect()
}

use std::path::Path;

use tracing::{debug, warn};

use crate::{
    ParsingStrictnessOptions, PostalParseOptions,
    domain::{
        lookup::{PostalHashMapImpl, PostalLookup},
        postal_record::PostalRecord,
    },
    error::{PostinumeroError, Result},
};

#[derive(Debug, PartialEq)]
pub enum CsvParserResult {
    Parsed(PostalRecord),
    Failed,
    /// The row had no comma, so only a code was found
    MissingOfficeName(PostalRecord),
    /// The code field isn't five digits
    InvalidPostalCode(PostalRecord),
}

impl CsvParserResult {
    /// Checks a split row against the postal code invariants
    pub fn from_record(record: PostalRecord) -> Self {
        if !record.has_valid_code() {
            Self::InvalidPostalCode(record)
        } else if record.office_name.is_none() {
            Self::MissingOfficeName(record)
        } else {
            Self::Parsed(record)
        }
    }
}

pub trait CsvPostalParserTrait {
    /// Parse a single row (without the line terminator) into a record
    fn deserialize_row(&mut self, parse_options: &PostalParseOptions, row: &str)
    -> CsvParserResult;
}

/// Reads the whole postal code file into memory.
///
/// # Errors
///
/// The file is missing or unreadable
pub fn read_postal_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| PostinumeroError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Splits the file contents into raw rows. Surrounding whitespace of the whole file is trimmed and
/// a trailing `\r` is dropped from each row.
pub fn split_rows(contents: &str) -> Vec<&str> {
    let contents = contents.trim();
    if contents.is_empty() {
        return Vec::new();
    }

    contents
        .split('\n')
        .map(|row| row.strip_suffix('\r').unwrap_or(row))
        .collect()
}

/// Builds the lookup table from raw rows, applying the strictness options to malformed rows.
///
/// # Errors
///
/// A malformed row was found and the matching strictness option is `fail`
pub fn index_postal_rows<'a, PostalParser: CsvPostalParserTrait>(
    parser: &mut PostalParser,
    rows: impl IntoIterator<Item = &'a str>,
    parse_options: &PostalParseOptions,
) -> Result<PostalHashMapImpl> {
    let mut table = PostalHashMapImpl::default();
    let mut skipped = 0usize;

    for (idx, row) in rows.into_iter().enumerate() {
        let line = idx + 1;
        if row.is_empty() {
            continue;
        }

        let malformed = || PostinumeroError::MalformedRow {
            line,
            row: row.to_string(),
        };

        let record = match parser.deserialize_row(parse_options, row) {
            CsvParserResult::Parsed(record) => record,
            CsvParserResult::MissingOfficeName(record) => match parse_options.on_missing_office {
                ParsingStrictnessOptions::Fail => return Err(malformed()),
                ParsingStrictnessOptions::Allow => record,
                ParsingStrictnessOptions::Ignore => {
                    warn!(line, row, "skipping row without office name");
                    skipped += 1;
                    continue;
                }
            },
            CsvParserResult::InvalidPostalCode(record) => match parse_options.on_invalid_code {
                ParsingStrictnessOptions::Fail => return Err(malformed()),
                ParsingStrictnessOptions::Allow => record,
                ParsingStrictnessOptions::Ignore => {
                    warn!(line, row, "skipping row with invalid postal code");
                    skipped += 1;
                    continue;
                }
            },
            CsvParserResult::Failed => {
                if parse_options.on_invalid_code.fail() {
                    return Err(malformed());
                }
                warn!(line, row, "skipping unparseable row");
                skipped += 1;
                continue;
            }
        };

        table.insert_record(record);
    }

    debug!(entries = table.len(), skipped, "postal code table built");

    Ok(table)
}

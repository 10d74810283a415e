use std::sync::LazyLock;

use serde::Deserialize;

use crate::{
    PostalParseOptions,
    domain::postal_record::PostalRecord,
    parsers::csv_parser::{CsvParserResult, CsvPostalParserTrait},
};

#[derive(Debug, Deserialize)]
pub struct PostalRecordSerde<'a> {
    code: &'a str,
    #[serde(default)]
    office_name: &'a str,
}

/// Parses rows with the csv crate. Unlike the nom parser this one understands quoted fields.
#[derive(Default)]
pub struct CsvPostalParserSerdeImpl {
    raw_record: csv::StringRecord,
    record: csv::StringRecord,
}

static HEADERS_RECORD: LazyLock<csv::StringRecord> =
    LazyLock::new(|| csv::StringRecord::from(vec!["code", "office_name"]));

impl CsvPostalParserSerdeImpl {
    /// Folds every field after the first back into a single office name field, so a row has at
    /// most two fields
    fn fold_fields(&mut self) {
        self.record.clear();
        let mut fields = self.raw_record.iter();

        if let Some(code) = fields.next() {
            self.record.push_field(code);
        }
        if self.raw_record.len() > 1 {
            self.record
                .push_field(&fields.collect::<Vec<_>>().join(","));
        }
    }
}

impl CsvPostalParserTrait for CsvPostalParserSerdeImpl {
    fn deserialize_row(
        &mut self,
        _parse_options: &PostalParseOptions,
        row: &str,
    ) -> CsvParserResult {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(row.as_bytes());
        if !matches!(rdr.read_record(&mut self.raw_record), Ok(true)) {
            return CsvParserResult::Failed;
        }

        self.fold_fields();

        let Ok(parsed) = self
            .record
            .deserialize::<'_, PostalRecordSerde>(Some(&*HEADERS_RECORD))
        else {
            return CsvParserResult::Failed;
        };

        CsvParserResult::from_record(PostalRecord {
            code: parsed.code.to_string(),
            office_name: (self.record.len() > 1).then(|| parsed.office_name.to_string()),
        })
    }
}

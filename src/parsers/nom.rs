use crate::{
    PostalParseOptions,
    parsers::csv_parser::{CsvParserResult, CsvPostalParserTrait},
};

pub mod record_parser;

pub struct CsvPostalParserNomImpl;

impl CsvPostalParserTrait for CsvPostalParserNomImpl {
    fn deserialize_row(
        &mut self,
        _parse_options: &PostalParseOptions,
        row: &str,
    ) -> CsvParserResult {
        record_parser::parse_postal_record(row)
            .map(|(_, record)| CsvParserResult::from_record(record))
            .unwrap_or(CsvParserResult::Failed)
    }
}

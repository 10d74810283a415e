pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod parsers;
pub mod utils;

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::{debug, warn};

use crate::{
    config::PostinumeroConfig,
    domain::lookup::{PostalHashMapImpl, PostalLookup, Query, QueryAnswer},
    error::Result,
    parsers::{
        csv_parser::{index_postal_rows, read_postal_file, split_rows},
        nom::CsvPostalParserNomImpl,
        serde_parser::CsvPostalParserSerdeImpl,
    },
    utils::{DIAGNOSTIC_ROWS, write_answer, write_diagnostic_table},
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParsingStrictnessOptions {
    /// Stops loading with an error
    Fail,
    /// Keeps the row as it was read
    Allow,
    /// Skips the row
    Ignore,
}

/// The parser implementation that will be used
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParserImplOptions {
    /// Use nom to parse csv rows
    Nom,
    /// Use serde (and csv crate) to parse csv rows, quoted fields are unquoted
    Serde,
}

impl ParsingStrictnessOptions {
    pub fn fail(&self) -> bool {
        matches!(self, Self::Fail)
    }
}

serde_plain::derive_display_from_serialize!(ParsingStrictnessOptions);
serde_plain::derive_display_from_serialize!(ParserImplOptions);
serde_plain::derive_fromstr_from_deserialize!(ParsingStrictnessOptions);
serde_plain::derive_fromstr_from_deserialize!(ParserImplOptions);

/// Look up Finnish post offices by postal code, or postal codes by post office
#[derive(Debug, Default, Parser)]
#[command(version)]
pub struct PostinumeroInput {
    /// A five digit postal code or a post office name
    #[arg(allow_hyphen_values = true)]
    pub query: Option<String>,
    /// Anything after the query is ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostalParseOptions {
    /// What to do with a row that has no office name
    pub on_missing_office: ParsingStrictnessOptions,
    /// What to do with a row whose code isn't five digits
    pub on_invalid_code: ParsingStrictnessOptions,
}

impl Default for PostalParseOptions {
    fn default() -> Self {
        Self {
            on_missing_office: ParsingStrictnessOptions::Allow,
            on_invalid_code: ParsingStrictnessOptions::Allow,
        }
    }
}

/// Builds the table with the configured parser implementation
///
/// # Errors
///
/// A malformed row was rejected by a `fail` strictness option
pub fn build_postal_table<'a>(
    config: &PostinumeroConfig,
    rows: impl IntoIterator<Item = &'a str>,
) -> Result<PostalHashMapImpl> {
    match config.parser {
        ParserImplOptions::Nom => {
            index_postal_rows(&mut CsvPostalParserNomImpl, rows, &config.parse_options)
        }
        ParserImplOptions::Serde => index_postal_rows(
            &mut CsvPostalParserSerdeImpl::default(),
            rows,
            &config.parse_options,
        ),
    }
}

/// Load the postal code file, print the diagnostic tables and answer the query to `out`.
///
/// `args` is the raw argument list as received by the process, it's only printed.
///
/// # Errors
///
/// The file couldn't be read, a row was rejected or the output couldn't be written
pub fn lookup_postal<W: Write>(
    config: &PostinumeroConfig,
    input: &PostinumeroInput,
    args: &[String],
    mut out: W,
) -> Result<QueryAnswer> {
    let contents = read_postal_file(&config.file)?;
    let rows = split_rows(&contents);
    debug!(
        file = %config.file.display(),
        rows = rows.len(),
        parser = %config.parser,
        "loaded postal code file"
    );

    write_diagnostic_table(rows.iter().take(DIAGNOSTIC_ROWS), &mut out)?;
    write_diagnostic_table(args.iter(), &mut out)?;

    let table = build_postal_table(config, rows.iter().copied())?;

    let query = match &input.query {
        Some(query) => Query::classify(query),
        None => {
            warn!("no query given, searching for an empty post office name");
            Query::PostOffice(String::new())
        }
    };
    debug!(kind = %query.kind(), "classified query");

    let answer = table.answer(&query);
    write_answer(&answer, &mut out)?;

    Ok(answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_takes_first_positional() {
        let input = PostinumeroInput::try_parse_from(["postinumero", "00100"]).unwrap();
        assert_eq!(input.query.as_deref(), Some("00100"));
        assert!(input.ignored.is_empty());

        let input = PostinumeroInput::try_parse_from(["postinumero"]).unwrap();
        assert_eq!(input.query, None);
    }

    #[test]
    fn test_input_ignores_trailing_words() {
        let input =
            PostinumeroInput::try_parse_from(["postinumero", "Helsinki", "keskusta", "-x"])
                .unwrap();

        assert_eq!(input.query.as_deref(), Some("Helsinki"));
        assert_eq!(input.ignored, vec!["keskusta", "-x"]);
    }

    #[test]
    fn test_input_accepts_leading_hyphen() {
        let input = PostinumeroInput::try_parse_from(["postinumero", "-Helsinki"]).unwrap();
        assert_eq!(input.query.as_deref(), Some("-Helsinki"));
    }
}

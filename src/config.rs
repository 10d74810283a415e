use std::{path::PathBuf, str::FromStr};

use crate::{
    ParserImplOptions, ParsingStrictnessOptions, PostalParseOptions,
    error::{PostinumeroError, Result},
};

pub const DEFAULT_POSTAL_FILE: &str = "postinumerot.csv";

pub const ENV_FILE: &str = "POSTINUMERO_FILE";
pub const ENV_PARSER: &str = "POSTINUMERO_PARSER";
pub const ENV_ON_MISSING_OFFICE: &str = "POSTINUMERO_ON_MISSING_OFFICE";
pub const ENV_ON_INVALID_CODE: &str = "POSTINUMERO_ON_INVALID_CODE";

/// Runtime configuration. The command line only carries the query, everything else comes from
/// the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct PostinumeroConfig {
    /// Relative path of the postal code csv
    pub file: PathBuf,
    pub parser: ParserImplOptions,
    pub parse_options: PostalParseOptions,
}

impl Default for PostinumeroConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_POSTAL_FILE),
            parser: ParserImplOptions::Nom,
            parse_options: PostalParseOptions::default(),
        }
    }
}

impl PostinumeroConfig {
    /// # Errors
    ///
    /// A variable holds an unknown value
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source, unset keys keep their default.
    ///
    /// # Errors
    ///
    /// A key holds an unknown value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        fn parse<T: FromStr>(key: &str, value: &str) -> Result<T> {
            value
                .trim()
                .parse()
                .map_err(|_| PostinumeroError::config(format!("invalid value for {key}: {value}")))
        }

        let mut config = Self::default();

        if let Some(file) = lookup(ENV_FILE).filter(|file| !file.trim().is_empty()) {
            config.file = PathBuf::from(file);
        }
        if let Some(parser) = lookup(ENV_PARSER) {
            config.parser = parse::<ParserImplOptions>(ENV_PARSER, &parser)?;
        }
        if let Some(on_missing) = lookup(ENV_ON_MISSING_OFFICE) {
            config.parse_options.on_missing_office =
                parse::<ParsingStrictnessOptions>(ENV_ON_MISSING_OFFICE, &on_missing)?;
        }
        if let Some(on_invalid) = lookup(ENV_ON_INVALID_CODE) {
            config.parse_options.on_invalid_code =
                parse::<ParsingStrictnessOptions>(ENV_ON_INVALID_CODE, &on_invalid)?;
        }

        Ok(config)
    }
}

use fake::Dummy;

use crate::domain::postal_code::PostalCode;

/// One `code,name` row of the postal code file.
///
/// The code is kept as a plain string because rows with a malformed code may still be loaded,
/// see [`crate::PostalParseOptions::on_invalid_code`].
#[derive(Debug, Clone, PartialEq, Dummy)]
pub struct PostalRecord {
    #[dummy(expr = "fake::Fake::fake::<PostalCode>(&fake::Faker).into_inner()")]
    pub code: String,
    /// None when the row had no comma
    #[dummy(faker = "fake::faker::address::en::CityName()")]
    pub office_name: Option<String>,
}

impl PostalRecord {
    pub fn new(code: impl Into<String>, office_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            office_name: Some(office_name.into()),
        }
    }

    pub fn has_valid_code(&self) -> bool {
        PostalCode::is_postal_code(&self.code)
    }
}

/// Serializes a record as a row of the postal code file
pub struct PostalRecordSerializeCsv<'a>(pub &'a PostalRecord);

impl std::fmt::Display for PostalRecordSerializeCsv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0.office_name {
            Some(name) => write!(f, "{},{}", self.0.code, name),
            None => write!(f, "{}", self.0.code),
        }
    }
}

use serde::Serialize;
use strum::{EnumDiscriminants, IntoDiscriminant};

use std::collections::HashMap;

use crate::domain::{postal_code::PostalCode, postal_record::PostalRecord};

/// A classified command line query
#[derive(Debug, Clone, PartialEq, EnumDiscriminants)]
#[strum_discriminants(name(QueryKind), derive(Serialize), serde(rename_all = "kebab-case"))]
pub enum Query {
    PostalCode(PostalCode),
    PostOffice(String),
}

serde_plain::derive_display_from_serialize!(QueryKind);

impl Query {
    /// Anything that isn't a postal code is treated as a post office name
    pub fn classify(input: &str) -> Self {
        match PostalCode::new(input) {
            Some(code) => Self::PostalCode(code),
            None => Self::PostOffice(input.to_string()),
        }
    }

    pub fn kind(&self) -> QueryKind {
        self.discriminant()
    }
}

/// The result of running a [`Query`] against a [`PostalLookup`]
#[derive(Debug, Clone, PartialEq)]
pub enum QueryAnswer {
    Office(String),
    /// Sorted ascending
    Codes(Vec<String>),
    NoSuchPostalCode(String),
    NoSuchPostOffice(String),
}

impl std::fmt::Display for QueryAnswer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Office(name) => f.write_str(name),
            Self::Codes(codes) => f.write_str(&codes.join(", ")),
            Self::NoSuchPostalCode(code) => write!(f, "No such postal code: {code}"),
            Self::NoSuchPostOffice(name) => write!(f, "No such Post Office: {name}"),
        }
    }
}

pub trait PostalLookup {
    /// Inserts a record, replacing any previous record with the same code
    fn insert_record(&mut self, record: PostalRecord);
    /// The office name for a code. Absent and empty names are reported as None.
    fn office_for_code(&self, code: &str) -> Option<&str>;
    /// Every code whose office name equals `name` ignoring case, sorted ascending. Absent and empty
    /// names never match.
    fn codes_for_office(&self, name: &str) -> Vec<String>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn answer(&self, query: &Query) -> QueryAnswer {
        match query {
            Query::PostalCode(code) => match self.office_for_code(code.as_str()) {
                Some(office) => QueryAnswer::Office(office.to_string()),
                None => QueryAnswer::NoSuchPostalCode(code.to_string()),
            },
            Query::PostOffice(name) => {
                let codes = self.codes_for_office(name);
                if codes.is_empty() {
                    QueryAnswer::NoSuchPostOffice(name.clone())
                } else {
                    QueryAnswer::Codes(codes)
                }
            }
        }
    }
}

/// Postal code table backed by a hashmap keyed by code
#[derive(Debug, Default)]
pub struct PostalHashMapImpl {
    map: HashMap<String, Option<String>>,
}

impl PostalLookup for PostalHashMapImpl {
    fn insert_record(&mut self, record: PostalRecord) {
        self.map.insert(record.code, record.office_name);
    }

    fn office_for_code(&self, code: &str) -> Option<&str> {
        self.map
            .get(code)
            .and_then(Option::as_deref)
            .filter(|office| !office.is_empty())
    }

    fn codes_for_office(&self, name: &str) -> Vec<String> {
        let name = name.to_lowercase();

        let mut codes: Vec<String> = self
            .map
            .iter()
            .filter_map(|(code, office)| {
                office
                    .as_deref()
                    .filter(|office| !office.is_empty())
                    .is_some_and(|office| office.to_lowercase() == name)
                    .then(|| code.clone())
            })
            .collect();
        codes.sort_unstable();

        codes
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}

impl FromIterator<PostalRecord> for PostalHashMapImpl {
    fn from_iter<T: IntoIterator<Item = PostalRecord>>(iter: T) -> Self {
        let mut table = Self::default();
        for record in iter {
            table.insert_record(record);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    fn make_table(rows: &[(&str, &str)]) -> PostalHashMapImpl {
        rows.iter()
            .map(|(code, name)| PostalRecord::new(*code, *name))
            .collect()
    }

    fn ask(table: &PostalHashMapImpl, input: &str) -> String {
        table.answer(&Query::classify(input)).to_string()
    }

    #[test]
    fn test_classify() {
        assert_eq!(Query::classify("00100").kind(), QueryKind::PostalCode);
        assert_eq!(Query::classify("Helsinki").kind(), QueryKind::PostOffice);
        assert_eq!(Query::classify("123").kind(), QueryKind::PostOffice);
        assert_eq!(Query::classify("12a45").kind(), QueryKind::PostOffice);
        assert_eq!(Query::classify("").kind(), QueryKind::PostOffice);
    }

    #[test]
    fn test_query_kind_display() {
        assert_eq!(QueryKind::PostalCode.to_string(), "postal-code");
        assert_eq!(QueryKind::PostOffice.to_string(), "post-office");
    }

    #[test]
    fn test_code_lookup() {
        let table = make_table(&[("00100", "Helsinki"), ("33100", "Tampere")]);

        assert_eq!(ask(&table, "00100"), "Helsinki");
        assert_eq!(ask(&table, "33100"), "Tampere");
        assert_eq!(ask(&table, "99999"), "No such postal code: 99999");
    }

    #[test]
    fn test_office_lookup_is_case_insensitive_and_sorted() {
        let table = make_table(&[
            ("00101", "Helsinki"),
            ("33100", "Tampere"),
            ("00100", "HELSINKI"),
        ]);

        for query in ["Helsinki", "helsinki", "HELSINKI", "hElSiNkI"] {
            assert_eq!(ask(&table, query), "00100, 00101");
        }
        assert_eq!(
            table.answer(&Query::classify("tampere")),
            QueryAnswer::Codes(vec!["33100".to_string()])
        );
        assert_eq!(
            ask(&table, "Nowhereville"),
            "No such Post Office: Nowhereville"
        );
    }

    #[test]
    fn test_office_lookup_non_ascii() {
        let table = make_table(&[("65100", "VAASA"), ("20100", "TURKU"), ("99800", "IVALO")]);
        let table_fi = make_table(&[("40100", "JYVÄSKYLÄ"), ("40101", "Jyväskylä")]);

        assert_eq!(ask(&table, "turku"), "20100");
        assert_eq!(ask(&table_fi, "jyväskylä"), "40100, 40101");
    }

    #[test]
    fn test_last_duplicate_wins() {
        let table = make_table(&[("00100", "Helsinki"), ("00100", "Helsingfors")]);

        assert_eq!(table.len(), 1);
        assert_eq!(ask(&table, "00100"), "Helsingfors");
        assert_eq!(ask(&table, "Helsinki"), "No such Post Office: Helsinki");
    }

    #[test]
    fn test_missing_office_name() {
        let mut table = PostalHashMapImpl::default();
        table.insert_record(PostalRecord {
            code: "00100".to_string(),
            office_name: None,
        });
        table.insert_record(PostalRecord::new("00200", ""));

        assert_eq!(ask(&table, "00100"), "No such postal code: 00100");
        assert_eq!(ask(&table, "00200"), "No such postal code: 00200");
        assert_eq!(ask(&table, ""), "No such Post Office: ");
        assert!(table.codes_for_office("").is_empty());
    }

    #[test]
    fn test_empty_table() {
        let table = PostalHashMapImpl::default();

        assert!(table.is_empty());
        assert_eq!(ask(&table, "00100"), "No such postal code: 00100");
        assert_eq!(ask(&table, ""), "No such Post Office: ");
    }

    #[test]
    fn test_fuzz_lookup_consistency() {
        let records: Vec<PostalRecord> = (0..200).map(|_| Faker.fake()).collect();
        let table: PostalHashMapImpl = records.iter().cloned().collect();

        // the last record for each code is the one kept
        let mut expected: HashMap<&str, Option<&str>> = HashMap::new();
        for record in &records {
            expected.insert(&record.code, record.office_name.as_deref());
        }

        for (code, office) in &expected {
            let answer = table.answer(&Query::classify(code));
            match office {
                Some(office) if !office.is_empty() => {
                    assert_eq!(answer, QueryAnswer::Office(office.to_string()));

                    let QueryAnswer::Codes(codes) = table.answer(&Query::PostOffice(
                        office.to_uppercase(),
                    )) else {
                        panic!("Expected Codes for {office}");
                    };
                    assert!(codes.is_sorted());
                    assert!(codes.iter().any(|c| c == code));
                    for c in &codes {
                        let stored = expected[c.as_str()].unwrap();
                        assert_eq!(stored.to_lowercase(), office.to_lowercase());
                    }
                }
                _ => assert_eq!(answer, QueryAnswer::NoSuchPostalCode(code.to_string())),
            }
        }
    }
}

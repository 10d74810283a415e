use std::fmt::Display;

use fake::Faker;

/// Number of digits in a Finnish postal code
pub const POSTAL_CODE_LEN: usize = 5;

/// A string known to be exactly five ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostalCode(String);

impl PostalCode {
    /// Returns true if `input` is exactly five characters long and all of them are digits
    pub fn is_postal_code(input: &str) -> bool {
        input.len() == POSTAL_CODE_LEN && input.bytes().all(|b| b.is_ascii_digit())
    }

    /// Returns Some(...) if `input` is a postal code, None otherwise
    pub fn new(input: &str) -> Option<Self> {
        Self::is_postal_code(input).then(|| Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for PostalCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl fake::Dummy<Faker> for PostalCode {
    fn dummy_with_rng<R: fake::Rng + ?Sized>(_config: &Faker, rng: &mut R) -> Self {
        let code: u32 = rng.random_range(0..100_000);
        Self(format!("{code:0>5}"))
    }
}

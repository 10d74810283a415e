use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::take_until,
    character::complete::char,
    combinator::{eof, opt, rest},
    sequence::{preceded, terminated},
};

use crate::domain::postal_record::PostalRecord;

/// Parses a `code,name` row. Only the first comma separates the fields, so the name may contain
/// commas. A row without a comma is all code and has no office name.
///
/// # Errors
///
/// Never for a single row, nom's error type is kept for composition
pub fn parse_postal_record(input: &str) -> IResult<&str, PostalRecord> {
    let (input, code) = alt((take_until(","), rest)).parse(input)?;
    let (input, office_name) = terminated(opt(preceded(char(','), rest)), eof).parse(input)?;

    Ok((
        input,
        PostalRecord {
            code: code.to_string(),
            office_name: office_name.map(str::to_string),
        },
    ))
}

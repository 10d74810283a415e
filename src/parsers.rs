pub mod csv_parser;
pub mod nom;
pub mod serde_parser;

pub mod lookup;
pub mod postal_code;
pub mod postal_record;

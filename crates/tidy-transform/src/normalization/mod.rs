//! Cell-level value parsers used by type coercion.

pub mod datetime;
pub mod numeric;

pub use datetime::{from_epoch_seconds, parse_date, parse_datetime, to_epoch_seconds};
pub use numeric::{ParsedNumber, is_numeric, parse_number, parse_numeric};

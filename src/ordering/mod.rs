//! Pure date handling and ordering used by the bills list.

pub mod dates;
pub mod sorting;

pub use dates::{format_short, normalize, month_from_abbrev, DateParseError, NormalizedDate};
pub use sorting::sort_by_date_desc;

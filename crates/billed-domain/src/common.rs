//! Shared traits implemented by expense records.

/// Gives access to the raw, unparsed date string a record was created with.
///
/// Sorting works on this value; it is never rewritten once the record exists.
pub trait Dated {
    fn raw_date(&self) -> &str;
}

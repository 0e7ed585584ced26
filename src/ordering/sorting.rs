use std::cmp::Reverse;

use billed_domain::Dated;

use super::dates::NormalizedDate;

/// Orders records most recent first without touching the caller's slice.
///
/// Records sharing a normalized date keep their input order. Records whose
/// date cannot be parsed are kept and placed after every dated record.
pub fn sort_by_date_desc<T: Dated>(records: &[T]) -> Vec<&T> {
    let mut keyed: Vec<(Reverse<NormalizedDate>, usize, &T)> = records
        .iter()
        .enumerate()
        .map(|(idx, record)| (Reverse(NormalizedDate::from_raw(record.raw_date())), idx, record))
        .collect();
    keyed.sort_by_key(|(key, idx, _)| (*key, *idx));
    keyed.into_iter().map(|(_, _, record)| record).collect()
}

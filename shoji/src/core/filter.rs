use super::WindowRecord;

/// Records whose searchable text contains `text`, ignoring case, in input order.
///
/// An empty `text` keeps every record.
pub fn filter_records<'a, I>(records: I, text: &str) -> Vec<&'a WindowRecord>
where
    I: IntoIterator<Item = &'a WindowRecord>,
{
    let needle = text.to_lowercase();
    records
        .into_iter()
        .filter(|record| matches(record, &needle))
        .collect()
}

/// `needle` must already be lower-cased.
pub(super) fn matches(record: &WindowRecord, needle: &str) -> bool {
    needle.is_empty() || record.searchable.to_lowercase().contains(needle)
}

use tracing::debug;

use crate::directory::{Directory, StudentRecord};

/// Filters `records` down to those whose name or roll number contains
/// `text`, ignoring case.
///
/// Empty text returns every record. Order is preserved; no match yields an
/// empty vector, which callers render as a "no results" state.
pub fn query<'a, I>(records: I, text: &str) -> Vec<&'a StudentRecord>
where
    I: IntoIterator<Item = &'a StudentRecord>,
{
    if text.is_empty() {
        return records.into_iter().collect();
    }

    let needle = text.to_lowercase();
    let matches: Vec<_> = records
        .into_iter()
        .filter(|record| record.matches_lowercase(&needle))
        .collect();

    debug!("Query {:?} matched {} records", text, matches.len());
    matches
}

/// Runs [`query`] over the batch of records whose roll number starts with
/// `prefix`
pub fn search_batch<'a>(
    directory: &'a Directory,
    prefix: &str,
    text: &str,
) -> Vec<&'a StudentRecord> {
    query(directory.batch(prefix), text)
}

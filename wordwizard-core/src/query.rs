//! Validation of untyped query input.
//!
//! Queries usually arrive as JSON:
//!
//! ```json
//! { "sequences": [["c", "a", "t"], ["o", "n"], "dog"] }
//! ```
//!
//! A query is an array of strings. A bare string is also accepted and split
//! into one unit per char, so `"dog"` means `["d", "o", "g"]`. Anything else
//! stops parsing with a [`QueryError`] naming the query.

use serde_json::Value;
use wordwizard_types::{QueryError, SequenceQuery};

/// Parses the `sequences` array of a query document.
///
/// # Errors
///
/// Returns `QueryError::MissingSequences` if `document` has no `sequences`
/// array, or the first error from [`parse_queries`].
pub fn parse_query_document(document: &Value) -> Result<Vec<SequenceQuery>, QueryError> {
    let sequences = document
        .get("sequences")
        .and_then(Value::as_array)
        .ok_or(QueryError::MissingSequences)?;
    parse_queries(sequences)
}

/// Parses a list of queries.
///
/// # Errors
///
/// Returns `QueryError::NotAList` for a query that is neither an array nor a
/// string, and `QueryError::NonTextUnit` for an array element that is not a
/// string.
pub fn parse_queries(items: &[Value]) -> Result<Vec<SequenceQuery>, QueryError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_query(index, item))
        .collect()
}

fn parse_query(index: usize, item: &Value) -> Result<SequenceQuery, QueryError> {
    match item {
        Value::String(s) => Ok(s.chars().map(String::from).collect()),
        Value::Array(units) => units
            .iter()
            .enumerate()
            .map(|(position, unit)| {
                unit.as_str()
                    .ok_or(QueryError::NonTextUnit { index, position })
            })
            .collect(),
        _ => Err(QueryError::NotAList { index }),
    }
}

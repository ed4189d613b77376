//! Candidate scanning
//!
//! Runs the compiled matchers over the whole document text and collects
//! every non-overlapping match in document order. Nothing here validates
//! content; raw candidates go to the presenter for cleaning and pairing.

use crate::fetch::Document;
use crate::pattern::CompiledPatterns;

/// Collect raw title and price candidates from a document.
///
/// Titles that are empty after trimming are dropped. Price slots are kept
/// positionally even when the amount is empty; the presenter treats an
/// empty slot as "price not found". Zero matches is a normal outcome, not
/// an error.
pub fn extract(doc: &Document, patterns: &CompiledPatterns) -> (Vec<String>, Vec<String>) {
    let titles = patterns
        .title
        .captures_iter(&doc.html)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
        .filter(|title| !title.is_empty())
        .collect();

    // The amount lives in the last participating capture group
    let prices = patterns
        .price
        .captures_iter(&doc.html)
        .map(|caps| {
            caps.iter()
                .skip(1)
                .flatten()
                .last()
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default()
        })
        .collect();

    (titles, prices)
}

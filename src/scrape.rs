//! Pipeline wiring
//!
//! One invocation = fetch, rule selection, compilation, scan, report. Each
//! stage failure is terminal for the invocation; nothing is retried and no
//! state survives between invocations.

use thiserror::Error;
use tracing::info;

use crate::extract::extract;
use crate::fetch::{fetch, Document, FetchError};
use crate::pattern::{compile, RuleCompileError};
use crate::present::{page_title, present, ScrapeReport};
use crate::rules::select_rule;

/// Anything that aborts an invocation before a report exists.
///
/// An empty extraction is NOT in here: zero candidates yield a report with
/// zero records, which the presenter explains to the user.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Rule(#[from] RuleCompileError),
}

/// Prefix `https://` when the input has no scheme.
pub fn normalize_url(input: &str) -> String {
    let input = input.trim();
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{input}")
    }
}

/// Run the full pipeline for one absolute URL.
pub fn run(url: &str) -> Result<ScrapeReport, ScrapeError> {
    let doc = fetch(url)?;
    info!(url, bytes = doc.html.len(), "fetched page");
    Ok(extract_report(&doc)?)
}

/// Run the extraction stages on an already-fetched document.
///
/// Split out from [`run`] so canned markup can go through the exact
/// pipeline the binary uses, network aside.
pub fn extract_report(doc: &Document) -> Result<ScrapeReport, RuleCompileError> {
    let rule = select_rule(&doc.url);
    info!(rule = rule.name, "using extraction rule");

    let patterns = compile(rule)?;
    let (titles, prices) = extract(doc, &patterns);

    Ok(ScrapeReport {
        url: doc.url.clone(),
        page_title: page_title(&doc.html),
        records: present(&titles, &prices),
    })
}

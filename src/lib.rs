//! Site-adaptive product extraction engine
//!
//! Fetches a product page over a blocking, certificate-tolerant transport
//! and pulls a bounded list of (title, price) pairs out of the raw markup:
//! - Per-site extraction rules selected by URL substring
//! - Regex matchers compiled fresh per invocation
//! - Positional title/price pairing with cleaning and ranking
//!
//! Extraction is regex-over-text by design, not a DOM walk: the rule set
//! encodes exact attribute substrings observed on each site, and a real
//! HTML parser would invalidate those assumptions.

pub mod extract;
pub mod fetch;
pub mod pattern;
pub mod present;
pub mod rules;
pub mod scrape;

pub use extract::extract;
pub use fetch::{fetch, Document, FetchError};
pub use pattern::{compile, CompiledPatterns, RuleCompileError};
pub use present::{page_title, present, ResultRecord, ScrapeReport, MAX_RESULTS};
pub use rules::{select_rule, SiteRule, DEFAULT_RULE, SITE_RULES};
pub use scrape::{extract_report, normalize_url, run, ScrapeError};

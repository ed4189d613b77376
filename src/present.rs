//! Candidate cleaning and report assembly
//!
//! Pairs title and price candidates by position, strips nested markup from
//! titles, bounds the result count, and renders the console report.

use std::fmt;

use regex::Regex;
use serde::Serialize;

/// Most records a single report will carry.
pub const MAX_RESULTS: usize = 5;

/// Longest cleaned title kept verbatim; longer ones are cut and suffixed.
const TITLE_LIMIT: usize = 40;

/// One ranked title/price pair, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    /// 1-based display rank
    pub rank: usize,
    pub title: String,
    /// Trimmed amount, or `"N/A"` when the slot was empty
    pub price: String,
}

/// Full outcome of one extraction pass over one document.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeReport {
    pub url: String,
    pub page_title: String,
    pub records: Vec<ResultRecord>,
}

/// Pair candidates by position into at most [`MAX_RESULTS`] records.
///
/// Unequal-length lists silently truncate to the shorter; there is no
/// realignment by content.
pub fn present(titles: &[String], prices: &[String]) -> Vec<ResultRecord> {
    titles
        .iter()
        .zip(prices.iter())
        .take(MAX_RESULTS)
        .enumerate()
        .map(|(i, (title, price))| {
            let price = price.trim();
            ResultRecord {
                rank: i + 1,
                title: clean_title(title),
                price: if price.is_empty() {
                    "N/A".to_string()
                } else {
                    price.to_string()
                },
            }
        })
        .collect()
}

/// Strip nested markup (like a volume `<span>` inside the title) and bound
/// the length. Operates on the captured substring only.
fn clean_title(raw: &str) -> String {
    let stripped = match Regex::new(r"<[^>]+>") {
        Ok(re) => re.replace_all(raw, "").trim().to_string(),
        Err(_) => raw.trim().to_string(),
    };
    if stripped.chars().count() > TITLE_LIMIT {
        let cut: String = stripped.chars().take(TITLE_LIMIT).collect();
        format!("{cut}...")
    } else {
        stripped
    }
}

/// Extract the document's `<title>`, independent of product candidates.
pub fn page_title(html: &str) -> String {
    Regex::new(r"(?is)<title>(.*?)</title>")
        .ok()
        .and_then(|re| {
            re.captures(html)
                .and_then(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
        })
        .unwrap_or_else(|| "Not Found".to_string())
}

impl fmt::Display for ScrapeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(70);
        let light = "-".repeat(70);
        writeln!(f, "{heavy}")?;
        writeln!(f, "      PRODUCT SCRAPING RESULTS")?;
        writeln!(f, "{heavy}")?;
        writeln!(f, "PAGE TITLE: {}", self.page_title)?;
        writeln!(f, "{light}")?;
        writeln!(f, "SCRAPED PRODUCT LISTINGS:")?;
        if self.records.is_empty() {
            writeln!(
                f,
                "  Could not find clear, structured product titles or prices using the defined patterns."
            )?;
            writeln!(
                f,
                "  This often happens when content is loaded via JavaScript (dynamic content) after the initial fetch."
            )?;
        } else {
            writeln!(f, "{:<5} {:<45} {:<15}", "ID", "Product Title", "Price")?;
            writeln!(f, "{light}")?;
            for record in &self.records {
                writeln!(f, "{:<5} {:<45} {:<15}", record.rank, record.title, record.price)?;
            }
        }
        write!(f, "{heavy}")
    }
}
